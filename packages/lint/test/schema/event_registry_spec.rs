//! Event Plugin Registry Tests

use dom_lint::{EventPlugin, EventPluginRegistry, EventRegistry};

#[test]
fn should_start_empty() {
    let registry = EventPluginRegistry::new();
    assert_eq!(registry.plugin_count(), 0);
    assert!(!registry.is_registration_name("onClick"));
    assert_eq!(registry.possible_registration_name("onclick"), None);
}

#[test]
fn should_register_two_phase_names_with_capture_variants() {
    let mut registry = EventPluginRegistry::new();
    registry.inject(EventPlugin::two_phase("TestPlugin", &["onTap"]));
    assert_eq!(registry.plugin_count(), 1);
    assert!(registry.is_registration_name("onTap"));
    assert!(registry.is_registration_name("onTapCapture"));
}

#[test]
fn should_register_direct_names_without_capture_variants() {
    let mut registry = EventPluginRegistry::new();
    registry.inject(EventPlugin::direct("TestPlugin", &["onHover"]));
    assert!(registry.is_registration_name("onHover"));
    assert!(!registry.is_registration_name("onHoverCapture"));
}

#[test]
fn should_build_the_lowercase_suggestion_table_on_inject() {
    let mut registry = EventPluginRegistry::new();
    registry.inject(EventPlugin::two_phase("TestPlugin", &["onDoubleTap"]));
    assert_eq!(registry.possible_registration_name("ondoubletap"), Some("onDoubleTap"));
    assert_eq!(
        registry.possible_registration_name("ondoubletapcapture"),
        Some("onDoubleTapCapture")
    );
}

#[test]
fn should_install_the_standard_plugin_set() {
    let registry = EventPluginRegistry::with_default_plugins();
    assert_eq!(registry.plugin_count(), 5);
    for name in ["onClick", "onChange", "onSelect", "onBeforeInput", "onMouseEnter"] {
        assert!(registry.is_registration_name(name), "expected `{}` registered", name);
    }
}

#[test]
fn should_match_registration_names_case_sensitively() {
    let registry = EventPluginRegistry::with_default_plugins();
    assert!(registry.is_registration_name("onClick"));
    assert!(!registry.is_registration_name("onclick"));
    assert!(!registry.is_registration_name("ONCLICK"));
}

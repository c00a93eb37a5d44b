//! DOM Property Registry Tests

use dom_lint::{DomPropertyRegistry, PropertyRegistry};

#[test]
fn should_recognize_canonical_property_names() {
    let registry = DomPropertyRegistry::new();
    for name in ["className", "htmlFor", "tabIndex", "readOnly", "id", "style"] {
        assert!(registry.is_known_property(name), "expected `{}` to be known", name);
    }
}

#[test]
fn should_reject_attribute_spellings_as_properties() {
    let registry = DomPropertyRegistry::new();
    assert!(!registry.is_known_property("class"));
    assert!(!registry.is_known_property("for"));
    assert!(!registry.is_known_property("classname"));
}

#[test]
fn should_match_only_well_formed_custom_attributes() {
    let registry = DomPropertyRegistry::new();
    assert!(registry.is_custom_attribute("data-id"));
    assert!(registry.is_custom_attribute("data-foo_bar.baz-quux"));
    assert!(registry.is_custom_attribute("aria-hidden"));

    // Uppercase after the prefix, missing suffix, or a foreign prefix all fail.
    assert!(!registry.is_custom_attribute("data-Id"));
    assert!(!registry.is_custom_attribute("data-"));
    assert!(!registry.is_custom_attribute("ng-model"));
    assert!(!registry.is_custom_attribute("Data-id"));
}

#[test]
fn should_map_lowercased_properties_to_their_canonical_names() {
    let registry = DomPropertyRegistry::new();
    assert_eq!(registry.possible_standard_name("classname"), Some("className"));
    assert_eq!(registry.possible_standard_name("tabindex"), Some("tabIndex"));
    assert_eq!(registry.possible_standard_name("maxlength"), Some("maxLength"));
    assert_eq!(registry.possible_standard_name("crossorigin"), Some("crossOrigin"));
}

#[test]
fn should_map_attribute_aliases_to_their_property_names() {
    let registry = DomPropertyRegistry::new();
    assert_eq!(registry.possible_standard_name("class"), Some("className"));
    assert_eq!(registry.possible_standard_name("for"), Some("htmlFor"));
    assert_eq!(registry.possible_standard_name("accept-charset"), Some("acceptCharset"));
    assert_eq!(registry.possible_standard_name("http-equiv"), Some("httpEquiv"));
}

#[test]
fn should_return_none_for_names_with_no_mapping() {
    let registry = DomPropertyRegistry::new();
    assert_eq!(registry.possible_standard_name("bogus"), None);
    assert_eq!(registry.possible_standard_name("onclick"), None);
}

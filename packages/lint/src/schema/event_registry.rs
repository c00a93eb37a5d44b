//! Event Plugin Registry
//!
//! Event handler prop names are contributed by injected event plugins rather
//! than baked into the DOM schema: a renderer without an event system (for
//! example a string renderer) simply injects nothing, and the validator
//! treats `on*`-shaped names as unverifiable in that case.

use std::collections::{HashMap, HashSet};

/// Answers "is this a registered event handler prop name?".
pub trait EventRegistry {
    /// Case-sensitive membership in the registered handler-name set.
    fn is_registration_name(&self, name: &str) -> bool;

    /// How many event plugins have been injected.
    fn plugin_count(&self) -> usize;

    /// Suggested canonical handler name for an already-lowercased input.
    fn possible_registration_name(&self, lower_name: &str) -> Option<&str>;
}

/// One event plugin and the handler prop names it registers.
#[derive(Debug, Clone)]
pub struct EventPlugin {
    pub name: &'static str,
    pub registration_names: Vec<String>,
}

impl EventPlugin {
    /// Plugin whose events are dispatched in both phases; each name also
    /// registers its `…Capture` variant.
    pub fn two_phase(name: &'static str, events: &[&str]) -> Self {
        let registration_names = events
            .iter()
            .flat_map(|event| [event.to_string(), format!("{}Capture", event)])
            .collect();
        EventPlugin {
            name,
            registration_names,
        }
    }

    /// Plugin with bubble-phase-only registration names.
    pub fn direct(name: &'static str, events: &[&str]) -> Self {
        EventPlugin {
            name,
            registration_names: events.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Registry built up by injecting event plugins.
#[derive(Debug, Default)]
pub struct EventPluginRegistry {
    plugins: Vec<EventPlugin>,
    registration_names: HashSet<String>,
    // Lowercase name -> canonical registration name.
    possible_registration_names: HashMap<String, String>,
}

impl EventPluginRegistry {
    /// Empty registry: zero plugins, nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard plugin set installed.
    pub fn with_default_plugins() -> Self {
        let mut registry = Self::new();
        for plugin in default_plugins() {
            registry.inject(plugin);
        }
        registry
    }

    /// Register a plugin's handler names and extend the suggestion table.
    pub fn inject(&mut self, plugin: EventPlugin) {
        for name in &plugin.registration_names {
            self.possible_registration_names
                .insert(name.to_lowercase(), name.clone());
            self.registration_names.insert(name.clone());
        }
        self.plugins.push(plugin);
    }
}

impl EventRegistry for EventPluginRegistry {
    fn is_registration_name(&self, name: &str) -> bool {
        self.registration_names.contains(name)
    }

    fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    fn possible_registration_name(&self, lower_name: &str) -> Option<&str> {
        self.possible_registration_names
            .get(lower_name)
            .map(String::as_str)
    }
}

/// The standard plugin set a DOM renderer installs.
fn default_plugins() -> Vec<EventPlugin> {
    vec![
        EventPlugin::two_phase(
            "SimpleEventPlugin",
            &[
                "onAbort",
                "onAnimationEnd",
                "onAnimationIteration",
                "onAnimationStart",
                "onBlur",
                "onCanPlay",
                "onCanPlayThrough",
                "onClick",
                "onContextMenu",
                "onCopy",
                "onCut",
                "onDoubleClick",
                "onDrag",
                "onDragEnd",
                "onDragEnter",
                "onDragExit",
                "onDragLeave",
                "onDragOver",
                "onDragStart",
                "onDrop",
                "onDurationChange",
                "onEmptied",
                "onEncrypted",
                "onEnded",
                "onError",
                "onFocus",
                "onInput",
                "onInvalid",
                "onKeyDown",
                "onKeyPress",
                "onKeyUp",
                "onLoad",
                "onLoadStart",
                "onLoadedData",
                "onLoadedMetadata",
                "onMouseDown",
                "onMouseMove",
                "onMouseOut",
                "onMouseOver",
                "onMouseUp",
                "onPause",
                "onPlay",
                "onPlaying",
                "onProgress",
                "onRateChange",
                "onReset",
                "onScroll",
                "onSeeked",
                "onSeeking",
                "onStalled",
                "onSubmit",
                "onSuspend",
                "onTimeUpdate",
                "onTouchCancel",
                "onTouchEnd",
                "onTouchMove",
                "onTouchStart",
                "onTransitionEnd",
                "onVolumeChange",
                "onWaiting",
                "onWheel",
            ],
        ),
        EventPlugin::direct("EnterLeaveEventPlugin", &["onMouseEnter", "onMouseLeave"]),
        EventPlugin::two_phase("ChangeEventPlugin", &["onChange"]),
        EventPlugin::two_phase("SelectEventPlugin", &["onSelect"]),
        EventPlugin::two_phase(
            "BeforeInputEventPlugin",
            &[
                "onBeforeInput",
                "onCompositionEnd",
                "onCompositionStart",
                "onCompositionUpdate",
            ],
        ),
    ]
}

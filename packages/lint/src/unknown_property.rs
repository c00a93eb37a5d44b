//! Unknown Property Validator
//!
//! The core of the lint: classify a single prop name against the property
//! and event schemas, and walk one element's prop bag emitting grouped
//! warnings for the names nothing recognizes. Classification never fails
//! and never blocks rendering; missing registry data degrades to "no
//! suggestion available".

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use crate::config::LintMode;
use crate::diagnostics::{DiagnosticSink, LocationResolver};
use crate::schema::{EventRegistry, PropertyRegistry};
use crate::util::{is_composite, is_truthy};

/// Prop names the framework itself consumes; never flagged.
static RESERVED_PROPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "children",
        "key",
        "ref",
        "dangerouslySetInnerHTML",
        "defaultValue",
        "defaultChecked",
        "autoFocus",
        "innerHTML",
        "suppressContentEditableWarning",
        // Focus event aliases handled by the renderer directly.
        "onFocusIn",
        "onFocusOut",
    ]
    .into_iter()
    .collect()
});

/// Shape of a plausible event handler prop name.
static EVENT_NAME_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^on[A-Z]").unwrap());

const IS_ATTRIBUTE: &str = "is";

/// Which registry a suggested correction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    AttributeName,
    EventHandlerName,
}

/// Verdict for a single prop name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Acceptable for host-element rendering.
    Valid,
    /// Not acceptable, but a likely intended spelling exists.
    Suggested {
        corrected: String,
        kind: SuggestionKind,
    },
    /// Not acceptable and no better name could be guessed.
    Unknown,
}

/// Development-mode validator for the props a renderer is about to apply
/// to a host element.
///
/// Holds the warned-name cache so repeated renders of the same bad name do
/// not re-derive suggestions or repeat suggestion warnings. The cache is
/// instance state: embedders construct one validator per process, tests
/// construct one per case.
pub struct UnknownPropertyValidator {
    mode: LintMode,
    properties: Box<dyn PropertyRegistry>,
    events: Box<dyn EventRegistry>,
    sink: Box<dyn DiagnosticSink>,
    resolver: Box<dyn LocationResolver>,
    // Name -> verdict: true = treat as valid from now on, false = remembered
    // unknown. Grows monotonically, keyed case-sensitively.
    warned_props: HashMap<String, bool>,
}

impl UnknownPropertyValidator {
    pub fn new(
        mode: LintMode,
        properties: Box<dyn PropertyRegistry>,
        events: Box<dyn EventRegistry>,
        sink: Box<dyn DiagnosticSink>,
        resolver: Box<dyn LocationResolver>,
    ) -> Self {
        UnknownPropertyValidator {
            mode,
            properties,
            events,
            sink,
            resolver,
            warned_props: HashMap::new(),
        }
    }

    /// Forget every cached verdict. Intended for tests and long-lived
    /// development sessions that reload the schema.
    pub fn reset_warned_props(&mut self) {
        self.warned_props.clear();
    }

    /// Classify one prop name. `location` is the already-resolved location
    /// suffix appended to any suggestion warning.
    ///
    /// The check order encodes precedence among overlapping name spaces
    /// (a name that is both a plausible property typo and a plausible event
    /// typo resolves to the property suggestion) and must not be reordered.
    pub fn classify(&mut self, name: &str, location: &str) -> Classification {
        if self.properties.is_known_property(name) || self.properties.is_custom_attribute(name) {
            return Classification::Valid;
        }

        if RESERVED_PROPS.contains(name) {
            return Classification::Valid;
        }

        if let Some(valid) = self.warned_props.get(name) {
            return if *valid {
                Classification::Valid
            } else {
                Classification::Unknown
            };
        }

        if self.events.is_registration_name(name) {
            return Classification::Valid;
        }

        // With no event plugins injected (e.g. a string renderer) there is
        // no way to tell a real event name from a typo, so `on*`-shaped
        // names are accepted wholesale.
        if self.events.plugin_count() == 0 && EVENT_NAME_REGEXP.is_match(name) {
            return Classification::Valid;
        }

        let lower_cased_name = name.to_lowercase();

        // A custom-attribute-shaped lowercase form means the prop should
        // simply have been written in all lowercase (data-* style).
        let standard_name = if self.properties.is_custom_attribute(&lower_cased_name) {
            Some(lower_cased_name.clone())
        } else {
            self.properties
                .possible_standard_name(&lower_cased_name)
                .map(str::to_string)
        };

        if let Some(standard_name) = standard_name {
            self.warned_props.insert(name.to_string(), true);
            self.sink.warn_unless(
                false,
                &format!(
                    "Unknown DOM property `{}`. Did you mean `{}`?{}",
                    name, standard_name, location
                ),
            );
            return Classification::Suggested {
                corrected: standard_name,
                kind: SuggestionKind::AttributeName,
            };
        }

        let registration_name = self
            .events
            .possible_registration_name(&lower_cased_name)
            .map(str::to_string);

        if let Some(registration_name) = registration_name {
            self.warned_props.insert(name.to_string(), true);
            self.sink.warn_unless(
                false,
                &format!(
                    "Unknown event handler property `{}`. Did you mean `{}`?{}",
                    name, registration_name, location
                ),
            );
            return Classification::Suggested {
                corrected: registration_name,
                kind: SuggestionKind::EventHandlerName,
            };
        }

        // No guess possible; the caller aggregates these into one grouped
        // warning per element.
        self.warned_props.insert(name.to_string(), false);
        Classification::Unknown
    }

    /// Validate every prop on one host element.
    ///
    /// Custom elements (hyphenated tag names) and customized built-ins
    /// (truthy `is` prop) opt out of standard-property validation entirely.
    pub fn validate_element(
        &mut self,
        tag_name: &str,
        props: &IndexMap<String, Value>,
        debug_id: Option<&str>,
    ) {
        if !self.mode.is_enabled() {
            return;
        }

        if tag_name.contains('-') || props.get(IS_ATTRIBUTE).map(is_truthy).unwrap_or(false) {
            return;
        }

        let location = self.resolver.resolve(debug_id);

        let mut unknown_props: Vec<&str> = Vec::new();
        for (key, value) in props {
            if self.classify(key, &location) != Classification::Unknown {
                continue;
            }
            unknown_props.push(key);

            // An object value on an unrecognized prop is usually a data
            // structure that was meant to go somewhere else.
            if is_composite(value) {
                self.sink.warn_unless(
                    false,
                    &format!(
                        "Prop `{}` on <{}> was given an object value. Remove it from the \
                         element, or pass a string or number value instead.{}",
                        key, tag_name, location
                    ),
                );
            }
        }

        match unknown_props.len() {
            0 => {}
            1 => self.sink.warn_unless(
                false,
                &format!(
                    "Unknown prop `{}` on <{}> tag. Remove this prop from the element.{}",
                    unknown_props[0], tag_name, location
                ),
            ),
            _ => {
                let listed = unknown_props
                    .iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.sink.warn_unless(
                    false,
                    &format!(
                        "Unknown props {} on <{}> tag. Remove these props from the element.{}",
                        listed, tag_name, location
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferSink, NoopLocationResolver};
    use crate::schema::{DomPropertyRegistry, EventPluginRegistry};
    use std::rc::Rc;

    fn validator_with_sink(events: EventPluginRegistry) -> (UnknownPropertyValidator, Rc<BufferSink>) {
        let sink = Rc::new(BufferSink::new());
        let validator = UnknownPropertyValidator::new(
            LintMode::Development,
            Box::new(DomPropertyRegistry::new()),
            Box::new(events),
            Box::new(Rc::clone(&sink)),
            Box::new(NoopLocationResolver),
        );
        (validator, sink)
    }

    #[test]
    fn test_reserved_props_are_valid() {
        let (mut validator, sink) = validator_with_sink(EventPluginRegistry::with_default_plugins());
        for name in RESERVED_PROPS.iter() {
            assert_eq!(validator.classify(name, ""), Classification::Valid);
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn test_known_property_beats_event_suggestion() {
        // A known property never reaches the suggestion tables.
        let (mut validator, sink) = validator_with_sink(EventPluginRegistry::with_default_plugins());
        assert_eq!(validator.classify("className", ""), Classification::Valid);
        assert_eq!(validator.classify("data-id", ""), Classification::Valid);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unknown_verdict_is_cached_without_rederivation() {
        let (mut validator, sink) = validator_with_sink(EventPluginRegistry::with_default_plugins());
        assert_eq!(validator.classify("totallybogus", ""), Classification::Unknown);
        assert_eq!(validator.classify("totallybogus", ""), Classification::Unknown);
        assert!(sink.is_empty());
        assert_eq!(validator.warned_props.get("totallybogus"), Some(&false));
    }

    #[test]
    fn test_suggested_name_is_valid_on_second_lookup() {
        let (mut validator, sink) = validator_with_sink(EventPluginRegistry::with_default_plugins());
        assert_eq!(
            validator.classify("classname", ""),
            Classification::Suggested {
                corrected: "className".to_string(),
                kind: SuggestionKind::AttributeName,
            }
        );
        assert_eq!(validator.classify("classname", ""), Classification::Valid);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_production_mode_is_noop() {
        let sink = Rc::new(BufferSink::new());
        let mut validator = UnknownPropertyValidator::new(
            LintMode::Production,
            Box::new(DomPropertyRegistry::new()),
            Box::new(EventPluginRegistry::with_default_plugins()),
            Box::new(Rc::clone(&sink)),
            Box::new(NoopLocationResolver),
        );
        let mut props = IndexMap::new();
        props.insert("bogusprop".to_string(), Value::from(1));
        validator.validate_element("div", &props, None);
        assert!(sink.is_empty());
    }
}

//! DOM Property Registry
//!
//! The set of property names host elements accept, plus the lowercase to
//! canonical suggestion table used to guess what a misspelled prop was
//! supposed to be. Event handler names are deliberately kept out of this
//! registry; they live in their own schema (see `event_registry`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Canonical property names accepted on host elements.
///
/// Property spelling, not attribute spelling: `className`, not `class`.
static KNOWN_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accept",
        "acceptCharset",
        "accessKey",
        "action",
        "allowFullScreen",
        "allowTransparency",
        "alt",
        "async",
        "autoComplete",
        "autoPlay",
        "capture",
        "cellPadding",
        "cellSpacing",
        "challenge",
        "charSet",
        "checked",
        "cite",
        "classID",
        "className",
        "colSpan",
        "cols",
        "content",
        "contentEditable",
        "contextMenu",
        "controls",
        "coords",
        "crossOrigin",
        "data",
        "dateTime",
        "default",
        "defer",
        "dir",
        "disabled",
        "download",
        "draggable",
        "encType",
        "form",
        "formAction",
        "formEncType",
        "formMethod",
        "formNoValidate",
        "formTarget",
        "frameBorder",
        "headers",
        "height",
        "hidden",
        "high",
        "href",
        "hrefLang",
        "htmlFor",
        "httpEquiv",
        "icon",
        "id",
        "inputMode",
        "integrity",
        "keyParams",
        "keyType",
        "kind",
        "label",
        "lang",
        "list",
        "loop",
        "low",
        "manifest",
        "marginHeight",
        "marginWidth",
        "max",
        "maxLength",
        "media",
        "mediaGroup",
        "method",
        "min",
        "minLength",
        "multiple",
        "muted",
        "name",
        "noValidate",
        "nonce",
        "open",
        "optimum",
        "pattern",
        "placeholder",
        "poster",
        "preload",
        "profile",
        "radioGroup",
        "readOnly",
        "referrerPolicy",
        "rel",
        "required",
        "reversed",
        "role",
        "rowSpan",
        "rows",
        "sandbox",
        "scope",
        "scoped",
        "scrolling",
        "seamless",
        "selected",
        "shape",
        "size",
        "sizes",
        "slot",
        "span",
        "spellCheck",
        "src",
        "srcDoc",
        "srcLang",
        "srcSet",
        "start",
        "step",
        "style",
        "summary",
        "tabIndex",
        "target",
        "title",
        "translate",
        "type",
        "useMap",
        "value",
        "width",
        "wmode",
        "wrap",
    ]
    .into_iter()
    .collect()
});

/// Attribute names whose property spelling is not simply the lowercased form.
static ATTR_TO_PROP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("class", "className");
    map.insert("for", "htmlFor");
    map.insert("accept-charset", "acceptCharset");
    map.insert("http-equiv", "httpEquiv");
    map
});

/// Suggestion table: lowercase name to canonical property name.
///
/// Built from the known-property set (`classname` -> `className`) merged
/// with the explicit attribute aliases (`class` -> `className`).
static POSSIBLE_STANDARD_NAMES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<String, &'static str> = KNOWN_PROPERTIES
        .iter()
        .map(|prop| (prop.to_lowercase(), *prop))
        .collect();
    for (attr, prop) in ATTR_TO_PROP.iter() {
        map.insert((*attr).to_string(), prop);
    }
    map
});

/// Shape accepted for arbitrary data-carrying attributes (`data-*`, `aria-*`).
static CUSTOM_ATTRIBUTE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(data|aria)-[a-z_][a-z\d_.\-]*$").unwrap());

/// Answers "is this a name the property schema recognizes?".
pub trait PropertyRegistry {
    /// Case-sensitive membership in the known DOM property set.
    fn is_known_property(&self, name: &str) -> bool;

    /// Syntactic check for the custom-attribute shape.
    fn is_custom_attribute(&self, name: &str) -> bool;

    /// Suggested canonical name for an already-lowercased input, if any.
    fn possible_standard_name(&self, lower_name: &str) -> Option<&str>;
}

/// Registry backed by the static DOM schema above.
#[derive(Debug, Default)]
pub struct DomPropertyRegistry;

impl DomPropertyRegistry {
    pub fn new() -> Self {
        DomPropertyRegistry
    }
}

impl PropertyRegistry for DomPropertyRegistry {
    fn is_known_property(&self, name: &str) -> bool {
        KNOWN_PROPERTIES.contains(name)
    }

    fn is_custom_attribute(&self, name: &str) -> bool {
        CUSTOM_ATTRIBUTE_REGEXP.is_match(name)
    }

    fn possible_standard_name(&self, lower_name: &str) -> Option<&str> {
        POSSIBLE_STANDARD_NAMES.get(lower_name).copied()
    }
}

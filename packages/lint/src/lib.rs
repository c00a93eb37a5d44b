#![deny(clippy::all)]

//! Development-mode lint for host-element props.
//!
//! Given a host-element tag name and the props a renderer is about to apply
//! to it, this crate reports the props that are neither known DOM properties,
//! framework-reserved names, nor registered event handler names, with
//! "did you mean" suggestions where a likely spelling exists. Warnings are
//! advisory only; nothing here affects rendering output.

pub mod config;
pub mod diagnostics;
pub mod hooks;
pub mod schema;
pub mod unknown_property;
pub mod util;

pub use config::LintMode;
pub use diagnostics::{BufferSink, DiagnosticSink, LocationResolver, LogSink};
pub use hooks::{NodeType, RenderNode};
pub use schema::{
    DomPropertyRegistry, EventPlugin, EventPluginRegistry, EventRegistry, PropertyRegistry,
};
pub use unknown_property::{Classification, SuggestionKind, UnknownPropertyValidator};

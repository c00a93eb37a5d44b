//! Schema Module
//!
//! Name registries consulted by the validator: known DOM properties with
//! their suggestion table, and registered event handler names.

pub mod event_registry;
pub mod property_registry;

pub use event_registry::*;
pub use property_registry::*;

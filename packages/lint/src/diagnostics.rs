//! Diagnostics
//!
//! The sink every warning funnels through, plus the resolver that turns an
//! opaque debug identity into a human-readable location suffix. Sinks decide
//! how (and whether) a message is actually surfaced; the validator only
//! decides what to say.

use std::cell::RefCell;
use std::collections::HashSet;

/// Receiver for advisory warnings.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);

    /// Conditional-warning primitive: a no-op when `condition` holds.
    fn warn_unless(&self, condition: bool, message: &str) {
        if !condition {
            self.warn(message);
        }
    }
}

// Lets a caller keep a handle on a sink it hands to the validator.
impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::rc::Rc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Default sink: prints each distinct message once via `tracing::warn!`.
#[derive(Debug, Default)]
pub struct LogSink {
    printed: RefCell<HashSet<String>>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        let mut printed = self.printed.borrow_mut();
        if printed.insert(message.to_string()) {
            tracing::warn!("{}", message);
        }
    }
}

/// Sink that records every message in emission order.
///
/// Used by embedders that surface warnings through their own channel, and by
/// tests to assert on exact emissions.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: RefCell<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl DiagnosticSink for BufferSink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Produces the location string appended to warnings.
///
/// The debug identity is an opaque token owned by the host renderer; an
/// empty result is valid and simply leaves the message without a location.
pub trait LocationResolver {
    fn resolve(&self, debug_id: Option<&str>) -> String;
}

/// Resolver for hosts without source metadata.
#[derive(Debug, Default)]
pub struct NoopLocationResolver;

impl LocationResolver for NoopLocationResolver {
    fn resolve(&self, _debug_id: Option<&str>) -> String {
        String::new()
    }
}

/// Formats the debug identity as a trailing `(at …)` addendum.
#[derive(Debug, Default)]
pub struct SourceLocationResolver;

impl LocationResolver for SourceLocationResolver {
    fn resolve(&self, debug_id: Option<&str>) -> String {
        match debug_id {
            Some(id) if !id.is_empty() => format!(" (at {})", id),
            _ => String::new(),
        }
    }
}

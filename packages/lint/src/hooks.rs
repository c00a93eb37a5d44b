//! Render Hooks
//!
//! The surface a render pipeline calls into: pre-mount and pre-update of a
//! node both funnel into `validate_element`. Only host nodes are inspected;
//! composite components carry arbitrary props by design.

use indexmap::IndexMap;
use serde_json::Value;

use crate::unknown_property::UnknownPropertyValidator;

/// What a render node resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A native rendering primitive, e.g. `div`.
    Host(String),
    /// A composite component, named for debugging only.
    Composite(String),
}

/// The slice of a render node the validator needs.
#[derive(Debug, Clone)]
pub struct RenderNode {
    pub node_type: NodeType,
    pub props: IndexMap<String, Value>,
    /// Opaque debug identity, resolved to a location string by the
    /// configured `LocationResolver`.
    pub debug_id: Option<String>,
}

impl RenderNode {
    pub fn host(tag_name: impl Into<String>, props: IndexMap<String, Value>) -> Self {
        RenderNode {
            node_type: NodeType::Host(tag_name.into()),
            props,
            debug_id: None,
        }
    }

    pub fn composite(name: impl Into<String>, props: IndexMap<String, Value>) -> Self {
        RenderNode {
            node_type: NodeType::Composite(name.into()),
            props,
            debug_id: None,
        }
    }

    pub fn with_debug_id(mut self, debug_id: impl Into<String>) -> Self {
        self.debug_id = Some(debug_id.into());
        self
    }
}

impl UnknownPropertyValidator {
    /// Hook for the pipeline's pre-mount point.
    pub fn before_mount(&mut self, node: &RenderNode) {
        self.validate_node(node);
    }

    /// Hook for the pipeline's pre-update point.
    pub fn before_update(&mut self, node: &RenderNode) {
        self.validate_node(node);
    }

    fn validate_node(&mut self, node: &RenderNode) {
        if let NodeType::Host(tag_name) = &node.node_type {
            self.validate_element(tag_name, &node.props, node.debug_id.as_deref());
        }
    }
}

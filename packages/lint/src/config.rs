//! Lint Configuration
//!
//! Environment gating for the validator: the whole prop-validation path is a
//! development aid and compiles down to a no-op in production mode. The mode
//! is chosen once when the validator is constructed, not per call.

use serde::{Deserialize, Serialize};

/// Whether host-element prop validation runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintMode {
    /// Full validation runs on every hook invocation.
    Development,
    /// The validator is a no-op.
    Production,
}

impl LintMode {
    /// Pick the mode from the build profile: `Development` for debug builds.
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            LintMode::Development
        } else {
            LintMode::Production
        }
    }

    pub fn is_enabled(self) -> bool {
        self == LintMode::Development
    }
}

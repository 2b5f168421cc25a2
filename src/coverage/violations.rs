//! Coverage violations and handling policies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Disagreement between the transition table and the registered handlers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoverageViolation {
    #[error("Transition '{transition}' is legal from '{state}' but has no handler")]
    MissingHandler { transition: String, state: String },

    #[error("Transition '{transition}' is legal from '{state}' but has no rule for it")]
    MissingRule { transition: String, state: String },

    #[error("Transition '{transition}' has a rule for '{state}' but the table does not list it there")]
    UnlistedRule { transition: String, state: String },

    #[error("State '{state}' has no entry handler")]
    MissingEntryHandler { state: String },

    #[error("State '{state}' has an entry handler but is not declared in the table")]
    UndeclaredState { state: String },
}

/// What building a machine does when coverage violations are found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    /// Refuse to build
    #[default]
    Strict,

    /// Build anyway and log each violation
    Warn,

    /// Build anyway
    Ignore,
}

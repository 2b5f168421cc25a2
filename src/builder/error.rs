//! Build errors for the state machine builder.

use crate::coverage::CoverageViolation;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{state}' is not declared in the transition table")]
    UndeclaredInitialState { state: String },

    #[error("Transition table and handlers disagree ({} violations)", .violations.len())]
    InconsistentCoverage { violations: Vec<CoverageViolation> },
}

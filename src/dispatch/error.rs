//! Errors raised while dispatching a transition.

use crate::handler::HandlerError;
use thiserror::Error;

/// The specific step of the dispatch algorithm that failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No handler registered for transition '{transition}'")]
    UnknownTransitionKind { transition: String },

    #[error("Transition '{transition}' has no rule for state '{state}'")]
    NoRuleForState { transition: String, state: String },

    #[error("No entry handler registered for state '{state}'")]
    UnknownState { state: String },

    #[error("Rule for '{transition}' from state '{state}' failed")]
    RuleFailed {
        transition: String,
        state: String,
        #[source]
        source: HandlerError,
    },

    #[error("Entry hook for state '{state}' failed")]
    EntryFailed {
        state: String,
        #[source]
        source: HandlerError,
    },
}

/// The single error kind returned by a failed transition.
///
/// The machine's state is unchanged whenever this is returned. The failed
/// step is available through [`cause`](Self::cause) and
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("Transition '{transition}' from state '{from}' failed")]
pub struct TransitionFailed {
    pub transition: String,
    pub from: String,
    #[source]
    pub cause: DispatchError,
}

impl TransitionFailed {
    pub fn cause(&self) -> &DispatchError {
        &self.cause
    }

    pub fn into_cause(self) -> DispatchError {
        self.cause
    }

    /// True when the transition was refused because it has no rule for the
    /// machine's current state.
    pub fn is_illegal(&self) -> bool {
        matches!(self.cause, DispatchError::NoRuleForState { .. })
    }
}

//! Transition dispatch.
//!
//! The [`StateMachine`] resolves the handler for a requested transition,
//! runs the rule for its current state, runs the entry hook of the state the
//! rule returned, and only then commits. Every failure along the way comes
//! back as one [`TransitionFailed`] wrapping the [`DispatchError`] of the
//! step that failed.

mod error;
mod machine;

pub use error::{DispatchError, TransitionFailed};
pub use machine::StateMachine;

//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for declaring states,
//! transitions, the transition table and the handlers in one place.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

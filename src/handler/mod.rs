//! Transition rules, entry hooks and the registry that resolves them.
//!
//! An entity registers one [`TransitionHandler`] per transition and one
//! [`StateHandler`] per state when it builds its machine. The machine never
//! discovers handlers on its own; an identity without a registration is a
//! configuration error reported at dispatch time (and by the coverage check
//! at build time).

mod entry;
mod registry;
mod transition;

pub use entry::{NoopEntry, StateHandler};
pub use registry::Registry;
pub use transition::{Rule, TransitionHandler, TransitionRules};

/// Error type rules and entry hooks return for their own failures.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

//! Core state machine types.
//!
//! This module contains the data the dispatcher works over:
//! - State and transition identities via the `State` and `TransitionKind` traits
//! - The `TransitionTable` declaring which transitions are legal where
//! - The open `Params` map handed to rules and entry hooks
//! - Immutable history of committed transitions
//!
//! Nothing in this module performs side effects.

mod history;
mod params;
mod state;
mod table;

pub use history::{StateHistory, StateTransition};
pub use params::{ParamError, Params};
pub use state::{State, TransitionKind};
pub use table::TransitionTable;

//! Identity traits for states and transitions.
//!
//! States and transitions are both finite, entity-defined sets of names.
//! They are usually plain enums; see [`state_enum!`](crate::state_enum) and
//! [`transition_enum!`](crate::transition_enum) for the generated impls.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. A state carries no data of its own; anything the
/// entity needs to remember lives in the machine's context.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states key the transition table and registry
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history entries are serializable
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Removed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Removed => "Removed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Removed)
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(Door::Removed.is_final());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for the named operations that move a machine between states.
///
/// The name is what callers use with
/// [`StateMachine::transition_named`](crate::dispatch::StateMachine::transition_named)
/// and what error messages report.
pub trait TransitionKind: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the transition's name for display/logging.
    fn name(&self) -> &str;
}

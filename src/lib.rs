//! Waypoint: a synchronous finite state machine framework
//!
//! An entity declares its states, its transitions and a table of which
//! transitions are legal from which states. Each transition has a handler
//! holding one rule per source state; each state has an entry hook. The
//! [`StateMachine`] dispatches a requested transition to the rule for the
//! current state, runs the entry hook of the state the rule returns, and
//! commits only when both succeed.
//!
//! # Core Concepts
//!
//! - **State / TransitionKind**: named identities, usually plain enums
//! - **TransitionTable**: which transitions are legal from which states
//! - **TransitionRules**: per-transition map from source state to rule
//! - **Entry hooks**: side effects run every time a state is adopted
//! - **Context**: the typed entity data rules and hooks may mutate
//!
//! # Example
//!
//! ```rust
//! use waypoint::{state_enum, transition_enum};
//! use waypoint::{Params, StateMachine, TransitionRules};
//!
//! state_enum! {
//!     enum Order { Open, Paid, Shipped }
//!     final: [Shipped]
//! }
//!
//! transition_enum! {
//!     enum OrderEvent { Pay, Ship }
//! }
//!
//! #[derive(Default)]
//! struct Ledger {
//!     total: f64,
//! }
//!
//! let mut machine: StateMachine<Order, OrderEvent, Ledger> = StateMachine::builder()
//!     .initial(Order::Open)
//!     .allow(Order::Open, [OrderEvent::Pay])
//!     .allow(Order::Paid, [OrderEvent::Ship])
//!     .terminal(Order::Shipped)
//!     .on(
//!         OrderEvent::Pay,
//!         TransitionRules::new().from(Order::Open, |ledger: &mut Ledger, params: &Params| {
//!             ledger.total += params.require_f64("amount")?;
//!             Ok(Order::Paid)
//!         }),
//!     )
//!     .on(OrderEvent::Ship, TransitionRules::new().goto(Order::Paid, Order::Shipped))
//!     .on_enter_noop(Order::Open)
//!     .on_enter_noop(Order::Paid)
//!     .on_enter_noop(Order::Shipped)
//!     .build()
//!     .unwrap();
//!
//! let mut ledger = Ledger::default();
//! machine
//!     .transition(&mut ledger, OrderEvent::Pay, &Params::new().with("amount", 42.0))
//!     .unwrap();
//!
//! assert_eq!(machine.current_state(), &Order::Paid);
//! assert_eq!(ledger.total, 42.0);
//! assert!(!machine.can_transition(&OrderEvent::Pay));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod coverage;
pub mod dispatch;
pub mod handler;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use config::{ConfigError, MachineConfig};
pub use crate::core::{Params, State, StateHistory, TransitionKind, TransitionTable};
pub use coverage::CoveragePolicy;
pub use dispatch::{DispatchError, StateMachine, TransitionFailed};
pub use handler::{HandlerError, NoopEntry, StateHandler, TransitionHandler, TransitionRules};

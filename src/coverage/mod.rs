//! Consistency checks between the transition table and handler coverage.
//!
//! The table says which transitions are legal from which states; each
//! transition handler separately says which source states it has a rule
//! for. The two can drift apart, so building a machine runs
//! [`check_coverage`], which uses Stillwater's `Validation` to report every
//! mismatch in one pass rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use waypoint::coverage::{check_coverage, CoverageViolation};
//! use waypoint::core::TransitionTable;
//! use waypoint::handler::{NoopEntry, Registry};
//! use waypoint::{state_enum, transition_enum};
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum Light { Off, On }
//! }
//!
//! transition_enum! {
//!     enum Switch { Flip }
//! }
//!
//! let table = TransitionTable::new().allow(Light::Off, [Switch::Flip]);
//! let mut registry: Registry<Light, Switch, ()> = Registry::new();
//! registry.register_state(Light::Off, NoopEntry);
//!
//! match check_coverage(&Light::Off, &table, &registry) {
//!     Validation::Failure(violations) => {
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, CoverageViolation::MissingHandler { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected a missing handler"),
//! }
//! ```

pub mod check;
pub mod violations;

pub use check::check_coverage;
pub use violations::{CoveragePolicy, CoverageViolation};

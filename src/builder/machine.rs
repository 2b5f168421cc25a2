//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Params, State, TransitionKind, TransitionTable};
use crate::coverage::{check_coverage, CoveragePolicy, CoverageViolation};
use crate::dispatch::StateMachine;
use crate::handler::{HandlerError, NoopEntry, Registry, StateHandler, TransitionHandler};
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, T: TransitionKind, C> {
    initial: Option<S>,
    table: TransitionTable<S, T>,
    registry: Registry<S, T, C>,
    derive_table: bool,
    config: MachineConfig,
}

impl<S: State, T: TransitionKind, C> StateMachineBuilder<S, T, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: TransitionTable::new(),
            registry: Registry::new(),
            derive_table: false,
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare the transitions legal from `state`.
    pub fn allow(mut self, state: S, transitions: impl IntoIterator<Item = T>) -> Self {
        self.table.insert(state, transitions);
        self
    }

    /// Declare a state from which no transition is legal.
    pub fn terminal(self, state: S) -> Self {
        self.allow(state, [])
    }

    /// Replace the transition table wholesale.
    pub fn table(mut self, table: TransitionTable<S, T>) -> Self {
        self.table = table;
        self
    }

    /// Register the handler for a transition.
    pub fn on<H>(mut self, kind: T, handler: H) -> Self
    where
        H: TransitionHandler<S, C> + 'static,
    {
        self.registry.register_transition(kind, handler);
        self
    }

    /// Register an entry hook written as a closure or function.
    pub fn on_enter<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(&S, &mut C, &Params) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.registry.register_state(state, hook);
        self
    }

    /// Register an entry hook implemented as a type.
    pub fn on_enter_handler<H>(mut self, state: S, handler: H) -> Self
    where
        H: StateHandler<S, C> + 'static,
    {
        self.registry.register_state(state, handler);
        self
    }

    /// Register a state with nothing to do on entry.
    pub fn on_enter_noop(self, state: S) -> Self {
        self.on_enter_handler(state, NoopEntry)
    }

    /// Add every rule's source state to the table, so rule coverage alone
    /// decides legality. Rows declared with `allow` are kept.
    pub fn derive_table(mut self) -> Self {
        self.derive_table = true;
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the state machine.
    ///
    /// Returns an error if the initial state is missing or undeclared, or if
    /// the coverage check fails under [`CoveragePolicy::Strict`].
    pub fn build(self) -> Result<StateMachine<S, T, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut table = self.table;
        if self.derive_table {
            for (kind, handler) in self.registry.transitions() {
                for source in handler.sources() {
                    table.insert(source, [kind.clone()]);
                }
            }
            for state in self.registry.states() {
                table.insert(state.clone(), []);
            }
        }

        if !table.declares(&initial) {
            return Err(BuildError::UndeclaredInitialState {
                state: initial.name().to_string(),
            });
        }

        if let Validation::Failure(found) = check_coverage(&initial, &table, &self.registry) {
            let violations: Vec<CoverageViolation> = found.iter().cloned().collect();
            match self.config.coverage {
                CoveragePolicy::Strict => {
                    return Err(BuildError::InconsistentCoverage { violations });
                }
                CoveragePolicy::Warn => {
                    for violation in &violations {
                        tracing::warn!(%violation, "Transition coverage violation");
                    }
                }
                CoveragePolicy::Ignore => {}
            }
        }

        tracing::debug!(
            initial = initial.name(),
            states = table.states().count(),
            transitions = self.registry.transitions().count(),
            "State machine built"
        );

        Ok(StateMachine::from_parts(
            initial,
            table,
            self.registry,
            self.config,
        ))
    }
}

impl<S: State, T: TransitionKind, C> Default for StateMachineBuilder<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

//! State machine that dispatches named transitions through registered handlers.

use crate::builder::StateMachineBuilder;
use crate::config::MachineConfig;
use crate::core::{Params, State, StateHistory, StateTransition, TransitionKind, TransitionTable};
use crate::dispatch::error::{DispatchError, TransitionFailed};
use crate::handler::Registry;
use chrono::Utc;

/// Finite state machine owned by an entity.
///
/// `S` is the entity's state set, `T` its transition set and `C` the typed
/// context that rules and entry hooks may mutate. The context is borrowed
/// for each call rather than owned, so an entity can keep its data and its
/// machine in separate fields.
pub struct StateMachine<S: State, T: TransitionKind, C> {
    initial: S,
    current: S,
    table: TransitionTable<S, T>,
    registry: Registry<S, T, C>,
    history: StateHistory<S>,
    config: MachineConfig,
}

impl<S: State, T: TransitionKind, C> StateMachine<S, T, C> {
    pub fn builder() -> StateMachineBuilder<S, T, C> {
        StateMachineBuilder::new()
    }

    pub(crate) fn from_parts(
        initial: S,
        table: TransitionTable<S, T>,
        registry: Registry<S, T, C>,
        config: MachineConfig,
    ) -> Self {
        let history = match config.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        Self {
            current: initial.clone(),
            initial,
            table,
            registry,
            history,
            config,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Transitions the table lists as legal from the current state.
    pub fn available_transitions(&self) -> &[T] {
        self.table.transitions_for(&self.current).unwrap_or_default()
    }

    pub fn can_transition(&self, kind: &T) -> bool {
        self.available_transitions().contains(kind)
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn table(&self) -> &TransitionTable<S, T> {
        &self.table
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Perform a transition and return the state it moved to.
    ///
    /// A transition the table does not list for the current state is refused.
    /// Otherwise the handler for `kind` picks the rule for the current state; the rule
    /// may mutate `ctx` and returns the new state, whose entry hook then runs
    /// with the same `ctx` and `params`. The new state is committed only when
    /// every step succeeds.
    pub fn transition(&mut self, ctx: &mut C, kind: T, params: &Params) -> Result<S, TransitionFailed> {
        tracing::debug!(
            transition = kind.name(),
            from = self.current.name(),
            "Dispatching transition"
        );

        match self.dispatch(ctx, &kind, params) {
            Ok(to) => {
                self.commit(&kind, to.clone());
                Ok(to)
            }
            Err(cause) => Err(self.failure(kind.name(), cause)),
        }
    }

    /// Perform the registered transition named `name`.
    pub fn transition_named(
        &mut self,
        ctx: &mut C,
        name: &str,
        params: &Params,
    ) -> Result<S, TransitionFailed> {
        match self.registry.find_transition(name).cloned() {
            Some(kind) => self.transition(ctx, kind, params),
            None => Err(self.failure(
                name,
                DispatchError::UnknownTransitionKind {
                    transition: name.to_string(),
                },
            )),
        }
    }

    fn dispatch(&self, ctx: &mut C, kind: &T, params: &Params) -> Result<S, DispatchError> {
        let from = &self.current;

        let handler = self.registry.resolve_transition(kind)?;
        if !self.table.is_legal(from, kind) {
            return Err(DispatchError::NoRuleForState {
                transition: kind.name().to_string(),
                state: from.name().to_string(),
            });
        }
        let rule = handler
            .rule(from)
            .ok_or_else(|| DispatchError::NoRuleForState {
                transition: kind.name().to_string(),
                state: from.name().to_string(),
            })?;

        let to = rule(ctx, params).map_err(|source| DispatchError::RuleFailed {
            transition: kind.name().to_string(),
            state: from.name().to_string(),
            source,
        })?;

        let entry = self.registry.resolve_state(&to)?;
        entry
            .enter(&to, ctx, params)
            .map_err(|source| DispatchError::EntryFailed {
                state: to.name().to_string(),
                source,
            })?;

        Ok(to)
    }

    fn commit(&mut self, kind: &T, to: S) {
        tracing::info!(
            transition = kind.name(),
            from = self.current.name(),
            to = to.name(),
            "Transition committed"
        );

        if self.config.record_history {
            self.history.push(StateTransition {
                from: self.current.clone(),
                to: to.clone(),
                via: kind.name().to_string(),
                timestamp: Utc::now(),
            });
        }

        self.current = to;
    }

    fn failure(&self, transition: &str, cause: DispatchError) -> TransitionFailed {
        tracing::warn!(
            transition,
            from = self.current.name(),
            error = %cause,
            "Transition failed"
        );

        TransitionFailed {
            transition: transition.to_string(),
            from: self.current.name().to_string(),
            cause,
        }
    }
}

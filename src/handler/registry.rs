//! Lookup from transition and state identities to their handlers.

use super::entry::StateHandler;
use super::transition::TransitionHandler;
use crate::core::{State, TransitionKind};
use crate::dispatch::DispatchError;
use std::collections::HashMap;

/// Handler lookup built once when the entity constructs its machine.
pub struct Registry<S: State, T: TransitionKind, C> {
    transitions: HashMap<T, Box<dyn TransitionHandler<S, C>>>,
    transition_order: Vec<T>,
    states: HashMap<S, Box<dyn StateHandler<S, C>>>,
    state_order: Vec<S>,
}

impl<S: State, T: TransitionKind, C> Registry<S, T, C> {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
            transition_order: Vec::new(),
            states: HashMap::new(),
            state_order: Vec::new(),
        }
    }

    /// Register the handler for `kind`, replacing any earlier one.
    pub fn register_transition<H>(&mut self, kind: T, handler: H)
    where
        H: TransitionHandler<S, C> + 'static,
    {
        if !self.transitions.contains_key(&kind) {
            self.transition_order.push(kind.clone());
        }
        self.transitions.insert(kind, Box::new(handler));
    }

    /// Register the entry hook for `state`, replacing any earlier one.
    pub fn register_state<H>(&mut self, state: S, handler: H)
    where
        H: StateHandler<S, C> + 'static,
    {
        if !self.states.contains_key(&state) {
            self.state_order.push(state.clone());
        }
        self.states.insert(state, Box::new(handler));
    }

    pub fn resolve_transition(&self, kind: &T) -> Result<&dyn TransitionHandler<S, C>, DispatchError> {
        self.transitions
            .get(kind)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| DispatchError::UnknownTransitionKind {
                transition: kind.name().to_string(),
            })
    }

    pub fn resolve_state(&self, state: &S) -> Result<&dyn StateHandler<S, C>, DispatchError> {
        self.states
            .get(state)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| DispatchError::UnknownState {
                state: state.name().to_string(),
            })
    }

    /// Registered transition whose name is `name`.
    pub fn find_transition(&self, name: &str) -> Option<&T> {
        self.transition_order.iter().find(|kind| kind.name() == name)
    }

    pub fn has_transition(&self, kind: &T) -> bool {
        self.transitions.contains_key(kind)
    }

    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Registered transitions with their handlers, in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&T, &dyn TransitionHandler<S, C>)> {
        self.transition_order
            .iter()
            .map(move |kind| (kind, self.transitions[kind].as_ref()))
    }

    /// States with a registered entry hook, in registration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.state_order.iter()
    }
}

impl<S: State, T: TransitionKind, C> Default for Registry<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Params;
    use crate::handler::{NoopEntry, TransitionRules};
    use crate::{state_enum, transition_enum};

    state_enum! {
        enum Phase {
            Draft,
            Published,
        }
    }

    transition_enum! {
        enum Action {
            Publish,
            Retract,
        }
    }

    fn registry() -> Registry<Phase, Action, ()> {
        let mut registry = Registry::new();
        registry.register_transition(
            Action::Publish,
            TransitionRules::new().goto(Phase::Draft, Phase::Published),
        );
        registry.register_state(Phase::Published, NoopEntry);
        registry
    }

    #[test]
    fn resolves_registered_handlers() {
        let registry = registry();

        let handler = registry.resolve_transition(&Action::Publish).unwrap();
        let rule = handler.rule(&Phase::Draft).unwrap();
        assert_eq!(rule(&mut (), &Params::new()).unwrap(), Phase::Published);

        assert!(registry.resolve_state(&Phase::Published).is_ok());
        assert!(registry.has_transition(&Action::Publish));
        assert!(!registry.has_transition(&Action::Retract));
        assert!(registry.has_state(&Phase::Published));
    }

    #[test]
    fn unknown_transition_is_reported() {
        let registry = registry();

        let err = registry.resolve_transition(&Action::Retract).err().unwrap();
        assert!(matches!(
            err,
            DispatchError::UnknownTransitionKind { ref transition } if transition == "Retract"
        ));
    }

    #[test]
    fn unknown_state_is_reported() {
        let registry = registry();

        let err = registry.resolve_state(&Phase::Draft).err().unwrap();
        assert!(matches!(
            err,
            DispatchError::UnknownState { ref state } if state == "Draft"
        ));
    }

    #[test]
    fn find_transition_matches_by_name() {
        let registry = registry();

        assert_eq!(registry.find_transition("Publish"), Some(&Action::Publish));
        assert_eq!(registry.find_transition("Retract"), None);
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = registry();
        registry.register_state(Phase::Draft, NoopEntry);

        let states: Vec<_> = registry.states().collect();
        assert_eq!(states, vec![&Phase::Published, &Phase::Draft]);

        let kinds: Vec<_> = registry.transitions().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![&Action::Publish]);
    }
}

//! Declarative map of which transitions are legal from which states.

use super::state::{State, TransitionKind};
use std::collections::HashMap;

/// Mapping from state to the ordered list of transitions legal from it.
///
/// Declaration order is preserved so `available_transitions()` reports
/// transitions in the order the entity listed them.
///
/// # Example
///
/// ```rust
/// use waypoint::{state_enum, transition_enum};
/// use waypoint::core::TransitionTable;
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// transition_enum! {
///     enum Switch { Flip, Unplug }
/// }
///
/// let table = TransitionTable::new()
///     .allow(Light::Off, [Switch::Flip])
///     .allow(Light::On, [Switch::Flip, Switch::Unplug]);
///
/// assert!(table.is_legal(&Light::On, &Switch::Unplug));
/// assert!(!table.is_legal(&Light::Off, &Switch::Unplug));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, T: TransitionKind> {
    rows: HashMap<S, Vec<T>>,
    order: Vec<S>,
}

impl<S: State, T: TransitionKind> Default for TransitionTable<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: TransitionKind> TransitionTable<S, T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Declare `state` with the transitions legal from it.
    ///
    /// Declaring a state again appends to its row; duplicates are ignored.
    pub fn allow(mut self, state: S, transitions: impl IntoIterator<Item = T>) -> Self {
        self.insert(state, transitions);
        self
    }

    /// Declare a state from which no transition is legal.
    pub fn terminal(self, state: S) -> Self {
        self.allow(state, [])
    }

    pub fn insert(&mut self, state: S, transitions: impl IntoIterator<Item = T>) {
        if !self.rows.contains_key(&state) {
            self.order.push(state.clone());
        }
        let row = self.rows.entry(state).or_default();
        for transition in transitions {
            if !row.contains(&transition) {
                row.push(transition);
            }
        }
    }

    /// Transitions legal from `state`, or `None` if the state was never declared.
    pub fn transitions_for(&self, state: &S) -> Option<&[T]> {
        self.rows.get(state).map(Vec::as_slice)
    }

    pub fn is_legal(&self, state: &S, transition: &T) -> bool {
        self.transitions_for(state)
            .is_some_and(|row| row.contains(transition))
    }

    pub fn declares(&self, state: &S) -> bool {
        self.rows.contains_key(state)
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    /// Every (state, transition) pair in the table.
    pub fn entries(&self) -> impl Iterator<Item = (&S, &T)> {
        self.order
            .iter()
            .flat_map(move |state| self.rows[state].iter().map(move |t| (state, t)))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_enum, transition_enum};

    state_enum! {
        enum Account {
            Guest,
            Free,
            Premium,
        }
    }

    transition_enum! {
        enum Event {
            Register,
            Pay,
            Lapse,
        }
    }

    fn table() -> TransitionTable<Account, Event> {
        TransitionTable::new()
            .allow(Account::Guest, [Event::Register])
            .allow(Account::Free, [Event::Pay])
            .allow(Account::Premium, [Event::Pay, Event::Lapse])
    }

    #[test]
    fn transitions_for_returns_declared_row() {
        let table = table();

        assert_eq!(
            table.transitions_for(&Account::Premium),
            Some(&[Event::Pay, Event::Lapse][..])
        );
    }

    #[test]
    fn undeclared_state_has_no_row() {
        let empty: TransitionTable<Account, Event> = TransitionTable::new();
        assert!(empty.is_empty());

        let table: TransitionTable<Account, Event> =
            TransitionTable::new().allow(Account::Guest, [Event::Register]);

        assert!(!table.is_empty());
        assert!(table.transitions_for(&Account::Free).is_none());
        assert!(!table.is_legal(&Account::Free, &Event::Pay));
        assert!(!table.declares(&Account::Free));
    }

    #[test]
    fn is_legal_checks_membership() {
        let table = table();

        assert!(table.is_legal(&Account::Guest, &Event::Register));
        assert!(!table.is_legal(&Account::Guest, &Event::Pay));
        assert!(table.is_legal(&Account::Premium, &Event::Lapse));
    }

    #[test]
    fn repeated_declaration_appends_without_duplicates() {
        let table = TransitionTable::new()
            .allow(Account::Free, [Event::Pay])
            .allow(Account::Free, [Event::Pay, Event::Lapse]);

        assert_eq!(
            table.transitions_for(&Account::Free),
            Some(&[Event::Pay, Event::Lapse][..])
        );
        assert_eq!(table.states().count(), 1);
    }

    #[test]
    fn terminal_state_is_declared_with_empty_row() {
        let table: TransitionTable<Account, Event> = TransitionTable::new().terminal(Account::Guest);

        assert!(table.declares(&Account::Guest));
        assert_eq!(table.transitions_for(&Account::Guest), Some(&[][..]));
    }

    #[test]
    fn entries_follow_declaration_order() {
        let table = table();
        let entries: Vec<_> = table.entries().collect();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], (&Account::Guest, &Event::Register));
        assert_eq!(entries[3], (&Account::Premium, &Event::Lapse));
    }
}

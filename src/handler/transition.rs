//! Per-transition handlers and their state-specific rules.

use super::HandlerError;
use crate::core::{Params, State};
use std::collections::HashMap;

/// A state-specific rule: mutates the context as needed and returns the
/// state the machine should move to.
pub type Rule<S, C> = dyn Fn(&mut C, &Params) -> Result<S, HandlerError> + Send + Sync;

/// Behavior of one transition, resolved by the machine's current state.
///
/// Implementations decide which source states they have a rule for. The
/// machine reports `NoRuleForState` when `rule` returns `None`.
pub trait TransitionHandler<S: State, C>: Send + Sync {
    /// Rule that fires when the transition is requested from `from`.
    fn rule(&self, from: &S) -> Option<&Rule<S, C>>;

    /// Every source state this handler has a rule for.
    fn sources(&self) -> Vec<S>;
}

/// Explicit map from source state to rule.
///
/// # Example
///
/// ```rust
/// use waypoint::handler::{TransitionHandler, TransitionRules};
/// use waypoint::core::Params;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Tier { Free, Premium, Locked }
/// }
///
/// struct Flags {
///     premium: bool,
/// }
///
/// let resolve: TransitionRules<Tier, Flags> = TransitionRules::new().from(
///     Tier::Locked,
///     |flags: &mut Flags, _params: &Params| {
///         Ok(if flags.premium { Tier::Premium } else { Tier::Free })
///     },
/// );
///
/// let rule = resolve.rule(&Tier::Locked).unwrap();
/// let mut flags = Flags { premium: true };
/// assert_eq!(rule(&mut flags, &Params::new()).unwrap(), Tier::Premium);
/// assert!(resolve.rule(&Tier::Free).is_none());
/// ```
pub struct TransitionRules<S: State, C> {
    rules: HashMap<S, Box<Rule<S, C>>>,
    order: Vec<S>,
}

impl<S: State, C> TransitionRules<S, C> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add the rule that fires from `state`, replacing any earlier one.
    pub fn from<F>(mut self, state: S, rule: F) -> Self
    where
        F: Fn(&mut C, &Params) -> Result<S, HandlerError> + Send + Sync + 'static,
    {
        if !self.rules.contains_key(&state) {
            self.order.push(state.clone());
        }
        self.rules.insert(state, Box::new(rule));
        self
    }

    /// Add a rule from `state` that moves to `target` without side effects.
    pub fn goto(self, state: S, target: S) -> Self
    where
        S: 'static,
        C: 'static,
    {
        self.from(state, move |_ctx: &mut C, _params: &Params| Ok(target.clone()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: State, C> Default for TransitionRules<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, C> TransitionHandler<S, C> for TransitionRules<S, C> {
    fn rule(&self, from: &S) -> Option<&Rule<S, C>> {
        self.rules.get(from).map(|rule| rule.as_ref())
    }

    fn sources(&self) -> Vec<S> {
        self.order.clone()
    }
}

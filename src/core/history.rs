//! Record of committed transitions.
//!
//! `record` returns a new history with the entry appended and leaves the
//! receiver unchanged. `push` appends in place and is what a running machine
//! uses on every commit.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateTransition;
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Task { Pending, Running }
/// }
///
/// let step = StateTransition {
///     from: Task::Pending,
///     to: Task::Running,
///     via: "Start".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!step.is_reentry());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the transition that fired
    pub via: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the transition re-adopted the state it started from.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of committed transitions.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateHistory, StateTransition};
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Work { Start, Middle, End }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Work::Start,
///         to: Work::Middle,
///         via: "Advance".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Work::Middle,
///         to: Work::End,
///         via: "Advance".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Work::Start, &Work::Middle, &Work::End]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    /// Oldest entries are dropped once the history holds this many.
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Empty history that retains at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition in place, evicting the oldest entry when the
    /// limit is reached.
    pub fn push(&mut self, transition: StateTransition<S>) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Keep only the most recent `limit` entries, returning a new history.
    pub fn keep_last(&self, limit: usize) -> Self {
        let skip = self.transitions.len().saturating_sub(limit);
        Self {
            transitions: self.transitions.iter().skip(skip).cloned().collect(),
            limit: Some(limit),
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first entry followed by the `to`
    /// state of every entry.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Recorded transitions, oldest first.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = &StateTransition<S>> + ExactSizeIterator {
        self.transitions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StateTransition<S>> {
        self.transitions.get(index)
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

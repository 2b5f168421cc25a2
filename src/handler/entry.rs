//! Per-state entry hooks.

use super::HandlerError;
use crate::core::{Params, State};

/// Side effects run when the machine adopts a state.
///
/// The hook fires after every successful transition into the state,
/// including a transition that re-adopts the current state, so it must be
/// safe to run repeatedly.
pub trait StateHandler<S: State, C>: Send + Sync {
    fn enter(&self, state: &S, ctx: &mut C, params: &Params) -> Result<(), HandlerError>;
}

impl<S, C, F> StateHandler<S, C> for F
where
    S: State,
    F: Fn(&S, &mut C, &Params) -> Result<(), HandlerError> + Send + Sync,
{
    fn enter(&self, state: &S, ctx: &mut C, params: &Params) -> Result<(), HandlerError> {
        self(state, ctx, params)
    }
}

/// Entry hook for states with nothing to do on adoption.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEntry;

impl<S: State, C> StateHandler<S, C> for NoopEntry {
    fn enter(&self, _state: &S, _ctx: &mut C, _params: &Params) -> Result<(), HandlerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Gate {
            Open,
            Locked,
        }
    }

    #[derive(Default)]
    struct Alarm {
        locked: bool,
        notices: Vec<String>,
    }

    #[test]
    fn closure_acts_as_entry_hook() {
        let hook = |state: &Gate, alarm: &mut Alarm, params: &Params| -> Result<(), HandlerError> {
            alarm.locked = true;
            alarm
                .notices
                .push(format!("{} ({})", state.name(), params.require_str("reason")?));
            Ok(())
        };

        let mut alarm = Alarm::default();
        hook.enter(&Gate::Locked, &mut alarm, &Params::new().with("reason", "tamper"))
            .unwrap();

        assert!(alarm.locked);
        assert_eq!(alarm.notices, vec!["Locked (tamper)".to_string()]);
    }

    #[test]
    fn closure_errors_propagate() {
        let hook = |_: &Gate, _: &mut Alarm, params: &Params| -> Result<(), HandlerError> {
            params.require_str("reason")?;
            Ok(())
        };

        let mut alarm = Alarm::default();
        assert!(hook.enter(&Gate::Locked, &mut alarm, &Params::new()).is_err());
    }

    #[test]
    fn noop_entry_does_nothing() {
        let mut alarm = Alarm::default();
        StateHandler::<Gate, Alarm>::enter(&NoopEntry, &Gate::Open, &mut alarm, &Params::new())
            .unwrap();

        assert!(!alarm.locked);
        assert!(alarm.notices.is_empty());
    }
}

//! Cross-checks between the transition table and the handler registry.

use crate::core::{State, TransitionKind, TransitionTable};
use crate::coverage::violations::CoverageViolation;
use crate::handler::Registry;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<CoverageViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> CoverageViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check that the table and the registry describe the same machine,
/// accumulating ALL violations.
///
/// - every (state, transition) pair in the table has a handler with a rule
///   for that state
/// - every rule a handler has is listed in the table
/// - every declared state, and the initial state, has an entry handler
/// - every state with an entry handler is declared
pub fn check_coverage<S, T, C>(
    initial: &S,
    table: &TransitionTable<S, T>,
    registry: &Registry<S, T, C>,
) -> Check
where
    S: State,
    T: TransitionKind,
{
    let mut checks: Vec<Check> = Vec::new();

    for (state, kind) in table.entries() {
        let result = match registry.resolve_transition(kind) {
            Err(_) => Validation::fail(CoverageViolation::MissingHandler {
                transition: kind.name().to_string(),
                state: state.name().to_string(),
            }),
            Ok(handler) => check(handler.rule(state).is_some(), || {
                CoverageViolation::MissingRule {
                    transition: kind.name().to_string(),
                    state: state.name().to_string(),
                }
            }),
        };
        checks.push(result);
    }

    for (kind, handler) in registry.transitions() {
        for source in handler.sources() {
            checks.push(check(table.is_legal(&source, kind), || {
                CoverageViolation::UnlistedRule {
                    transition: kind.name().to_string(),
                    state: source.name().to_string(),
                }
            }));
        }
    }

    let initial_undeclared = (!table.declares(initial)).then_some(initial);
    for state in table.states().chain(initial_undeclared) {
        checks.push(check(registry.has_state(state), || {
            CoverageViolation::MissingEntryHandler {
                state: state.name().to_string(),
            }
        }));
    }

    for state in registry.states() {
        checks.push(check(table.declares(state), || {
            CoverageViolation::UndeclaredState {
                state: state.name().to_string(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

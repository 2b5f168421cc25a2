//! Macros for ergonomic state machine construction.

/// Generate a `State` implementation for a plain enum.
///
/// The enum also derives the traits the machine needs (`Copy`, `Eq`, `Hash`,
/// serde). Callers must depend on `serde`.
///
/// # Example
///
/// ```
/// use waypoint::state_enum;
/// use waypoint::core::State;
///
/// state_enum! {
///     pub enum Membership {
///         Guest,
///         Free,
///         Premium,
///         Closed,
///     }
///     final: [Closed]
/// }
///
/// assert_eq!(Membership::Premium.name(), "Premium");
/// assert!(Membership::Closed.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate a `TransitionKind` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use waypoint::transition_enum;
/// use waypoint::core::TransitionKind;
///
/// transition_enum! {
///     pub enum AccountEvent {
///         Register,
///         PaymentReceived,
///     }
/// }
///
/// assert_eq!(AccountEvent::PaymentReceived.name(), "PaymentReceived");
/// ```
#[macro_export]
macro_rules! transition_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::TransitionKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, TransitionKind};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
        final: [Complete]
    }

    transition_enum! {
        enum TestKind {
            Begin,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Initial;
        assert_eq!(state.name(), "Initial");
        assert!(!state.is_final());

        let complete = TestState::Complete;
        assert_eq!(complete.name(), "Complete");
        assert!(complete.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_final());
    }

    #[test]
    fn transition_enum_macro_generates_trait() {
        assert_eq!(TestKind::Begin.name(), "Begin");
        assert_eq!(TestKind::Finish.name(), "Finish");
        assert_ne!(TestKind::Begin, TestKind::Finish);
    }
}

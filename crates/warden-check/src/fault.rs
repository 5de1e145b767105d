//! # Composition Faults
//!
//! Exceptions raised by the engine itself rather than by a handler. None of
//! them carries a namespace; they are matched by name.

use warden_core::{DeclaredException, ExceptionKind};

/// `check_any` was evaluated with no alternatives.
pub const EMPTY_CHECK_SET: ExceptionKind = ExceptionKind::named("EmptyCheckSetError");

/// A negated check succeeded, so the negation fails.
pub const NEGATED_CHECK_SUCCEEDED: ExceptionKind =
    ExceptionKind::named("NegatedCheckSucceededError");

/// Group name used when every alternative of `check_any` is denied. The
/// wrapping exception carries the same name.
pub const CHECK_ANY_GROUP: &str = "checkAny";

/// Kind of the exception wrapping a `check_any` denial group.
pub const CHECK_ANY_DENIED: ExceptionKind = ExceptionKind::named(CHECK_ANY_GROUP);

/// Engine-raised failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFault {
    EmptyCheckSet,
    NegatedCheckSucceeded,
}

impl DeclaredException for CheckFault {
    fn kind(&self) -> ExceptionKind {
        match self {
            CheckFault::EmptyCheckSet => EMPTY_CHECK_SET,
            CheckFault::NegatedCheckSucceeded => NEGATED_CHECK_SUCCEEDED,
        }
    }

    fn message(&self) -> Option<String> {
        let message = match self {
            CheckFault::EmptyCheckSet => "check_any requires at least one check",
            CheckFault::NegatedCheckSucceeded => "negated check succeeded",
        };
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faults_convert_to_unnamespaced_exceptions() {
        let empty = CheckFault::EmptyCheckSet.into_exception();
        assert!(empty.is_kind(&EMPTY_CHECK_SET));
        assert!(empty.namespace().is_none());

        let negated = CheckFault::NegatedCheckSucceeded.into_exception();
        assert_eq!(negated.name(), "NegatedCheckSucceededError");
        assert_eq!(negated.message(), Some("negated check succeeded"));
    }
}

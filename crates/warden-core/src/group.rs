//! # Exception Groups
//!
//! An [`ExceptionGroup`] reports several independent failures together,
//! e.g. every denied alternative of an OR. A group is never empty.

use serde::Serialize;

use crate::exception::{Exception, ExceptionKind};
use crate::outcome::Outcome;

/// Returned by [`group`] when given no exceptions.
pub const EMPTY_EXCEPTION_GROUP: ExceptionKind = ExceptionKind::named("EmptyExceptionGroupError");

/// A named, non-empty, ordered collection of exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionGroup {
    name: String,
    exceptions: Vec<Exception>,
}

/// Build a group, failing with `EmptyExceptionGroupError` when
/// `exceptions` is empty.
pub fn group(
    name: impl Into<String>,
    exceptions: impl IntoIterator<Item = Exception>,
) -> Outcome<ExceptionGroup, Exception> {
    let name = name.into();
    let mut iter = exceptions.into_iter();
    match iter.next() {
        Some(first) => Outcome::Success(ExceptionGroup::new(name, first, iter)),
        None => Outcome::Failure(
            EMPTY_EXCEPTION_GROUP
                .exception()
                .with_message(format!("exception group '{name}' requires at least one exception")),
        ),
    }
}

impl ExceptionGroup {
    /// Build a group from a first member and any number of others.
    /// Infallible because the first member is required by the signature.
    pub fn new(
        name: impl Into<String>,
        first: Exception,
        rest: impl IntoIterator<Item = Exception>,
    ) -> Self {
        let mut exceptions = vec![first];
        exceptions.extend(rest);
        Self {
            name: name.into(),
            exceptions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in insertion order. Never empty.
    pub fn exceptions(&self) -> &[Exception] {
        &self.exceptions
    }

    /// Number of members, at least one.
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Wrap the group as a single exception named after it. The members
    /// stay reachable through [`Exception::group`].
    pub fn into_exception(self) -> Exception {
        let summary = self
            .exceptions
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ");
        Exception::new(self.name.clone())
            .with_message(format!("{} exceptions: {summary}", self.exceptions.len()))
            .with_group(self)
    }
}

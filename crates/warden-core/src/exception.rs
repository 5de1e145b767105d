//! # Exception Model
//!
//! Immutable, namespaced error values with a causal chain and free-text
//! notes. An [`Exception`] is published once and never mutated: the three
//! derivations ([`Exception::from`], [`Exception::is`],
//! [`Exception::add_note`]) either inspect the receiver or return a new
//! value.
//!
//! ## Chain Invariant
//!
//! `stack` is the oldest-first list of every exception this value was
//! derived `from`. Each `from(cause)` appends exactly one entry, so
//! `e.from(c1).from(c2).stack() == [..e.stack(), c1, c2]`. Entries are
//! `Arc`-shared, so re-wrapping never copies an ancestor.
//!
//! ## Kind Matching
//!
//! Two exceptions are the same kind when their names match and, if the
//! comparand carries a namespace, the namespaces match too. A comparand
//! without a namespace matches every namespace. [`ExceptionKind`] is the
//! static form of a comparand, usable in `const` items.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::group::ExceptionGroup;

// ─── Configuration ───────────────────────────────────────────────────

/// Fields accepted by [`exception`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionConfig {
    /// Kind name, e.g. `"UnauthorizedError"`.
    pub name: String,
    /// Namespace, usually stamped by an exception space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Machine-readable code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExceptionConfig {
    /// A config with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Build an [`Exception`] from its config. `stack` and `notes` start empty.
pub fn exception(config: ExceptionConfig) -> Exception {
    Exception {
        name: config.name,
        namespace: config.namespace,
        code: config.code,
        message: config.message,
        cause: None,
        stack: Vec::new(),
        notes: Vec::new(),
        group: None,
    }
}

// ─── Exception ───────────────────────────────────────────────────────

/// An immutable error value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exception {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<Arc<Exception>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stack: Vec<Arc<Exception>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<Arc<ExceptionGroup>>,
}

impl Exception {
    /// A new exception with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        exception(ExceptionConfig::named(name))
    }

    /// Set the namespace while building.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the code while building.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the message while building.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub(crate) fn with_group(mut self, group: ExceptionGroup) -> Self {
        self.group = Some(Arc::new(group));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The immediate cause recorded by the latest [`from`](Self::from).
    pub fn cause(&self) -> Option<&Exception> {
        self.cause.as_deref()
    }

    /// Every ancestor this value was derived from, oldest first.
    pub fn stack(&self) -> &[Arc<Exception>] {
        &self.stack
    }

    /// Notes in the order they were added.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// The group this exception wraps, if it was built by
    /// [`ExceptionGroup::into_exception`].
    pub fn group(&self) -> Option<&ExceptionGroup> {
        self.group.as_deref()
    }

    /// Follow `cause` links to the end of the chain. Returns `self` when
    /// there is no cause.
    pub fn root_cause(&self) -> &Exception {
        let mut current = self;
        while let Some(cause) = current.cause.as_deref() {
            current = cause;
        }
        current
    }

    /// Derive a new exception caused by `cause`.
    ///
    /// The receiver is unchanged. The result has `cause` set and `cause`
    /// appended to the end of the receiver's stack.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from(&self, cause: Exception) -> Exception {
        let cause = Arc::new(cause);
        let mut stack = Vec::with_capacity(self.stack.len() + 1);
        stack.extend(self.stack.iter().cloned());
        stack.push(Arc::clone(&cause));
        Exception {
            cause: Some(cause),
            stack,
            ..self.clone()
        }
    }

    /// Whether `self` is the same kind as `other`.
    pub fn is(&self, other: &Exception) -> bool {
        kind_matches(self, &other.name, other.namespace.as_deref())
    }

    /// Whether `self` is of the static `kind`.
    pub fn is_kind(&self, kind: &ExceptionKind) -> bool {
        kind_matches(self, kind.name, kind.namespace)
    }

    /// Derive a new exception with `note` appended.
    #[must_use]
    pub fn add_note(&self, note: impl Into<String>) -> Exception {
        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.extend(self.notes.iter().cloned());
        notes.push(note.into());
        Exception {
            notes,
            ..self.clone()
        }
    }
}

fn kind_matches(exception: &Exception, name: &str, namespace: Option<&str>) -> bool {
    if exception.name != name {
        return false;
    }
    match namespace {
        Some(ns) => exception.namespace.as_deref() == Some(ns),
        None => true,
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ns) = &self.namespace {
            write!(f, "{ns}::")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Exception {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// ─── Static Kinds ────────────────────────────────────────────────────

/// A `(name, namespace)` comparand known at compile time.
///
/// ```
/// use warden_core::ExceptionKind;
///
/// const UNAUTHORIZED: ExceptionKind = ExceptionKind::named("UnauthorizedError");
/// let denied = UNAUTHORIZED.exception().with_namespace("CheckError");
/// assert!(denied.is_kind(&UNAUTHORIZED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExceptionKind {
    name: &'static str,
    namespace: Option<&'static str>,
}

impl ExceptionKind {
    /// A kind matching `name` in any namespace.
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            namespace: None,
        }
    }

    /// A kind matching `name` only inside `namespace`.
    pub const fn namespaced(namespace: &'static str, name: &'static str) -> Self {
        Self {
            name,
            namespace: Some(namespace),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    /// A fresh exception of this kind.
    pub fn exception(&self) -> Exception {
        let exception = Exception::new(self.name);
        match self.namespace {
            Some(ns) => exception.with_namespace(ns),
            None => exception,
        }
    }
}

/// A closed set of exception kinds that converts into the dynamic
/// [`Exception`] at the boundary.
pub trait DeclaredException {
    /// The static kind of this variant.
    fn kind(&self) -> ExceptionKind;

    /// Optional description carried into the exception.
    fn message(&self) -> Option<String> {
        None
    }

    /// Convert into a dynamic exception.
    fn into_exception(self) -> Exception
    where
        Self: Sized,
    {
        let exception = self.kind().exception();
        match self.message() {
            Some(message) => exception.with_message(message),
            None => exception,
        }
    }
}

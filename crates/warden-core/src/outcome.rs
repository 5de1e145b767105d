//! # Outcome Algebra
//!
//! Two tagged unions that force every caller to handle both branches:
//!
//! - [`Outcome<T, E>`]: exactly one of `Success(T)` or `Failure(E)`.
//! - [`Maybe<T>`]: exactly one of `Some(T)` or `None`; isomorphic to
//!   `Outcome<T, ()>`.
//!
//! ## Extraction
//!
//! There is no unchecked unwrap. The payload leaves an outcome through
//! [`Outcome::fold`] (or [`Outcome::fold_async`] when the handlers suspend),
//! through a total combinator such as [`Outcome::map`], or through an
//! explicit conversion into `std::result::Result` / `Option`, both of which
//! the compiler again forces the caller to match.
//!
//! Neither type can fail on its own; they only carry payloads produced
//! elsewhere.

use std::future::Future;

use serde::{Deserialize, Serialize};

// ─── Outcome ─────────────────────────────────────────────────────────

/// A terminal success-or-failure value.
#[must_use = "an Outcome may be a Failure, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation produced an error.
    Failure(E),
}

/// Construct a successful [`Outcome`].
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Construct a failed [`Outcome`].
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Construct a successful outcome.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Construct a failed outcome.
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for `Success`. Never agrees with [`is_error`](Self::is_error).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`. Never agrees with [`is_success`](Self::is_success).
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Invoke exactly one handler with the unwrapped payload and return
    /// that handler's result.
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_error(error),
        }
    }

    /// Like [`fold`](Self::fold), but the handlers return futures. Only the
    /// selected handler is called, and its future is awaited to completion.
    pub async fn fold_async<R, S, F>(
        self,
        on_success: impl FnOnce(T) -> S,
        on_error: impl FnOnce(E) -> F,
    ) -> R
    where
        S: Future<Output = R>,
        F: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_error(error).await,
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success payload, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload, leaving a success untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a fallible step after a success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success payload, if any.
    pub fn success_value(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// The failure payload, if any.
    pub fn error_value(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(error) => Maybe::Some(error),
        }
    }

    /// Convert into a standard library `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// ─── Maybe ───────────────────────────────────────────────────────────

/// A presence-or-absence value.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    pub fn none() -> Self {
        Self::None
    }

    /// Returns `true` when a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` when no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Invoke exactly one handler. `on_none` receives no payload.
    pub fn fold<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Like [`fold`](Self::fold), awaiting the selected handler's future.
    pub async fn fold_async<R, S, N>(
        self,
        on_some: impl FnOnce(T) -> S,
        on_none: impl FnOnce() -> N,
    ) -> R
    where
        S: Future<Output = R>,
        N: Future<Output = R>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Transform a present value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Turn absence into a failure carrying `error`.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    /// Convert into a standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> From<Maybe<T>> for Outcome<T, ()> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.ok_or(())
    }
}

impl<T> From<Outcome<T, ()>> for Maybe<T> {
    fn from(outcome: Outcome<T, ()>) -> Self {
        outcome.success_value()
    }
}

//! # Argument Validator Adapter
//!
//! The single seam between an external schema system and the exception
//! model. A validator only has to answer one question: given untyped input,
//! is there a typed value, or a human-readable diagnostic?
//!
//! [`parse_args`] turns that answer into an [`Outcome`]. Failures are always
//! named `ValidatedArgsError` and carry no namespace, so they are
//! recognisable by name alone regardless of which spaces a caller declares.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use warden_core::{Exception, ExceptionKind, Outcome};

/// Kind of every exception produced by [`parse_args`].
pub const VALIDATED_ARGS_ERROR: ExceptionKind = ExceptionKind::named("ValidatedArgsError");

/// An external structural validator.
pub trait ArgsSchema: Send + Sync {
    /// The typed value produced on success.
    type Output;

    /// Attempt to parse `input`. On failure, return a diagnostic message.
    fn parse(&self, input: &Value) -> Result<Self::Output, String>;
}

/// Run `schema` against `input`.
///
/// Returns `Success(typed)` when the input matches, otherwise
/// `Failure(ValidatedArgsError)` whose message is the validator's
/// diagnostic.
pub fn parse_args<S>(schema: &S, input: &Value) -> Outcome<S::Output, Exception>
where
    S: ArgsSchema + ?Sized,
{
    match schema.parse(input) {
        Ok(value) => Outcome::Success(value),
        Err(diagnostic) => {
            tracing::debug!(%diagnostic, "argument validation failed");
            Outcome::Failure(VALIDATED_ARGS_ERROR.exception().with_message(diagnostic))
        }
    }
}

// ─── Serde ───────────────────────────────────────────────────────────

/// Validates by deserializing into `T`. The shape `T` declares is the
/// schema.
pub struct SerdeArgs<T> {
    _t: PhantomData<fn() -> T>,
}

impl<T> SerdeArgs<T> {
    pub const fn new() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for SerdeArgs<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeArgs<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeArgs")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> ArgsSchema for SerdeArgs<T> {
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, String> {
        T::deserialize(input).map_err(|e| e.to_string())
    }
}

// ─── Unit ────────────────────────────────────────────────────────────

/// Accepts any input and yields `()`. For checks that only inspect the
/// context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArgs;

impl ArgsSchema for NoArgs {
    type Output = ();

    fn parse(&self, _input: &Value) -> Result<(), String> {
        Ok(())
    }
}

// ─── Closures ────────────────────────────────────────────────────────

/// Adapts a plain function into an [`ArgsSchema`].
#[derive(Clone)]
pub struct ArgsFn<F> {
    f: F,
}

/// Wrap `f` as a schema.
pub fn args_fn<F, T>(f: F) -> ArgsFn<F>
where
    F: Fn(&Value) -> Result<T, String> + Send + Sync,
{
    ArgsFn { f }
}

impl<F, T> ArgsSchema for ArgsFn<F>
where
    F: Fn(&Value) -> Result<T, String> + Send + Sync,
{
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, String> {
        (self.f)(input)
    }
}

impl<F> fmt::Debug for ArgsFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArgsFn")
    }
}

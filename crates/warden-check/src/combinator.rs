//! # Check Combinators
//!
//! Boolean composition of checks. Every combinator is itself a [`Check`],
//! so trees of any depth can be built.
//!
//! ## Semantics
//!
//! ```text
//! check_all([c1..cn]):              check_any([c1..cn]):
//!   for c in [c1..cn]:                if n = 0: fail EmptyCheckSetError
//!     r ← await c                     errors ← []
//!     if r is Failure: return r       for c in [c1..cn]:
//!   return Success(())                  r ← await c
//!                                       if r is Success: return r
//! not(c):                               errors.push(r.error)
//!   r ← await c                       fail group("checkAny", errors)
//!   if r is Success: fail NegatedCheckSucceededError
//!   return Success(())
//! ```
//!
//! ## Ordering
//!
//! Members run strictly one after another in the order given, never
//! concurrently. A member is not started until the previous one has
//! completed, and nothing after a short-circuit is started at all. Put
//! cheap or likely-to-fail checks first.

use futures::future::BoxFuture;
use serde_json::Value;
use warden_core::{group, DeclaredException, Outcome};

use crate::check::{BoxCheck, Check, CheckOutcome};
use crate::fault::{CheckFault, CHECK_ANY_GROUP};

// ─── AND ─────────────────────────────────────────────────────────────

/// Conjunction built by [`check_all`].
pub struct CheckAll<C: ?Sized> {
    checks: Vec<BoxCheck<C>>,
}

/// Succeed only if every check succeeds; stop at the first failure and
/// return it unchanged. An empty list succeeds.
pub fn check_all<C>(checks: impl IntoIterator<Item = BoxCheck<C>>) -> CheckAll<C>
where
    C: ?Sized + Sync,
{
    CheckAll {
        checks: checks.into_iter().collect(),
    }
}

impl<C: ?Sized> CheckAll<C> {
    /// Number of member checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<C: ?Sized + Sync> Check<C> for CheckAll<C> {
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            for (index, member) in self.checks.iter().enumerate() {
                if let Outcome::Failure(denied) = member.check(context, args).await {
                    tracing::debug!(
                        index,
                        checks = self.checks.len(),
                        exception = %denied.name(),
                        "check_all short-circuited on failure"
                    );
                    return Outcome::Failure(denied);
                }
            }
            tracing::trace!(checks = self.checks.len(), "check_all passed");
            Outcome::Success(())
        })
    }
}

// ─── OR ──────────────────────────────────────────────────────────────

/// Disjunction built by [`check_any`].
pub struct CheckAny<C: ?Sized> {
    checks: Vec<BoxCheck<C>>,
}

/// Succeed as soon as one check succeeds. If all fail, fail with a single
/// exception wrapping `group("checkAny", failures)` in evaluation order.
/// An empty list fails with `EmptyCheckSetError` when evaluated.
pub fn check_any<C>(checks: impl IntoIterator<Item = BoxCheck<C>>) -> CheckAny<C>
where
    C: ?Sized + Sync,
{
    let checks: Vec<BoxCheck<C>> = checks.into_iter().collect();
    if checks.is_empty() {
        tracing::warn!("check_any defined with no alternatives; it will always fail");
    }
    CheckAny { checks }
}

impl<C: ?Sized> CheckAny<C> {
    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<C: ?Sized + Sync> Check<C> for CheckAny<C> {
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            if self.checks.is_empty() {
                return Outcome::Failure(CheckFault::EmptyCheckSet.into_exception());
            }

            let mut failures = Vec::with_capacity(self.checks.len());
            for (index, member) in self.checks.iter().enumerate() {
                match member.check(context, args).await {
                    Outcome::Success(()) => {
                        tracing::trace!(index, "check_any short-circuited on success");
                        return Outcome::Success(());
                    }
                    Outcome::Failure(denied) => failures.push(denied),
                }
            }

            tracing::debug!(
                alternatives = failures.len(),
                "check_any denied by every alternative"
            );
            group(CHECK_ANY_GROUP, failures).fold(
                |denials| Outcome::Failure(denials.into_exception()),
                Outcome::Failure,
            )
        })
    }
}

// ─── NOT ─────────────────────────────────────────────────────────────

/// Negation built by [`not`].
#[derive(Debug, Clone)]
pub struct Not<K> {
    inner: K,
}

/// Invert `check`. The inner failure is discarded on success; an inner
/// success becomes `NegatedCheckSucceededError`.
pub fn not<K>(check: K) -> Not<K> {
    Not { inner: check }
}

impl<K> Not<K> {
    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<C, K> Check<C> for Not<K>
where
    C: ?Sized + Sync,
    K: Check<C>,
{
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            self.inner.check(context, args).await.fold(
                |()| {
                    tracing::debug!("negated check succeeded");
                    Outcome::Failure(CheckFault::NegatedCheckSucceeded.into_exception())
                },
                |_discarded| Outcome::Success(()),
            )
        })
    }
}

// ─── Fluent Operators ────────────────────────────────────────────────

/// Chain operators on any check. Pure sugar over the free functions.
pub trait CheckExt<C: ?Sized + Sync>: Check<C> + Sized + 'static {
    /// `check_all([self, other])`.
    fn and<O>(self, other: O) -> CheckAll<C>
    where
        O: Check<C> + 'static,
    {
        check_all([self.boxed(), Box::new(other) as BoxCheck<C>])
    }

    /// `check_any([self, other])`.
    fn or<O>(self, other: O) -> CheckAny<C>
    where
        O: Check<C> + 'static,
    {
        check_any([self.boxed(), Box::new(other) as BoxCheck<C>])
    }

    /// `not(self)`.
    fn not(self) -> Not<Self> {
        not(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxCheck<C> {
        Box::new(self)
    }
}

impl<C, K> CheckExt<C> for K
where
    C: ?Sized + Sync,
    K: Check<C> + 'static,
{
}

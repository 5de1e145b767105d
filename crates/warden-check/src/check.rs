//! # Check Engine
//!
//! A check is an asynchronous authorization predicate over a request
//! context `C` and raw JSON arguments. It yields `Success(())` to let the
//! request proceed or `Failure(exception)` to deny it.
//!
//! ## Evaluation
//!
//! ```text
//! check(context, raw):
//!   typed ← parse_args(schema, raw)
//!   if typed is Failure(e): return Failure(e)      -- handler never runs
//!   return await handler(context, typed)           -- returned unchanged
//! ```
//!
//! ## Failure Channels
//!
//! A leaf check fails in exactly two ways: `ValidatedArgsError` from the
//! argument adapter, or whatever exception the handler returns. A handler
//! that panics is a defect. The panic is not caught and reaches the task
//! awaiting the check, so it can never be mistaken for a denial.
//!
//! ## State
//!
//! Checks hold only their schema and handler. Context and arguments are
//! supplied per call and borrowed for its duration.

use std::future::Future;

use futures::future::BoxFuture;
use serde_json::Value;
use warden_core::{Exception, Outcome};
use warden_schema::{parse_args, ArgsSchema};

/// What every check evaluates to.
pub type CheckOutcome = Outcome<(), Exception>;

/// An authorization predicate over a context of type `C`.
pub trait Check<C: ?Sized>: Send + Sync {
    /// Evaluate against `context` and the raw `args`.
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome>;
}

impl<C, K> Check<C> for Box<K>
where
    C: ?Sized + Sync,
    K: Check<C> + ?Sized,
{
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        (**self).check(context, args)
    }
}

impl<C, K> Check<C> for std::sync::Arc<K>
where
    C: ?Sized + Sync,
    K: Check<C> + ?Sized,
{
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        (**self).check(context, args)
    }
}

/// A check that owns its type erasure.
pub type BoxCheck<C> = Box<dyn Check<C>>;

// ─── Handlers ────────────────────────────────────────────────────────

/// The user-supplied half of a leaf check: decides, given the context and
/// already-validated arguments.
///
/// Closures `Fn(&C, A) -> impl Future<Output = CheckOutcome>` implement
/// this automatically. Their future cannot borrow the context, so read what
/// the decision needs before the `async` block. Implement the trait
/// directly to hold the context across an await.
pub trait CheckHandler<C: ?Sized, A>: Send + Sync {
    fn handle<'a>(&'a self, context: &'a C, args: A) -> BoxFuture<'a, CheckOutcome>;
}

impl<C, A, F, Fut> CheckHandler<C, A> for F
where
    C: ?Sized + Sync,
    F: Fn(&C, A) -> Fut + Send + Sync,
    Fut: Future<Output = CheckOutcome> + Send + 'static,
{
    fn handle<'a>(&'a self, context: &'a C, args: A) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(self(context, args))
    }
}

// ─── Leaf Checks ─────────────────────────────────────────────────────

/// Inputs to [`check`].
#[derive(Debug, Clone)]
pub struct CheckConfig<S, H> {
    /// Validator for the raw arguments.
    pub args: S,
    /// Decision over the context and typed arguments.
    pub handler: H,
}

/// A leaf check built by [`check`].
#[derive(Debug, Clone)]
pub struct SchemaCheck<S, H> {
    args: S,
    handler: H,
}

/// Define a leaf check from a schema and a handler.
pub fn check<S, H>(config: CheckConfig<S, H>) -> SchemaCheck<S, H> {
    SchemaCheck {
        args: config.args,
        handler: config.handler,
    }
}

impl<S, H> SchemaCheck<S, H> {
    pub fn schema(&self) -> &S {
        &self.args
    }
}

impl<C, S, H> Check<C> for SchemaCheck<S, H>
where
    C: ?Sized + Sync,
    S: ArgsSchema,
    S::Output: Send,
    H: CheckHandler<C, S::Output>,
{
    fn check<'a>(&'a self, context: &'a C, args: &'a Value) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(parse_args(&self.args, args).fold_async(
            move |typed| self.handler.handle(context, typed),
            |rejected| async move {
                tracing::debug!(exception = %rejected, "check rejected arguments");
                Outcome::Failure(rejected)
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde::Deserialize;
    use serde_json::json;
    use warden_core::{failure, success, CHECK_ERROR_SPACE, DefineConfig};
    use warden_schema::{NoArgs, SerdeArgs, VALIDATED_ARGS_ERROR};

    struct Ctx {
        role: String,
    }

    #[derive(Deserialize)]
    struct Target {
        owner: String,
    }

    #[tokio::test]
    async fn test_handler_receives_typed_args() {
        let owner_only = check(CheckConfig {
            args: SerdeArgs::<Target>::new(),
            handler: |ctx: &Ctx, target: Target| {
                let allowed = ctx.role == target.owner;
                async move {
                    if allowed {
                        success(())
                    } else {
                        failure(CHECK_ERROR_SPACE.define(DefineConfig::named("NotOwnerError")))
                    }
                }
            },
        });
        let ctx = Ctx { role: "alice".into() };

        assert!(owner_only
            .check(&ctx, &json!({"owner": "alice"}))
            .await
            .is_success());
        let denied = owner_only.check(&ctx, &json!({"owner": "bob"})).await;
        assert_eq!(
            denied.error_value().map(|e| e.name().to_string()).into_option(),
            Some("NotOwnerError".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_args_never_reach_the_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let guarded = check(CheckConfig {
            args: SerdeArgs::<Target>::new(),
            handler: move |_: &Ctx, _: Target| {
                counted.fetch_add(1, Ordering::SeqCst);
                async { success(()) }
            },
        });

        let outcome = guarded.check(&Ctx { role: "x".into() }, &json!({})).await;
        let err = outcome.into_result().unwrap_err();
        assert!(err.is_kind(&VALIDATED_ARGS_ERROR));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handler_outcome_is_returned_unchanged() {
        let denial = CHECK_ERROR_SPACE
            .define(DefineConfig::named("UnauthorizedError").with_code("E401"))
            .add_note("from test");
        let expected = denial.clone();
        let deny = check(CheckConfig {
            args: NoArgs,
            handler: move |_: &Ctx, ()| {
                let denial = denial.clone();
                async move { failure(denial) }
            },
        });

        let outcome = deny.check(&Ctx { role: "x".into() }, &Value::Null).await;
        assert_eq!(outcome, failure(expected));
    }

    /// A handler that holds the context across an await point.
    struct RoleLookup;

    impl CheckHandler<Ctx, ()> for RoleLookup {
        fn handle<'a>(&'a self, context: &'a Ctx, _args: ()) -> BoxFuture<'a, CheckOutcome> {
            Box::pin(async move {
                tokio::task::yield_now().await;
                if context.role == "admin" {
                    success(())
                } else {
                    failure(Exception::new("UnauthorizedError"))
                }
            })
        }
    }

    #[tokio::test]
    async fn test_trait_handlers_may_borrow_the_context() {
        let admin = check(CheckConfig {
            args: NoArgs,
            handler: RoleLookup,
        });
        assert!(admin
            .check(&Ctx { role: "admin".into() }, &json!({}))
            .await
            .is_success());
        assert!(admin
            .check(&Ctx { role: "user".into() }, &json!({}))
            .await
            .is_error());
    }

    #[tokio::test]
    async fn test_boxed_and_shared_checks_delegate() {
        let leaf = check(CheckConfig {
            args: NoArgs,
            handler: RoleLookup,
        });
        let shared: Arc<dyn Check<Ctx>> = Arc::new(leaf);
        let boxed: BoxCheck<Ctx> = Box::new(Arc::clone(&shared));
        let ctx = Ctx { role: "admin".into() };
        assert!(boxed.check(&ctx, &Value::Null).await.is_success());
        assert!(shared.check(&ctx, &Value::Null).await.is_success());
    }

    async fn corrupted_lookup() -> CheckOutcome {
        panic!("role table corrupted")
    }

    #[tokio::test]
    #[should_panic(expected = "role table corrupted")]
    async fn test_handler_panics_propagate_as_defects() {
        let broken = check(CheckConfig {
            args: NoArgs,
            handler: |_: &Ctx, ()| corrupted_lookup(),
        });
        let _ = broken.check(&Ctx { role: "admin".into() }, &Value::Null).await;
    }
}

//! End-to-end test: a JSON-Schema-validated admin check evaluated the way an
//! API layer would call it before running a mutation.
//!
//! The schema requires `{ userId: non-empty string }`; the handler allows the
//! request only when the caller's role is `admin`. A side-effect counter
//! records every handler invocation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use warden_check::{check, Check, CheckConfig, CheckOutcome, SchemaCheck};
use warden_core::{
    failure, success, DefineConfig, Exception, Severity, SpaceRegistry, CHECK_ERROR_SPACE,
    UNAUTHORIZED,
};
use warden_schema::JsonSchemaArgs;

struct RequestContext {
    role: String,
}

impl RequestContext {
    fn with_role(role: &str) -> Self {
        Self {
            role: role.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserArgs {
    user_id: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build the admin check and return it with its invocation counter.
fn admin_check() -> (
    SchemaCheck<
        JsonSchemaArgs<UserArgs>,
        impl Fn(&RequestContext, UserArgs) -> futures::future::Ready<CheckOutcome> + Send + Sync,
    >,
    Arc<AtomicUsize>,
) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let schema = JsonSchemaArgs::new(json!({
        "type": "object",
        "required": ["userId"],
        "properties": {
            "userId": {"type": "string", "minLength": 1}
        }
    }))
    .expect("schema compiles");

    let admin = check(CheckConfig {
        args: schema,
        handler: move |ctx: &RequestContext, args: UserArgs| {
            counted.fetch_add(1, Ordering::SeqCst);
            tracing::info!(user_id = %args.user_id, role = %ctx.role, "evaluating admin check");
            let outcome = if ctx.role == "admin" {
                success(())
            } else {
                failure(
                    CHECK_ERROR_SPACE.define(
                        DefineConfig::named("UnauthorizedError")
                            .with_message(format!("role '{}' may not act on {}", ctx.role, args.user_id)),
                    ),
                )
            };
            futures::future::ready(outcome)
        },
    });
    (admin, calls)
}

#[tokio::test]
async fn test_admin_with_valid_args_is_allowed() {
    init_tracing();
    let (admin, calls) = admin_check();

    let outcome = admin
        .check(&RequestContext::with_role("admin"), &json!({"userId": "u1"}))
        .await;

    assert_eq!(outcome, success(()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_admin_is_denied_as_unauthorized() {
    init_tracing();
    let (admin, calls) = admin_check();

    let outcome = admin
        .check(&RequestContext::with_role("user"), &json!({"userId": "u1"}))
        .await;

    let denied = outcome.into_result().unwrap_err();
    assert!(denied.is(&Exception::new("UnauthorizedError")));
    assert!(denied.is_kind(&UNAUTHORIZED));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let registry = SpaceRegistry::with_defaults();
    assert_eq!(registry.severity_of(&denied), Some(Severity::Critical));
}

#[tokio::test]
async fn test_missing_user_id_fails_validation_without_running_handler() {
    init_tracing();
    let (admin, calls) = admin_check();

    let outcome = admin
        .check(&RequestContext::with_role("admin"), &json!({}))
        .await;

    let rejected = outcome.into_result().unwrap_err();
    assert!(rejected.is(&Exception::new("ValidatedArgsError")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_user_id_fails_validation() {
    init_tracing();
    let (admin, calls) = admin_check();

    let outcome = admin
        .check(&RequestContext::with_role("admin"), &json!({"userId": ""}))
        .await;

    assert!(outcome.is_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_denial_maps_to_access_denied_at_the_caller() {
    // The consumer treats Success as proceed and Failure as deny-with-reason.
    let (admin, _) = admin_check();
    let ctx = RequestContext::with_role("guest");
    let response = admin
        .check(&ctx, &json!({"userId": "u7"}))
        .await
        .fold(|()| "proceed".to_string(), |e| format!("denied: {e}"));
    assert_eq!(
        response,
        "denied: CheckError::UnauthorizedError: role 'guest' may not act on u7"
    );
}

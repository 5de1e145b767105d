//! # warden-check — Authorization Checks
//!
//! Schema-validated asynchronous predicates over a request context, and
//! short-circuiting boolean composition of them.
//!
//! ## Architecture
//!
//! - **Check engine** (`check.rs`): the [`Check`] trait and leaf checks
//!   built by [`check`] from an argument schema and a [`CheckHandler`].
//!   Arguments are validated before the handler runs.
//!
//! - **Combinators** (`combinator.rs`): [`check_all`] (AND, fail-fast),
//!   [`check_any`] (OR, succeed-fast, groups every denial), [`not`], and the
//!   `.and()` / `.or()` / `.not()` operators of [`CheckExt`].
//!
//! - **Faults** (`fault.rs`): exceptions raised by the engine itself:
//!   `EmptyCheckSetError`, `NegatedCheckSucceededError`, and the
//!   `checkAny` denial group.
//!
//! ## Example
//!
//! ```
//! use serde::Deserialize;
//! use serde_json::json;
//! use warden_check::{check, Check, CheckConfig, CheckExt};
//! use warden_core::{failure, success, DefineConfig, CHECK_ERROR_SPACE};
//! use warden_schema::{NoArgs, SerdeArgs};
//!
//! struct Session {
//!     role: &'static str,
//!     suspended: bool,
//! }
//!
//! #[derive(Deserialize)]
//! struct Target {
//!     id: String,
//! }
//!
//! let is_admin = check(CheckConfig {
//!     args: SerdeArgs::<Target>::new(),
//!     handler: |session: &Session, _target: Target| {
//!         let admin = session.role == "admin";
//!         async move {
//!             if admin {
//!                 success(())
//!             } else {
//!                 failure(CHECK_ERROR_SPACE.define(DefineConfig::named("UnauthorizedError")))
//!             }
//!         }
//!     },
//! });
//! let is_suspended = check(CheckConfig {
//!     args: NoArgs,
//!     handler: |session: &Session, ()| {
//!         let suspended = session.suspended;
//!         async move {
//!             if suspended {
//!                 success(())
//!             } else {
//!                 failure(CHECK_ERROR_SPACE.define(DefineConfig::named("ActiveSessionError")))
//!             }
//!         }
//!     },
//! });
//!
//! let policy = is_admin.and(is_suspended.not());
//! let session = Session { role: "admin", suspended: false };
//! let outcome = futures::executor::block_on(policy.check(&session, &json!({"id": "doc-1"})));
//! assert!(outcome.is_success());
//! ```
//!
//! ## Crate Policy
//!
//! - Depends on `warden-core` and `warden-schema` internally.
//! - Member checks of a combinator never run concurrently.
//! - Handler panics are never caught.

pub mod check;
pub mod combinator;
pub mod fault;

pub use check::{check, BoxCheck, Check, CheckConfig, CheckHandler, CheckOutcome, SchemaCheck};
pub use combinator::{check_all, check_any, not, CheckAll, CheckAny, CheckExt, Not};
pub use fault::{
    CheckFault, CHECK_ANY_DENIED, CHECK_ANY_GROUP, EMPTY_CHECK_SET, NEGATED_CHECK_SUCCEEDED,
};

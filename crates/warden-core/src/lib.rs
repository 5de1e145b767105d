//! # warden-core — Outcomes and Exceptions
//!
//! The value layer of Warden. Everything an authorization check can report
//! is expressed with the types in this crate:
//!
//! 1. **Outcome algebra** (`outcome.rs`): [`Outcome<T, E>`] and [`Maybe<T>`],
//!    tagged unions extracted only through exhaustive folds or explicit
//!    conversions. There is no unchecked unwrap.
//!
//! 2. **Exception model** (`exception.rs`, `group.rs`): immutable
//!    [`Exception`] values with a namespace, an oldest-first causal stack,
//!    and notes. Derivations return new values and share ancestors by `Arc`.
//!    [`ExceptionGroup`] reports several failures together.
//!
//! 3. **Exception spaces** (`space.rs`, `registry.rs`): named classifiers
//!    with a [`Severity`], and a [`SpaceRegistry`] loaded from YAML or JSON
//!    that recovers an exception's severity from its namespace.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `warden-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Published values are never mutated.

pub mod error;
pub mod exception;
pub mod group;
pub mod outcome;
pub mod registry;
pub mod space;

// Re-export primary types for ergonomic imports.
pub use error::RegistryError;
pub use exception::{exception, DeclaredException, Exception, ExceptionConfig, ExceptionKind};
pub use group::{group, ExceptionGroup, EMPTY_EXCEPTION_GROUP};
pub use outcome::{failure, success, Maybe, Outcome};
pub use registry::{RegistryDocument, SpaceRegistry};
pub use space::{
    exception_space, DefineConfig, ExceptionSpace, ExceptionSpaceConfig, Severity,
    CHECK_ERROR_SPACE, UNAUTHORIZED,
};

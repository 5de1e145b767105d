//! # warden-schema — Argument Validation
//!
//! Adapts external validators to the Warden exception model. A check never
//! sees raw arguments: they pass through [`parse_args`] first, and a
//! rejected input becomes a `ValidatedArgsError` exception instead of
//! reaching the handler.
//!
//! ## Validators
//!
//! - [`SerdeArgs<T>`]: the Rust type `T` is the schema.
//! - [`JsonSchemaArgs<T>`]: a JSON Schema (Draft 2020-12) document checked
//!   with the `jsonschema` crate, then deserialized into `T`.
//! - [`NoArgs`]: accepts anything; for context-only checks.
//! - [`args_fn`]: any `Fn(&Value) -> Result<T, String>`.
//!
//! ## Crate Policy
//!
//! - Depends only on `warden-core` internally.
//! - Nothing outside [`parse_args`] depends on validator-native errors.

pub mod args;
pub mod error;
pub mod json;

pub use args::{args_fn, parse_args, ArgsFn, ArgsSchema, NoArgs, SerdeArgs, VALIDATED_ARGS_ERROR};
pub use error::SchemaBuildError;
pub use json::JsonSchemaArgs;

//! # Error Types
//!
//! Errors raised while defining argument schemas. Validation of individual
//! inputs never produces these; it produces `ValidatedArgsError` exceptions.

use thiserror::Error;

/// Error compiling an argument schema.
#[derive(Error, Debug)]
pub enum SchemaBuildError {
    /// The schema document is not a valid JSON Schema.
    #[error("invalid argument schema: {reason}")]
    InvalidSchema {
        /// Compiler diagnostic.
        reason: String,
    },
}

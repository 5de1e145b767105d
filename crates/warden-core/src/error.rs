//! # Error Types
//!
//! Infrastructure errors for `warden-core`. Domain failures are never
//! reported here; they are [`Exception`](crate::Exception) values carried
//! inside an [`Outcome`](crate::Outcome).

use thiserror::Error;

/// Error while building or loading a [`SpaceRegistry`](crate::SpaceRegistry).
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two spaces were declared with the same name.
    #[error("exception space '{0}' is already registered")]
    DuplicateSpace(String),

    /// A severity string is not one of info, warning, error, critical.
    #[error("unknown severity '{0}': expected one of info, warning, error, critical")]
    UnknownSeverity(String),

    /// The registry document could not be parsed.
    #[error("registry parse error for '{source_name}': {reason}")]
    Parse {
        /// File path or a label for in-memory input.
        source_name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// IO error reading a registry file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

//! # Exception Spaces
//!
//! A space is a named classifier with a declared [`Severity`]. Exceptions
//! built through [`ExceptionSpace::define`] carry the space name as their
//! namespace, which is the only way the severity can later be recovered.
//! Spaces hold no mutable state.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::exception::{exception, Exception, ExceptionConfig, ExceptionKind};

/// How serious the exceptions of a space are. Ordered from least to most
/// severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// All severities, least severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownSeverity(s.to_string()))
    }
}

/// Configuration of a space, as read from a registry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionSpaceConfig {
    pub name: String,
    pub severity: Severity,
}

/// Fields accepted by [`ExceptionSpace::define`]. There is no namespace
/// field: the space supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DefineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A named classifier stamping its name as the namespace of every
/// exception it defines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExceptionSpace {
    name: Cow<'static, str>,
    severity: Severity,
}

/// Build a space from its config.
pub fn exception_space(config: ExceptionSpaceConfig) -> ExceptionSpace {
    ExceptionSpace {
        name: Cow::Owned(config.name),
        severity: config.severity,
    }
}

impl ExceptionSpace {
    /// A space usable in `const` and `static` items.
    pub const fn new(name: &'static str, severity: Severity) -> Self {
        Self {
            name: Cow::Borrowed(name),
            severity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Build an exception in this space.
    pub fn define(&self, config: DefineConfig) -> Exception {
        exception(ExceptionConfig {
            name: config.name,
            namespace: Some(self.name.to_string()),
            code: config.code,
            message: config.message,
        })
    }

    /// Whether `exception` was defined through a space with this name.
    pub fn contains(&self, exception: &Exception) -> bool {
        exception.namespace() == Some(self.name())
    }
}

/// Space for authorization denials returned by check handlers.
pub const CHECK_ERROR_SPACE: ExceptionSpace = ExceptionSpace::new("CheckError", Severity::Critical);

/// `UnauthorizedError` inside [`CHECK_ERROR_SPACE`].
pub const UNAUTHORIZED: ExceptionKind = ExceptionKind::namespaced("CheckError", "UnauthorizedError");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_stamps_the_space_name_as_namespace() {
        let space = exception_space(ExceptionSpaceConfig {
            name: "Billing".into(),
            severity: Severity::Warning,
        });
        let e = space.define(DefineConfig::named("QuotaExceeded").with_message("over limit"));

        assert_eq!(e.namespace(), Some("Billing"));
        assert_eq!(e.message(), Some("over limit"));
        assert!(space.contains(&e));
        assert_eq!(space.severity(), Severity::Warning);
    }

    #[test]
    fn test_contains_rejects_other_namespaces() {
        let e = Exception::new("QuotaExceeded").with_namespace("Other");
        assert!(!CHECK_ERROR_SPACE.contains(&e));
        assert!(!CHECK_ERROR_SPACE.contains(&Exception::new("QuotaExceeded")));
    }

    #[test]
    fn test_check_error_space_is_critical() {
        assert_eq!(CHECK_ERROR_SPACE.name(), "CheckError");
        assert_eq!(CHECK_ERROR_SPACE.severity(), Severity::Critical);
        let denied = CHECK_ERROR_SPACE.define(DefineConfig::named("UnauthorizedError"));
        assert!(denied.is_kind(&UNAUTHORIZED));
    }

    #[test]
    fn test_severity_is_ordered() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_parses_lowercase_names() {
        for sev in Severity::ALL {
            assert_eq!(sev.to_string().parse::<Severity>().unwrap(), sev);
        }
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(RegistryError::UnknownSeverity(s)) if s == "fatal"
        ));
    }
}

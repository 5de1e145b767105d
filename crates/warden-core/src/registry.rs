//! # Space Registry
//!
//! Process-wide table of declared [`ExceptionSpace`]s, keyed by name. The
//! registry classifies an exception by looking up its namespace; it never
//! changes the exceptions it classifies.
//!
//! ## File Format
//!
//! Registries are usually declared once at start-up from YAML or JSON:
//!
//! ```yaml
//! spaces:
//!   - name: CheckError
//!     severity: critical
//!   - name: Billing
//!     severity: warning
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::exception::Exception;
use crate::space::{exception_space, ExceptionSpace, ExceptionSpaceConfig, Severity, CHECK_ERROR_SPACE};

/// On-disk shape of a registry document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub spaces: Vec<ExceptionSpaceConfig>,
}

/// Name-indexed set of exception spaces.
#[derive(Debug, Clone, Default)]
pub struct SpaceRegistry {
    spaces: BTreeMap<String, ExceptionSpace>,
}

impl SpaceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in [`CHECK_ERROR_SPACE`].
    pub fn with_defaults() -> Self {
        let mut spaces = BTreeMap::new();
        spaces.insert(CHECK_ERROR_SPACE.name().to_string(), CHECK_ERROR_SPACE);
        Self { spaces }
    }

    /// Add a space. Names are unique.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSpace`] if a space with the same
    /// name is already registered.
    pub fn register(&mut self, space: ExceptionSpace) -> Result<(), RegistryError> {
        if self.spaces.contains_key(space.name()) {
            return Err(RegistryError::DuplicateSpace(space.name().to_string()));
        }
        self.spaces.insert(space.name().to_string(), space);
        Ok(())
    }

    /// Add every space declared in `document`.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate name; spaces before it stay registered.
    pub fn extend_from_document(&mut self, document: RegistryDocument) -> Result<(), RegistryError> {
        for config in document.spaces {
            self.register(exception_space(config))?;
        }
        Ok(())
    }

    /// Parse a YAML registry document into a new registry.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument =
            serde_yaml::from_str(yaml).map_err(|e| RegistryError::Parse {
                source_name: "<yaml>".to_string(),
                reason: e.to_string(),
            })?;
        let mut registry = Self::new();
        registry.extend_from_document(document)?;
        Ok(registry)
    }

    /// Parse a JSON registry document into a new registry.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse {
                source_name: "<json>".to_string(),
                reason: e.to_string(),
            })?;
        let mut registry = Self::new();
        registry.extend_from_document(document)?;
        Ok(registry)
    }

    /// Load a registry from a file, choosing the format by extension
    /// (`.yaml`/`.yml` for YAML, anything else for JSON).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read and
    /// [`RegistryError::Parse`] if it is not a valid document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed = match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        };
        parsed.map_err(|e| match e {
            RegistryError::Parse { reason, .. } => RegistryError::Parse {
                source_name: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn get(&self, name: &str) -> Option<&ExceptionSpace> {
        self.spaces.get(name)
    }

    /// Severity of the space that defined `exception`, if that space is
    /// registered. Exceptions without a namespace are unclassified.
    pub fn severity_of(&self, exception: &Exception) -> Option<Severity> {
        exception
            .namespace()
            .and_then(|ns| self.spaces.get(ns))
            .map(ExceptionSpace::severity)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.spaces.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

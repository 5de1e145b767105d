//! # JSON Schema Arguments
//!
//! Validates raw arguments against a JSON Schema (Draft 2020-12) before
//! deserializing them into a typed value.
//!
//! The schema is compiled once, when the check is defined. Every call then
//! reports all violations at once, one per line, each prefixed with the
//! JSON Pointer of the offending field.

use std::fmt;
use std::marker::PhantomData;

use jsonschema::{Retrieve, Uri, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::args::ArgsSchema;
use crate::error::SchemaBuildError;

/// Refuses every external `$ref`. Argument schemas must be self-contained,
/// so compiling one never reaches the network or the filesystem.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference '{}' is not allowed in argument schemas", uri.as_str()).into())
    }
}

/// One diagnostic line: the JSON Pointer of the offending field, or
/// `(root)` for the document itself, followed by the validator message.
fn diagnostic_line(instance_path: &str, message: &str) -> String {
    if instance_path.is_empty() {
        format!("(root): {message}")
    } else {
        format!("{instance_path}: {message}")
    }
}

/// A compiled JSON Schema that yields `T` on success.
pub struct JsonSchemaArgs<T> {
    schema: Value,
    validator: Validator,
    _t: PhantomData<fn() -> T>,
}

impl<T> JsonSchemaArgs<T> {
    /// Compile `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError::InvalidSchema`] if the schema itself is
    /// not a valid Draft 2020-12 document, or if it references an external
    /// document through `$ref`.
    pub fn new(schema: Value) -> Result<Self, SchemaBuildError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.with_retriever(OfflineRetriever);
        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaBuildError::InvalidSchema {
                reason: e.to_string(),
            })?;
        Ok(Self {
            schema,
            validator,
            _t: PhantomData,
        })
    }

    /// The source schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// One line per violation of `input`, in the validator's reporting
    /// order. Empty when `input` conforms.
    pub fn diagnostics(&self, input: &Value) -> Vec<String> {
        self.validator
            .iter_errors(input)
            .map(|e| diagnostic_line(&e.instance_path.to_string(), &e.to_string()))
            .collect()
    }
}

impl<T> fmt::Debug for JsonSchemaArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaArgs")
            .field("schema", &self.schema)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> ArgsSchema for JsonSchemaArgs<T> {
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, String> {
        let lines = self.diagnostics(input);
        if !lines.is_empty() {
            return Err(lines.join("\n"));
        }
        // The schema may be looser than `T`; deserialization has the last word.
        T::deserialize(input).map_err(|e| e.to_string())
    }
}

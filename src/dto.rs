//! Loading and pretty-printing of report DTO documents.
//!
//! The DTO is treated as an opaque JSON tree: no schema is imposed and the
//! renderer only ever consumes its pretty-printed text. Keeping the value as a
//! plain [`serde_json::Value`] means any valid JSON document is accepted.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::RenderError;

/// A report DTO together with the display name of its source file.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDto {
    name: String,
    value: Value,
}

impl ReportDto {
    /// Creates a DTO from an already parsed JSON value.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Reads and parses the JSON document at `path`.
    ///
    /// Read and parse failures are reported separately so the CLI can show
    /// which stage rejected the file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path).map_err(|source| RenderError::ReadDto {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_str(&text).map_err(|source| RenderError::ParseDto {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!("loaded DTO {} ({} bytes of JSON text)", name, text.len());
        Ok(Self { name, value })
    }

    /// Returns the display name of the source file (its final path component).
    pub fn file_name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Pretty-prints the JSON with two-space indentation and returns the
    /// individual lines.
    ///
    /// Object keys keep the order they have in the source document, and
    /// values that pretty-print to very long lines are not wrapped.
    pub fn pretty_lines(&self) -> Vec<String> {
        let pretty =
            serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string());
        pretty.lines().map(str::to_owned).collect()
    }
}

//! Error type shared by the DTO loader and the renderer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while turning a DTO file into a PDF on disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The DTO file could not be read from disk.
    #[error("failed to read DTO file {path}")]
    ReadDto {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The DTO file was read but is not valid JSON.
    #[error("DTO file {path} is not valid JSON")]
    ParseDto {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parent directory of the output path could not be created.
    #[error("failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered bytes could not be written to the output path.
    #[error("failed to write PDF to {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PDF writer rejected the document.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

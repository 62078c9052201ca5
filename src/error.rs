//! Error types for cvforge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cvforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing, templating or generating.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred while parsing a DOCX file.
    #[error("Failed to parse DOCX file: {0}")]
    DocxParse(String),

    /// Error occurred while writing a DOCX file.
    #[error("Failed to write DOCX file: {0}")]
    DocxWrite(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Style mapping could not be serialized or deserialized.
    #[error("Style mapping error: {0}")]
    StyleMap(#[from] serde_json::Error),

    /// Style mapping file is absent; the analyze step has to run first.
    #[error("Style mapping not found at {0:?}; run the analyze step first")]
    StyleMapMissing(PathBuf),

    /// The skills table style was never mapped, so the template cannot be built.
    #[error("Skills table style is not present in the style mapping")]
    SkillsStyleUnmapped,

    /// The document is too short or otherwise not shaped like a resume.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

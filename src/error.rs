//! Unified error types for sbom-forge.
//!
//! Per-file parse failures are deliberately *not* represented here: the
//! aggregator tolerates them by skipping the offending file (see
//! [`crate::parsers::ParseError`]). This module covers the fatal tier.

use thiserror::Error;

/// Main error type for sbom-forge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomForgeError {
    /// The requested output format is not one of the supported values.
    #[error("unknown SBOM format: {0}")]
    UnknownFormat(String),

    /// A document model failed to serialize.
    #[error("failed to serialize {format} document: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },
}

impl SbomForgeError {
    /// Create a serialization error with format context.
    pub fn serialize(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            format,
            message: err.to_string(),
        }
    }
}

/// Convenient Result type for sbom-forge operations.
pub type Result<T> = std::result::Result<T, SbomForgeError>;

//! The parsing contract shared by all ecosystem parsers.

use crate::model::{Dependency, Ecosystem};
use thiserror::Error;

/// Errors a manifest parser can surface.
///
/// The aggregator treats these as tolerated: the offending file is skipped
/// and contributes zero dependencies to the final list.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("invalid manifest structure: {0}")]
    InvalidStructure(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Contract implemented by every ecosystem parser.
///
/// Adding a new ecosystem means implementing this trait and appending the
/// parser to the ordered list in [`crate::parsers::parsers`]; list position
/// is the tie-break when file patterns could overlap.
pub trait ManifestParser {
    /// Extract dependencies from raw manifest text.
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError>;

    /// Filenames this parser handles, matched exactly or as a path suffix.
    fn file_patterns(&self) -> &'static [&'static str];

    /// Ecosystem tag stamped on every produced dependency.
    fn ecosystem(&self) -> Ecosystem;
}

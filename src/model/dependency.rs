//! The canonical dependency record shared by all ecosystem parsers.

use serde::{Deserialize, Serialize};

/// Package ecosystem a dependency was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Go,
    Npm,
    Python,
}

impl Ecosystem {
    /// Stable ecosystem tag used in logs and statistics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Npm => "npm",
            Self::Python => "python",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single software dependency extracted from one manifest file.
///
/// Immutable once constructed; every instance comes from exactly one parser
/// run over exactly one input file. The aggregator concatenates these lists
/// without synthesizing records of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name as declared in the manifest (never empty).
    pub name: String,
    /// Version string; may be empty for unpinned Python requirements.
    pub version: String,
    /// Declared license identifier, when the manifest carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Canonical package URL derived from name + version.
    pub purl: String,
    /// Ecosystem tag stamped by the producing parser.
    #[serde(rename = "type")]
    pub ecosystem: Ecosystem,
    /// True when declared directly by the first-party manifest.
    pub direct: bool,
}

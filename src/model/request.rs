//! Request/response types for one generation pass.

use super::Dependency;
use crate::error::SbomForgeError;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SbomFormat {
    /// CycloneDX 1.4, JSON encoding.
    #[serde(rename = "cyclonedx-json")]
    CycloneDxJson,
    /// CycloneDX 1.4, XML encoding.
    #[serde(rename = "cyclonedx-xml")]
    CycloneDxXml,
    /// SPDX 2.3, JSON encoding.
    #[serde(rename = "spdx-json")]
    SpdxJson,
}

impl SbomFormat {
    /// Canonical format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CycloneDxJson => "cyclonedx-json",
            Self::CycloneDxXml => "cyclonedx-xml",
            Self::SpdxJson => "spdx-json",
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SbomFormat {
    type Err = SbomForgeError;

    /// Exact, case-sensitive match over the canonical names plus the
    /// `cyclonedx` and `spdx` shorthands. Anything else is fatal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyclonedx-json" | "cyclonedx" => Ok(Self::CycloneDxJson),
            "cyclonedx-xml" => Ok(Self::CycloneDxXml),
            "spdx-json" | "spdx" => Ok(Self::SpdxJson),
            other => Err(SbomForgeError::UnknownFormat(other.to_string())),
        }
    }
}

/// Input to one SBOM generation pass.
///
/// `files` maps filenames to raw manifest text and is iterated in insertion
/// order, so byte-identical input assembled in the same order yields the
/// same dependency order.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub org_name: String,
    pub repo_name: String,
    /// filename -> raw manifest content.
    pub files: IndexMap<String, String>,
    pub format: SbomFormat,
    pub commit_sha: String,
    pub branch_name: Option<String>,
}

impl GenerationRequest {
    /// `org/repo`, or just `repo` when no organization is set.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.org_name.is_empty() {
            self.repo_name.clone()
        } else {
            format!("{}/{}", self.org_name, self.repo_name)
        }
    }
}

/// Aggregate statistics over the final dependency list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomStats {
    pub total_dependencies: usize,
    pub direct_dependencies: usize,
    pub with_license: usize,
    pub without_license: usize,
    /// Count of distinct ecosystem tags across all dependencies.
    pub ecosystems: usize,
}

/// Result of one generation pass.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSbom {
    pub format: SbomFormat,
    /// Rendered document text (UTF-8; XML variants start with a declaration).
    pub content: String,
    pub dependencies: Vec<Dependency>,
    pub stats: SbomStats,
    pub generated_at: DateTime<Utc>,
    pub tool_name: String,
    pub tool_version: String,
}

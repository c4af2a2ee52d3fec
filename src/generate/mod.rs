//! SBOM generation: aggregation, statistics, and format dispatch.
//!
//! One [`Generator::generate`] call is one complete, synchronous pass:
//! every supplied file is dispatched through the parser registry, the
//! surviving dependency lists are concatenated, statistics are computed,
//! and the requested document format is rendered.

mod cyclonedx;
mod spdx;

use crate::config::ToolMetadata;
use crate::error::Result;
use crate::model::{Dependency, GeneratedSbom, GenerationRequest, SbomFormat, SbomStats};
use crate::parsers::parser_for_file;
use chrono::Utc;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Generates SBOM documents from dependency-manifest contents.
///
/// Tool metadata is fixed at construction, so one generator can serve any
/// number of independent generation calls.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    tool: ToolMetadata,
}

impl Generator {
    /// Create a generator with the default tool metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom tool metadata.
    #[must_use]
    pub fn with_tool(tool: ToolMetadata) -> Self {
        Self { tool }
    }

    /// The tool metadata embedded in generated documents.
    #[must_use]
    pub fn tool(&self) -> &ToolMetadata {
        &self.tool
    }

    /// Run one complete generation pass.
    ///
    /// Files without a registered parser and files whose content fails to
    /// parse are skipped; they contribute zero dependencies and never abort
    /// the pass. An empty dependency list is valid and produces a document
    /// containing only the root/metadata entries.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedSbom> {
        let dependencies = collect_dependencies(&request.files);
        let stats = calculate_stats(&dependencies);

        let content = match request.format {
            SbomFormat::CycloneDxJson => {
                cyclonedx::render_json(request, &dependencies, &self.tool)?
            }
            SbomFormat::CycloneDxXml => {
                cyclonedx::render_xml(request, &dependencies, &self.tool)?
            }
            SbomFormat::SpdxJson => spdx::render_json(request, &dependencies, &self.tool)?,
        };

        Ok(GeneratedSbom {
            format: request.format,
            content,
            dependencies,
            stats,
            generated_at: Utc::now(),
            tool_name: self.tool.name.clone(),
            tool_version: self.tool.version.clone(),
        })
    }

    /// Convenience wrapper generating from a single manifest file.
    pub fn generate_from_single_file(
        &self,
        filename: &str,
        content: &str,
        format: SbomFormat,
        org_name: &str,
        repo_name: &str,
    ) -> Result<GeneratedSbom> {
        let mut files = IndexMap::new();
        files.insert(filename.to_string(), content.to_string());
        self.generate(&GenerationRequest {
            org_name: org_name.to_string(),
            repo_name: repo_name.to_string(),
            files,
            format,
            commit_sha: String::new(),
            branch_name: None,
        })
    }
}

/// Dispatch every file to its parser and concatenate the results.
///
/// Unrecognized or malformed files contribute nothing; no dependency is
/// ever synthesized here.
pub fn collect_dependencies(files: &IndexMap<String, String>) -> Vec<Dependency> {
    let mut all = Vec::new();

    for (filename, content) in files {
        let Some(parser) = parser_for_file(filename) else {
            tracing::debug!(file = %filename, "no parser registered, skipping");
            continue;
        };
        match parser.parse(content) {
            Ok(mut deps) => {
                tracing::debug!(file = %filename, count = deps.len(), "parsed manifest");
                all.append(&mut deps);
            }
            Err(err) => {
                tracing::warn!(file = %filename, error = %err, "failed to parse manifest, skipping");
            }
        }
    }

    all
}

/// Compute aggregate statistics over the final dependency list.
#[must_use]
pub fn calculate_stats(deps: &[Dependency]) -> SbomStats {
    let mut stats = SbomStats {
        total_dependencies: deps.len(),
        ..SbomStats::default()
    };

    let mut ecosystems = HashSet::new();
    for dep in deps {
        if dep.direct {
            stats.direct_dependencies += 1;
        }
        if dep.license.is_some() {
            stats.with_license += 1;
        } else {
            stats.without_license += 1;
        }
        ecosystems.insert(dep.ecosystem);
    }
    stats.ecosystems = ecosystems.len();

    stats
}

//! Generate command handler.
//!
//! Scans a local directory for dependency manifests and writes an SBOM in
//! the requested format.

use super::{write_output, OutputTarget};
use crate::generate::Generator;
use crate::model::{GenerationRequest, SbomFormat};
use crate::scan::scan_local_directory;
use anyhow::{bail, Result};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Resolved configuration for one `generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory to scan for dependency manifests.
    pub path: PathBuf,
    /// Organization name; defaults to `local` when not given.
    pub org: Option<String>,
    /// Repository name; defaults to the scanned directory's basename.
    pub repo: Option<String>,
    /// Requested output format, still unparsed.
    pub format: String,
    /// Output file; stdout when not given.
    pub output: Option<PathBuf>,
    /// Commit SHA recorded as the subject version.
    pub commit: String,
    /// Suppress the statistics report.
    pub quiet: bool,
}

/// Run the generate command.
///
/// An unrecognized format is fatal and checked before any filesystem work.
pub fn run_generate(config: GenerateConfig) -> Result<i32> {
    let format: SbomFormat = config.format.parse()?;

    let files = scan_local_directory(&config.path)?;
    if files.is_empty() {
        bail!(
            "no dependency manifests found in {:?} (looked for go.mod, package.json, requirements.txt, ...)",
            config.path
        );
    }
    if !config.quiet {
        tracing::info!("found {} dependency file(s)", files.len());
    }

    let request = GenerationRequest {
        org_name: config.org.unwrap_or_else(|| "local".to_string()),
        repo_name: config
            .repo
            .unwrap_or_else(|| directory_basename(&config.path)),
        files,
        format,
        commit_sha: config.commit,
        branch_name: None,
    };

    let sbom = Generator::new().generate(&request)?;

    let target = OutputTarget::from_option(config.output);
    write_output(&sbom.content, &target, config.quiet)?;

    if !config.quiet {
        report_stats(&sbom.stats, &request.files);
    }

    Ok(0)
}

fn directory_basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "repository".to_string(), |n| n.to_string_lossy().into_owned())
}

/// Human-readable run summary, printed to stderr so stdout stays a clean
/// document stream.
fn report_stats(stats: &crate::model::SbomStats, files: &IndexMap<String, String>) {
    eprintln!("SBOM generated successfully:");
    eprintln!("  Files scanned:       {}", files.len());
    eprintln!("  Total dependencies:  {}", stats.total_dependencies);
    eprintln!("  Direct dependencies: {}", stats.direct_dependencies);
    eprintln!("  With license info:   {}", stats.with_license);
    eprintln!("  Ecosystems:          {}", stats.ecosystems);
}

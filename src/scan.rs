//! Local directory scanning for dependency manifests.
//!
//! Only the top level of the target directory is inspected, against a fixed
//! list of well-known manifest filenames. Files that exist but have no
//! registered parser (lockfiles, other ecosystems) are still collected; the
//! aggregator skips them later.

use crate::error::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Well-known dependency manifest filenames probed during a scan.
pub const DEPENDENCY_FILES: &[&str] = &[
    "go.mod",
    "go.sum",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "requirements.txt",
    "requirements-dev.txt",
    "requirements-test.txt",
    "Pipfile",
    "Pipfile.lock",
    "Cargo.toml",
    "Cargo.lock",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    "Gemfile.lock",
    "composer.json",
];

/// Collect the contents of all well-known manifests directly under `dir`.
///
/// Absent and unreadable entries (permissions, non-UTF-8 content) are both
/// skipped; one broken file never blocks the rest of the scan. The returned
/// map preserves the probe order of [`DEPENDENCY_FILES`].
pub fn scan_local_directory(dir: &Path) -> Result<IndexMap<String, String>> {
    let mut files = IndexMap::new();

    for name in DEPENDENCY_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(file = %name, bytes = content.len(), "collected manifest");
                files.insert((*name).to_string(), content);
            }
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "failed to read manifest, skipping");
            }
        }
    }

    Ok(files)
}

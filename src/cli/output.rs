//! Output routing for generated documents.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Target for output, either stdout or a file.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout.
    Stdout,
    /// Write to a file.
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }
}

/// Write the document to the target (stdout or file).
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output to {path:?}"))?;
            if !quiet {
                tracing::info!("SBOM written to {:?}", path);
            }
            Ok(())
        }
    }
}

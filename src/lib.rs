//! **SBOM generation from dependency manifests.**
//!
//! `sbom-forge` reads the dependency manifests a repository already carries
//! (`go.mod`, `package.json`, `requirements.txt`) and produces a Software
//! Bill of Materials describing them, in **CycloneDX 1.4** (JSON or XML) or
//! **SPDX 2.3** (JSON).
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: One [`ManifestParser`](parsers::ManifestParser) per
//!   ecosystem, dispatched by filename through a fixed-order registry.
//!   Parsers extract name, version, directness, and a package URL; they never
//!   fetch anything over the network.
//! - **[`generate`]**: The [`Generator`] aggregates parsed dependencies
//!   across files, computes [`SbomStats`](model::SbomStats), and renders the
//!   requested document format.
//! - **[`model`]**: The [`Dependency`](model::Dependency) record and the
//!   [`GenerationRequest`](model::GenerationRequest)/[`GeneratedSbom`](model::GeneratedSbom)
//!   pair framing one generation pass.
//! - **[`scan`]**: Collects well-known manifest files from a local directory.
//!
//! Per-file failures are tolerated: a manifest that cannot be parsed is
//! skipped with a warning and the remaining files still contribute to the
//! document.
//!
//! ## Getting Started
//!
//! ```no_run
//! use sbom_forge::generate::Generator;
//! use sbom_forge::model::{GenerationRequest, SbomFormat};
//! use sbom_forge::scan::scan_local_directory;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let files = scan_local_directory(Path::new("."))?;
//!     let sbom = Generator::new().generate(&GenerationRequest {
//!         org_name: "acme".to_string(),
//!         repo_name: "app".to_string(),
//!         files,
//!         format: SbomFormat::CycloneDxJson,
//!         commit_sha: String::new(),
//!         branch_name: None,
//!     })?;
//!
//!     println!("{}", sbom.content);
//!     eprintln!("{} dependencies", sbom.stats.total_dependencies);
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod parsers;
pub mod scan;

pub use config::ToolMetadata;
pub use error::{Result, SbomForgeError};
pub use generate::Generator;
pub use model::{Dependency, Ecosystem, GeneratedSbom, GenerationRequest, SbomFormat, SbomStats};
pub use parsers::{parser_for_file, ManifestParser, ParseError};

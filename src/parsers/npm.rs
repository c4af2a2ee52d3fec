//! npm manifest (`package.json`) parser.

use super::traits::{ManifestParser, ParseError};
use crate::model::{Dependency, Ecosystem};
use indexmap::IndexMap;
use serde::Deserialize;

/// The subset of package.json this parser reads.
///
/// `IndexMap` keeps manifest declaration order, so repeated runs over the
/// same bytes produce the same dependency order.
#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: IndexMap<String, String>,
}

/// Parses `package.json` files for npm dependencies.
///
/// Entries from both `dependencies` and `devDependencies` are modeled as
/// direct; peer and optional dependencies are not modeled.
pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let manifest: PackageJson = serde_json::from_str(content)?;

        let mut deps = Vec::new();
        for (name, declared) in manifest
            .dependencies
            .iter()
            .chain(manifest.dev_dependencies.iter())
        {
            let version = clean_npm_version(declared);
            deps.push(Dependency {
                purl: build_npm_purl(name, &version),
                name: name.clone(),
                version,
                license: None,
                ecosystem: Ecosystem::Npm,
                direct: true,
            });
        }

        Ok(deps)
    }

    fn file_patterns(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }
}

/// Strip range operators and collapse `.x` wildcards to `.0`.
///
/// A deliberate approximation of the declared range, not semver resolution:
/// `^4.18.2` becomes `4.18.2`, `1.x.x` becomes `1.0.0`.
#[must_use]
pub fn clean_npm_version(version: &str) -> String {
    let mut version = version.trim();
    for prefix in ["^", "~", ">=", "<=", ">", "<", "="] {
        version = version.strip_prefix(prefix).unwrap_or(version);
    }
    version.replace(".x", ".0")
}

/// `pkg:npm/<name>@<version>`; scoped names keep their `@scope/` prefix.
#[must_use]
pub fn build_npm_purl(name: &str, version: &str) -> String {
    format!("pkg:npm/{name}@{version}")
}

//! Ecosystem manifest parsers and the filename registry.
//!
//! Dispatch is a small, closed, ordered set of parsers behind one shared
//! contract: [`parser_for_file`] checks the fixed priority order (Go, npm,
//! Python) and returns the first parser whose declared file patterns match.

mod gomod;
mod npm;
mod requirements;
mod traits;

pub use gomod::{build_go_purl, GoModParser};
pub use npm::{build_npm_purl, clean_npm_version, PackageJsonParser};
pub use requirements::{build_pypi_purl, RequirementsTxtParser};
pub use traits::{ManifestParser, ParseError};

/// All registered parsers in dispatch priority order.
#[must_use]
pub fn parsers() -> Vec<Box<dyn ManifestParser>> {
    vec![
        Box::new(GoModParser),
        Box::new(PackageJsonParser),
        Box::new(RequirementsTxtParser),
    ]
}

/// Find the parser responsible for `filename`, if any is registered.
#[must_use]
pub fn parser_for_file(filename: &str) -> Option<Box<dyn ManifestParser>> {
    parsers().into_iter().find(|parser| {
        parser
            .file_patterns()
            .iter()
            .any(|pattern| match_pattern(filename, pattern))
    })
}

/// True if `filename` equals `pattern` or ends with `/pattern`.
///
/// Suffix matching lets nested paths like `a/b/go.mod` match `go.mod`
/// without treating `go.mod.bak` as a hit.
#[must_use]
pub fn match_pattern(filename: &str, pattern: &str) -> bool {
    filename == pattern
        || filename
            .strip_suffix(pattern)
            .is_some_and(|head| head.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ecosystem;

    #[test]
    fn match_pattern_exact_and_suffix() {
        assert!(match_pattern("go.mod", "go.mod"));
        assert!(match_pattern("a/b/go.mod", "go.mod"));
        assert!(!match_pattern("go.mod.bak", "go.mod"));
        assert!(!match_pattern("ago.mod", "go.mod"));
        assert!(!match_pattern("", "go.mod"));
    }

    #[test]
    fn registry_dispatches_known_manifests() {
        let cases = [
            ("go.mod", Ecosystem::Go),
            ("services/api/go.mod", Ecosystem::Go),
            ("package.json", Ecosystem::Npm),
            ("frontend/package.json", Ecosystem::Npm),
            ("requirements.txt", Ecosystem::Python),
            ("requirements-dev.txt", Ecosystem::Python),
            ("requirements-test.txt", Ecosystem::Python),
        ];
        for (filename, expected) in cases {
            let parser = parser_for_file(filename)
                .unwrap_or_else(|| panic!("no parser for {filename}"));
            assert_eq!(parser.ecosystem(), expected, "for {filename}");
        }
    }

    #[test]
    fn registry_returns_none_for_unknown_files() {
        assert!(parser_for_file("Cargo.toml").is_none());
        assert!(parser_for_file("pom.xml").is_none());
        assert!(parser_for_file("go.sum").is_none());
        assert!(parser_for_file("README.md").is_none());
    }

    #[test]
    fn dispatch_order_is_go_npm_python() {
        let tags: Vec<_> = parsers().iter().map(|p| p.ecosystem()).collect();
        assert_eq!(tags, vec![Ecosystem::Go, Ecosystem::Npm, Ecosystem::Python]);
    }
}

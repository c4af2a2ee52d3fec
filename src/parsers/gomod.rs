//! Go module (`go.mod`) parser.

use super::traits::{ManifestParser, ParseError};
use crate::model::{Dependency, Ecosystem};
use regex::Regex;
use std::sync::LazyLock;

/// `<module-path> <vX.Y[.Z][-prerelease]>` on a require line.
static REQUIRE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+(v[\d.]+(?:-[\w.]+)?)").expect("static regex"));

static MODULE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^module\s+\S+").expect("static regex"));

static INDIRECT_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\s*indirect").expect("static regex"));

/// Scanner state for the line-oriented go.mod grammar.
///
/// `Preamble` lasts until the `module` declaration has been consumed,
/// `Body` covers ordinary top-level lines, and `RequireBlock` is active
/// between `require (` and the closing `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Preamble,
    Body,
    RequireBlock,
}

/// Parses `go.mod` files for Go module dependencies.
pub struct GoModParser;

impl ManifestParser for GoModParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let mut deps = Vec::new();
        let mut state = ScanState::Preamble;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            match state {
                ScanState::Preamble | ScanState::Body => {
                    if MODULE_DECL.is_match(trimmed) {
                        state = ScanState::Body;
                        continue;
                    }
                    if trimmed.starts_with("require (") || trimmed == "require(" {
                        state = ScanState::RequireBlock;
                        continue;
                    }
                    // Single-line `require <path> <version>` form.
                    if let Some(rest) = trimmed.strip_prefix("require ") {
                        if !trimmed.contains('(') {
                            if let Some(dep) = parse_require_line(rest, line) {
                                deps.push(dep);
                            }
                        }
                    }
                }
                ScanState::RequireBlock => {
                    if trimmed == ")" {
                        state = ScanState::Body;
                        continue;
                    }
                    if let Some(dep) = parse_require_line(trimmed, line) {
                        deps.push(dep);
                    }
                }
            }
        }

        Ok(deps)
    }

    fn file_patterns(&self) -> &'static [&'static str] {
        &["go.mod"]
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }
}

/// Parse one `<path> <version>` candidate; `raw` is the full line, inspected
/// for the trailing `// indirect` marker.
fn parse_require_line(candidate: &str, raw: &str) -> Option<Dependency> {
    let caps = REQUIRE_LINE.captures(candidate)?;
    let name = caps[1].to_string();
    let version = caps[2].to_string();
    Some(Dependency {
        purl: build_go_purl(&name, &version),
        direct: !INDIRECT_COMMENT.is_match(raw),
        name,
        version,
        license: None,
        ecosystem: Ecosystem::Go,
    })
}

/// `pkg:golang/<path>@<version>` with `/` percent-encoded in the module path.
#[must_use]
pub fn build_go_purl(name: &str, version: &str) -> String {
    format!("pkg:golang/{}@{}", name.replace('/', "%2F"), version)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_MOD: &str = r"module github.com/acme/app

go 1.21

require github.com/pkg/errors v0.9.1

require (
	github.com/gorilla/mux v1.8.0
	golang.org/x/sys v0.15.0 // indirect
)
";

    #[test]
    fn parses_single_line_and_block_requires() {
        let deps = GoModParser.parse(GO_MOD).unwrap();
        assert_eq!(deps.len(), 3);

        assert_eq!(deps[0].name, "github.com/pkg/errors");
        assert_eq!(deps[0].version, "v0.9.1");
        assert!(deps[0].direct);

        assert_eq!(deps[1].name, "github.com/gorilla/mux");
        assert!(deps[1].direct);

        assert_eq!(deps[2].name, "golang.org/x/sys");
        assert!(!deps[2].direct, "trailing // indirect marks transitive");

        assert!(deps.iter().all(|d| d.ecosystem == Ecosystem::Go));
        assert!(deps.iter().all(|d| d.license.is_none()));
    }

    #[test]
    fn purl_percent_encodes_path_separators() {
        let deps = GoModParser.parse(GO_MOD).unwrap();
        assert_eq!(
            deps[0].purl,
            "pkg:golang/github.com%2Fpkg%2Ferrors@v0.9.1"
        );
        assert_eq!(
            build_go_purl("golang.org/x/sys", "v0.15.0"),
            "pkg:golang/golang.org%2Fx%2Fsys@v0.15.0"
        );
    }

    #[test]
    fn skips_comments_blank_lines_and_module_declaration() {
        let content = "// a comment\n\nmodule example.com/x\n\ngo 1.21\n";
        let deps = GoModParser.parse(content).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn accepts_require_block_without_space() {
        let content = "module m\nrequire(\n\texample.com/a v1.0.0\n)\n";
        let deps = GoModParser.parse(content).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "example.com/a");
    }

    #[test]
    fn parses_prerelease_versions() {
        let content = "module m\nrequire example.com/a v1.2.3-beta.1\n";
        let deps = GoModParser.parse(content).unwrap();
        assert_eq!(deps[0].version, "v1.2.3-beta.1");
    }

    #[test]
    fn ignores_lines_without_version_inside_block() {
        let content = "module m\nrequire (\n\tnot-a-dependency\n)\n";
        let deps = GoModParser.parse(content).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn ignores_bare_dependency_lines_outside_require() {
        let content = "module m\nexample.com/a v1.0.0\n";
        let deps = GoModParser.parse(content).unwrap();
        assert!(deps.is_empty());
    }
}

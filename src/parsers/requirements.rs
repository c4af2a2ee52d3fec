//! Python requirements (`requirements*.txt`) parser.

use super::traits::{ManifestParser, ParseError};
use crate::model::{Dependency, Ecosystem};
use regex::Regex;
use std::sync::LazyLock;

/// `name[extras]? operator? version?` at the start of a requirement line.
static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_-]+(?:\[[^\]]+\])?)\s*([=<>!~]+)?\s*([\d.]+(?:\.\*)?)?")
        .expect("static regex")
});

/// Parses Python `requirements.txt`-style files.
///
/// The format is flat, so every requirement is modeled as direct.
pub struct RequirementsTxtParser;

impl ManifestParser for RequirementsTxtParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let mut deps = Vec::new();

        for line in content.lines() {
            let mut trimmed = line.trim();

            // Blank lines, comments, and option lines like `-r base.txt`.
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
                continue;
            }

            // Environment markers are not evaluated; keep the requirement part.
            if let Some((head, _marker)) = trimmed.split_once(';') {
                trimmed = head.trim();
            }

            let Some(caps) = REQUIREMENT_LINE.captures(trimmed) else {
                continue;
            };

            let mut name = caps[1].to_string();
            if let Some(idx) = name.find('[') {
                name.truncate(idx);
            }
            let version = caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            deps.push(Dependency {
                purl: build_pypi_purl(&name, &version),
                name,
                version,
                license: None,
                ecosystem: Ecosystem::Python,
                direct: true,
            });
        }

        Ok(deps)
    }

    fn file_patterns(&self) -> &'static [&'static str] {
        &[
            "requirements.txt",
            "requirements-dev.txt",
            "requirements-test.txt",
        ]
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }
}

/// PEP 503 normalized `pkg:pypi/<name>` PURL: lowercase, underscores to
/// hyphens; the version suffix is appended only when a version is known.
#[must_use]
pub fn build_pypi_purl(name: &str, version: &str) -> String {
    let name = name.to_lowercase().replace('_', "-");
    if version.is_empty() {
        format!("pkg:pypi/{name}")
    } else {
        format!("pkg:pypi/{name}@{version}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIREMENTS: &str = r"# production requirements
Django==4.2.0
flask[async]>=2.0.0
requests

-r base.txt
gunicorn==21.2.0; sys_platform != 'win32'
";

    #[test]
    fn parses_pinned_and_unpinned_requirements() {
        let deps = RequirementsTxtParser.parse(REQUIREMENTS).unwrap();
        assert_eq!(deps.len(), 4);
        assert!(deps.iter().all(|d| d.direct));
        assert!(deps.iter().all(|d| d.ecosystem == Ecosystem::Python));

        assert_eq!(deps[0].name, "Django");
        assert_eq!(deps[0].version, "4.2.0");

        assert_eq!(deps[2].name, "requests");
        assert_eq!(deps[2].version, "");
    }

    #[test]
    fn extras_are_stripped_from_the_name() {
        let deps = RequirementsTxtParser.parse("flask[async]>=2.0.0\n").unwrap();
        assert_eq!(deps[0].name, "flask");
        assert_eq!(deps[0].version, "2.0.0");
    }

    #[test]
    fn environment_markers_are_dropped() {
        let deps = RequirementsTxtParser.parse(REQUIREMENTS).unwrap();
        assert_eq!(deps[3].name, "gunicorn");
        assert_eq!(deps[3].version, "21.2.0");
    }

    #[test]
    fn comments_and_option_lines_are_skipped() {
        let content = "# comment\n\n--index-url https://example.com\n-e .\n";
        let deps = RequirementsTxtParser.parse(content).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn purl_follows_pep_503_normalization() {
        assert_eq!(
            build_pypi_purl("my_package", "1.0.0"),
            "pkg:pypi/my-package@1.0.0"
        );
        assert_eq!(build_pypi_purl("Django", "4.2.0"), "pkg:pypi/django@4.2.0");
        assert_eq!(build_pypi_purl("requests", ""), "pkg:pypi/requests");
    }
}

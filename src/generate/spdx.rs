//! SPDX 2.3 JSON document builder.
//!
//! The document is anchored on a root package describing the scanned
//! repository; every dependency becomes its own package with a synthetic
//! SHA-256 identity checksum, and the relationship graph links the root to
//! its direct dependencies only.

use crate::config::ToolMetadata;
use crate::error::{Result, SbomForgeError};
use crate::model::{Dependency, GenerationRequest};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

const SPDX_VERSION: &str = "SPDX-2.3";
const DATA_LICENSE: &str = "CC0-1.0";
const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
const ROOT_PACKAGE_ID: &str = "SPDXRef-Package-root";
const NOASSERTION: &str = "NOASSERTION";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    document_describes: Vec<String>,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
    license_list_version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version_info: String,
    download_location: String,
    files_analyzed: bool,
    license_concluded: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_declared: Option<String>,
    copyright_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_package_purpose: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    checksums: Vec<Checksum>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: &'static str,
    reference_type: &'static str,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Checksum {
    algorithm: &'static str,
    checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: &'static str,
    related_spdx_element: String,
}

/// Render an SPDX 2.3 JSON document.
pub fn render_json(
    request: &GenerationRequest,
    deps: &[Dependency],
    tool: &ToolMetadata,
) -> Result<String> {
    let document = build_document(request, deps, tool);
    serde_json::to_string_pretty(&document)
        .map_err(|e| SbomForgeError::serialize("SPDX JSON", e))
}

fn build_document(
    request: &GenerationRequest,
    deps: &[Dependency],
    tool: &ToolMetadata,
) -> Document {
    let qualified = request.qualified_name();

    let mut packages = Vec::with_capacity(deps.len() + 1);
    packages.push(root_package(request, &qualified));

    let mut relationships = Vec::with_capacity(deps.len() + 1);
    relationships.push(Relationship {
        spdx_element_id: DOCUMENT_ID.to_string(),
        relationship_type: "DESCRIBES",
        related_spdx_element: ROOT_PACKAGE_ID.to_string(),
    });

    for (i, dep) in deps.iter().enumerate() {
        let spdx_id = format!("SPDXRef-Package-{}", i + 1);

        if dep.direct {
            relationships.push(Relationship {
                spdx_element_id: ROOT_PACKAGE_ID.to_string(),
                relationship_type: "DEPENDS_ON",
                related_spdx_element: spdx_id.clone(),
            });
        }

        // licenseDeclared is only present when a license is actually known;
        // licenseConcluded always carries NOASSERTION as its fallback.
        let license = dep.license.clone();
        packages.push(Package {
            name: dep.name.clone(),
            spdx_id,
            version_info: dep.version.clone(),
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            license_concluded: license
                .clone()
                .unwrap_or_else(|| NOASSERTION.to_string()),
            license_declared: license,
            copyright_text: NOASSERTION.to_string(),
            primary_package_purpose: None,
            external_refs: purl_refs(&dep.purl),
            checksums: vec![Checksum {
                algorithm: "SHA256",
                checksum_value: identity_checksum(&dep.name, &dep.version),
            }],
        });
    }

    Document {
        spdx_version: SPDX_VERSION,
        data_license: DATA_LICENSE,
        spdx_id: DOCUMENT_ID,
        name: format!("SBOM for {qualified}"),
        document_namespace: format!(
            "{}/{}/{}",
            tool.namespace_base,
            qualified.replace('/', "-"),
            Uuid::new_v4()
        ),
        creation_info: CreationInfo {
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            creators: vec![
                format!("Tool: {}-{}", tool.name, tool.version),
                format!("Organization: {}", tool.organization),
            ],
            license_list_version: tool.license_list_version.clone(),
        },
        document_describes: vec![ROOT_PACKAGE_ID.to_string()],
        packages,
        relationships,
    }
}

fn root_package(request: &GenerationRequest, qualified: &str) -> Package {
    Package {
        name: qualified.to_string(),
        spdx_id: ROOT_PACKAGE_ID.to_string(),
        version_info: request.commit_sha.clone(),
        download_location: format!("https://github.com/{qualified}"),
        files_analyzed: false,
        license_concluded: NOASSERTION.to_string(),
        license_declared: None,
        copyright_text: NOASSERTION.to_string(),
        primary_package_purpose: Some("APPLICATION"),
        external_refs: Vec::new(),
        checksums: Vec::new(),
    }
}

fn purl_refs(purl: &str) -> Vec<ExternalRef> {
    if purl.is_empty() {
        return Vec::new();
    }
    vec![ExternalRef {
        reference_category: "PACKAGE-MANAGER",
        reference_type: "purl",
        reference_locator: purl.to_string(),
    }]
}

/// SHA-256 over `name@version`. The upstream artifact is never fetched, so
/// this digest identifies the coordinate, not the package contents.
#[must_use]
pub fn identity_checksum(name: &str, version: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b"@");
    hasher.update(version.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ecosystem, SbomFormat};
    use indexmap::IndexMap;

    fn request() -> GenerationRequest {
        GenerationRequest {
            org_name: "acme".to_string(),
            repo_name: "app".to_string(),
            files: IndexMap::new(),
            format: SbomFormat::SpdxJson,
            commit_sha: "abc123".to_string(),
            branch_name: None,
        }
    }

    fn deps() -> Vec<Dependency> {
        vec![
            Dependency {
                name: "express".to_string(),
                version: "4.18.2".to_string(),
                license: Some("MIT".to_string()),
                purl: "pkg:npm/express@4.18.2".to_string(),
                ecosystem: Ecosystem::Npm,
                direct: true,
            },
            Dependency {
                name: "golang.org/x/sys".to_string(),
                version: "v0.15.0".to_string(),
                license: None,
                purl: "pkg:golang/golang.org%2Fx%2Fsys@v0.15.0".to_string(),
                ecosystem: Ecosystem::Go,
                direct: false,
            },
        ]
    }

    fn render(deps: &[Dependency]) -> serde_json::Value {
        let content = render_json(&request(), deps, &ToolMetadata::default()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn document_header_and_root_package() {
        let doc = render(&deps());

        assert_eq!(doc["spdxVersion"], "SPDX-2.3");
        assert_eq!(doc["dataLicense"], "CC0-1.0");
        assert_eq!(doc["SPDXID"], "SPDXRef-DOCUMENT");
        assert_eq!(doc["name"], "SBOM for acme/app");

        let root = &doc["packages"][0];
        assert_eq!(root["SPDXID"], "SPDXRef-Package-root");
        assert_eq!(root["name"], "acme/app");
        assert_eq!(root["versionInfo"], "abc123");
        assert_eq!(root["downloadLocation"], "https://github.com/acme/app");
        assert_eq!(root["primaryPackagePurpose"], "APPLICATION");
        assert_eq!(root["filesAnalyzed"], false);
    }

    #[test]
    fn one_package_per_dependency_plus_root() {
        let doc = render(&deps());
        let packages = doc["packages"].as_array().unwrap();
        assert_eq!(packages.len(), 3);

        assert_eq!(packages[1]["SPDXID"], "SPDXRef-Package-1");
        assert_eq!(packages[1]["name"], "express");
        assert_eq!(packages[1]["licenseConcluded"], "MIT");
        assert_eq!(packages[1]["licenseDeclared"], "MIT");
        assert_eq!(
            packages[1]["externalRefs"][0]["referenceLocator"],
            "pkg:npm/express@4.18.2"
        );
        assert_eq!(
            packages[1]["externalRefs"][0]["referenceCategory"],
            "PACKAGE-MANAGER"
        );

        assert_eq!(packages[2]["SPDXID"], "SPDXRef-Package-2");
        assert_eq!(packages[2]["licenseConcluded"], "NOASSERTION");
        assert_eq!(packages[2]["downloadLocation"], "NOASSERTION");
    }

    #[test]
    fn license_declared_is_absent_without_a_known_license() {
        let doc = render(&deps());
        let packages = doc["packages"].as_array().unwrap();

        // Root package and the unlicensed dependency carry no declaration.
        assert!(packages[0].get("licenseDeclared").is_none());
        assert!(packages[2].get("licenseDeclared").is_none());
        assert_eq!(packages[1]["licenseDeclared"], "MIT");
    }

    #[test]
    fn document_describes_names_the_root_package() {
        let doc = render(&deps());
        let describes = doc["documentDescribes"].as_array().unwrap();
        assert_eq!(describes.len(), 1);
        assert_eq!(describes[0], "SPDXRef-Package-root");

        // Present even when no dependencies were found.
        let empty = render(&[]);
        assert_eq!(empty["documentDescribes"][0], "SPDXRef-Package-root");
    }

    #[test]
    fn relationships_describe_root_and_depend_on_direct_only() {
        let doc = render(&deps());
        let relationships = doc["relationships"].as_array().unwrap();
        // One DESCRIBES plus one DEPENDS_ON for the single direct dependency.
        assert_eq!(relationships.len(), 2);

        assert_eq!(relationships[0]["spdxElementId"], "SPDXRef-DOCUMENT");
        assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
        assert_eq!(relationships[0]["relatedSpdxElement"], "SPDXRef-Package-root");

        assert_eq!(relationships[1]["spdxElementId"], "SPDXRef-Package-root");
        assert_eq!(relationships[1]["relationshipType"], "DEPENDS_ON");
        assert_eq!(relationships[1]["relatedSpdxElement"], "SPDXRef-Package-1");
    }

    #[test]
    fn identity_checksum_is_sha256_of_coordinate() {
        let doc = render(&deps());
        let value = doc["packages"][1]["checksums"][0]["checksumValue"]
            .as_str()
            .unwrap();
        assert_eq!(value.len(), 64);
        assert_eq!(value, identity_checksum("express", "4.18.2"));
        assert_eq!(doc["packages"][1]["checksums"][0]["algorithm"], "SHA256");

        // Same coordinate, same digest.
        assert_eq!(
            identity_checksum("express", "4.18.2"),
            identity_checksum("express", "4.18.2")
        );
        assert_ne!(
            identity_checksum("express", "4.18.2"),
            identity_checksum("express", "4.18.3")
        );
    }

    #[test]
    fn namespace_embeds_slug_and_uuid() {
        let doc = render(&[]);
        let namespace = doc["documentNamespace"].as_str().unwrap();
        let rest = namespace
            .strip_prefix("https://sbomforge.dev/spdx/acme-app/")
            .expect("namespace prefix");
        assert!(Uuid::parse_str(rest).is_ok());
    }

    #[test]
    fn creators_list_tool_and_organization() {
        let doc = render(&[]);
        let creators = doc["creationInfo"]["creators"].as_array().unwrap();
        assert_eq!(creators.len(), 2);
        assert!(creators[0]
            .as_str()
            .unwrap()
            .starts_with("Tool: sbom-forge-"));
        assert_eq!(creators[1], "Organization: sbom-forge");
        assert_eq!(doc["creationInfo"]["licenseListVersion"], "3.19");
    }

    #[test]
    fn empty_dependency_list_keeps_describes_relationship() {
        let doc = render(&[]);
        assert_eq!(doc["packages"].as_array().unwrap().len(), 1);
        let relationships = doc["relationships"].as_array().unwrap();
        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
    }

    #[test]
    fn root_version_info_is_omitted_without_commit() {
        let mut req = request();
        req.commit_sha.clear();
        let content = render_json(&req, &[], &ToolMetadata::default()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(doc["packages"][0].get("versionInfo").is_none());
    }
}

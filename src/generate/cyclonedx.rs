//! CycloneDX 1.4 document builder and serializers (JSON, XML).
//!
//! The JSON and XML encodings diverge enough (attribute placement, the
//! JSON-only `bomFormat` discriminator, element wrappers) that each gets
//! its own serde model; both are filled from the same canonical dependency
//! list, which is never mutated here.

use crate::config::ToolMetadata;
use crate::error::{Result, SbomForgeError};
use crate::model::{Dependency, GenerationRequest};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

const SPEC_VERSION: &str = "1.4";
const XMLNS: &str = "http://cyclonedx.org/schema/bom/1.4";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// ---------------------------------------------------------------------------
// JSON document model
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom {
    bom_format: &'static str,
    spec_version: &'static str,
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: Subject,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

/// The subject of the BOM: the scanned repository itself.
#[derive(Debug, Serialize)]
struct Subject {
    #[serde(rename = "type")]
    subject_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<LicenseEntry>>,
}

#[derive(Debug, Serialize)]
struct LicenseEntry {
    license: LicenseId,
}

#[derive(Debug, Serialize)]
struct LicenseId {
    id: String,
}

// ---------------------------------------------------------------------------
// XML document model
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct XmlBom {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@serialNumber")]
    serial_number: String,
    #[serde(rename = "@version")]
    spec_version: &'static str,
    version: u32,
    metadata: XmlMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<XmlComponents>,
}

#[derive(Debug, Serialize)]
struct XmlMetadata {
    timestamp: String,
    tools: XmlTools,
    component: XmlSubject,
}

#[derive(Debug, Serialize)]
struct XmlTools {
    tool: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct XmlSubject {
    #[serde(rename = "@type")]
    subject_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version: String,
}

#[derive(Debug, Serialize)]
struct XmlComponents {
    component: Vec<XmlComponent>,
}

#[derive(Debug, Serialize)]
struct XmlComponent {
    #[serde(rename = "@type")]
    component_type: &'static str,
    #[serde(rename = "@bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<XmlLicenses>,
}

#[derive(Debug, Serialize)]
struct XmlLicenses {
    license: Vec<LicenseId>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a CycloneDX 1.4 JSON document.
pub fn render_json(
    request: &GenerationRequest,
    deps: &[Dependency],
    tool: &ToolMetadata,
) -> Result<String> {
    let bom = Bom {
        bom_format: "CycloneDX",
        spec_version: SPEC_VERSION,
        serial_number: serial_number(),
        version: 1,
        metadata: Metadata {
            timestamp: timestamp_now(),
            tools: vec![tool_entry(tool)],
            component: Subject {
                subject_type: "application",
                name: request.qualified_name(),
                version: request.commit_sha.clone(),
            },
        },
        components: json_components(deps),
    };

    serde_json::to_string_pretty(&bom).map_err(|e| SbomForgeError::serialize("CycloneDX JSON", e))
}

/// Render a CycloneDX 1.4 XML document, prefixed with an XML declaration.
pub fn render_xml(
    request: &GenerationRequest,
    deps: &[Dependency],
    tool: &ToolMetadata,
) -> Result<String> {
    let components = xml_components(deps);
    let bom = XmlBom {
        xmlns: XMLNS,
        serial_number: serial_number(),
        spec_version: SPEC_VERSION,
        version: 1,
        metadata: XmlMetadata {
            timestamp: timestamp_now(),
            tools: XmlTools {
                tool: vec![tool_entry(tool)],
            },
            component: XmlSubject {
                subject_type: "application",
                name: request.qualified_name(),
                version: request.commit_sha.clone(),
            },
        },
        components: if components.is_empty() {
            None
        } else {
            Some(XmlComponents {
                component: components,
            })
        },
    };

    let mut xml = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut xml, Some("bom"))
        .map_err(|e| SbomForgeError::serialize("CycloneDX XML", e))?;
    serializer.indent(' ', 2);
    bom.serialize(serializer)
        .map_err(|e| SbomForgeError::serialize("CycloneDX XML", e))?;

    Ok(format!("{XML_DECLARATION}{xml}"))
}

fn tool_entry(tool: &ToolMetadata) -> Tool {
    Tool {
        vendor: tool.vendor.clone(),
        name: tool.name.clone(),
        version: tool.version.clone(),
    }
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serial_number() -> String {
    format!("urn:uuid:{}", Uuid::new_v4())
}

fn json_components(deps: &[Dependency]) -> Vec<Component> {
    deps.iter()
        .enumerate()
        .map(|(i, dep)| Component {
            component_type: "library",
            bom_ref: format!("pkg-{}", i + 1),
            name: dep.name.clone(),
            version: dep.version.clone(),
            purl: dep.purl.clone(),
            licenses: dep.license.as_ref().map(|id| {
                vec![LicenseEntry {
                    license: LicenseId { id: id.clone() },
                }]
            }),
        })
        .collect()
}

fn xml_components(deps: &[Dependency]) -> Vec<XmlComponent> {
    deps.iter()
        .enumerate()
        .map(|(i, dep)| XmlComponent {
            component_type: "library",
            bom_ref: format!("pkg-{}", i + 1),
            name: dep.name.clone(),
            version: dep.version.clone(),
            purl: dep.purl.clone(),
            licenses: dep.license.as_ref().map(|id| XmlLicenses {
                license: vec![LicenseId { id: id.clone() }],
            }),
        })
        .collect()
}

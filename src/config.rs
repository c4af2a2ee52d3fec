//! Tool metadata configuration.
//!
//! These values identify the generator inside the documents it produces:
//! CycloneDX `metadata.tools` and SPDX `creationInfo.creators`. A
//! [`ToolMetadata`] instance is immutable for the lifetime of the
//! [`Generator`](crate::generate::Generator) holding it, which makes
//! concurrent reuse of one generator across independent calls safe.

use serde::{Deserialize, Serialize};

/// Default tool name recorded in generated documents.
pub const DEFAULT_TOOL_NAME: &str = "sbom-forge";
/// Default tool vendor for CycloneDX metadata.
pub const DEFAULT_VENDOR: &str = "sbom-forge";
/// Default organization label for SPDX creators.
pub const DEFAULT_ORGANIZATION: &str = "sbom-forge";
/// Base URL for SPDX document namespaces.
pub const DEFAULT_NAMESPACE_BASE: &str = "https://sbomforge.dev/spdx";
/// SPDX license list version recorded in `creationInfo`.
pub const SPDX_LICENSE_LIST_VERSION: &str = "3.19";

/// Identity of the generating tool, embedded in document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMetadata {
    /// Tool name (CycloneDX tool name, SPDX `Tool:` creator).
    pub name: String,
    /// Tool version string.
    pub version: String,
    /// Vendor recorded in CycloneDX tool metadata.
    pub vendor: String,
    /// Organization label recorded in SPDX creators.
    pub organization: String,
    /// Base URL used to build SPDX document namespaces.
    pub namespace_base: String,
    /// SPDX license list version constant.
    pub license_list_version: String,
}

impl Default for ToolMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            namespace_base: DEFAULT_NAMESPACE_BASE.to_string(),
            license_list_version: SPDX_LICENSE_LIST_VERSION.to_string(),
        }
    }
}

impl ToolMetadata {
    /// Override the tool name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the tool version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the vendor/organization labels together.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        let vendor = vendor.into();
        self.organization.clone_from(&vendor);
        self.vendor = vendor;
        self
    }
}

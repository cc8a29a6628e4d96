//! The listed-license catalog.
//!
//! A snapshot of the canonical SPDX license list ships inside the crate
//! as JSON; [`LicenseCatalog::bundled`] parses it once per process. Tests
//! and embedders that need a different list build their own catalog with
//! [`LicenseCatalog::from_json`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// One entry of the canonical license list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListedLicense {
    #[serde(rename = "licenseId")]
    pub license_id: String,
    pub name: String,
    #[serde(rename = "isOsiApproved")]
    pub osi_approved: bool,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(rename = "licenseListVersion")]
    license_list_version: String,
    licenses: Vec<ListedLicense>,
}

/// An immutable snapshot of the listed-license catalog.
pub struct LicenseCatalog {
    version: String,
    by_id: HashMap<String, ListedLicense>,
}

static BUNDLED: OnceLock<LicenseCatalog> = OnceLock::new();

impl LicenseCatalog {
    /// The catalog packaged with the crate, parsed on first use.
    pub fn bundled() -> &'static LicenseCatalog {
        BUNDLED.get_or_init(|| {
            let catalog = LicenseCatalog::from_json(include_str!("../data/licenses.json"))
                .expect("packaged license list is well-formed");
            tracing::debug!(
                version = %catalog.version,
                licenses = catalog.by_id.len(),
                "license catalog loaded"
            );
            catalog
        })
    }

    /// Parses a catalog from license-list JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let by_id = raw
            .licenses
            .into_iter()
            .map(|l| (l.license_id.clone(), l))
            .collect();
        Ok(LicenseCatalog { version: raw.license_list_version, by_id })
    }

    /// Looks up a license by its canonical identifier.
    pub fn get(&self, license_id: &str) -> Option<ListedLicense> {
        self.by_id.get(license_id).cloned()
    }

    /// The license-list version this catalog was cut from.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

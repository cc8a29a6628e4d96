//! The SPDX package element.

use crate::model::{annotation, Annotation, SpdxElement, SpdxFile};
use crate::store::{GraphStore, Node};
use crate::value::SpdxValue;
use crate::vocab;

/// Read-only view of a package resource.
pub struct SpdxPackage<'s> {
    store: &'s dyn GraphStore,
    node: Node,
    uri: String,
}

impl<'s> SpdxPackage<'s> {
    pub(crate) fn wrap(store: &'s dyn GraphStore, node: Node) -> Self {
        let uri = node.as_ref_str().unwrap_or_default().to_owned();
        SpdxPackage { store, node, uri }
    }

    pub fn name(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::NAME)
    }

    pub fn version_info(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::VERSION_INFO)
    }

    pub fn copyright_text(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::COPYRIGHT_TEXT)
    }

    pub fn download_location(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::DOWNLOAD_LOCATION)
    }

    pub fn homepage(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::HOMEPAGE)
    }

    pub fn package_file_name(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::PACKAGE_FILE_NAME)
    }

    pub fn summary(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::SUMMARY)
    }

    pub fn description(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::DESCRIPTION)
    }

    pub fn source_info(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::SOURCE_INFO)
    }

    pub fn supplier(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::SUPPLIER)
    }

    pub fn originator(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::ORIGINATOR)
    }

    pub fn comment(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::COMMENT)
    }

    /// Whether the files of this package were analyzed. Absent reads as
    /// true.
    pub fn files_analyzed(&self) -> bool {
        super::literal(self.store, &self.node, vocab::prop::FILES_ANALYZED)
            .map_or(true, |v| v != "false")
    }

    /// The stored verification code value. None when the package has not
    /// been finalized or has `filesAnalyzed = false`.
    pub fn verification_code(&self) -> Option<String> {
        let code = self
            .store
            .first_object(&self.node, vocab::prop::VERIFICATION_CODE)?;
        super::literal(self.store, &code, vocab::prop::VERIFICATION_CODE_VALUE)
    }

    /// The package's files, in insertion order.
    pub fn files(&self) -> Vec<SpdxFile<'s>> {
        self.store
            .objects(&self.node, vocab::prop::HAS_FILE)
            .into_iter()
            .map(|node| SpdxFile::wrap(self.store, node))
            .collect()
    }

    pub fn annotations(&self) -> Vec<Annotation<'s>> {
        annotation::of(self.store, &self.node)
    }
}

impl SpdxElement for SpdxPackage<'_> {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl PartialEq for SpdxPackage<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

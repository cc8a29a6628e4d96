//! The SPDX file element.

use crate::error::Error;
use crate::model::{annotation, uri_enum, Annotation, Checksum, SpdxElement};
use crate::store::{GraphStore, Node};
use crate::value::SpdxValue;
use crate::vocab;

uri_enum! {
    /// File content classifications.
    pub enum FileType, infix = "fileType_" {
        Source => "SOURCE",
        Binary => "BINARY",
        Archive => "ARCHIVE",
        Application => "APPLICATION",
        Audio => "AUDIO",
        Image => "IMAGE",
        Text => "TEXT",
        Video => "VIDEO",
        Documentation => "DOCUMENTATION",
        Spdx => "SPDX",
        Other => "OTHER",
    }
}

/// A DOAP project a file originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOf {
    pub name: String,
    pub homepage: Option<String>,
}

/// Read-only view of a file resource.
pub struct SpdxFile<'s> {
    store: &'s dyn GraphStore,
    node: Node,
    uri: String,
}

impl<'s> SpdxFile<'s> {
    pub(crate) fn wrap(store: &'s dyn GraphStore, node: Node) -> Self {
        let uri = node.as_ref_str().unwrap_or_default().to_owned();
        SpdxFile { store, node, uri }
    }

    pub fn file_name(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::FILE_NAME)
    }

    pub fn file_types(&self) -> Result<Vec<FileType>, Error> {
        self.store
            .objects(&self.node, vocab::prop::FILE_TYPE)
            .into_iter()
            .filter_map(|o| o.as_ref_str().map(str::to_owned))
            .map(|uri| FileType::from_uri(&uri))
            .collect()
    }

    pub fn checksums(&self) -> Result<Vec<Checksum>, Error> {
        self.store
            .objects(&self.node, vocab::prop::CHECKSUM)
            .iter()
            .map(|node| Checksum::from_node(self.store, node))
            .collect()
    }

    /// The file's SHA-1 digest, the checksum SPDX requires every file to
    /// carry.
    pub fn sha1(&self) -> Result<String, Error> {
        self.checksums()?
            .into_iter()
            .find(|c| c.algorithm == crate::model::ChecksumAlgorithm::Sha1)
            .map(|c| c.value)
            .ok_or_else(|| Error::MissingProperty {
                subject: self.node.to_string(),
                property: vocab::prop::CHECKSUM.to_owned(),
            })
    }

    pub fn copyright_text(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::COPYRIGHT_TEXT)
    }

    pub fn notice_text(&self) -> SpdxValue {
        super::tri_state(self.store, &self.node, vocab::prop::NOTICE_TEXT)
    }

    pub fn comment(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::COMMENT)
    }

    pub fn contributors(&self) -> Vec<String> {
        self.store
            .objects(&self.node, vocab::prop::FILE_CONTRIBUTOR)
            .into_iter()
            .filter_map(|o| o.as_literal().map(str::to_owned))
            .collect()
    }

    /// The DOAP projects this file is an artifact of.
    pub fn artifact_of(&self) -> Vec<ArtifactOf> {
        self.store
            .objects(&self.node, vocab::prop::ARTIFACT_OF)
            .into_iter()
            .filter_map(|project| {
                let name = super::literal(self.store, &project, vocab::prop::DOAP_NAME)?;
                let homepage = self
                    .store
                    .first_object(&project, vocab::prop::DOAP_HOMEPAGE)
                    .and_then(|o| o.as_ref_str().map(str::to_owned));
                Some(ArtifactOf { name, homepage })
            })
            .collect()
    }

    pub fn annotations(&self) -> Vec<Annotation<'s>> {
        annotation::of(self.store, &self.node)
    }
}

impl SpdxElement for SpdxFile<'_> {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl PartialEq for SpdxFile<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

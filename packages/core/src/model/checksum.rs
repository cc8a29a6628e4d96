//! Checksums: an algorithm/digest pair with structural equality.

use crate::error::Error;
use crate::model::uri_enum;
use crate::store::{GraphStore, Node};
use crate::vocab;

uri_enum! {
    /// Hash algorithms SPDX 2.x admits for file and package checksums.
    pub enum ChecksumAlgorithm, infix = "checksumAlgorithm_" {
        Sha1 => "SHA1",
        Sha256 => "SHA256",
        Md5 => "MD5",
    }
}

/// An algorithm plus its hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, value: impl Into<String>) -> Self {
        Checksum { algorithm, value: value.into() }
    }

    pub fn sha1(value: impl Into<String>) -> Self {
        Checksum::new(ChecksumAlgorithm::Sha1, value)
    }

    pub fn sha256(value: impl Into<String>) -> Self {
        Checksum::new(ChecksumAlgorithm::Sha256, value)
    }

    pub fn md5(value: impl Into<String>) -> Self {
        Checksum::new(ChecksumAlgorithm::Md5, value)
    }

    /// Reads a checksum back from its graph node.
    pub(crate) fn from_node(store: &dyn GraphStore, node: &Node) -> Result<Self, Error> {
        let algorithm_uri = store
            .first_object(node, vocab::prop::CHECKSUM_ALGORITHM)
            .and_then(|o| o.as_ref_str().map(str::to_owned))
            .ok_or_else(|| Error::MissingProperty {
                subject: node.to_string(),
                property: vocab::prop::CHECKSUM_ALGORITHM.to_owned(),
            })?;
        let value = store
            .first_object(node, vocab::prop::CHECKSUM_VALUE)
            .and_then(|o| o.as_literal().map(str::to_owned))
            .ok_or_else(|| Error::MissingProperty {
                subject: node.to_string(),
                property: vocab::prop::CHECKSUM_VALUE.to_owned(),
            })?;
        Ok(Checksum {
            algorithm: ChecksumAlgorithm::from_uri(&algorithm_uri)?,
            value,
        })
    }
}

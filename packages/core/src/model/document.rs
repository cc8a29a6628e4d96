//! The SPDX document element and its creation info.

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::model::{annotation, Annotation, Creator, SpdxElement};
use crate::store::{GraphStore, Node};
use crate::vocab;

/// Read-only view of the document resource.
pub struct SpdxDocument<'s> {
    store: &'s dyn GraphStore,
    node: Node,
    uri: String,
}

impl<'s> SpdxDocument<'s> {
    pub(crate) fn wrap(store: &'s dyn GraphStore, node: Node) -> Self {
        let uri = node.as_ref_str().unwrap_or_default().to_owned();
        SpdxDocument { store, node, uri }
    }

    pub fn name(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::NAME)
    }

    pub fn spec_version(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::SPEC_VERSION)
    }

    /// URI of the document's data license (CC0-1.0 on documents this
    /// crate creates).
    pub fn data_license(&self) -> Option<String> {
        self.store
            .first_object(&self.node, vocab::prop::DATA_LICENSE)
            .and_then(|o| o.as_ref_str().map(str::to_owned))
    }

    pub fn comment(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::COMMENT)
    }

    fn creation_info(&self) -> Option<Node> {
        self.store.first_object(&self.node, vocab::prop::CREATION_INFO)
    }

    /// The creation timestamp, always UTC.
    pub fn creation_date(&self) -> Result<DateTime<Utc>, Error> {
        let info = self.creation_info().ok_or_else(|| Error::MissingProperty {
            subject: self.node.to_string(),
            property: vocab::prop::CREATION_INFO.to_owned(),
        })?;
        let raw = super::literal(self.store, &info, vocab::prop::CREATED).ok_or_else(|| {
            Error::MissingProperty {
                subject: info.to_string(),
                property: vocab::prop::CREATED.to_owned(),
            }
        })?;
        raw.parse::<DateTime<Utc>>()
            .map_err(|_| Error::UnrecognizedIdentifier(raw))
    }

    /// Every creator, parsed from its stored textual form.
    pub fn creators(&self) -> Result<Vec<Creator>, Error> {
        let Some(info) = self.creation_info() else {
            return Ok(Vec::new());
        };
        self.store
            .objects(&info, vocab::prop::CREATOR)
            .into_iter()
            .filter_map(|o| o.as_literal().map(str::to_owned))
            .map(|raw| raw.parse::<Creator>().map_err(Error::from))
            .collect()
    }

    pub fn creation_comment(&self) -> Option<String> {
        let info = self.creation_info()?;
        super::literal(self.store, &info, vocab::prop::COMMENT)
    }

    pub fn license_list_version(&self) -> Option<String> {
        let info = self.creation_info()?;
        super::literal(self.store, &info, vocab::prop::LICENSE_LIST_VERSION)
    }

    pub fn annotations(&self) -> Vec<Annotation<'s>> {
        annotation::of(self.store, &self.node)
    }
}

impl SpdxElement for SpdxDocument<'_> {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl PartialEq for SpdxDocument<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

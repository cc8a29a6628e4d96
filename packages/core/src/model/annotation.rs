//! Annotations: dated review/other remarks attached to any element.

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::model::uri_enum;
use crate::store::{GraphStore, Node};
use crate::vocab;

uri_enum! {
    pub enum AnnotationType, infix = "annotationType_" {
        Review => "REVIEW",
        Other => "OTHER",
    }
}

/// A read-only view of one annotation resource.
pub struct Annotation<'s> {
    store: &'s dyn GraphStore,
    node: Node,
}

/// All annotations attached to `subject`, in insertion order.
pub(crate) fn of<'s>(store: &'s dyn GraphStore, subject: &Node) -> Vec<Annotation<'s>> {
    store
        .objects(subject, vocab::prop::ANNOTATION)
        .into_iter()
        .map(|node| Annotation::wrap(store, node))
        .collect()
}

impl<'s> Annotation<'s> {
    pub(crate) fn wrap(store: &'s dyn GraphStore, node: Node) -> Self {
        Annotation { store, node }
    }

    pub fn annotation_type(&self) -> Result<AnnotationType, Error> {
        let uri = self
            .store
            .first_object(&self.node, vocab::prop::ANNOTATION_TYPE)
            .and_then(|o| o.as_ref_str().map(str::to_owned))
            .ok_or_else(|| Error::MissingProperty {
                subject: self.node.to_string(),
                property: vocab::prop::ANNOTATION_TYPE.to_owned(),
            })?;
        AnnotationType::from_uri(&uri)
    }

    pub fn date(&self) -> Result<DateTime<Utc>, Error> {
        let raw = super::literal(self.store, &self.node, vocab::prop::ANNOTATION_DATE)
            .ok_or_else(|| Error::MissingProperty {
                subject: self.node.to_string(),
                property: vocab::prop::ANNOTATION_DATE.to_owned(),
            })?;
        raw.parse::<DateTime<Utc>>()
            .map_err(|_| Error::UnrecognizedIdentifier(raw))
    }

    pub fn annotator(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::ANNOTATOR)
    }

    pub fn comment(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::COMMENT)
    }
}

//! Relationships between SPDX elements.
//!
//! A relationship hangs off its source element as an anonymous resource
//! carrying the type tag, the related element, and an optional comment.
//! No inverse edge is ever written automatically; `DESCRIBES` and
//! `DESCRIBED_BY` are distinct relationships even when both exist.

use crate::error::Error;
use crate::model::{uri_enum, RelatedElement};
use crate::store::{GraphStore, Node};
use crate::vocab;

uri_enum! {
    /// The SPDX 2.x relationship vocabulary.
    pub enum RelationshipType, infix = "relationshipType_" {
        Describes => "DESCRIBES",
        DescribedBy => "DESCRIBED_BY",
        Contains => "CONTAINS",
        ContainedBy => "CONTAINED_BY",
        Generates => "GENERATES",
        GeneratedFrom => "GENERATED_FROM",
        AncestorOf => "ANCESTOR_OF",
        DescendantOf => "DESCENDANT_OF",
        VariantOf => "VARIANT_OF",
        DistributionArtifact => "DISTRIBUTION_ARTIFACT",
        PatchFor => "PATCH_FOR",
        PatchApplied => "PATCH_APPLIED",
        CopyOf => "COPY_OF",
        FileAdded => "FILE_ADDED",
        FileDeleted => "FILE_DELETED",
        FileModified => "FILE_MODIFIED",
        ExpandedFromArchive => "EXPANDED_FROM_ARCHIVE",
        DynamicLink => "DYNAMIC_LINK",
        StaticLink => "STATIC_LINK",
        DataFile => "DATA_FILE",
        TestcaseOf => "TESTCASE_OF",
        BuildToolOf => "BUILD_TOOL_OF",
        DocumentationOf => "DOCUMENTATION_OF",
        OptionalComponentOf => "OPTIONAL_COMPONENT_OF",
        MetafileOf => "METAFILE_OF",
        PackageOf => "PACKAGE_OF",
        Amends => "AMENDS",
        PrerequisiteFor => "PREREQUISITE_FOR",
        HasPrerequisite => "HAS_PREREQUISITE",
        Other => "OTHER",
    }
}

/// A read-only view of one relationship resource.
pub struct Relationship<'s> {
    store: &'s dyn GraphStore,
    node: Node,
}

impl<'s> Relationship<'s> {
    pub(crate) fn wrap(store: &'s dyn GraphStore, node: Node) -> Self {
        Relationship { store, node }
    }

    pub fn relationship_type(&self) -> Result<RelationshipType, Error> {
        let uri = self
            .store
            .first_object(&self.node, vocab::prop::RELATIONSHIP_TYPE)
            .and_then(|o| o.as_ref_str().map(str::to_owned))
            .ok_or_else(|| Error::MissingProperty {
                subject: self.node.to_string(),
                property: vocab::prop::RELATIONSHIP_TYPE.to_owned(),
            })?;
        RelationshipType::from_uri(&uri)
    }

    pub fn comment(&self) -> Option<String> {
        super::literal(self.store, &self.node, vocab::prop::COMMENT)
    }

    /// The target element, wrapped according to its stored type tag.
    pub fn related_element(&self) -> Result<RelatedElement<'s>, Error> {
        let target = self
            .store
            .first_object(&self.node, vocab::prop::RELATED_ELEMENT)
            .ok_or_else(|| Error::MissingProperty {
                subject: self.node.to_string(),
                property: vocab::prop::RELATED_ELEMENT.to_owned(),
            })?;
        RelatedElement::dispatch(self.store, target)
    }
}

//! The license algebra: sentinel, listed, extracted, and compound values.
//!
//! A [`License`] is an immutable value tree; nothing in it references a
//! store. Encoding into the graph happens when a licensing update is
//! applied, via [`License::to_node`].

use crate::catalog::ListedLicense;
use crate::error::Error;
use crate::store::{GraphStore, Node};
use crate::validate;
use crate::vocab;

/// Connective of a compound license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundOp {
    And,
    Or,
}

/// An SPDX license value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum License {
    /// The NONE sentinel: no license present.
    None,
    /// The NOASSERTION sentinel.
    NoAssertion,
    /// A license from the canonical listed-license catalog.
    Listed(ListedLicense),
    /// License text extracted from the analyzed artifacts, identified by
    /// a `LicenseRef-` token inside a document namespace.
    Extracted {
        license_id: String,
        base_url: String,
        text: String,
        name: Option<String>,
        comment: Option<String>,
    },
    /// A conjunction or disjunction of member licenses.
    Compound {
        op: CompoundOp,
        members: Vec<License>,
    },
}

impl License {
    /// An extracted license, validated at construction.
    pub fn extracted(
        license_id: impl Into<String>,
        base_url: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, Error> {
        let license_id = license_id.into();
        let base_url = base_url.into();
        let text = text.into();
        validate::license_id(&license_id)?;
        validate::base_url(&base_url)?;
        validate::not_blank(&text)?;
        Ok(License::Extracted {
            license_id,
            base_url,
            text,
            name: None,
            comment: None,
        })
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        if let License::Extracted { name, .. } = &mut self {
            *name = Some(value.into());
        }
        self
    }

    pub fn with_comment(mut self, value: impl Into<String>) -> Self {
        if let License::Extracted { comment, .. } = &mut self {
            *comment = Some(value.into());
        }
        self
    }

    pub fn and(members: Vec<License>) -> Self {
        License::Compound { op: CompoundOp::And, members }
    }

    pub fn or(members: Vec<License>) -> Self {
        License::Compound { op: CompoundOp::Or, members }
    }

    /// A human-readable label for the value.
    pub fn pretty_name(&self) -> String {
        match self {
            License::None => "NONE".to_owned(),
            License::NoAssertion => "NOASSERTION".to_owned(),
            License::Listed(listed) => listed.name.clone(),
            License::Extracted { license_id, name, .. } => {
                name.clone().unwrap_or_else(|| license_id.clone())
            }
            License::Compound { op, members } => {
                let joiner = match op {
                    CompoundOp::And => ") AND (",
                    CompoundOp::Or => ") OR (",
                };
                let parts: Vec<String> = members.iter().map(License::pretty_name).collect();
                format!("({})", parts.join(joiner))
            }
        }
    }

    /// Encodes this value into the graph and returns the node a licensing
    /// property should point at. Must run inside a write transaction.
    ///
    /// Sentinels and listed licenses encode as bare resource URIs.
    /// An extracted license is written at `<base_url>#<license_id>`; when
    /// that resource already exists its identifier, text, name, and
    /// comment are cleared first, so re-encoding replaces rather than
    /// accumulates. A compound value always mints a fresh anonymous
    /// aggregate; members are never shared across writes.
    pub fn to_node(&self, store: &dyn GraphStore) -> Result<Node, Error> {
        match self {
            License::None => Ok(Node::resource(vocab::NONE)),
            License::NoAssertion => Ok(Node::resource(vocab::NO_ASSERTION)),
            License::Listed(listed) => Ok(Node::resource(format!(
                "{}{}",
                vocab::LISTED_LICENSE_NS,
                listed.license_id
            ))),
            License::Extracted { license_id, base_url, text, name, comment } => {
                let node = Node::resource(format!("{base_url}#{license_id}"));
                if store.subject_exists(&node) {
                    for property in [
                        vocab::prop::LICENSE_ID,
                        vocab::prop::EXTRACTED_TEXT,
                        vocab::prop::NAME,
                        vocab::prop::COMMENT,
                    ] {
                        store.remove(&node, property, None)?;
                    }
                }
                store.insert(
                    &node,
                    vocab::prop::RDF_TYPE,
                    &Node::resource(vocab::class::EXTRACTED_LICENSE),
                )?;
                store.insert(&node, vocab::prop::LICENSE_ID, &Node::literal(license_id))?;
                store.insert(&node, vocab::prop::EXTRACTED_TEXT, &Node::literal(text))?;
                if let Some(name) = name {
                    store.insert(&node, vocab::prop::NAME, &Node::literal(name))?;
                }
                if let Some(comment) = comment {
                    store.insert(&node, vocab::prop::COMMENT, &Node::literal(comment))?;
                }
                Ok(node)
            }
            License::Compound { op, members } => {
                let set_type = match op {
                    CompoundOp::And => vocab::class::CONJUNCTIVE_LICENSE_SET,
                    CompoundOp::Or => vocab::class::DISJUNCTIVE_LICENSE_SET,
                };
                let node = store.new_blank();
                store.insert(&node, vocab::prop::RDF_TYPE, &Node::resource(set_type))?;
                for member in members {
                    let member_node = member.to_node(store)?;
                    store.insert(&node, vocab::prop::MEMBER, &member_node)?;
                }
                Ok(node)
            }
        }
    }
}

// --- tests -------------------------------------------------------------------

//! Typed, read-only wrappers over graph resources.
//!
//! A wrapper borrows the store and a node; accessors read triples on
//! demand. Nothing here mutates — all writes go through [`crate::write`].

pub mod annotation;
pub mod checksum;
pub mod creator;
pub mod document;
pub mod file;
pub mod package;
pub mod relationship;

pub use annotation::{Annotation, AnnotationType};
pub use checksum::{Checksum, ChecksumAlgorithm};
pub use creator::Creator;
pub use document::SpdxDocument;
pub use file::{ArtifactOf, FileType, SpdxFile};
pub use package::SpdxPackage;
pub use relationship::{Relationship, RelationshipType};

use crate::error::Error;
use crate::store::{GraphStore, Node};
use crate::value::SpdxValue;
use crate::vocab;

/// Anything addressable as `<namespace>#<SPDXRef-id>`.
pub trait SpdxElement {
    /// The element's full URI.
    fn uri(&self) -> &str;

    /// The `SPDXRef-` identifier: the URI fragment after the last `#`.
    fn spdx_id(&self) -> &str {
        let uri = self.uri();
        uri.rsplit_once('#').map_or(uri, |(_, id)| id)
    }
}

/// A relationship target, dispatched on its stored type tag.
pub enum RelatedElement<'s> {
    Document(SpdxDocument<'s>),
    Package(SpdxPackage<'s>),
    File(SpdxFile<'s>),
}

impl<'s> RelatedElement<'s> {
    /// Wraps `node` according to its `rdf:type`. A subject with no
    /// recognized SPDX type tag is an error, not a fourth case.
    pub(crate) fn dispatch(store: &'s dyn GraphStore, node: Node) -> Result<Self, Error> {
        let types = store.objects(&node, vocab::prop::RDF_TYPE);
        for t in &types {
            match t.as_ref_str() {
                Some(vocab::class::DOCUMENT) => {
                    return Ok(RelatedElement::Document(SpdxDocument::wrap(store, node)))
                }
                Some(vocab::class::PACKAGE) => {
                    return Ok(RelatedElement::Package(SpdxPackage::wrap(store, node)))
                }
                Some(vocab::class::FILE) => {
                    return Ok(RelatedElement::File(SpdxFile::wrap(store, node)))
                }
                _ => continue,
            }
        }
        let shown = types
            .first()
            .and_then(|t| t.as_ref_str())
            .unwrap_or("(no type tag)");
        Err(Error::UnrecognizedIdentifier(shown.to_owned()))
    }
}

impl SpdxElement for RelatedElement<'_> {
    fn uri(&self) -> &str {
        match self {
            RelatedElement::Document(d) => d.uri(),
            RelatedElement::Package(p) => p.uri(),
            RelatedElement::File(f) => f.uri(),
        }
    }
}

/// Reads the first literal object of `subject`+`property`.
pub(crate) fn literal(store: &dyn GraphStore, subject: &Node, property: &str) -> Option<String> {
    store
        .first_object(subject, property)
        .and_then(|o| o.as_literal().map(str::to_owned))
}

/// Reads a tri-state property: resource objects are parsed as sentinel
/// URIs, literal objects as text, absence as NOASSERTION.
pub(crate) fn tri_state(store: &dyn GraphStore, subject: &Node, property: &str) -> SpdxValue {
    match store.first_object(subject, property) {
        None => SpdxValue::NoAssertion,
        Some(Node::Literal(text)) => SpdxValue::of(text),
        Some(Node::Resource(uri)) => SpdxValue::parse(&uri),
        Some(Node::Blank(label)) => SpdxValue::of(label),
    }
}

/// Defines a closed enumeration whose values are stored as vocabulary
/// URIs under a family infix, with the shared camelCase transliteration.
macro_rules! uri_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, infix = $infix:literal {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The SCREAMING_SNAKE name of this value.
            pub fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }

            /// The vocabulary URI this value is stored as.
            pub fn uri(self) -> String {
                $crate::vocab::enum_uri(self.token(), $infix)
            }

            /// Decodes a vocabulary URI or bare local name back to the
            /// enumeration value.
            pub fn from_uri(input: &str) -> Result<Self, $crate::error::Error> {
                let token = $crate::vocab::enum_token(input, $infix);
                match token.as_str() {
                    $($token => Ok($name::$variant),)+
                    _ => Err($crate::error::Error::UnrecognizedIdentifier(
                        input.to_owned(),
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

pub(crate) use uri_enum;

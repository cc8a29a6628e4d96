//! The query side: locating elements and walking relationships.
//!
//! Every function opens its own read transaction. Results are plain
//! collections, so they remain safe to consume after the transaction
//! scope ends.

use crate::error::Error;
use crate::model::{
    RelatedElement, Relationship, RelationshipType, SpdxDocument, SpdxElement, SpdxPackage,
};
use crate::store::{GraphStore, Node, Transaction, TxnMode};
use crate::vocab;

/// The store's SPDX document. Errors when the store holds none; when
/// several exist (one store, one document is the intended shape) the
/// first inserted wins.
pub fn document(store: &dyn GraphStore) -> Result<SpdxDocument<'_>, Error> {
    let txn = Transaction::begin(store, TxnMode::Read)?;
    let node = store
        .subjects_with_type(vocab::class::DOCUMENT)
        .into_iter()
        .next()
        .ok_or(Error::MissingDocument)?;
    txn.commit()?;
    Ok(SpdxDocument::wrap(store, node))
}

/// Every package in the store, in insertion order.
pub fn all_packages(store: &dyn GraphStore) -> Result<Vec<SpdxPackage<'_>>, Error> {
    let txn = Transaction::begin(store, TxnMode::Read)?;
    let packages = store
        .subjects_with_type(vocab::class::PACKAGE)
        .into_iter()
        .map(|node| SpdxPackage::wrap(store, node))
        .collect();
    txn.commit()?;
    Ok(packages)
}

/// All relationships whose source is `element`.
pub fn relationships<'s>(
    store: &'s dyn GraphStore,
    element: &dyn SpdxElement,
) -> Result<Vec<Relationship<'s>>, Error> {
    let txn = Transaction::begin(store, TxnMode::Read)?;
    let source = Node::resource(element.uri());
    let found = store
        .objects(&source, vocab::prop::RELATIONSHIP)
        .into_iter()
        .map(|node| Relationship::wrap(store, node))
        .collect();
    txn.commit()?;
    Ok(found)
}

/// All relationships of `element` carrying the given type tag.
pub fn relationships_of_type<'s>(
    store: &'s dyn GraphStore,
    element: &dyn SpdxElement,
    relationship_type: RelationshipType,
) -> Result<Vec<Relationship<'s>>, Error> {
    let all = relationships(store, element)?;
    let mut matching = Vec::new();
    for rel in all {
        if rel.relationship_type()? == relationship_type {
            matching.push(rel);
        }
    }
    Ok(matching)
}

/// Wraps the element at `uri`, if the store knows anything about it.
/// A subject with no properties at all does not exist, and neither does
/// anything that is not a well-formed element URI — both read as `None`
/// rather than an error.
pub fn lookup_by_uri<'s>(
    store: &'s dyn GraphStore,
    uri: &str,
) -> Result<Option<RelatedElement<'s>>, Error> {
    if crate::validate::element_uri(uri).is_err() {
        return Ok(None);
    }
    let txn = Transaction::begin(store, TxnMode::Read)?;
    let node = Node::resource(uri);
    let result = if store.subject_exists(&node) {
        Some(RelatedElement::dispatch(store, node)?)
    } else {
        None
    };
    txn.commit()?;
    Ok(result)
}

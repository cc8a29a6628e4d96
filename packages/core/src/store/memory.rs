//! In-memory reference implementation of [`GraphStore`].
//!
//! Triples live in an insertion-ordered list with set-style dedup on
//! insert. A write transaction snapshots the list on begin and restores
//! it on abort; a read transaction is bookkeeping only.

use std::sync::RwLock;

use super::{GraphStore, Node, StoreError, TxnMode};
use crate::vocab;

#[derive(Default)]
struct Inner {
    triples: Vec<(Node, String, Node)>,
    snapshot: Option<Vec<(Node, String, Node)>>,
    txn: Option<TxnMode>,
    next_blank: u64,
}

/// Insertion-ordered in-memory triple store.
#[derive(Default)]
pub struct MemoryGraph {
    inner: RwLock<Inner>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total triple count. Conformance checks lean on this for
    /// idempotency assertions.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GraphStore for MemoryGraph {
    fn begin(&self, mode: TxnMode) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.txn.is_some() {
            return Err(StoreError::TransactionInProgress);
        }
        if mode == TxnMode::Write {
            inner.snapshot = Some(inner.triples.clone());
        }
        inner.txn = Some(mode);
        Ok(())
    }

    fn commit(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.txn.take().is_none() {
            return Err(StoreError::NoTransaction);
        }
        inner.snapshot = None;
        Ok(())
    }

    fn abort(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        match inner.txn.take() {
            None => Err(StoreError::NoTransaction),
            Some(TxnMode::Read) => Ok(()),
            Some(TxnMode::Write) => {
                let snapshot = inner
                    .snapshot
                    .take()
                    .ok_or_else(|| StoreError::Internal("write transaction lost its snapshot".into()))?;
                inner.triples = snapshot;
                Ok(())
            }
        }
    }

    fn insert(&self, subject: &Node, property: &str, object: &Node) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.txn != Some(TxnMode::Write) {
            return Err(StoreError::ReadOnly);
        }
        let triple = (subject.clone(), property.to_owned(), object.clone());
        if !inner.triples.contains(&triple) {
            inner.triples.push(triple);
        }
        Ok(())
    }

    fn remove(
        &self,
        subject: &Node,
        property: &str,
        object: Option<&Node>,
    ) -> Result<usize, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.txn != Some(TxnMode::Write) {
            return Err(StoreError::ReadOnly);
        }
        let before = inner.triples.len();
        inner.triples.retain(|(s, p, o)| {
            !(s == subject && p == property && object.map_or(true, |want| o == want))
        });
        Ok(before - inner.triples.len())
    }

    fn objects(&self, subject: &Node, property: &str) -> Vec<Node> {
        let inner = self.inner.read().unwrap();
        inner
            .triples
            .iter()
            .filter(|(s, p, _)| s == subject && p == property)
            .map(|(_, _, o)| o.clone())
            .collect()
    }

    fn properties(&self, subject: &Node) -> Vec<(String, Node)> {
        let inner = self.inner.read().unwrap();
        inner
            .triples
            .iter()
            .filter(|(s, _, _)| s == subject)
            .map(|(_, p, o)| (p.clone(), o.clone()))
            .collect()
    }

    fn subjects_with_type(&self, type_uri: &str) -> Vec<Node> {
        let want = Node::resource(type_uri);
        let inner = self.inner.read().unwrap();
        inner
            .triples
            .iter()
            .filter(|(_, p, o)| p == vocab::prop::RDF_TYPE && *o == want)
            .map(|(s, _, _)| s.clone())
            .collect()
    }

    fn subject_exists(&self, subject: &Node) -> bool {
        let inner = self.inner.read().unwrap();
        inner.triples.iter().any(|(s, _, _)| s == subject)
    }

    fn new_blank(&self) -> Node {
        let mut inner = self.inner.write().unwrap();
        inner.next_blank += 1;
        Node::Blank(format!("b{}", inner.next_blank))
    }
}

// --- tests -------------------------------------------------------------------

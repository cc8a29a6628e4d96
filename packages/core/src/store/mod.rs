//! Graph-store abstraction the model layer runs against.
//!
//! The model never manipulates triples freehand: every mutation happens
//! inside a write [`Transaction`], and the guard aborts on drop so a
//! failure partway through a batch leaves the store untouched.

pub mod memory;

use std::fmt;

use thiserror::Error;

pub use memory::MemoryGraph;

/// A graph node: a named resource, an anonymous (blank) resource, or a
/// literal string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Resource(String),
    Blank(String),
    Literal(String),
}

impl Node {
    pub fn resource(uri: impl Into<String>) -> Self {
        Node::Resource(uri.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(text.into())
    }

    /// The URI or blank label; literals have neither.
    pub fn as_ref_str(&self) -> Option<&str> {
        match self {
            Node::Resource(uri) => Some(uri),
            Node::Blank(label) => Some(label),
            Node::Literal(_) => None,
        }
    }

    /// Literal text, if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Resource(uri) => write!(f, "<{uri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
            Node::Literal(text) => write!(f, "{text:?}"),
        }
    }
}

/// Transaction access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnMode {
    Read,
    Write,
}

/// Failures at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a transaction is already in progress")]
    TransactionInProgress,

    #[error("no transaction is in progress")]
    NoTransaction,

    #[error("write attempted outside a write transaction")]
    ReadOnly,

    #[error("storage failure: {0}")]
    Internal(String),
}

/// Triple-level storage with single-writer transactions.
///
/// Mutation requires an open write transaction. Reads are allowed outside
/// any transaction so lazily-consumed query results stay usable after the
/// read scope ends.
pub trait GraphStore {
    fn begin(&self, mode: TxnMode) -> Result<(), StoreError>;
    fn commit(&self) -> Result<(), StoreError>;
    fn abort(&self) -> Result<(), StoreError>;

    /// Inserts a triple. Duplicate triples are ignored.
    fn insert(&self, subject: &Node, property: &str, object: &Node) -> Result<(), StoreError>;

    /// Removes every triple matching `subject`+`property`, and optionally
    /// only those with a specific object. Returns the removed count.
    fn remove(
        &self,
        subject: &Node,
        property: &str,
        object: Option<&Node>,
    ) -> Result<usize, StoreError>;

    /// All objects of `subject`+`property`, in insertion order.
    fn objects(&self, subject: &Node, property: &str) -> Vec<Node>;

    /// Every property/object pair of `subject`, in insertion order.
    fn properties(&self, subject: &Node) -> Vec<(String, Node)>;

    /// All subjects carrying `rdf:type <type_uri>`, in insertion order.
    fn subjects_with_type(&self, type_uri: &str) -> Vec<Node>;

    /// True when the subject appears in at least one triple.
    fn subject_exists(&self, subject: &Node) -> bool;

    /// Mints a fresh blank node, unique within this store.
    fn new_blank(&self) -> Node;

    /// First object of `subject`+`property`, if any.
    fn first_object(&self, subject: &Node, property: &str) -> Option<Node> {
        self.objects(subject, property).into_iter().next()
    }
}

/// RAII transaction scope over a [`GraphStore`].
///
/// Commit is explicit and consumes the guard; dropping an uncommitted
/// guard aborts, so early returns roll the store back.
pub struct Transaction<'a> {
    store: &'a dyn GraphStore,
    open: bool,
}

impl<'a> Transaction<'a> {
    pub fn begin(store: &'a dyn GraphStore, mode: TxnMode) -> Result<Self, StoreError> {
        store.begin(mode)?;
        tracing::debug!(?mode, "transaction opened");
        Ok(Transaction { store, open: true })
    }

    pub fn commit(mut self) -> Result<(), StoreError> {
        self.open = false;
        tracing::debug!("transaction committed");
        self.store.commit()
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.open {
            tracing::debug!("transaction dropped without commit, aborting");
            // Abort failure during unwind has nowhere to go.
            let _ = self.store.abort();
        }
    }
}

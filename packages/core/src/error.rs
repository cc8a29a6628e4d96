//! Crate-level error taxonomy.

use thiserror::Error;

use crate::store::StoreError;
use crate::validate::ValidationError;

/// Everything the model layer can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected by a well-formedness rule at construction time.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An update's target element was missing at apply time.
    #[error("target element does not exist: {0}")]
    TargetNotFound(String),

    /// The requested operation is not legal on its target.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A stored value could not be decoded into its enumeration.
    #[error("unrecognized identifier: {0:?}")]
    UnrecognizedIdentifier(String),

    /// Expected exactly one resource of a type and found none.
    #[error("store contains no SPDX document")]
    MissingDocument,

    /// A required property was absent from a resource.
    #[error("resource {subject} is missing required property {property}")]
    MissingProperty { subject: String, property: String },

    /// The graph store refused the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

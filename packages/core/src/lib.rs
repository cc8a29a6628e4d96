//! Typed SPDX 2.x document model over a transactional triple store.
//!
//! Documents, packages, and files are graph resources addressed as
//! `<namespace>#<SPDXRef-id>`; this crate layers typed wrappers, a
//! license algebra, a query surface, and an atomic mutation engine on
//! top of a pluggable [`store::GraphStore`].
//!
//! The shape of a session: build [`write::Update`] values (validated at
//! construction), apply a batch atomically with [`write::apply`], then
//! read back through [`read`] and the wrapper types in [`model`].
//!
//! ```
//! use spdxmodel::model::Creator;
//! use spdxmodel::store::MemoryGraph;
//! use spdxmodel::{read, write};
//!
//! # fn main() -> Result<(), spdxmodel::Error> {
//! let store = MemoryGraph::new();
//! let creator = Creator::person("Alice", Some("alice@example.com".into()))?;
//! write::apply(&store, &[write::new_document(
//!     "http://example.org/spdx/demo",
//!     "SPDXRef-DOCUMENT",
//!     "Demo Document",
//!     &[creator],
//! )?])?;
//! let doc = read::document(&store)?;
//! assert_eq!(doc.name().as_deref(), Some("Demo Document"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod license;
pub mod model;
pub mod read;
pub mod store;
pub mod validate;
pub mod value;
pub mod vocab;
pub mod write;

pub use error::{Error, Result};
pub use license::{CompoundOp, License};
pub use value::SpdxValue;

//! Shared fixtures for the spdxmodel conformance test suite.
//!
//! Every scenario runs against a fresh [`MemoryGraph`] seeded with one
//! document and, usually, one described package. The helpers here build
//! that baseline so each test file stays focused on the behavior under
//! test.

use spdxmodel::model::{Checksum, Creator};
use spdxmodel::store::MemoryGraph;
use spdxmodel::write;

/// Namespace every fixture document lives under.
pub const NS: &str = "http://example.org/spdx/conformance";

/// Identifier of the fixture document.
pub const DOC_ID: &str = "SPDXRef-DOCUMENT";

/// Identifier of the fixture package.
pub const PKG_ID: &str = "SPDXRef-pkg";

/// Full URI of the fixture document.
pub fn doc_uri() -> String {
    format!("{NS}#{DOC_ID}")
}

/// Full URI of the fixture package.
pub fn pkg_uri() -> String {
    format!("{NS}#{PKG_ID}")
}

/// Full URI of an element with the given identifier in the fixture
/// namespace.
pub fn uri(id: &str) -> String {
    format!("{NS}#{id}")
}

/// The fixture document creator.
pub fn creator() -> Creator {
    Creator::person("Test Author", Some("author@example.com".into()))
        .expect("fixture creator is valid")
}

/// A store holding only the fixture document.
pub fn store_with_document() -> MemoryGraph {
    let store = MemoryGraph::new();
    let update = write::new_document(NS, DOC_ID, "Conformance Document", &[creator()])
        .expect("fixture document builds");
    write::apply(&store, &[update]).expect("fixture document applies");
    store
}

/// A store holding the fixture document plus one described package.
pub fn store_with_package() -> MemoryGraph {
    let store = store_with_document();
    let update = write::document::add_described_package(&doc_uri(), PKG_ID, "Fixture Package")
        .expect("fixture package builds");
    write::apply(&store, &[update]).expect("fixture package applies");
    store
}

/// Adds a file with the given name and SHA-1 digest to the fixture
/// package, under the given identifier.
pub fn add_file(store: &MemoryGraph, id: &str, file_name: &str, sha1: &str) {
    let update = write::package::add_file(
        &pkg_uri(),
        &uri(id),
        file_name,
        vec![Checksum::sha1(sha1)],
    )
    .expect("fixture file builds");
    write::apply(store, &[update]).expect("fixture file applies");
}

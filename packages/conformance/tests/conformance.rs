//! End-to-end conformance tests for the spdxmodel document API.
//!
//! Each test builds a fresh in-memory store through the public API only:
//! construct updates, apply them atomically, read the results back
//! through the typed wrappers.

use chrono::{DateTime, Utc};
use spdxmodel::catalog::LicenseCatalog;
use spdxmodel::model::{
    AnnotationType, Checksum, Creator, FileType, RelatedElement, RelationshipType, SpdxElement,
};
use spdxmodel::store::{GraphStore, MemoryGraph};
use spdxmodel::{read, write, Error, License, SpdxValue};

use spdxmodel_conformance::{
    add_file, creator, doc_uri, pkg_uri, store_with_document, store_with_package, uri, NS,
};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[test]
fn new_document_round_trips_creation_info() {
    let store = store_with_document();
    let doc = read::document(&store).unwrap();
    assert_eq!(doc.spdx_id(), "SPDXRef-DOCUMENT");
    assert_eq!(doc.name().as_deref(), Some("Conformance Document"));
    assert_eq!(doc.spec_version().as_deref(), Some("SPDX-2.1"));
    assert_eq!(
        doc.data_license().as_deref(),
        Some("http://spdx.org/licenses/CC0-1.0")
    );
    assert_eq!(doc.creators().unwrap(), vec![creator()]);
}

#[test]
fn empty_store_has_no_document() {
    let store = MemoryGraph::new();
    assert!(matches!(read::document(&store), Err(Error::MissingDocument)));
}

#[test]
fn document_setters_replace_in_place() {
    let store = store_with_document();
    write::apply(
        &store,
        &[
            write::document::name(&doc_uri(), "Renamed").unwrap(),
            write::document::comment(&doc_uri(), "first comment").unwrap(),
            write::document::spec_version(&doc_uri(), "SPDX-2.2").unwrap(),
            write::document::creation_comment(&doc_uri(), "made by hand").unwrap(),
        ],
    )
    .unwrap();
    let count = store.len();
    write::apply(
        &store,
        &[write::document::comment(&doc_uri(), "second comment").unwrap()],
    )
    .unwrap();

    let doc = read::document(&store).unwrap();
    assert_eq!(doc.name().as_deref(), Some("Renamed"));
    assert_eq!(doc.comment().as_deref(), Some("second comment"));
    assert_eq!(doc.spec_version().as_deref(), Some("SPDX-2.2"));
    assert_eq!(doc.creation_comment().as_deref(), Some("made by hand"));
    // Replacement, not accumulation.
    assert_eq!(store.len(), count);
}

#[test]
fn creation_date_is_utc_and_replaceable() {
    let store = store_with_document();
    let when = "2016-11-22T09:08:07Z".parse::<DateTime<Utc>>().unwrap();
    write::apply(
        &store,
        &[write::document::creation_date(&doc_uri(), when).unwrap()],
    )
    .unwrap();
    assert_eq!(read::document(&store).unwrap().creation_date().unwrap(), when);
}

// ---------------------------------------------------------------------------
// Packages and relationships
// ---------------------------------------------------------------------------

#[test]
fn described_package_emits_both_relationship_directions() {
    let store = store_with_package();
    let doc = read::document(&store).unwrap();

    let describes = read::relationships_of_type(&store, &doc, RelationshipType::Describes).unwrap();
    assert_eq!(describes.len(), 1);
    match describes[0].related_element().unwrap() {
        RelatedElement::Package(pkg) => {
            assert_eq!(pkg.uri(), pkg_uri());
            assert_eq!(pkg.name().as_deref(), Some("Fixture Package"));
        }
        _ => panic!("DESCRIBES target should be a package"),
    }

    let packages = read::all_packages(&store).unwrap();
    assert_eq!(packages.len(), 1);
    let described_by =
        read::relationships_of_type(&store, &packages[0], RelationshipType::DescribedBy).unwrap();
    assert_eq!(described_by.len(), 1);
    match described_by[0].related_element().unwrap() {
        RelatedElement::Document(d) => assert_eq!(d.uri(), doc_uri()),
        _ => panic!("DESCRIBED_BY target should be the document"),
    }
}

#[test]
fn new_package_defaults_download_location_to_noassertion() {
    let store = store_with_package();
    let pkg = &read::all_packages(&store).unwrap()[0];
    assert_eq!(pkg.download_location(), SpdxValue::NoAssertion);
    assert!(pkg.files_analyzed());
    assert!(pkg.verification_code().is_none());
}

#[test]
fn package_field_round_trip() {
    let store = store_with_package();
    write::apply(
        &store,
        &[
            write::package::version(&pkg_uri(), "1.4.2").unwrap(),
            write::package::copyright(&pkg_uri(), SpdxValue::of("Copyright 2016")).unwrap(),
            write::package::homepage(&pkg_uri(), SpdxValue::of("http://example.org")).unwrap(),
            write::package::summary(&pkg_uri(), "A fixture.").unwrap(),
            write::package::description(&pkg_uri(), "A longer fixture description.").unwrap(),
            write::package::source_info(&pkg_uri(), "built from tag v1.4.2").unwrap(),
            write::package::package_file_name(&pkg_uri(), "fixture-1.4.2.tar.gz").unwrap(),
            write::package::supplier(&pkg_uri(), SpdxValue::of("Organization: Acme ()")).unwrap(),
            write::package::originator(&pkg_uri(), SpdxValue::NoAssertion).unwrap(),
        ],
    )
    .unwrap();

    let binding = read::all_packages(&store).unwrap();
    let pkg = &binding[0];
    assert_eq!(pkg.version_info().as_deref(), Some("1.4.2"));
    assert_eq!(pkg.copyright_text(), SpdxValue::of("Copyright 2016"));
    assert_eq!(pkg.homepage(), SpdxValue::of("http://example.org"));
    assert_eq!(pkg.summary().as_deref(), Some("A fixture."));
    assert_eq!(pkg.package_file_name().as_deref(), Some("fixture-1.4.2.tar.gz"));
    assert_eq!(pkg.supplier(), SpdxValue::of("Organization: Acme ()"));
    assert_eq!(pkg.originator(), SpdxValue::NoAssertion);
}

#[test]
fn supplier_and_originator_reject_non_creator_text() {
    assert!(write::package::supplier(
        &pkg_uri(),
        SpdxValue::of("Tool: hammer\nsecond line")
    )
    .is_err());
    assert!(write::package::supplier(&pkg_uri(), SpdxValue::of("Tool: hammer")).is_err());
    assert!(write::package::originator(&pkg_uri(), SpdxValue::of("just some words")).is_err());

    // Person/organization forms and sentinels remain legal.
    let store = store_with_package();
    write::apply(
        &store,
        &[
            write::package::supplier(
                &pkg_uri(),
                SpdxValue::of("Person: Alice (alice@example.com)"),
            )
            .unwrap(),
            write::package::originator(&pkg_uri(), SpdxValue::None).unwrap(),
        ],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    assert_eq!(
        binding[0].supplier(),
        SpdxValue::of("Person: Alice (alice@example.com)")
    );
    assert_eq!(binding[0].originator(), SpdxValue::None);
}

#[test]
fn sentinels_survive_alongside_literal_lookalikes() {
    let store = store_with_package();
    write::apply(
        &store,
        &[write::package::copyright(&pkg_uri(), SpdxValue::of("NOASSERTION")).unwrap()],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    // Literal text spelling the sentinel name is still a literal.
    assert_eq!(binding[0].copyright_text(), SpdxValue::of("NOASSERTION"));

    write::apply(
        &store,
        &[write::package::copyright(&pkg_uri(), SpdxValue::None).unwrap()],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    assert_eq!(binding[0].copyright_text(), SpdxValue::None);
}

#[test]
fn add_relationship_writes_no_inverse() {
    let store = store_with_package();
    write::apply(
        &store,
        &[write::add_relationship(
            &pkg_uri(),
            &doc_uri(),
            Some("generated during the build".into()),
            RelationshipType::GeneratedFrom,
        )
        .unwrap()],
    )
    .unwrap();

    let binding = read::all_packages(&store).unwrap();
    let rels =
        read::relationships_of_type(&store, &binding[0], RelationshipType::GeneratedFrom).unwrap();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0].comment().as_deref(), Some("generated during the build"));

    let doc = read::document(&store).unwrap();
    assert!(read::relationships_of_type(&store, &doc, RelationshipType::Generates)
        .unwrap()
        .is_empty());
}

#[test]
fn reapplied_relationship_update_adds_a_second_edge() {
    let store = store_with_package();
    let update = write::add_relationship(
        &doc_uri(),
        &pkg_uri(),
        None,
        RelationshipType::Contains,
    )
    .unwrap();
    write::apply(&store, std::slice::from_ref(&update)).unwrap();
    write::apply(&store, std::slice::from_ref(&update)).unwrap();
    let doc = read::document(&store).unwrap();
    assert_eq!(
        read::relationships_of_type(&store, &doc, RelationshipType::Contains)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn lookup_by_uri_hit_and_miss() {
    let store = store_with_package();
    match read::lookup_by_uri(&store, &pkg_uri()).unwrap() {
        Some(RelatedElement::Package(pkg)) => assert_eq!(pkg.spdx_id(), "SPDXRef-pkg"),
        _ => panic!("expected the fixture package"),
    }
    assert!(read::lookup_by_uri(&store, &uri("SPDXRef-ghost"))
        .unwrap()
        .is_none());
    // Non-element URIs name nothing this layer can return.
    assert!(read::lookup_by_uri(&store, "no-hash-here").unwrap().is_none());
    assert!(read::lookup_by_uri(&store, &format!("{NS}#LicenseRef-local"))
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

const SHA1_ONE: &str = "f1d2d2f924e986ac86fdf7b36c94bcdf32beec15";
const SHA1_TWO: &str = "e242ed3bffccdf271b7fbaf34ed72d089537b42f";

#[test]
fn add_file_and_read_back() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./src/main.c", SHA1_ONE);

    let binding = read::all_packages(&store).unwrap();
    let files = binding[0].files();
    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.file_name().as_deref(), Some("./src/main.c"));
    assert_eq!(file.sha1().unwrap(), SHA1_ONE);
    // New files default to an unasserted copyright.
    assert_eq!(file.copyright_text(), SpdxValue::NoAssertion);
}

#[test]
fn add_file_rejects_an_occupied_uri() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    let dup = write::package::add_file(
        &pkg_uri(),
        &uri("SPDXRef-f1"),
        "./b.c",
        vec![Checksum::sha1(SHA1_TWO)],
    )
    .unwrap();
    assert!(matches!(
        write::apply(&store, &[dup]).unwrap_err(),
        Error::Unsupported(_)
    ));
}

#[test]
fn add_file_requires_a_sha1() {
    let err = write::package::add_file(
        &pkg_uri(),
        &uri("SPDXRef-f1"),
        "./a.c",
        vec![Checksum::sha256("ab".repeat(32))],
    )
    .unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn file_types_replace_as_a_set() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    write::apply(
        &store,
        &[write::file::file_types(
            &uri("SPDXRef-f1"),
            vec![FileType::Source, FileType::Text],
        )
        .unwrap()],
    )
    .unwrap();
    write::apply(
        &store,
        &[write::file::file_types(&uri("SPDXRef-f1"), vec![FileType::Binary]).unwrap()],
    )
    .unwrap();

    let binding = read::all_packages(&store).unwrap();
    let files = binding[0].files();
    assert_eq!(files[0].file_types().unwrap(), vec![FileType::Binary]);
}

#[test]
fn contributors_accumulate() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    let file_uri = uri("SPDXRef-f1");
    write::apply(
        &store,
        &[
            write::file::add_contributor(&file_uri, "Alice").unwrap(),
            write::file::add_contributor(&file_uri, "Bob").unwrap(),
        ],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    let files = binding[0].files();
    assert_eq!(files[0].contributors(), vec!["Alice", "Bob"]);
}

#[test]
fn artifact_of_records_doap_projects() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    let file_uri = uri("SPDXRef-f1");
    write::apply(
        &store,
        &[
            write::file::artifact_of(&file_uri, "upstream-lib", Some("http://upstream.example".into()))
                .unwrap(),
            write::file::artifact_of(&file_uri, "other-lib", None).unwrap(),
        ],
    )
    .unwrap();

    let binding = read::all_packages(&store).unwrap();
    let files = binding[0].files();
    let projects = files[0].artifact_of();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "upstream-lib");
    assert_eq!(projects[0].homepage.as_deref(), Some("http://upstream.example"));
    assert_eq!(projects[1].name, "other-lib");
    assert!(projects[1].homepage.is_none());
}

#[test]
fn notice_and_comment_round_trip() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    let file_uri = uri("SPDXRef-f1");
    write::apply(
        &store,
        &[
            write::file::notice_text(&file_uri, SpdxValue::of("NOTICE: keep this")).unwrap(),
            write::file::comment(&file_uri, "hand-reviewed").unwrap(),
        ],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    let files = binding[0].files();
    assert_eq!(files[0].notice_text(), SpdxValue::of("NOTICE: keep this"));
    assert_eq!(files[0].comment().as_deref(), Some("hand-reviewed"));
}

// ---------------------------------------------------------------------------
// Licensing
// ---------------------------------------------------------------------------

fn listed(id: &str) -> License {
    License::Listed(LicenseCatalog::bundled().get(id).unwrap())
}

#[test]
fn declared_license_round_trip_listed() {
    let store = store_with_package();
    write::apply(
        &store,
        &[write::package::declared_license(&pkg_uri(), listed("Apache-2.0")).unwrap()],
    )
    .unwrap();
    // The property points at the canonical catalog URI.
    let pkg = spdxmodel::store::Node::resource(pkg_uri());
    let objects = store.objects(&pkg, "http://spdx.org/rdf/terms#licenseDeclared");
    assert_eq!(
        objects,
        vec![spdxmodel::store::Node::resource("http://spdx.org/licenses/Apache-2.0")]
    );
}

#[test]
fn compound_license_replacement_is_idempotent_in_count() {
    let store = store_with_package();
    let value = License::and(vec![listed("Apache-2.0"), listed("MIT")]);
    write::apply(
        &store,
        &[write::package::concluded_license(&pkg_uri(), value.clone()).unwrap()],
    )
    .unwrap();
    let count = store.len();
    write::apply(
        &store,
        &[write::package::concluded_license(&pkg_uri(), value).unwrap()],
    )
    .unwrap();
    // The orphaned aggregate from the first write is gone.
    assert_eq!(store.len(), count);
}

#[test]
fn extracted_license_rewrite_keeps_latest_name_and_comment() {
    let store = store_with_package();
    let first = License::extracted("LicenseRef-local", NS, "the original text")
        .unwrap()
        .with_name("Local License");
    write::apply(
        &store,
        &[write::package::declared_license(&pkg_uri(), first).unwrap()],
    )
    .unwrap();

    let second = License::extracted("LicenseRef-local", NS, "the corrected text")
        .unwrap()
        .with_name("Local License v2")
        .with_comment("fixed a typo");
    write::apply(
        &store,
        &[write::package::declared_license(&pkg_uri(), second).unwrap()],
    )
    .unwrap();

    let node = spdxmodel::store::Node::resource(format!("{NS}#LicenseRef-local"));
    let texts = store.objects(&node, "http://spdx.org/rdf/terms#extractedText");
    assert_eq!(texts, vec![spdxmodel::store::Node::literal("the corrected text")]);
    let names = store.objects(&node, "http://spdx.org/rdf/terms#name");
    assert_eq!(names, vec![spdxmodel::store::Node::literal("Local License v2")]);
}

#[test]
fn license_info_accumulates_on_files_and_packages() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./a.c", SHA1_ONE);
    let file_uri = uri("SPDXRef-f1");
    write::apply(
        &store,
        &[
            write::file::add_license_info_in_file(&file_uri, listed("MIT")).unwrap(),
            write::file::add_license_info_in_file(&file_uri, listed("Apache-2.0")).unwrap(),
            write::package::add_license_info_from_files(&pkg_uri(), listed("MIT")).unwrap(),
            write::package::add_license_info_from_files(&pkg_uri(), listed("Apache-2.0")).unwrap(),
        ],
    )
    .unwrap();
    let file = spdxmodel::store::Node::resource(file_uri);
    assert_eq!(
        store
            .objects(&file, "http://spdx.org/rdf/terms#licenseInfoInFile")
            .len(),
        2
    );
    let pkg = spdxmodel::store::Node::resource(pkg_uri());
    assert_eq!(
        store
            .objects(&pkg, "http://spdx.org/rdf/terms#licenseInfoFromFiles")
            .len(),
        2
    );
}

#[test]
fn substitute_catalog_feeds_the_algebra() {
    let json = serde_json::json!({
        "licenseListVersion": "9.9",
        "licenses": [
            { "licenseId": "Custom-1.0", "name": "Custom License", "isOsiApproved": false }
        ]
    });
    let catalog = LicenseCatalog::from_json(&json.to_string()).unwrap();
    assert_eq!(catalog.version(), "9.9");
    let license = License::Listed(catalog.get("Custom-1.0").unwrap());
    assert_eq!(license.pretty_name(), "Custom License");
}

// ---------------------------------------------------------------------------
// Verification code
// ---------------------------------------------------------------------------

const EXPECTED_CODE: &str = "a0a8c4c4fc7960d0edc670a724071e908c6cfc10";

#[test]
fn verification_code_matches_the_known_vector() {
    let store = store_with_package();
    // Insertion order deliberately disagrees with name order.
    add_file(&store, "SPDXRef-f2", "./file2.ext", SHA1_TWO);
    add_file(&store, "SPDXRef-f1", "./file1.txt", SHA1_ONE);
    write::apply(&store, &[write::package::finalize(&pkg_uri()).unwrap()]).unwrap();

    let binding = read::all_packages(&store).unwrap();
    assert_eq!(binding[0].verification_code().as_deref(), Some(EXPECTED_CODE));
}

#[test]
fn finalize_is_idempotent() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./file1.txt", SHA1_ONE);
    add_file(&store, "SPDXRef-f2", "./file2.ext", SHA1_TWO);
    write::apply(&store, &[write::package::finalize(&pkg_uri()).unwrap()]).unwrap();
    let count = store.len();
    write::apply(&store, &[write::package::finalize(&pkg_uri()).unwrap()]).unwrap();
    assert_eq!(store.len(), count);
    let binding = read::all_packages(&store).unwrap();
    assert_eq!(binding[0].verification_code().as_deref(), Some(EXPECTED_CODE));
}

#[test]
fn files_analyzed_false_removes_the_code() {
    let store = store_with_package();
    add_file(&store, "SPDXRef-f1", "./file1.txt", SHA1_ONE);
    write::apply(&store, &[write::package::finalize(&pkg_uri()).unwrap()]).unwrap();
    let binding = read::all_packages(&store).unwrap();
    assert!(binding[0].verification_code().is_some());

    write::apply(
        &store,
        &[
            write::package::files_analyzed(&pkg_uri(), false).unwrap(),
            write::package::finalize(&pkg_uri()).unwrap(),
        ],
    )
    .unwrap();
    let binding = read::all_packages(&store).unwrap();
    assert!(!binding[0].files_analyzed());
    assert!(binding[0].verification_code().is_none());
}

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

#[test]
fn annotation_round_trip() {
    let store = store_with_package();
    let when = "2017-03-04T05:06:07Z".parse::<DateTime<Utc>>().unwrap();
    let annotator = Creator::tool("review-bot").unwrap();
    write::apply(
        &store,
        &[write::new_annotation(
            NS,
            "SPDXRef-pkg",
            AnnotationType::Review,
            when,
            annotator,
            Some("looks correct".into()),
        )
        .unwrap()],
    )
    .unwrap();

    let binding = read::all_packages(&store).unwrap();
    let annotations = binding[0].annotations();
    assert_eq!(annotations.len(), 1);
    let a = &annotations[0];
    assert_eq!(a.annotation_type().unwrap(), AnnotationType::Review);
    assert_eq!(a.date().unwrap(), when);
    assert_eq!(a.annotator().as_deref(), Some("Tool: review-bot"));
    assert_eq!(a.comment().as_deref(), Some("looks correct"));
}

#[test]
fn annotation_on_missing_parent_fails_at_apply() {
    let store = store_with_document();
    let update = write::new_annotation(
        NS,
        "SPDXRef-ghost",
        AnnotationType::Other,
        Utc::now(),
        Creator::tool("review-bot").unwrap(),
        None,
    )
    .unwrap();
    assert!(matches!(
        write::apply(&store, &[update]).unwrap_err(),
        Error::TargetNotFound(_)
    ));
}

// ---------------------------------------------------------------------------
// Transactionality and validation
// ---------------------------------------------------------------------------

#[test]
fn failed_batch_leaves_the_store_untouched() {
    let store = store_with_package();
    let before = store.len();
    let updates = vec![
        write::package::version(&pkg_uri(), "2.0").unwrap(),
        write::package::name(&uri("SPDXRef-missing"), "nope").unwrap(),
    ];
    assert!(write::apply(&store, &updates).is_err());
    assert_eq!(store.len(), before);
    let binding = read::all_packages(&store).unwrap();
    assert!(binding[0].version_info().is_none());
}

#[test]
fn builders_reject_malformed_input_up_front() {
    assert!(write::new_document("ns#frag", "SPDXRef-d", "Doc", &[creator()]).is_err());
    assert!(write::new_document(NS, "not-a-ref", "Doc", &[creator()]).is_err());
    assert!(write::new_document(NS, "SPDXRef-d", "", &[creator()]).is_err());
    assert!(write::new_document(NS, "SPDXRef-d", "Doc", &[]).is_err());
    assert!(write::document::add_described_package(&doc_uri(), "SPDXRef-a#b", "P").is_err());
    assert!(write::package::name(&pkg_uri(), "two\nlines").is_err());
    assert!(Creator::person("Alice", Some("not an email".into())).is_err());
    assert!(License::extracted("WrongPrefix-1", NS, "text").is_err());
}

//! The mutation engine.
//!
//! An [`Update`] is a pre-validated description of one change; building
//! one performs all well-formedness checks, so a batch that constructs
//! cleanly can only fail at apply time on a missing target. [`apply`]
//! runs a batch inside a single write transaction; any failure aborts
//! the whole batch through the transaction guard.
//!
//! Single-valued properties are replaced in place. When the replaced
//! object is an anonymous subtree (a compound license aggregate, a
//! checksum, a verification code) the orphaned subtree is deleted too,
//! so re-applying the same update leaves the triple count unchanged.
//! Multi-valued properties always add.

use chrono::{DateTime, SecondsFormat, Utc};
use sha1::{Digest, Sha1};

use crate::error::Error;
use crate::license::License;
use crate::model::{
    AnnotationType, Checksum, ChecksumAlgorithm, Creator, FileType, RelationshipType,
};
use crate::store::{GraphStore, Node, Transaction, TxnMode};
use crate::validate;
use crate::value::SpdxValue;
use crate::vocab;

/// Default spec version stamped on new documents.
pub const DEFAULT_SPEC_VERSION: &str = "SPDX-2.1";

/// One pre-validated change, applied inside a write transaction.
pub struct Update {
    label: &'static str,
    run: Box<dyn Fn(&dyn GraphStore) -> Result<(), Error> + Send + Sync>,
}

impl Update {
    fn new(
        label: &'static str,
        run: impl Fn(&dyn GraphStore) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        Update { label, run: Box::new(run) }
    }

    fn apply_to(&self, store: &dyn GraphStore) -> Result<(), Error> {
        tracing::debug!(update = self.label, "applying");
        (self.run)(store)
    }
}

impl std::fmt::Debug for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update").field("label", &self.label).finish()
    }
}

/// Applies every update, in order, inside one write transaction.
pub fn apply(store: &dyn GraphStore, updates: &[Update]) -> Result<(), Error> {
    let txn = Transaction::begin(store, TxnMode::Write)?;
    for update in updates {
        update.apply_to(store)?;
    }
    txn.commit()?;
    Ok(())
}

// --- shared plumbing ---------------------------------------------------------

/// Renders an SPDX timestamp: UTC, second precision, trailing `Z`.
fn timestamp(when: DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn require_exists(store: &dyn GraphStore, uri: &str) -> Result<Node, Error> {
    let node = Node::resource(uri);
    if store.subject_exists(&node) {
        Ok(node)
    } else {
        Err(Error::TargetNotFound(uri.to_owned()))
    }
}

/// Deletes an anonymous node and everything reachable through further
/// anonymous nodes. Named resources are never followed.
fn purge_blank(store: &dyn GraphStore, node: &Node) -> Result<(), Error> {
    for (property, object) in store.properties(node) {
        store.remove(node, &property, None)?;
        if object.is_blank() {
            purge_blank(store, &object)?;
        }
    }
    Ok(())
}

/// Replaces the single value of `property`, purging an orphaned
/// anonymous old value.
fn set_single(
    store: &dyn GraphStore,
    subject: &Node,
    property: &str,
    object: &Node,
) -> Result<(), Error> {
    for old in store.objects(subject, property) {
        if old.is_blank() {
            purge_blank(store, &old)?;
        }
    }
    store.remove(subject, property, None)?;
    store.insert(subject, property, object)?;
    Ok(())
}

fn value_node(value: &SpdxValue) -> Node {
    match value {
        SpdxValue::Value(text) => Node::literal(text.clone()),
        sentinel => Node::resource(sentinel.literal_or_uri()),
    }
}

fn write_checksum(store: &dyn GraphStore, subject: &Node, checksum: &Checksum) -> Result<(), Error> {
    let node = store.new_blank();
    store.insert(&node, vocab::prop::RDF_TYPE, &Node::resource(vocab::class::CHECKSUM))?;
    store.insert(
        &node,
        vocab::prop::CHECKSUM_ALGORITHM,
        &Node::resource(checksum.algorithm.uri()),
    )?;
    store.insert(
        &node,
        vocab::prop::CHECKSUM_VALUE,
        &Node::literal(checksum.value.clone()),
    )?;
    store.insert(subject, vocab::prop::CHECKSUM, &node)?;
    Ok(())
}

/// Supplier and originator admit sentinels or a person/organization
/// creator string; tools and free text are not legal suppliers.
fn require_human_creator(value: &SpdxValue) -> Result<(), Error> {
    if let SpdxValue::Value(text) = value {
        match text.parse::<Creator>()? {
            Creator::Tool { .. } => {
                return Err(validate::ValidationError::InvalidCreator(text.clone()).into())
            }
            Creator::Person { .. } | Creator::Organization { .. } => {}
        }
    }
    Ok(())
}

fn require_sha1(checksums: &[Checksum]) -> Result<(), Error> {
    if checksums.iter().any(|c| c.algorithm == ChecksumAlgorithm::Sha1) {
        Ok(())
    } else {
        Err(Error::Unsupported(
            "a SHA-1 checksum is required alongside any others".to_owned(),
        ))
    }
}

/// Shared shape of the simple single-literal setters.
fn literal_setter(
    label: &'static str,
    uri: &str,
    property: &'static str,
    value: impl Into<String>,
) -> Result<Update, Error> {
    validate::element_uri(uri)?;
    let uri = uri.to_owned();
    let value = value.into();
    Ok(Update::new(label, move |store| {
        let subject = require_exists(store, &uri)?;
        set_single(store, &subject, property, &Node::literal(value.clone()))
    }))
}

/// Shared shape of the tri-state setters.
fn tri_state_setter(
    label: &'static str,
    uri: &str,
    property: &'static str,
    value: SpdxValue,
) -> Result<Update, Error> {
    validate::element_uri(uri)?;
    let uri = uri.to_owned();
    Ok(Update::new(label, move |store| {
        let subject = require_exists(store, &uri)?;
        set_single(store, &subject, property, &value_node(&value))
    }))
}

/// Shared shape of the single-valued license setters.
fn license_setter(
    label: &'static str,
    uri: &str,
    property: &'static str,
    license: License,
) -> Result<Update, Error> {
    validate::element_uri(uri)?;
    let uri = uri.to_owned();
    Ok(Update::new(label, move |store| {
        let subject = require_exists(store, &uri)?;
        let node = license.to_node(store)?;
        set_single(store, &subject, property, &node)
    }))
}

/// Shared shape of the multi-valued license adders.
fn license_adder(
    label: &'static str,
    uri: &str,
    property: &'static str,
    license: License,
) -> Result<Update, Error> {
    validate::element_uri(uri)?;
    let uri = uri.to_owned();
    Ok(Update::new(label, move |store| {
        let subject = require_exists(store, &uri)?;
        let node = license.to_node(store)?;
        store.insert(&subject, property, &node)?;
        Ok(())
    }))
}

// --- top-level builders ------------------------------------------------------

/// A new SPDX document at `<base_url>#<id>`, stamped with the CC0-1.0
/// data license, the default spec version, and creation info dated at
/// apply time. At least one creator is required.
pub fn new_document(
    base_url: &str,
    id: &str,
    name: &str,
    creators: &[Creator],
) -> Result<Update, Error> {
    validate::base_url(base_url)?;
    validate::element_id(id)?;
    validate::not_blank(name)?;
    validate::single_line(name)?;
    if creators.is_empty() {
        return Err(validate::ValidationError::MissingCreator.into());
    }
    let uri = format!("{base_url}#{id}");
    let name = name.to_owned();
    let creators: Vec<String> = creators.iter().map(Creator::to_string).collect();
    Ok(Update::new("new_document", move |store| {
        let doc = Node::resource(uri.clone());
        store.insert(&doc, vocab::prop::RDF_TYPE, &Node::resource(vocab::class::DOCUMENT))?;
        store.insert(&doc, vocab::prop::NAME, &Node::literal(name.clone()))?;
        store.insert(
            &doc,
            vocab::prop::DATA_LICENSE,
            &Node::resource(vocab::CC0_LICENSE),
        )?;
        store.insert(
            &doc,
            vocab::prop::SPEC_VERSION,
            &Node::literal(DEFAULT_SPEC_VERSION),
        )?;
        let info = store.new_blank();
        store.insert(
            &info,
            vocab::prop::RDF_TYPE,
            &Node::resource(vocab::class::CREATION_INFO),
        )?;
        store.insert(
            &info,
            vocab::prop::CREATED,
            &Node::literal(timestamp(Utc::now())),
        )?;
        for creator in &creators {
            store.insert(&info, vocab::prop::CREATOR, &Node::literal(creator.clone()))?;
        }
        store.insert(&doc, vocab::prop::CREATION_INFO, &info)?;
        Ok(())
    }))
}

/// A new annotation on the element `<base_url>#<parent_id>`. The parent
/// must exist when the update is applied.
pub fn new_annotation(
    base_url: &str,
    parent_id: &str,
    annotation_type: AnnotationType,
    date: DateTime<Utc>,
    annotator: Creator,
    comment: Option<String>,
) -> Result<Update, Error> {
    validate::base_url(base_url)?;
    validate::element_id(parent_id)?;
    if let Some(comment) = &comment {
        validate::not_blank(comment)?;
    }
    let parent_uri = format!("{base_url}#{parent_id}");
    let annotator = annotator.to_string();
    Ok(Update::new("new_annotation", move |store| {
        let parent = require_exists(store, &parent_uri)?;
        let annotation = store.new_blank();
        store.insert(
            &annotation,
            vocab::prop::RDF_TYPE,
            &Node::resource(vocab::class::ANNOTATION),
        )?;
        store.insert(
            &annotation,
            vocab::prop::ANNOTATION_TYPE,
            &Node::resource(annotation_type.uri()),
        )?;
        store.insert(
            &annotation,
            vocab::prop::ANNOTATION_DATE,
            &Node::literal(timestamp(date)),
        )?;
        store.insert(
            &annotation,
            vocab::prop::ANNOTATOR,
            &Node::literal(annotator.clone()),
        )?;
        if let Some(comment) = &comment {
            store.insert(&annotation, vocab::prop::COMMENT, &Node::literal(comment.clone()))?;
        }
        store.insert(&parent, vocab::prop::ANNOTATION, &annotation)?;
        Ok(())
    }))
}

/// A new relationship from `source_uri` to `target_uri`. No inverse
/// edge is written; callers wanting both directions add both.
pub fn add_relationship(
    source_uri: &str,
    target_uri: &str,
    comment: Option<String>,
    relationship_type: RelationshipType,
) -> Result<Update, Error> {
    validate::element_uri(source_uri)?;
    validate::element_uri(target_uri)?;
    let source_uri = source_uri.to_owned();
    let target_uri = target_uri.to_owned();
    Ok(Update::new("add_relationship", move |store| {
        let source = require_exists(store, &source_uri)?;
        let target = require_exists(store, &target_uri)?;
        insert_relationship(store, &source, &target, relationship_type, comment.as_deref())
    }))
}

fn insert_relationship(
    store: &dyn GraphStore,
    source: &Node,
    target: &Node,
    relationship_type: RelationshipType,
    comment: Option<&str>,
) -> Result<(), Error> {
    let rel = store.new_blank();
    store.insert(
        &rel,
        vocab::prop::RDF_TYPE,
        &Node::resource(vocab::class::RELATIONSHIP),
    )?;
    store.insert(
        &rel,
        vocab::prop::RELATIONSHIP_TYPE,
        &Node::resource(relationship_type.uri()),
    )?;
    store.insert(&rel, vocab::prop::RELATED_ELEMENT, target)?;
    if let Some(comment) = comment {
        store.insert(&rel, vocab::prop::COMMENT, &Node::literal(comment))?;
    }
    store.insert(source, vocab::prop::RELATIONSHIP, &rel)?;
    Ok(())
}

// --- document updates --------------------------------------------------------

pub mod document {
    use super::*;

    /// A new package at `<namespace(document)>#<package_id>`, described
    /// by the document: the package is created with a NOASSERTION
    /// download location, and the DESCRIBES / DESCRIBED_BY pair is
    /// written between document and package.
    pub fn add_described_package(
        document_uri: &str,
        package_id: &str,
        name: &str,
    ) -> Result<Update, Error> {
        validate::element_uri(document_uri)?;
        validate::element_id(package_id)?;
        validate::not_blank(name)?;
        validate::single_line(name)?;
        let namespace = namespace_of(document_uri)?;
        let document_uri = document_uri.to_owned();
        let package_id = package_id.to_owned();
        let name = name.to_owned();
        Ok(Update::new("document.add_described_package", move |store| {
            let doc = require_exists(store, &document_uri)?;
            let pkg = create_package(store, &namespace, &package_id, &name)?;
            insert_relationship(store, &doc, &pkg, RelationshipType::Describes, None)?;
            insert_relationship(store, &pkg, &doc, RelationshipType::DescribedBy, None)?;
            Ok(())
        }))
    }

    /// A new package in the document's namespace, with no relationship
    /// to the document.
    pub fn add_package(document_uri: &str, package_id: &str, name: &str) -> Result<Update, Error> {
        validate::element_uri(document_uri)?;
        validate::element_id(package_id)?;
        validate::not_blank(name)?;
        validate::single_line(name)?;
        let namespace = namespace_of(document_uri)?;
        let document_uri = document_uri.to_owned();
        let package_id = package_id.to_owned();
        let name = name.to_owned();
        Ok(Update::new("document.add_package", move |store| {
            require_exists(store, &document_uri)?;
            create_package(store, &namespace, &package_id, &name)?;
            Ok(())
        }))
    }

    fn namespace_of(element_uri: &str) -> Result<String, Error> {
        match element_uri.rsplit_once('#') {
            Some((namespace, _)) => Ok(namespace.to_owned()),
            None => Err(validate::ValidationError::InvalidNamespace(element_uri.to_owned()).into()),
        }
    }

    fn create_package(
        store: &dyn GraphStore,
        namespace: &str,
        package_id: &str,
        name: &str,
    ) -> Result<Node, Error> {
        let uri = format!("{namespace}#{package_id}");
        let pkg = Node::resource(uri.clone());
        if store.subject_exists(&pkg) {
            return Err(Error::Unsupported(format!(
                "element already exists: {uri}"
            )));
        }
        store.insert(&pkg, vocab::prop::RDF_TYPE, &Node::resource(vocab::class::PACKAGE))?;
        store.insert(&pkg, vocab::prop::NAME, &Node::literal(name))?;
        store.insert(
            &pkg,
            vocab::prop::DOWNLOAD_LOCATION,
            &value_node(&SpdxValue::NoAssertion),
        )?;
        Ok(pkg)
    }

    pub fn name(document_uri: &str, value: &str) -> Result<Update, Error> {
        validate::not_blank(value)?;
        validate::single_line(value)?;
        literal_setter("document.name", document_uri, vocab::prop::NAME, value)
    }

    pub fn comment(document_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("document.comment", document_uri, vocab::prop::COMMENT, value)
    }

    pub fn spec_version(document_uri: &str, value: &str) -> Result<Update, Error> {
        validate::not_blank(value)?;
        validate::single_line(value)?;
        literal_setter(
            "document.spec_version",
            document_uri,
            vocab::prop::SPEC_VERSION,
            value,
        )
    }

    /// Replaces the creation timestamp inside the document's creation
    /// info.
    pub fn creation_date(document_uri: &str, when: DateTime<Utc>) -> Result<Update, Error> {
        validate::element_uri(document_uri)?;
        let document_uri = document_uri.to_owned();
        Ok(Update::new("document.creation_date", move |store| {
            let info = creation_info(store, &document_uri)?;
            set_single(
                store,
                &info,
                vocab::prop::CREATED,
                &Node::literal(timestamp(when)),
            )
        }))
    }

    /// Replaces the comment inside the document's creation info.
    pub fn creation_comment(document_uri: &str, value: &str) -> Result<Update, Error> {
        validate::element_uri(document_uri)?;
        let document_uri = document_uri.to_owned();
        let value = value.to_owned();
        Ok(Update::new("document.creation_comment", move |store| {
            let info = creation_info(store, &document_uri)?;
            set_single(store, &info, vocab::prop::COMMENT, &Node::literal(value.clone()))
        }))
    }

    fn creation_info(store: &dyn GraphStore, document_uri: &str) -> Result<Node, Error> {
        let doc = require_exists(store, document_uri)?;
        store
            .first_object(&doc, vocab::prop::CREATION_INFO)
            .ok_or_else(|| Error::MissingProperty {
                subject: doc.to_string(),
                property: vocab::prop::CREATION_INFO.to_owned(),
            })
    }
}

// --- package updates ---------------------------------------------------------

pub mod package {
    use super::*;

    pub fn name(package_uri: &str, value: &str) -> Result<Update, Error> {
        validate::not_blank(value)?;
        validate::single_line(value)?;
        literal_setter("package.name", package_uri, vocab::prop::NAME, value)
    }

    pub fn version(package_uri: &str, value: &str) -> Result<Update, Error> {
        validate::single_line(value)?;
        literal_setter("package.version", package_uri, vocab::prop::VERSION_INFO, value)
    }

    pub fn copyright(package_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        tri_state_setter("package.copyright", package_uri, vocab::prop::COPYRIGHT_TEXT, value)
    }

    pub fn download_location(package_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        tri_state_setter(
            "package.download_location",
            package_uri,
            vocab::prop::DOWNLOAD_LOCATION,
            value,
        )
    }

    pub fn homepage(package_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        tri_state_setter("package.homepage", package_uri, vocab::prop::HOMEPAGE, value)
    }

    pub fn summary(package_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("package.summary", package_uri, vocab::prop::SUMMARY, value)
    }

    pub fn description(package_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("package.description", package_uri, vocab::prop::DESCRIPTION, value)
    }

    pub fn source_info(package_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("package.source_info", package_uri, vocab::prop::SOURCE_INFO, value)
    }

    pub fn comment(package_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("package.comment", package_uri, vocab::prop::COMMENT, value)
    }

    pub fn package_file_name(package_uri: &str, value: &str) -> Result<Update, Error> {
        validate::single_line(value)?;
        literal_setter(
            "package.package_file_name",
            package_uri,
            vocab::prop::PACKAGE_FILE_NAME,
            value,
        )
    }

    pub fn supplier(package_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        require_human_creator(&value)?;
        tri_state_setter("package.supplier", package_uri, vocab::prop::SUPPLIER, value)
    }

    pub fn originator(package_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        require_human_creator(&value)?;
        tri_state_setter("package.originator", package_uri, vocab::prop::ORIGINATOR, value)
    }

    /// Records whether the package's files were analyzed. Setting false
    /// makes any later `finalize` remove the verification code instead
    /// of computing one.
    pub fn files_analyzed(package_uri: &str, analyzed: bool) -> Result<Update, Error> {
        literal_setter(
            "package.files_analyzed",
            package_uri,
            vocab::prop::FILES_ANALYZED,
            if analyzed { "true" } else { "false" },
        )
    }

    pub fn declared_license(package_uri: &str, license: License) -> Result<Update, Error> {
        license_setter(
            "package.declared_license",
            package_uri,
            vocab::prop::LICENSE_DECLARED,
            license,
        )
    }

    pub fn concluded_license(package_uri: &str, license: License) -> Result<Update, Error> {
        license_setter(
            "package.concluded_license",
            package_uri,
            vocab::prop::LICENSE_CONCLUDED,
            license,
        )
    }

    pub fn license_comments(package_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter(
            "package.license_comments",
            package_uri,
            vocab::prop::LICENSE_COMMENTS,
            value,
        )
    }

    /// Adds one license seen in the package's files. Multi-valued.
    pub fn add_license_info_from_files(
        package_uri: &str,
        license: License,
    ) -> Result<Update, Error> {
        license_adder(
            "package.add_license_info_from_files",
            package_uri,
            vocab::prop::LICENSE_INFO_FROM_FILES,
            license,
        )
    }

    /// Replaces the package's checksum set. A SHA-1 entry is required.
    pub fn checksums(package_uri: &str, checksums: Vec<Checksum>) -> Result<Update, Error> {
        validate::element_uri(package_uri)?;
        require_sha1(&checksums)?;
        let package_uri = package_uri.to_owned();
        Ok(Update::new("package.checksums", move |store| {
            let pkg = require_exists(store, &package_uri)?;
            replace_checksums(store, &pkg, &checksums)
        }))
    }

    /// A new file at `file_uri`, attached to the package via `hasFile`.
    /// The file URI must be unused; a SHA-1 checksum is required. The
    /// created file gets a NOASSERTION copyright default.
    pub fn add_file(
        package_uri: &str,
        file_uri: &str,
        file_name: &str,
        checksums: Vec<Checksum>,
    ) -> Result<Update, Error> {
        validate::element_uri(package_uri)?;
        validate::element_uri(file_uri)?;
        validate::not_blank(file_name)?;
        validate::single_line(file_name)?;
        require_sha1(&checksums)?;
        let package_uri = package_uri.to_owned();
        let file_uri = file_uri.to_owned();
        let file_name = file_name.to_owned();
        Ok(Update::new("package.add_file", move |store| {
            let pkg = require_exists(store, &package_uri)?;
            let file = Node::resource(file_uri.clone());
            // A bare type tag is tolerated; anything beyond it means the
            // identifier is already taken.
            let occupied = store
                .properties(&file)
                .iter()
                .any(|(p, _)| p != vocab::prop::RDF_TYPE);
            if occupied {
                return Err(Error::Unsupported(format!(
                    "element already exists: {file_uri}"
                )));
            }
            store.insert(&file, vocab::prop::RDF_TYPE, &Node::resource(vocab::class::FILE))?;
            store.insert(&file, vocab::prop::FILE_NAME, &Node::literal(file_name.clone()))?;
            store.insert(
                &file,
                vocab::prop::COPYRIGHT_TEXT,
                &value_node(&SpdxValue::NoAssertion),
            )?;
            for checksum in &checksums {
                write_checksum(store, &file, checksum)?;
            }
            store.insert(&pkg, vocab::prop::HAS_FILE, &file)?;
            Ok(())
        }))
    }

    /// Computes and stores the package verification code.
    ///
    /// Files are ordered by `fileName` ascending; their SHA-1 hex digests
    /// are concatenated in that order and the SHA-1 of the concatenation
    /// becomes the code, replacing any prior one. When the package has
    /// `filesAnalyzed = false` any existing code is removed and nothing
    /// is written.
    pub fn finalize(package_uri: &str) -> Result<Update, Error> {
        validate::element_uri(package_uri)?;
        let package_uri = package_uri.to_owned();
        Ok(Update::new("package.finalize", move |store| {
            let pkg = require_exists(store, &package_uri)?;

            // Clear the old code either way.
            for old in store.objects(&pkg, vocab::prop::VERIFICATION_CODE) {
                if old.is_blank() {
                    purge_blank(store, &old)?;
                }
            }
            store.remove(&pkg, vocab::prop::VERIFICATION_CODE, None)?;

            let analyzed = store
                .first_object(&pkg, vocab::prop::FILES_ANALYZED)
                .and_then(|o| o.as_literal().map(str::to_owned))
                .map_or(true, |v| v != "false");
            if !analyzed {
                return Ok(());
            }

            let mut files = Vec::new();
            for file in store.objects(&pkg, vocab::prop::HAS_FILE) {
                let name = store
                    .first_object(&file, vocab::prop::FILE_NAME)
                    .and_then(|o| o.as_literal().map(str::to_owned))
                    .ok_or_else(|| Error::MissingProperty {
                        subject: file.to_string(),
                        property: vocab::prop::FILE_NAME.to_owned(),
                    })?;
                files.push((name, file_sha1_digests(store, &file)?));
            }
            files.sort_by(|a, b| a.0.cmp(&b.0));

            let mut hasher = Sha1::new();
            for (_, digests) in &files {
                for digest in digests {
                    hasher.update(digest.as_bytes());
                }
            }
            let code = hex::encode(hasher.finalize());

            let node = store.new_blank();
            store.insert(
                &node,
                vocab::prop::RDF_TYPE,
                &Node::resource(vocab::class::VERIFICATION_CODE),
            )?;
            store.insert(
                &node,
                vocab::prop::VERIFICATION_CODE_VALUE,
                &Node::literal(code),
            )?;
            store.insert(&pkg, vocab::prop::VERIFICATION_CODE, &node)?;
            Ok(())
        }))
    }

    /// A file's SHA-1 digests in the order its checksums are stored.
    fn file_sha1_digests(store: &dyn GraphStore, file: &Node) -> Result<Vec<String>, Error> {
        let mut digests = Vec::new();
        for checksum in store.objects(file, vocab::prop::CHECKSUM) {
            let parsed = Checksum::from_node(store, &checksum)?;
            if parsed.algorithm == ChecksumAlgorithm::Sha1 {
                digests.push(parsed.value);
            }
        }
        Ok(digests)
    }
}

/// Replaces a subject's checksum set, purging the old anonymous nodes.
fn replace_checksums(
    store: &dyn GraphStore,
    subject: &Node,
    checksums: &[Checksum],
) -> Result<(), Error> {
    for old in store.objects(subject, vocab::prop::CHECKSUM) {
        if old.is_blank() {
            purge_blank(store, &old)?;
        }
    }
    store.remove(subject, vocab::prop::CHECKSUM, None)?;
    for checksum in checksums {
        write_checksum(store, subject, checksum)?;
    }
    Ok(())
}

// --- file updates ------------------------------------------------------------

pub mod file {
    use super::*;

    pub fn concluded_license(file_uri: &str, license: License) -> Result<Update, Error> {
        license_setter(
            "file.concluded_license",
            file_uri,
            vocab::prop::LICENSE_CONCLUDED,
            license,
        )
    }

    pub fn license_comments(file_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter(
            "file.license_comments",
            file_uri,
            vocab::prop::LICENSE_COMMENTS,
            value,
        )
    }

    pub fn copyright(file_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        tri_state_setter("file.copyright", file_uri, vocab::prop::COPYRIGHT_TEXT, value)
    }

    pub fn comment(file_uri: &str, value: &str) -> Result<Update, Error> {
        literal_setter("file.comment", file_uri, vocab::prop::COMMENT, value)
    }

    pub fn notice_text(file_uri: &str, value: SpdxValue) -> Result<Update, Error> {
        tri_state_setter("file.notice_text", file_uri, vocab::prop::NOTICE_TEXT, value)
    }

    /// Replaces the file's type set.
    pub fn file_types(file_uri: &str, types: Vec<FileType>) -> Result<Update, Error> {
        validate::element_uri(file_uri)?;
        let file_uri = file_uri.to_owned();
        Ok(Update::new("file.file_types", move |store| {
            let file = require_exists(store, &file_uri)?;
            store.remove(&file, vocab::prop::FILE_TYPE, None)?;
            for t in &types {
                store.insert(&file, vocab::prop::FILE_TYPE, &Node::resource(t.uri()))?;
            }
            Ok(())
        }))
    }

    /// Replaces the file's checksum set. A SHA-1 entry is required.
    pub fn checksums(file_uri: &str, checksums: Vec<Checksum>) -> Result<Update, Error> {
        validate::element_uri(file_uri)?;
        require_sha1(&checksums)?;
        let file_uri = file_uri.to_owned();
        Ok(Update::new("file.checksums", move |store| {
            let file = require_exists(store, &file_uri)?;
            replace_checksums(store, &file, &checksums)
        }))
    }

    /// Adds one contributor. Multi-valued.
    pub fn add_contributor(file_uri: &str, contributor: &str) -> Result<Update, Error> {
        validate::element_uri(file_uri)?;
        validate::not_blank(contributor)?;
        validate::single_line(contributor)?;
        let file_uri = file_uri.to_owned();
        let contributor = contributor.to_owned();
        Ok(Update::new("file.add_contributor", move |store| {
            let file = require_exists(store, &file_uri)?;
            store.insert(
                &file,
                vocab::prop::FILE_CONTRIBUTOR,
                &Node::literal(contributor.clone()),
            )?;
            Ok(())
        }))
    }

    /// Adds one license seen in the file. Multi-valued.
    pub fn add_license_info_in_file(file_uri: &str, license: License) -> Result<Update, Error> {
        license_adder(
            "file.add_license_info_in_file",
            file_uri,
            vocab::prop::LICENSE_INFO_IN_FILE,
            license,
        )
    }

    /// Records a project this file is an artifact of. Multi-valued.
    pub fn artifact_of(
        file_uri: &str,
        project_name: &str,
        homepage: Option<String>,
    ) -> Result<Update, Error> {
        validate::element_uri(file_uri)?;
        validate::not_blank(project_name)?;
        validate::single_line(project_name)?;
        let file_uri = file_uri.to_owned();
        let project_name = project_name.to_owned();
        Ok(Update::new("file.artifact_of", move |store| {
            let file = require_exists(store, &file_uri)?;
            let project = store.new_blank();
            store.insert(
                &project,
                vocab::prop::RDF_TYPE,
                &Node::resource(vocab::class::DOAP_PROJECT),
            )?;
            store.insert(
                &project,
                vocab::prop::DOAP_NAME,
                &Node::literal(project_name.clone()),
            )?;
            if let Some(homepage) = &homepage {
                store.insert(
                    &project,
                    vocab::prop::DOAP_HOMEPAGE,
                    &Node::resource(homepage.clone()),
                )?;
            }
            store.insert(&file, vocab::prop::ARTIFACT_OF, &project)?;
            Ok(())
        }))
    }
}

// --- tests -------------------------------------------------------------------

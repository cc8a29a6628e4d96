//! SPDX vocabulary URIs and the enumeration↔URI transliteration rule.
//!
//! All SPDX terms live under a single namespace,
//! `http://spdx.org/rdf/terms#`. Property URIs are collected in [`prop`],
//! resource-type URIs in [`class`]. The free functions at the bottom
//! implement the shared camelCase transliteration used by every
//! URI-addressable enumeration (relationship types, file types, checksum
//! algorithms, annotation types).

/// The SPDX terms namespace. Every SPDX property and type hangs off this.
pub const SPDX_TERMS: &str = "http://spdx.org/rdf/terms#";

/// Namespace of the canonical listed-license catalog.
pub const LISTED_LICENSE_NS: &str = "http://spdx.org/licenses/";

/// DOAP (Description of a Project) namespace, used by `artifactOf`.
pub const DOAP_NS: &str = "http://usefulinc.com/ns/doap#";

/// RDF vocabulary namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDFS vocabulary namespace.
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Canonical URI standing for the NONE sentinel value.
pub const NONE: &str = "http://spdx.org/rdf/terms#none";

/// Canonical URI standing for the NOASSERTION sentinel value.
pub const NO_ASSERTION: &str = "http://spdx.org/rdf/terms#noassertion";

/// URI of the default data license written on every new document.
pub const CC0_LICENSE: &str = "http://spdx.org/licenses/CC0-1.0";

/// SPDX property URIs.
pub mod prop {
    /// rdf:type
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdfs:comment — the general-purpose comment property SPDX reuses.
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// spdx:name
    pub const NAME: &str = "http://spdx.org/rdf/terms#name";

    /// spdx:copyrightText
    pub const COPYRIGHT_TEXT: &str = "http://spdx.org/rdf/terms#copyrightText";

    // Document.
    pub const DATA_LICENSE: &str = "http://spdx.org/rdf/terms#dataLicense";
    pub const CREATION_INFO: &str = "http://spdx.org/rdf/terms#creationInfo";
    pub const CREATOR: &str = "http://spdx.org/rdf/terms#creator";
    pub const CREATED: &str = "http://spdx.org/rdf/terms#created";
    pub const SPEC_VERSION: &str = "http://spdx.org/rdf/terms#specVersion";
    pub const LICENSE_LIST_VERSION: &str = "http://spdx.org/rdf/terms#licenseListVersion";

    // Package.
    pub const VERSION_INFO: &str = "http://spdx.org/rdf/terms#versionInfo";
    pub const DOWNLOAD_LOCATION: &str = "http://spdx.org/rdf/terms#downloadLocation";
    pub const PACKAGE_FILE_NAME: &str = "http://spdx.org/rdf/terms#packageFileName";
    pub const VERIFICATION_CODE: &str = "http://spdx.org/rdf/terms#packageVerificationCode";
    pub const VERIFICATION_CODE_VALUE: &str =
        "http://spdx.org/rdf/terms#packageVerificationCodeValue";
    pub const LICENSE_INFO_FROM_FILES: &str = "http://spdx.org/rdf/terms#licenseInfoFromFiles";
    pub const FILES_ANALYZED: &str = "http://spdx.org/rdf/terms#filesAnalyzed";
    pub const SUMMARY: &str = "http://spdx.org/rdf/terms#summary";
    pub const DESCRIPTION: &str = "http://spdx.org/rdf/terms#description";
    pub const SOURCE_INFO: &str = "http://spdx.org/rdf/terms#sourceInfo";
    pub const ORIGINATOR: &str = "http://spdx.org/rdf/terms#originator";
    pub const SUPPLIER: &str = "http://spdx.org/rdf/terms#supplier";

    /// Package homepage — SPDX borrows doap:homepage for this.
    pub const HOMEPAGE: &str = "http://usefulinc.com/ns/doap#homepage";

    // File.
    pub const HAS_FILE: &str = "http://spdx.org/rdf/terms#hasFile";
    pub const FILE_NAME: &str = "http://spdx.org/rdf/terms#fileName";
    pub const FILE_TYPE: &str = "http://spdx.org/rdf/terms#fileType";
    pub const CHECKSUM: &str = "http://spdx.org/rdf/terms#checksum";
    pub const CHECKSUM_VALUE: &str = "http://spdx.org/rdf/terms#checksumValue";
    pub const CHECKSUM_ALGORITHM: &str = "http://spdx.org/rdf/terms#algorithm";
    pub const ARTIFACT_OF: &str = "http://spdx.org/rdf/terms#artifactOf";
    pub const NOTICE_TEXT: &str = "http://spdx.org/rdf/terms#noticeText";
    pub const FILE_CONTRIBUTOR: &str = "http://spdx.org/rdf/terms#fileContributor";

    // DOAP project references (artifactOf targets).
    pub const DOAP_NAME: &str = "http://usefulinc.com/ns/doap#name";
    pub const DOAP_HOMEPAGE: &str = "http://usefulinc.com/ns/doap#homepage";

    // Licensing.
    pub const LICENSE_DECLARED: &str = "http://spdx.org/rdf/terms#licenseDeclared";
    pub const LICENSE_CONCLUDED: &str = "http://spdx.org/rdf/terms#licenseConcluded";
    pub const LICENSE_COMMENTS: &str = "http://spdx.org/rdf/terms#licenseComments";
    pub const MEMBER: &str = "http://spdx.org/rdf/terms#member";
    pub const LICENSE_INFO_IN_FILE: &str = "http://spdx.org/rdf/terms#licenseInfoInFile";
    pub const EXTRACTED_TEXT: &str = "http://spdx.org/rdf/terms#extractedText";
    pub const LICENSE_ID: &str = "http://spdx.org/rdf/terms#licenseId";
    pub const OSI_APPROVED: &str = "http://spdx.org/rdf/terms#isOsiApproved";

    // Annotations.
    pub const ANNOTATION: &str = "http://spdx.org/rdf/terms#annotation";
    pub const ANNOTATION_TYPE: &str = "http://spdx.org/rdf/terms#annotationType";
    pub const ANNOTATION_DATE: &str = "http://spdx.org/rdf/terms#annotationDate";
    pub const ANNOTATOR: &str = "http://spdx.org/rdf/terms#annotator";

    // Relationships.
    pub const RELATIONSHIP: &str = "http://spdx.org/rdf/terms#relationship";
    pub const RELATIONSHIP_TYPE: &str = "http://spdx.org/rdf/terms#relationshipType";
    pub const RELATED_ELEMENT: &str = "http://spdx.org/rdf/terms#relatedSpdxElement";
}

/// SPDX resource-type URIs (objects of `rdf:type`).
pub mod class {
    pub const DOCUMENT: &str = "http://spdx.org/rdf/terms#SpdxDocument";
    pub const PACKAGE: &str = "http://spdx.org/rdf/terms#Package";
    pub const FILE: &str = "http://spdx.org/rdf/terms#File";
    pub const CREATION_INFO: &str = "http://spdx.org/rdf/terms#CreationInfo";
    pub const CHECKSUM: &str = "http://spdx.org/rdf/terms#Checksum";
    pub const VERIFICATION_CODE: &str = "http://spdx.org/rdf/terms#PackageVerificationCode";
    pub const ANNOTATION: &str = "http://spdx.org/rdf/terms#Annotation";
    pub const RELATIONSHIP: &str = "http://spdx.org/rdf/terms#Relationship";
    pub const EXTRACTED_LICENSE: &str = "http://spdx.org/rdf/terms#ExtractedLicensingInfo";
    pub const CONJUNCTIVE_LICENSE_SET: &str = "http://spdx.org/rdf/terms#ConjunctiveLicenseSet";
    pub const DISJUNCTIVE_LICENSE_SET: &str = "http://spdx.org/rdf/terms#DisjunctiveLicenseSet";
    pub const DOAP_PROJECT: &str = "http://usefulinc.com/ns/doap#Project";
}

/// Builds the vocabulary URI for an enumeration value.
///
/// `name` is the SCREAMING_SNAKE enum name (e.g. `FILE_ADDED`), `infix` the
/// family prefix including its trailing underscore (e.g. `relationshipType_`).
/// The local name is camelCased: first word lower-cased, each following word
/// capitalized. `FILE_ADDED` with `relationshipType_` becomes
/// `http://spdx.org/rdf/terms#relationshipType_fileAdded`.
pub(crate) fn enum_uri(name: &str, infix: &str) -> String {
    let mut out = String::with_capacity(SPDX_TERMS.len() + infix.len() + name.len());
    out.push_str(SPDX_TERMS);
    out.push_str(infix);
    for (i, word) in name.split('_').enumerate() {
        let mut chars = word.chars();
        match chars.next() {
            None => continue,
            Some(first) => {
                if i == 0 {
                    out.push(first.to_ascii_lowercase());
                } else {
                    out.push(first.to_ascii_uppercase());
                }
            }
        }
        for c in chars {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Inverts [`enum_uri`]: recovers the SCREAMING_SNAKE token from a full
/// vocabulary URI or a bare local name.
///
/// Strips the terms namespace and the family infix when present, then splits
/// the camelCase remainder before each uppercase letter and upper-cases the
/// lot. The returned token still has to be matched against the enumeration's
/// declared names; this function never fails on its own.
pub(crate) fn enum_token(uri_or_local: &str, infix: &str) -> String {
    let local = uri_or_local.strip_prefix(SPDX_TERMS).unwrap_or(uri_or_local);
    let local = local.strip_prefix(infix).unwrap_or(local);
    let mut out = String::with_capacity(local.len() + 4);
    for c in local.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

// --- tests -------------------------------------------------------------------

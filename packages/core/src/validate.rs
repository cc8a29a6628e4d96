//! Pure validation predicates for SPDX identifiers and field text.
//!
//! Everything here is side-effect free and store-independent; the mutation
//! builders call these at construction time so an `Update` that exists is
//! already known to be well-formed.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](([_\.\-]?[a-zA-Z0-9]+)*)@([A-Za-z0-9]+)(([\.\-]?[a-zA-Z0-9]+)*)\.([A-Za-z]{2,})$")
        .unwrap()
});

/// A well-formedness failure, carrying the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid SPDX element identifier: {0:?} (must start with \"SPDXRef-\" and contain no '#' or ':')")]
    InvalidElementId(String),

    #[error("invalid extracted license identifier: {0:?} (must start with \"LicenseRef-\" and contain no '#' or ':')")]
    InvalidLicenseId(String),

    #[error("invalid document namespace: {0:?} (must be non-blank and contain no '#')")]
    InvalidNamespace(String),

    #[error("invalid SPDX element URI: {uri:?}")]
    InvalidElementUri {
        uri: String,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("value must not be blank")]
    Blank,

    #[error("value must be a single line: {0:?}")]
    MultiLine(String),

    #[error("at least one creator is required")]
    MissingCreator,

    #[error("unparseable creator string: {0:?}")]
    InvalidCreator(String),
}

fn is_id_body_ok(id: &str, prefix: &str) -> bool {
    id.len() > prefix.len() && !id.contains('#') && !id[prefix.len()..].contains(':')
}

/// An SPDX element identifier: `SPDXRef-` prefix, non-empty remainder,
/// no `#` anywhere and no `:` past the prefix.
pub fn element_id(id: &str) -> Result<(), ValidationError> {
    if id.starts_with("SPDXRef-") && is_id_body_ok(id, "SPDXRef-") {
        Ok(())
    } else {
        Err(ValidationError::InvalidElementId(id.to_owned()))
    }
}

/// An extracted-license identifier: `LicenseRef-` prefix, same character
/// rules as element identifiers.
pub fn license_id(id: &str) -> Result<(), ValidationError> {
    if id.starts_with("LicenseRef-") && is_id_body_ok(id, "LicenseRef-") {
        Ok(())
    } else {
        Err(ValidationError::InvalidLicenseId(id.to_owned()))
    }
}

/// A document namespace: non-blank and free of `#`.
pub fn base_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() || url.contains('#') {
        Err(ValidationError::InvalidNamespace(url.to_owned()))
    } else {
        Ok(())
    }
}

/// A full element URI: `<namespace>#<SPDXRef-id>` with both halves valid.
pub fn element_uri(uri: &str) -> Result<(), ValidationError> {
    let wrap = |source: ValidationError| ValidationError::InvalidElementUri {
        uri: uri.to_owned(),
        source: Box::new(source),
    };
    let (ns, id) = uri
        .rsplit_once('#')
        .ok_or_else(|| wrap(ValidationError::InvalidNamespace(uri.to_owned())))?;
    base_url(ns).map_err(wrap)?;
    element_id(id).map_err(wrap)?;
    Ok(())
}

/// An email address.
pub fn email(addr: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(addr) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(addr.to_owned()))
    }
}

/// Non-blank after trimming.
pub fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::Blank)
    } else {
        Ok(())
    }
}

/// No embedded line breaks.
pub fn single_line(text: &str) -> Result<(), ValidationError> {
    if text.contains('\n') || text.contains('\r') {
        Err(ValidationError::MultiLine(text.to_owned()))
    } else {
        Ok(())
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids() {
        assert!(element_id("SPDXRef-1").is_ok());
        assert!(element_id("SPDXRef-pkg.Alpha-2").is_ok());
        assert!(element_id("SPDXRef-").is_err());
        assert!(element_id("1").is_err());
        assert!(element_id("SPDXRef-a#b").is_err());
        assert!(element_id("SPDXRef-a:b").is_err());
    }

    #[test]
    fn license_ids() {
        assert!(license_id("LicenseRef-1").is_ok());
        assert!(license_id("SPDXRef-1").is_err());
        assert!(license_id("LicenseRef-a#b").is_err());
    }

    #[test]
    fn namespaces() {
        assert!(base_url("http://example.org/doc").is_ok());
        assert!(base_url("").is_err());
        assert!(base_url("   ").is_err());
        assert!(base_url("http://example.org/doc#frag").is_err());
    }

    #[test]
    fn element_uris() {
        assert!(element_uri("http://example.org/doc#SPDXRef-1").is_ok());
        assert!(element_uri("http://example.org/doc").is_err());
        assert!(element_uri("http://example.org/doc#nope").is_err());
        // The offending URI rides along in the error.
        match element_uri("oops").unwrap_err() {
            ValidationError::InvalidElementUri { uri, .. } => assert_eq!(uri, "oops"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn emails() {
        assert!(email("alice@example.com").is_ok());
        assert!(email("a.b-c_d@sub.example.co").is_ok());
        assert!(email("not-an-email").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("alice@example").is_err());
    }

    #[test]
    fn line_rules() {
        assert!(single_line("one line").is_ok());
        assert!(single_line("two\nlines").is_err());
        assert!(not_blank("x").is_ok());
        assert!(not_blank(" \t ").is_err());
    }
}

//! The NONE / NOASSERTION / literal tri-state.
//!
//! Many SPDX fields admit two sentinel answers alongside ordinary text:
//! NONE ("we checked, there is nothing") and NOASSERTION ("we make no
//! claim"). In the graph the sentinels are stored as canonical resource
//! URIs, never as literal strings, so `"NOASSERTION"` as copyright text
//! and the NOASSERTION sentinel remain distinguishable.

use crate::vocab;

/// A field value that is either absent-by-policy, unasserted, or present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpdxValue {
    /// The canonical NONE sentinel.
    None,
    /// The canonical NOASSERTION sentinel.
    NoAssertion,
    /// An ordinary literal value.
    Value(String),
}

impl SpdxValue {
    /// Wraps literal text. The text is stored verbatim, including text that
    /// happens to spell "NONE" or "NOASSERTION".
    pub fn of(text: impl Into<String>) -> Self {
        SpdxValue::Value(text.into())
    }

    /// Interprets a raw stored object: the canonical sentinel URIs map back
    /// to their sentinels, anything else is literal text.
    pub fn parse(raw: &str) -> Self {
        match raw {
            vocab::NONE => SpdxValue::None,
            vocab::NO_ASSERTION => SpdxValue::NoAssertion,
            other => SpdxValue::Value(other.to_owned()),
        }
    }

    /// The literal text, or the canonical sentinel URI for sentinels.
    pub fn literal_or_uri(&self) -> &str {
        match self {
            SpdxValue::None => vocab::NONE,
            SpdxValue::NoAssertion => vocab::NO_ASSERTION,
            SpdxValue::Value(text) => text,
        }
    }

    /// The literal text when present.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            SpdxValue::Value(text) => Some(text),
            _ => None,
        }
    }

    /// True for either sentinel.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, SpdxValue::Value(_))
    }
}

/// An absent property reads as NOASSERTION.
impl Default for SpdxValue {
    fn default() -> Self {
        SpdxValue::NoAssertion
    }
}

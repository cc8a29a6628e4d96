//! Document creators: people, organizations, and tools, with the fixed
//! textual forms SPDX stores them under.
//!
//! `Person: Alice (alice@example.com)` / `Organization: Acme ()` /
//! `Tool: scanner-1.2`. Person and organization emails are optional and
//! render as empty parentheses when absent.

use std::fmt;
use std::str::FromStr;

use crate::validate::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Creator {
    Person { name: String, email: Option<String> },
    Organization { name: String, email: Option<String> },
    Tool { name: String },
}

impl Creator {
    pub fn person(name: impl Into<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let (name, email) = checked(name.into(), email)?;
        Ok(Creator::Person { name, email })
    }

    pub fn organization(
        name: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self, ValidationError> {
        let (name, email) = checked(name.into(), email)?;
        Ok(Creator::Organization { name, email })
    }

    pub fn tool(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate::not_blank(&name)?;
        validate::single_line(&name)?;
        Ok(Creator::Tool { name })
    }
}

fn checked(name: String, email: Option<String>) -> Result<(String, Option<String>), ValidationError> {
    validate::not_blank(&name)?;
    validate::single_line(&name)?;
    if let Some(addr) = &email {
        validate::email(addr)?;
    }
    Ok((name, email))
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Creator::Person { name, email } => {
                write!(f, "Person: {name} ({})", email.as_deref().unwrap_or(""))
            }
            Creator::Organization { name, email } => {
                write!(f, "Organization: {name} ({})", email.as_deref().unwrap_or(""))
            }
            Creator::Tool { name } => write!(f, "Tool: {name}"),
        }
    }
}

impl FromStr for Creator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || ValidationError::InvalidCreator(s.to_owned());
        if let Some(rest) = s.strip_prefix("Tool: ") {
            return Creator::tool(rest.trim());
        }
        let (kind, rest) = s.split_once(": ").ok_or_else(unparseable)?;
        let (name, email) = match rest.rsplit_once(" (") {
            Some((name, tail)) => {
                let addr = tail.strip_suffix(')').ok_or_else(unparseable)?;
                let email = if addr.is_empty() { None } else { Some(addr.to_owned()) };
                (name.trim().to_owned(), email)
            }
            None => (rest.trim().to_owned(), None),
        };
        match kind {
            "Person" => Creator::person(name, email),
            "Organization" => Creator::organization(name, email),
            _ => Err(unparseable()),
        }
    }
}

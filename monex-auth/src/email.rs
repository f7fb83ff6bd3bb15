use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Character set and label rule of the HTML `type=email` grammar.
static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+$").unwrap());
static DOMAIN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").unwrap()
});

/// An email address of the form `local@label.label`, where every domain
/// label is 1-63 letters, digits or inner hyphens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

#[derive(Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("'{0}' is not a valid email: must contain exactly one '@'")]
    InvalidFormat(String),
    #[error("'{0}' is not a valid email: missing local part")]
    MissingLocalPart(String),
    #[error("'{0}' is not a valid email: invalid character in local part")]
    InvalidLocalPart(String),
    #[error("'{0}' is not a valid email: invalid domain part")]
    InvalidDomainPart(String),
    #[error("'{0}' is not a valid email: contains whitespace")]
    Whitespace(String),
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace(value.to_string()));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(EmailError::InvalidFormat(value.to_string()));
        };

        if domain.contains('@') {
            return Err(EmailError::InvalidFormat(value.to_string()));
        }

        if local.is_empty() {
            return Err(EmailError::MissingLocalPart(value.to_string()));
        }

        if !LOCAL_PART.is_match(local) {
            return Err(EmailError::InvalidLocalPart(value.to_string()));
        }

        let labels_valid = domain.split('.').all(|label| DOMAIN_LABEL.is_match(label));
        if !domain.contains('.') || !labels_valid {
            return Err(EmailError::InvalidDomainPart(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl Deref for Email {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::hash::{HashError, PasswordHasher};

/// A plaintext password. Never printed, never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

/// A normalized, validated registrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
    pub password: Password,
}

/// The persisted form of a [`UserRecord`]: the password is replaced by its hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
    password_hash: String,
}

impl StoredUser {
    /// Hashes the record's password. This is the only way to build a
    /// `StoredUser`, so stores never see plaintext.
    pub fn seal(record: UserRecord, hasher: &PasswordHasher) -> Result<Self, HashError> {
        let password_hash = hasher.hash(record.password.as_ref())?;
        Ok(Self {
            first_name: record.first_name,
            middle_name: record.middle_name,
            last_name: record.last_name,
            username: record.username,
            email: record.email,
            phone: record.phone,
            password_hash,
        })
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn verify_password(&self, password: &str, hasher: &PasswordHasher) -> bool {
        hasher.verify(password, &self.password_hash)
    }

    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl fmt::Debug for StoredUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredUser")
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

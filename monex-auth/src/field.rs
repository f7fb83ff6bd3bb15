use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// Every input on the registration form, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Username,
    Email,
    Phone,
    Dob,
    Gender,
    SelfDescribe,
    Password,
    ConfirmPassword,
    Terms,
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name: &'static str = self.into();
        serializer.serialize_str(name)
    }
}

/// Inputs on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum LoginField {
    Login,
    Password,
}

impl Serialize for LoginField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name: &'static str = self.into();
        serializer.serialize_str(name)
    }
}

/// Field-scoped error messages, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<K: Ord = Field>(BTreeMap<K, String>);

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord + Copy> FieldErrors<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: K) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first field in error, by field order.
    pub fn first(&self) -> Option<K> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<K: Ord + Copy + fmt::Display> fmt::Display for FieldErrors<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

use serde::Serialize;
use strum::Display;

use crate::rules::{has_digit, has_symbol, has_uppercase, MIN_PASSWORD_LEN};

/// Feedback shown next to the password while typing. Never gates submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn classify(password: &str) -> Self {
        if password.chars().count() < MIN_PASSWORD_LEN {
            Self::Weak
        } else if has_uppercase(password) && has_digit(password) && has_symbol(password) {
            Self::Strong
        } else {
            Self::Medium
        }
    }
}

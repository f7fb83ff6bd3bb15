use crate::field::{FieldErrors, LoginField};
use crate::hash::PasswordHasher;
use crate::normalize::strip_dashes;
use crate::user::StoredUser;

/// The one message shown for any failed login.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(StoredUser),
    InvalidCredentials,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// Presence checks run before any matching.
pub fn check_login_form(login: &str, password: &str) -> Result<(), FieldErrors<LoginField>> {
    let mut errors = FieldErrors::new();
    if login.is_empty() {
        errors.insert(LoginField::Login, "This field is required");
    }
    if password.is_empty() {
        errors.insert(LoginField::Password, "Password is required");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Matches a login attempt against the stored record, if any.
///
/// Dashes are dropped from the identifier and from the stored phone before
/// comparing, so `555-123-4567` and `5551234567` are the same login. Unknown
/// identifiers and wrong passwords are indistinguishable to the caller.
pub fn match_login(
    identifier: &str,
    password: &str,
    stored: Option<&StoredUser>,
    hasher: &PasswordHasher,
) -> LoginOutcome {
    let Some(user) = stored else {
        tracing::warn!("Login attempted with no registered user");
        return LoginOutcome::InvalidCredentials;
    };

    let identifier = strip_dashes(identifier);
    let identifier_matches = identifier == user.username
        || identifier == *user.email
        || identifier == strip_dashes(&user.phone);

    if identifier_matches && user.verify_password(password, hasher) {
        tracing::info!("User {} logged in", user.username);
        LoginOutcome::Success(user.clone())
    } else {
        tracing::warn!("Rejected login attempt");
        LoginOutcome::InvalidCredentials
    }
}

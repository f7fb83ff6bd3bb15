use thiserror::Error;
use time::Date;

use crate::field::FieldErrors;
use crate::form::RawFormInput;
use crate::hash::{HashError, PasswordHasher};
use crate::store::{CredentialStore, StoreError};
use crate::user::StoredUser;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration form is invalid: {0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates `input` and, if it holds, overwrites the store with the new user.
#[tracing::instrument(skip_all, fields(username = %input.username))]
pub fn register<S: CredentialStore + ?Sized>(
    store: &mut S,
    hasher: &PasswordHasher,
    input: &RawFormInput,
    today: Date,
) -> Result<StoredUser, RegistrationError> {
    let record = input.validate(today).map_err(|errors| {
        tracing::debug!("Registration rejected: {}", errors);
        RegistrationError::Invalid(errors)
    })?;

    let user = StoredUser::seal(record, hasher)?;
    store.save(user.clone())?;
    tracing::info!("Registered user {}", user.username);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::login::{match_login, LoginOutcome};
    use crate::store::MemoryStore;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 18);

    fn input(username: &str) -> RawFormInput {
        RawFormInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: username.to_string(),
            email: "ada@example.com".to_string(),
            phone: "555 123 4567".to_string(),
            dob: "1990-12-10".to_string(),
            gender: "Female".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn invalid_form_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let mut bad = input("ada1");
        bad.terms = false;

        let err = register(&mut store, &PasswordHasher::insecure_fast(), &bad, TODAY).unwrap_err();
        match err {
            RegistrationError::Invalid(errors) => assert!(errors.contains(Field::Terms)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn second_registration_replaces_the_first() {
        let hasher = PasswordHasher::insecure_fast();
        let mut store = MemoryStore::new();
        register(&mut store, &hasher, &input("ada1"), TODAY).unwrap();
        register(&mut store, &hasher, &input("ada2"), TODAY).unwrap();

        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.username, "ada2");
        assert_eq!(stored.phone, "555-123-4567");
    }

    #[test]
    fn registered_user_can_log_in_by_phone() {
        let hasher = PasswordHasher::insecure_fast();
        let mut store = MemoryStore::new();
        register(&mut store, &hasher, &input("ada1"), TODAY).unwrap();

        let stored = store.load().unwrap();
        let outcome = match_login("5551234567", "Abc12345!", stored.as_ref(), &hasher);
        assert!(matches!(outcome, LoginOutcome::Success(user) if user.username == "ada1"));
    }
}

use monex_auth::{
    check_login_form, match_login, register, CredentialStore, FieldErrors, FileStore, LoginField,
    LoginOutcome, MemoryStore, PasswordHasher, RawFormInput, RegistrationError, StoredUser,
};
use time::Date;

/// Credential store plus the hasher guarding its write side.
pub struct Backend {
    store: Box<dyn CredentialStore + Send>,
    hasher: PasswordHasher,
}

impl Backend {
    pub fn new(store: Box<dyn CredentialStore + Send>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Persistent store on disk with production hashing cost.
    pub fn file(store: FileStore) -> Self {
        tracing::info!("Using credential store at {}", store.path().display());
        Self::new(Box::new(store), PasswordHasher::default())
    }

    /// In-memory store, forgotten on exit. Cheap hashing so dev runs stay snappy.
    pub fn dev() -> Self {
        tracing::info!("Using in-memory credential store");
        Self::new(Box::new(MemoryStore::new()), PasswordHasher::insecure_fast())
    }

    pub fn register(
        &mut self,
        input: &RawFormInput,
        today: Date,
    ) -> Result<StoredUser, RegistrationError> {
        register(self.store.as_mut(), &self.hasher, input, today)
    }

    /// Form checks first, then matching. A store that cannot be read counts
    /// as having no user.
    pub fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<LoginOutcome, FieldErrors<LoginField>> {
        check_login_form(identifier, password)?;

        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!("Could not read stored user: {}", err);
                None
            }
        };
        Ok(match_login(identifier, password, stored.as_ref(), &self.hasher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monex_auth::INVALID_CREDENTIALS;
    use time::macros::date;

    fn valid_input() -> RawFormInput {
        let mut input = RawFormInput {
            gender: "Non-binary".to_string(),
            terms: true,
            ..Default::default()
        };
        input.set(monex_auth::Field::FirstName, "grace");
        input.set(monex_auth::Field::LastName, "hopper");
        input.set(monex_auth::Field::Username, "ghopper");
        input.set(monex_auth::Field::Email, "grace@navy.mil");
        input.set(monex_auth::Field::Phone, "2025550143");
        input.set(monex_auth::Field::Dob, "1990-01-01");
        input.set(monex_auth::Field::Password, "Cobol#1959");
        input.set(monex_auth::Field::ConfirmPassword, "Cobol#1959");
        input
    }

    fn file_backend(dir: &tempfile::TempDir) -> Backend {
        Backend::new(
            Box::new(FileStore::in_dir(dir.path())),
            PasswordHasher::insecure_fast(),
        )
    }

    #[test]
    fn registered_user_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        file_backend(&dir)
            .register(&valid_input(), date!(2026 - 10 - 18))
            .unwrap();

        let backend = file_backend(&dir);
        for identifier in ["ghopper", "grace@navy.mil", "202-555-0143"] {
            let outcome = backend.login(identifier, "Cobol#1959").unwrap();
            assert!(outcome.is_success(), "{identifier} should log in");
        }
    }

    #[test]
    fn wrong_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = file_backend(&dir);
        backend
            .register(&valid_input(), date!(2026 - 10 - 18))
            .unwrap();

        let outcome = backend.login("ghopper", "cobol#1959").unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
        assert_eq!(INVALID_CREDENTIALS, "Invalid login credentials");
    }

    #[test]
    fn corrupt_store_reads_as_no_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        let backend = file_backend(&dir);
        let outcome = backend.login("ghopper", "Cobol#1959").unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    }

    #[test]
    fn blank_password_fails_form_check() {
        let backend = Backend::dev();
        let errors = backend.login("ghopper", "").unwrap_err();
        assert_eq!(errors.get(LoginField::Password), Some("Password is required"));
    }
}

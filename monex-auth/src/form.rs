use serde::Deserialize;
use time::Date;

use crate::email::Email;
use crate::field::{Field, FieldErrors};
use crate::normalize::normalize;
use crate::rules::{evaluate, FormValues, REGISTRATION_RULES};
use crate::strength::PasswordStrength;
use crate::user::{Password, UserRecord};

/// One registration attempt, exactly as typed.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFormInput {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub self_describe: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl std::fmt::Debug for RawFormInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawFormInput")
            .field("first_name", &self.first_name)
            .field("middle_name", &self.middle_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("dob", &self.dob)
            .field("gender", &self.gender)
            .field("self_describe", &self.self_describe)
            .field("password", &"[redacted]")
            .field("confirm_password", &"[redacted]")
            .field("terms", &self.terms)
            .finish()
    }
}

impl FormValues for RawFormInput {
    fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Dob => &self.dob,
            Field::Gender => &self.gender,
            Field::SelfDescribe => &self.self_describe,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Terms => "",
        }
    }

    fn checked(&self, field: Field) -> bool {
        field == Field::Terms && self.terms
    }
}

impl RawFormInput {
    /// Mutable access to a text field; `None` for the terms flag.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Dob => &mut self.dob,
            Field::Gender => &mut self.gender,
            Field::SelfDescribe => &mut self.self_describe,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Terms => return None,
        })
    }

    /// Replaces a text field with its normalized form of `raw`.
    pub fn set(&mut self, field: Field, raw: &str) {
        if let Some(slot) = self.text_mut(field) {
            *slot = normalize(field, raw);
        }
    }

    /// Every text field passed through its normalizer.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        for field in [
            Field::FirstName,
            Field::MiddleName,
            Field::LastName,
            Field::Username,
            Field::Email,
            Field::Phone,
            Field::SelfDescribe,
        ] {
            out.set(field, self.text(field));
        }
        out
    }

    /// Live validation: normalizes, then reports every broken field.
    pub fn errors(&self, today: Date) -> FieldErrors {
        evaluate(REGISTRATION_RULES, &self.normalized(), today)
    }

    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::classify(&self.password)
    }

    /// Normalizes and validates the whole form.
    ///
    /// Either every rule holds and a [`UserRecord`] comes back, or the error
    /// map names each broken field.
    pub fn validate(&self, today: Date) -> Result<UserRecord, FieldErrors> {
        let form = self.normalized();
        let mut errors = evaluate(REGISTRATION_RULES, &form, today);

        let email = match Email::try_from(form.email.as_str()) {
            Ok(email) => Some(email),
            Err(err) => {
                tracing::debug!("Email rejected: {}", err);
                None
            }
        };

        match email {
            Some(email) if errors.is_empty() => Ok(UserRecord {
                first_name: form.first_name,
                middle_name: Some(form.middle_name).filter(|m| !m.is_empty()),
                last_name: form.last_name,
                username: form.username,
                email,
                phone: form.phone,
                password: Password::new(form.password),
            }),
            Some(_) => Err(errors),
            None => {
                errors.insert(Field::Email, "Enter a valid email address");
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 18);

    fn valid_input() -> RawFormInput {
        RawFormInput {
            first_name: "james".to_string(),
            middle_name: "".to_string(),
            last_name: "de la cruz".to_string(),
            username: "j.cruz97".to_string(),
            email: "MyName@Example.com".to_string(),
            phone: "8424769610".to_string(),
            dob: "1997-04-12".to_string(),
            gender: "Male".to_string(),
            self_describe: "".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            terms: true,
        }
    }

    #[test]
    fn valid_form_produces_normalized_record() {
        let record = valid_input().validate(TODAY).unwrap();
        assert_eq!(record.first_name, "James");
        assert_eq!(record.middle_name, None);
        assert_eq!(record.last_name, "De la cruz");
        assert_eq!(&*record.email, "myname@example.com");
        assert_eq!(record.phone, "842-476-9610");
        assert_eq!(record.password.as_ref(), "Abc12345!");
    }

    #[test]
    fn malformed_email_blocks_the_record() {
        for bad in ["a@b..com", "a<b>@x.com", "a@-x.com"] {
            let mut input = valid_input();
            input.email = bad.to_string();
            let errors = input.validate(TODAY).unwrap_err();
            assert_eq!(
                errors.get(Field::Email),
                Some("Enter a valid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn missing_uppercase_reports_uppercase_rule() {
        let mut input = valid_input();
        input.password = "abc12345!".to_string();
        input.confirm_password = "abc12345!".to_string();
        let errors = input.validate(TODAY).unwrap_err();
        assert_eq!(
            errors.get(Field::Password),
            Some("Must contain one uppercase letter")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_form_reports_every_required_field_at_once() {
        let errors = RawFormInput::default().validate(TODAY).unwrap_err();
        for field in [
            Field::FirstName,
            Field::LastName,
            Field::Username,
            Field::Email,
            Field::Phone,
            Field::Dob,
            Field::Gender,
            Field::Password,
            Field::ConfirmPassword,
            Field::Terms,
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert!(!errors.contains(Field::MiddleName));
        assert!(!errors.contains(Field::SelfDescribe));
        assert_eq!(errors.get(Field::Dob), Some("Date of birth is required"));
        assert_eq!(
            errors.get(Field::Terms),
            Some("You must accept terms & privacy policy")
        );
    }

    #[test]
    fn self_describe_required_only_for_self_describe_gender() {
        let mut input = valid_input();
        input.gender = "Prefer to self-describe".to_string();
        let errors = input.validate(TODAY).unwrap_err();
        assert_eq!(
            errors.get(Field::SelfDescribe),
            Some("Please describe your gender")
        );

        input.self_describe = "agender".to_string();
        assert!(input.validate(TODAY).is_ok());

        for gender in ["Male", "Female", "Non-binary", "Prefer not to disclose"] {
            let mut input = valid_input();
            input.gender = gender.to_string();
            assert!(input.validate(TODAY).is_ok(), "{gender}");
        }
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let mut input = valid_input();
        input.gender = "Robot".to_string();
        let errors = input.validate(TODAY).unwrap_err();
        assert_eq!(errors.get(Field::Gender), Some("Select a gender from the list"));
    }

    #[test]
    fn eighteenth_birthday_today_is_eligible() {
        let mut input = valid_input();
        input.dob = "2008-10-18".to_string();
        assert!(input.validate(TODAY).is_ok());
    }

    #[test]
    fn eighteenth_birthday_tomorrow_is_not() {
        let mut input = valid_input();
        input.dob = "2008-10-19".to_string();
        let errors = input.validate(TODAY).unwrap_err();
        assert_eq!(
            errors.get(Field::Dob),
            Some("You must be at least 18 years old")
        );
    }

    #[test]
    fn unparseable_dob_reads_as_missing() {
        let mut input = valid_input();
        input.dob = "yesterday".to_string();
        assert_eq!(
            input.validate(TODAY).unwrap_err().get(Field::Dob),
            Some("Date of birth is required")
        );
    }

    #[test]
    fn mismatched_confirmation_is_reported() {
        let mut input = valid_input();
        input.confirm_password = "Abc12345?".to_string();
        assert_eq!(
            input.validate(TODAY).unwrap_err().get(Field::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn short_phone_fails_format_rule() {
        let mut input = valid_input();
        input.phone = "555-1234".to_string();
        assert_eq!(
            input.validate(TODAY).unwrap_err().get(Field::Phone),
            Some("Phone number must be formatted as 123-456-7890")
        );
    }

    #[test]
    fn username_length_counts_after_whitespace_is_stripped() {
        let mut input = valid_input();
        input.username = " a b c ".to_string();
        assert_eq!(
            input.validate(TODAY).unwrap_err().get(Field::Username),
            Some("Username must be at least 4 characters")
        );
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut input = valid_input();
        input.terms = false;
        let errors = input.validate(TODAY).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Terms));
    }

    #[test]
    fn middle_name_kept_when_given() {
        let mut input = valid_input();
        input.middle_name = "cameron".to_string();
        let record = input.validate(TODAY).unwrap();
        assert_eq!(record.middle_name.as_deref(), Some("Cameron"));
    }

    #[test]
    fn set_normalizes_as_typed() {
        let mut input = RawFormInput::default();
        input.set(Field::Phone, "555123");
        assert_eq!(input.phone, "555-123");
        input.set(Field::Phone, "555-1234");
        assert_eq!(input.phone, "555-123-4");
        input.set(Field::FirstName, "a1b");
        assert_eq!(input.first_name, "Ab");
    }

    #[test]
    fn debug_output_hides_passwords() {
        let debug = format!("{:?}", valid_input());
        assert!(!debug.contains("Abc12345!"));
    }
}

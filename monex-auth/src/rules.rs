//! Declarative registration rules.
//!
//! The form is described by [`REGISTRATION_RULES`]: one entry per field, each
//! with a presence requirement and an ordered list of checks. Evaluation never
//! stops at the first broken field, but within a field only the first failing
//! check is reported.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use time::{macros::format_description, Date};

use crate::email::Email;
use crate::field::{Field, FieldErrors};
use crate::gender::{Gender, DESCRIBED_GENDERS};

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_AGE: i32 = 18;
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

// Regex patterns compiled once
static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static OPTIONAL_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").unwrap());
static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{}]", regex::escape(PASSWORD_SYMBOLS))).unwrap());

/// Named patterns usable from the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Letters,
    OptionalLetters,
    LettersAndSpaces,
    Phone,
    Uppercase,
    Digit,
    Symbol,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::Letters => &LETTERS,
            Pattern::OptionalLetters => &OPTIONAL_LETTERS,
            Pattern::LettersAndSpaces => &LETTERS_AND_SPACES,
            Pattern::Phone => &PHONE,
            Pattern::Uppercase => &UPPERCASE,
            Pattern::Digit => &DIGIT,
            Pattern::Symbol => &SYMBOL,
        }
    }

    pub fn is_match(self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

pub fn has_uppercase(value: &str) -> bool {
    Pattern::Uppercase.is_match(value)
}

pub fn has_digit(value: &str) -> bool {
    Pattern::Digit.is_match(value)
}

pub fn has_symbol(value: &str) -> bool {
    Pattern::Symbol.is_match(value)
}

/// When a field must be filled in.
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    Required(&'static str),
    /// Empty values skip the checks.
    Optional,
    /// Checks always run, whatever the text value (used for flags).
    Always,
    /// Required, and checked, only while `field` holds one of `values`.
    /// Otherwise the field is ignored entirely.
    RequiredWhen {
        field: Field,
        values: &'static [&'static str],
        message: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum Check {
    Matches(Pattern, &'static str),
    MinLength(usize, &'static str),
    Email(&'static str),
    /// Parses as a `YYYY-MM-DD` calendar date.
    Date(&'static str),
    /// Date of birth at least this many whole years before today.
    MinAge(i32, &'static str),
    Gender(&'static str),
    SameAs(Field, &'static str),
    Accepted(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub presence: Presence,
    pub checks: &'static [Check],
}

/// Read access to the values being validated.
pub trait FormValues {
    fn text(&self, field: Field) -> &str;
    fn checked(&self, field: Field) -> bool;
}

pub static REGISTRATION_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::FirstName,
        presence: Presence::Required("First name is required"),
        checks: &[Check::Matches(
            Pattern::Letters,
            "First name must only contain letters (no spaces, numbers, or symbols)",
        )],
    },
    FieldRule {
        field: Field::MiddleName,
        presence: Presence::Optional,
        checks: &[Check::Matches(
            Pattern::OptionalLetters,
            "Middle name must only contain letters (no spaces, numbers, or symbols)",
        )],
    },
    FieldRule {
        field: Field::LastName,
        presence: Presence::Required("Last name is required"),
        checks: &[Check::Matches(
            Pattern::LettersAndSpaces,
            "Last name must only contain letters and spaces (no numbers or symbols)",
        )],
    },
    FieldRule {
        field: Field::Username,
        presence: Presence::Required("Username is required"),
        checks: &[Check::MinLength(
            MIN_USERNAME_LEN,
            "Username must be at least 4 characters",
        )],
    },
    FieldRule {
        field: Field::Email,
        presence: Presence::Required("Email is required"),
        checks: &[Check::Email("Enter a valid email address")],
    },
    FieldRule {
        field: Field::Phone,
        presence: Presence::Required("Phone number is required"),
        checks: &[Check::Matches(
            Pattern::Phone,
            "Phone number must be formatted as 123-456-7890",
        )],
    },
    FieldRule {
        field: Field::Dob,
        presence: Presence::Required("Date of birth is required"),
        checks: &[
            Check::Date("Date of birth is required"),
            Check::MinAge(MIN_AGE, "You must be at least 18 years old"),
        ],
    },
    FieldRule {
        field: Field::Gender,
        presence: Presence::Required("Gender is required"),
        checks: &[Check::Gender("Select a gender from the list")],
    },
    FieldRule {
        field: Field::SelfDescribe,
        presence: Presence::RequiredWhen {
            field: Field::Gender,
            values: DESCRIBED_GENDERS,
            message: "Please describe your gender",
        },
        checks: &[Check::Matches(
            Pattern::LettersAndSpaces,
            "Only letters and spaces are allowed",
        )],
    },
    FieldRule {
        field: Field::Password,
        presence: Presence::Required("Password is required"),
        checks: &[
            Check::Matches(Pattern::Uppercase, "Must contain one uppercase letter"),
            Check::Matches(Pattern::Digit, "Must contain one number"),
            Check::Matches(Pattern::Symbol, "Must contain one symbol"),
            Check::MinLength(MIN_PASSWORD_LEN, "Must be at least 8 characters"),
        ],
    },
    FieldRule {
        field: Field::ConfirmPassword,
        presence: Presence::Required("Please confirm your password"),
        checks: &[Check::SameAs(Field::Password, "Passwords must match")],
    },
    FieldRule {
        field: Field::Terms,
        presence: Presence::Always,
        checks: &[Check::Accepted("You must accept terms & privacy policy")],
    },
];

/// Parses the `YYYY-MM-DD` text produced by a date input.
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Whole years from `birth` to `today`; negative for future dates.
pub fn age_on(birth: Date, today: Date) -> i32 {
    let mut age = today.year() - birth.year();
    let birthday_pending = (today.month() as u8, today.day()) < (birth.month() as u8, birth.day());
    if birthday_pending {
        age -= 1;
    }
    age
}

impl FieldRule {
    /// The message of the first failing requirement, if any.
    pub fn first_failure<V: FormValues + ?Sized>(
        &self,
        values: &V,
        today: Date,
    ) -> Option<&'static str> {
        let value = values.text(self.field);

        match self.presence {
            Presence::Required(message) if value.is_empty() => return Some(message),
            Presence::Optional if value.is_empty() => return None,
            Presence::RequiredWhen {
                field,
                values: triggers,
                message,
            } => {
                if !triggers.contains(&values.text(field)) {
                    return None;
                }
                if value.is_empty() {
                    return Some(message);
                }
            }
            _ => {}
        }

        self.checks
            .iter()
            .find(|check| !check.passes(self.field, value, values, today))
            .map(Check::message)
    }
}

impl Check {
    fn passes<V: FormValues + ?Sized>(
        &self,
        field: Field,
        value: &str,
        values: &V,
        today: Date,
    ) -> bool {
        match *self {
            Check::Matches(pattern, _) => pattern.is_match(value),
            Check::MinLength(min, _) => value.chars().count() >= min,
            Check::Email(_) => Email::try_from(value).is_ok(),
            Check::Date(_) => parse_date(value).is_some(),
            Check::MinAge(min, _) => parse_date(value).is_some_and(|dob| age_on(dob, today) >= min),
            Check::Gender(_) => Gender::from_str(value).is_ok(),
            Check::SameAs(other, _) => value == values.text(other),
            Check::Accepted(_) => values.checked(field),
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Check::Matches(_, message)
            | Check::MinLength(_, message)
            | Check::Email(message)
            | Check::Date(message)
            | Check::MinAge(_, message)
            | Check::Gender(message)
            | Check::SameAs(_, message)
            | Check::Accepted(message) => message,
        }
    }
}

/// Runs every rule against `values` and collects one message per broken field.
pub fn evaluate<V: FormValues + ?Sized>(rules: &[FieldRule], values: &V, today: Date) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if let Some(message) = rule.first_failure(values, today) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

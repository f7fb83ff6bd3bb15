//! Live input normalization.
//!
//! Each function here maps raw keyboard input to the canonical form shown in
//! the field and later validated. All of them are idempotent.

use crate::field::Field;

/// Normalizes `raw` for the given registration field.
///
/// Fields without a normalizer (passwords, date of birth, gender, terms) are
/// returned untouched.
pub fn normalize(field: Field, raw: &str) -> String {
    match field {
        Field::FirstName => first_name(raw),
        Field::MiddleName | Field::LastName | Field::SelfDescribe => spaced_name(raw),
        Field::Username => username(raw),
        Field::Email => email(raw),
        Field::Phone => phone(raw),
        Field::Dob
        | Field::Gender
        | Field::Password
        | Field::ConfirmPassword
        | Field::Terms => raw.to_string(),
    }
}

/// Keeps ASCII letters only, then capitalizes.
pub fn first_name(raw: &str) -> String {
    capitalize_first(&raw.chars().filter(char::is_ascii_alphabetic).collect::<String>())
}

/// Keeps ASCII letters and spaces, then capitalizes.
pub fn spaced_name(raw: &str) -> String {
    capitalize_first(
        &raw.chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
            .collect::<String>(),
    )
}

pub fn username(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn email(raw: &str) -> String {
    raw.to_lowercase()
}

/// Formats a phone number as the digits are typed.
///
/// ```
/// use monex_auth::normalize::phone;
///
/// assert_eq!(phone("555"), "555");
/// assert_eq!(phone("5551"), "555-1");
/// assert_eq!(phone("(555) 123 4567"), "555-123-4567");
/// ```
pub fn phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        len => format!(
            "{}-{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        ),
    }
}

/// Drops dash separators, as used when comparing phone numbers.
pub fn strip_dashes(value: &str) -> String {
    value.replace('-', "")
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn first_name_drops_spaces_digits_and_symbols() {
        assert_eq!(first_name("ja mes9!"), "James");
        assert_eq!(first_name("éloise"), "Loise");
        assert_eq!(first_name("123"), "");
    }

    #[test]
    fn spaced_names_keep_spaces() {
        assert_eq!(spaced_name("de la cruz"), "De la cruz");
        assert_eq!(spaced_name("o'neil-2"), "Oneil");
    }

    #[test]
    fn username_strips_all_whitespace() {
        assert_eq!(username(" j.cruz 97\t"), "j.cruz97");
    }

    #[test]
    fn email_is_lowercased() {
        assert_eq!(email("MyName@Example.COM"), "myname@example.com");
    }

    #[test]
    fn phone_uses_length_buckets() {
        assert_eq!(phone(""), "");
        assert_eq!(phone("12"), "12");
        assert_eq!(phone("123456"), "123-456");
        assert_eq!(phone("1234567"), "123-456-7");
        assert_eq!(phone("8424769610"), "842-476-9610");
    }

    #[test]
    fn phone_drops_digits_past_ten() {
        assert_eq!(phone("842476961055"), "842-476-9610");
    }

    #[test]
    fn phone_is_idempotent_for_every_digit_count() {
        let all = "98765432109876";
        for len in 0..=all.len() {
            let once = phone(&all[..len]);
            assert_eq!(phone(&once), once, "input length {len}");

            let shape_ok = match len {
                0..=3 => once.chars().all(|c| c.is_ascii_digit()),
                4..=6 => once.len() == len + 1 && once.as_bytes()[3] == b'-',
                _ => {
                    once.as_bytes()[3] == b'-'
                        && once.as_bytes()[7] == b'-'
                        && once.matches('-').count() == 2
                }
            };
            assert!(shape_ok, "unexpected shape {once:?} for length {len}");
        }
    }

    #[test]
    fn every_field_normalizer_is_idempotent() {
        let samples = [
            "  mary ann 3rd ",
            "Foo.Bar@Baz.io",
            "555 123-4567 ext 9",
            "Abc12345!",
            "",
            "x",
        ];
        for field in Field::iter() {
            for raw in samples {
                let once = normalize(field, raw);
                assert_eq!(normalize(field, &once), once, "{field} on {raw:?}");
            }
        }
    }

    #[test]
    fn passwords_are_not_touched() {
        assert_eq!(normalize(Field::Password, " Ab c1! "), " Ab c1! ");
    }

    #[test]
    fn strip_dashes_removes_every_separator() {
        assert_eq!(strip_dashes("555-123-4567"), "5551234567");
    }
}

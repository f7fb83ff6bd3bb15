use std::collections::{BTreeSet, HashMap};

use monex_auth::{normalize::normalize, Field, FieldErrors, Gender, PasswordStrength, RawFormInput};
use strum::IntoEnumIterator;
use time::Date;

use super::{RegisterFocus, TextInput, MASK_SEPARATOR};

/// State of the registration screen.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    inputs: HashMap<Field, TextInput>,
    pub gender: Option<Gender>,
    pub terms: bool,
    pub focus: RegisterFocus,
    /// Fields edited since the form was opened. Live errors are only shown
    /// for these until a full validation is requested.
    touched: BTreeSet<Field>,
    show_all_errors: bool,
    errors: FieldErrors,
    pub strength: Option<PasswordStrength>,
    /// Set after a successful submit, until the redirect to login fires.
    pub confirmation_sent: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            gender: None,
            terms: false,
            focus: RegisterFocus::Field(Field::FirstName),
            touched: BTreeSet::new(),
            show_all_errors: false,
            errors: FieldErrors::new(),
            strength: None,
            confirmation_sent: false,
        }
    }

    pub fn input(&self, field: Field) -> Option<&TextInput> {
        self.inputs.get(&field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.inputs
            .get(&field)
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    /// The form as the validator sees it.
    pub fn to_raw(&self) -> RawFormInput {
        let mut raw = RawFormInput {
            gender: self.gender.map(|g| g.to_string()).unwrap_or_default(),
            terms: self.terms,
            ..Default::default()
        };
        for (field, input) in &self.inputs {
            if let Some(slot) = raw.text_mut(*field) {
                *slot = input.value.clone();
            }
        }
        raw
    }

    /// Whether the self-describe input is currently part of the form.
    pub fn self_describe_visible(&self) -> bool {
        self.gender.is_some_and(Gender::requires_description)
    }

    /// Fields that take keyboard focus, in order.
    pub fn focus_order(&self) -> Vec<RegisterFocus> {
        Field::iter()
            .filter(|f| *f != Field::SelfDescribe || self.self_describe_visible())
            .map(RegisterFocus::Field)
            .chain(std::iter::once(RegisterFocus::Submit))
            .collect()
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            RegisterFocus::Field(field) => Some(field),
            RegisterFocus::Submit => None,
        }
    }

    fn focused_text(&mut self) -> Option<(Field, &mut TextInput)> {
        let field = self.focused_field()?;
        if matches!(field, Field::Gender | Field::Terms) {
            return None;
        }
        Some((field, self.inputs.entry(field).or_default()))
    }

    /// Type a character into the focused field, normalizing as we go.
    pub fn input_char(&mut self, c: char, today: Date) {
        if let Some((field, input)) = self.focused_text() {
            input.insert(c);
            let normalized = normalize(field, &input.value);
            input.replace_keep_tail(normalized);
            self.touch(field, today);
        }
    }

    pub fn backspace(&mut self, today: Date) {
        if let Some((field, input)) = self.focused_text() {
            let over_separator = input.char_before_cursor() == Some(MASK_SEPARATOR);
            let before = input.value.clone();
            input.backspace();
            let mut normalized = normalize(field, &input.value);
            // A mask puts a deleted separator straight back, so take the
            // character in front of it as well.
            if over_separator && normalized == before {
                input.backspace();
                normalized = normalize(field, &input.value);
            }
            input.replace_keep_tail(normalized);
            self.touch(field, today);
        }
    }

    pub fn move_cursor(&mut self, left: bool) {
        if let Some((_, input)) = self.focused_text() {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    /// Step through the gender options. Wraps around; starts from the first.
    pub fn cycle_gender(&mut self, forward: bool, today: Date) {
        let options: Vec<Gender> = Gender::iter().collect();
        let next = match self.gender.and_then(|g| options.iter().position(|o| *o == g)) {
            None if forward => 0,
            None => options.len() - 1,
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
        };
        self.gender = Some(options[next]);
        self.touch(Field::Gender, today);
    }

    /// Toggle the terms checkbox, then validate the whole form and jump to
    /// the first field in error, if any.
    pub fn toggle_terms(&mut self, today: Date) {
        self.terms = !self.terms;
        self.touched.insert(Field::Terms);
        self.reveal_all_errors(today);
    }

    /// Show every current error and move focus to the first one.
    pub fn reveal_all_errors(&mut self, today: Date) {
        self.show_all_errors = true;
        self.revalidate(today);
        if let Some(field) = self.errors.first() {
            self.focus = RegisterFocus::Field(field);
        }
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.show_all_errors = true;
        if let Some(field) = errors.first() {
            self.focus = RegisterFocus::Field(field);
        }
        self.errors = errors;
    }

    fn touch(&mut self, field: Field, today: Date) {
        self.touched.insert(field);
        self.revalidate(today);
    }

    /// Live validation after every change.
    pub fn revalidate(&mut self, today: Date) {
        let raw = self.to_raw();
        self.strength = if raw.password.is_empty() {
            None
        } else {
            Some(raw.password_strength())
        };
        self.errors = raw.errors(today);
        if !self.self_describe_visible() && self.focus == RegisterFocus::Field(Field::SelfDescribe)
        {
            self.focus = RegisterFocus::Field(Field::Gender);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && !self.touched.is_empty()
    }

    /// The message to show under `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.show_all_errors || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 10 - 18);

    fn type_into(form: &mut RegisterForm, field: Field, text: &str) {
        form.focus = RegisterFocus::Field(field);
        for c in text.chars() {
            form.input_char(c, TODAY);
        }
    }

    #[test]
    fn phone_is_masked_while_typing() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::Phone, "8424769610");
        assert_eq!(form.value(Field::Phone), "842-476-9610");
        assert_eq!(form.input(Field::Phone).unwrap().cursor, 12);
    }

    #[test]
    fn backspace_after_phone_dash_deletes_the_digit_before_it() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::Phone, "555123");
        assert_eq!(form.value(Field::Phone), "555-123");

        form.move_cursor(true);
        form.move_cursor(true);
        form.move_cursor(true);
        form.backspace(TODAY);

        let input = form.input(Field::Phone).unwrap();
        assert_eq!(input.value, "551-23");
        assert_eq!(input.split_at_cursor(), ("55", "1-23"));
    }

    #[test]
    fn backspace_on_username_dash_removes_only_the_dash() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::Username, "ab-c");
        form.move_cursor(true);
        form.backspace(TODAY);
        assert_eq!(form.value(Field::Username), "abc");
    }

    #[test]
    fn names_drop_invalid_characters_while_typing() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::FirstName, "ja mes1");
        assert_eq!(form.value(Field::FirstName), "James");
        type_into(&mut form, Field::LastName, "de la cruz");
        assert_eq!(form.value(Field::LastName), "De la cruz");
    }

    #[test]
    fn errors_only_show_for_touched_fields() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::Username, "ab");
        assert_eq!(
            form.visible_error(Field::Username),
            Some("Username must be at least 4 characters")
        );
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn toggling_terms_reveals_errors_and_focuses_first() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::FirstName, "Ada");
        form.toggle_terms(TODAY);
        assert!(form.terms);
        assert_eq!(form.focus, RegisterFocus::Field(Field::LastName));
        assert_eq!(form.visible_error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn self_describe_only_in_focus_order_when_needed() {
        let mut form = RegisterForm::new();
        let has_self_describe =
            |f: &RegisterForm| f.focus_order().contains(&RegisterFocus::Field(Field::SelfDescribe));
        assert!(!has_self_describe(&form));

        while form.gender != Some(Gender::SelfDescribe) {
            form.cycle_gender(true, TODAY);
        }
        assert!(has_self_describe(&form));
    }

    #[test]
    fn gender_cycle_wraps() {
        let mut form = RegisterForm::new();
        form.cycle_gender(false, TODAY);
        assert_eq!(form.gender, Some(Gender::Undisclosed));
        form.cycle_gender(true, TODAY);
        assert_eq!(form.gender, Some(Gender::Male));
    }

    #[test]
    fn strength_tracks_password() {
        let mut form = RegisterForm::new();
        type_into(&mut form, Field::Password, "abc");
        assert_eq!(form.strength, Some(PasswordStrength::Weak));
        type_into(&mut form, Field::Password, "DEF12!");
        assert_eq!(form.strength, Some(PasswordStrength::Strong));
    }
}

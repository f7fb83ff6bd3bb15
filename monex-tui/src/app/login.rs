use monex_auth::{FieldErrors, LoginField};

use super::{LoginFocus, TextInput};

/// State of the login screen.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub login: TextInput,
    pub password: TextInput,
    pub focus: LoginFocus,
    pub field_errors: FieldErrors<LoginField>,
    /// Generic failure message after a rejected attempt.
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            login: TextInput::new(),
            password: TextInput::new(),
            focus: LoginFocus::Login,
            field_errors: FieldErrors::new(),
            error: None,
        }
    }
}

impl LoginForm {
    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginFocus::Login => &mut self.login,
            LoginFocus::Password => &mut self.password,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_input().insert(c);
    }

    pub fn backspace(&mut self) {
        self.focused_input().backspace();
    }

    pub fn move_cursor(&mut self, left: bool) {
        let input = self.focused_input();
        if left {
            input.move_left();
        } else {
            input.move_right();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Login => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Login,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

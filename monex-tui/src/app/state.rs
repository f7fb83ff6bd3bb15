use monex_auth::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Register,
    Terms,
    Login,
    Welcome,
}

/// What has keyboard focus on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    Field(Field),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Login,
    Password,
}

/// Separator inserted by input masks such as the phone number.
pub const MASK_SEPARATOR: char = '-';

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    /// Swap in a rewritten value, keeping the cursor in front of the same
    /// characters it was in front of. Mask separators are not counted, so
    /// the cursor follows the digits when dashes move around.
    pub fn replace_keep_tail(&mut self, value: String) {
        if value == self.value {
            return;
        }
        let mut remaining = self.value[self.cursor..]
            .chars()
            .filter(|c| *c != MASK_SEPARATOR)
            .count();
        let mut cursor = value.len();
        for (i, c) in value.char_indices().rev() {
            if remaining == 0 {
                break;
            }
            if c != MASK_SEPARATOR {
                remaining -= 1;
            }
            cursor = i;
        }
        self.cursor = cursor;
        self.value = value;
    }

    /// The character just before the cursor, if any.
    pub fn char_before_cursor(&self) -> Option<char> {
        self.value[..self.cursor].chars().next_back()
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_respect_cursor() {
        let mut input = TextInput::from_str("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value, "abc");
        input.backspace();
        assert_eq!(input.value, "ac");
        assert_eq!(input.split_at_cursor(), ("a", "c"));
    }

    #[test]
    fn replace_keeps_cursor_at_end_when_typing_at_end() {
        let mut input = TextInput::from_str("5551");
        input.replace_keep_tail("555-1".to_string());
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn replace_keeps_characters_after_cursor() {
        let mut input = TextInput::from_str("5551234");
        input.cursor = 3;
        input.replace_keep_tail("555-123-4".to_string());
        assert_eq!(input.split_at_cursor(), ("555-", "123-4"));
    }

    #[test]
    fn replace_follows_digits_when_dash_moves_behind_cursor() {
        let mut input = TextInput::from_str("55123");
        input.cursor = 2;
        input.replace_keep_tail("551-23".to_string());
        assert_eq!(input.split_at_cursor(), ("55", "1-23"));
    }

    #[test]
    fn replace_with_shorter_value_clamps() {
        let mut input = TextInput::from_str("x1");
        input.cursor = 0;
        input.replace_keep_tail("X".to_string());
        assert_eq!(input.cursor, 0);
    }
}

use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_terms_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.navigate_to(View::Register);
        }
        _ => {}
    }
}

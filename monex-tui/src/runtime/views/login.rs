use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.next_field();
        }
        KeyCode::Char('r') | KeyCode::Char('R')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.navigate_to(View::Register);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.input_char(c);
        }
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Left => app.login.move_cursor(true),
        KeyCode::Right => app.login.move_cursor(false),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitLogin),
        KeyCode::Esc => app.navigate_to(View::Landing),
        _ => {}
    }
}

use crate::app::{App, RegisterFocus, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use monex_auth::Field;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_register_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Inputs are locked while the confirmation is on screen.
    if app.register.confirmation_sent {
        return;
    }

    let today = app.today;
    let focus = app.register.focus;

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.register_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.register_focus_previous(),
        KeyCode::Char('t') | KeyCode::Char('T') if ctrl => app.navigate_to(View::Terms),
        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => app.navigate_to(View::Login),
        KeyCode::Char(' ') if focus == RegisterFocus::Field(Field::Terms) => {
            app.register.toggle_terms(today);
        }
        KeyCode::Char(' ') if focus == RegisterFocus::Field(Field::Gender) => {
            app.register.cycle_gender(true, today);
        }
        KeyCode::Char(c) if !ctrl => app.register.input_char(c, today),
        KeyCode::Backspace => app.register.backspace(today),
        KeyCode::Left | KeyCode::Right if focus == RegisterFocus::Field(Field::Gender) => {
            app.register.cycle_gender(key.code == KeyCode::Right, today);
        }
        KeyCode::Left => app.register.move_cursor(true),
        KeyCode::Right => app.register.move_cursor(false),
        KeyCode::Enter => match focus {
            RegisterFocus::Field(Field::Terms) => app.register.toggle_terms(today),
            RegisterFocus::Submit => submit(app, action_tx),
            RegisterFocus::Field(_) => app.register_focus_next(),
        },
        KeyCode::Esc => app.navigate_to(View::Landing),
        _ => {}
    }
}

/// Only a valid form reaches the backend; otherwise every error is shown.
fn submit(app: &mut App, action_tx: &ActionTx) {
    app.register.reveal_all_errors(app.today);
    if app.register.is_valid() {
        enqueue_action(action_tx, Action::SubmitRegistration);
    } else {
        app.set_status("Please fix the highlighted fields".to_string());
    }
}

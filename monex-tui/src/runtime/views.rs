use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod landing;
mod login;
mod register;
mod terms;
mod welcome;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Landing => landing::handle_landing_key(key, app),
        View::Register => register::handle_register_key(key, app, action_tx),
        View::Terms => terms::handle_terms_key(key, app),
        View::Login => login::handle_login_key(key, app, action_tx),
        View::Welcome => welcome::handle_welcome_key(key, app, action_tx),
    }
}

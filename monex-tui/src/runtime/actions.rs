use crate::app::{App, View};
use crate::backend::Backend;
use anyhow::Result;
use monex_auth::{LoginOutcome, RegistrationError, INVALID_CREDENTIALS};
use time::OffsetDateTime;

use super::action_queue::{send_after, Action, ActionTx};

pub(super) fn run_action(
    action: Action,
    app: &mut App,
    backend: &mut Backend,
    action_tx: &ActionTx,
) -> Result<()> {
    match action {
        Action::SubmitRegistration => handle_submit_registration(app, backend, action_tx),
        Action::FinishRegistration => {
            app.register.confirmation_sent = false;
            app.navigate_to(View::Login);
        }
        Action::SubmitLogin => handle_submit_login(app, backend),
        Action::Logout => {
            if let Some(user) = &app.current_user {
                tracing::info!("User {} logged out", user.username);
            }
            app.sign_out();
        }
    }
    Ok(())
}

fn handle_submit_registration(app: &mut App, backend: &mut Backend, action_tx: &ActionTx) {
    if app.register.confirmation_sent {
        return;
    }

    let input = app.register.to_raw();
    match backend.register(&input, app.today) {
        Ok(_) => {
            app.register.confirmation_sent = true;
            app.set_status("Email confirmation has been sent to your email.".to_string());
            send_after(action_tx, Action::FinishRegistration, app.redirect_delay);
        }
        Err(RegistrationError::Invalid(errors)) => {
            app.register.set_errors(errors);
            app.set_status("Please fix the highlighted fields".to_string());
        }
        Err(err) => {
            tracing::error!("Registration failed: {:?}", err);
            app.set_status(format!("Registration failed: {}", err));
        }
    }
}

fn handle_submit_login(app: &mut App, backend: &Backend) {
    app.login.error = None;
    match backend.login(&app.login.login.value, &app.login.password.value) {
        Ok(LoginOutcome::Success(user)) => {
            app.sign_in(user, OffsetDateTime::now_utc());
        }
        Ok(LoginOutcome::InvalidCredentials) => {
            app.login.field_errors = Default::default();
            app.login.error = Some(INVALID_CREDENTIALS.to_string());
        }
        Err(errors) => {
            app.login.field_errors = errors;
        }
    }
}

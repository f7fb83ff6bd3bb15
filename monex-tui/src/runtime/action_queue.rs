use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Action {
    SubmitRegistration,
    /// Fired once the post-registration confirmation has been shown long enough.
    FinishRegistration,
    SubmitLogin,
    Logout,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

/// Queue `action` after `delay` without blocking the UI loop.
pub(super) fn send_after(action_tx: &ActionTx, action: Action, delay: Duration) {
    let tx = action_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(action);
    });
}

use crate::config::MonexConfig;
use crate::ui::utils::local_today;
use monex_auth::StoredUser;
use std::time::Duration;
use time::{Date, OffsetDateTime};

mod login;
mod navigation;
mod register;
mod state;
pub use login::LoginForm;
pub use register::RegisterForm;
pub use state::{LoginFocus, RegisterFocus, TextInput, View, MASK_SEPARATOR};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,

    pub register: RegisterForm,
    pub login: LoginForm,

    // Logged-in user, shown on the welcome screen
    pub current_user: Option<StoredUser>,
    pub logged_in_at: Option<OffsetDateTime>,

    /// Local calendar date used for age checks. Refreshed every tick.
    pub today: Date,

    // Config values used at runtime
    pub redirect_delay: Duration,
}

impl App {
    pub fn new(cfg: &MonexConfig) -> Self {
        Self {
            running: true,
            status_message: None,
            current_view: View::Landing,
            register: RegisterForm::new(),
            login: LoginForm::default(),
            current_user: None,
            logged_in_at: None,
            today: local_today(),
            redirect_delay: Duration::from_millis(cfg.redirect_delay_ms),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Successful login: remember the user and show the welcome screen.
    pub fn sign_in(&mut self, user: StoredUser, at: OffsetDateTime) {
        self.current_user = Some(user);
        self.logged_in_at = Some(at);
        self.login.clear();
        self.navigate_to(View::Welcome);
    }

    pub fn sign_out(&mut self) {
        self.current_user = None;
        self.logged_in_at = None;
        self.navigate_to(View::Landing);
    }

    /// Name shown in the welcome banner.
    pub fn greeting_name(&self) -> &str {
        self.current_user
            .as_ref()
            .map(|u| u.first_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Full name of the signed-in user for the account overview.
    pub fn account_holder(&self) -> Option<String> {
        self.current_user.as_ref().map(StoredUser::full_name)
    }
}

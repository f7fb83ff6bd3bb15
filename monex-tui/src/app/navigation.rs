use super::*;

impl App {
    pub fn navigate_to(&mut self, view: View) {
        match view {
            View::Register if self.current_view != View::Terms => {
                if !self.register.confirmation_sent {
                    self.register = RegisterForm::new();
                }
            }
            View::Login => {
                self.login.clear();
            }
            _ => {}
        }
        self.clear_status();
        self.current_view = view;
    }

    /// Move registration focus to the next input (Tab or down)
    pub fn register_focus_next(&mut self) {
        let order = self.register.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.register.focus)
            .unwrap_or(0);
        self.register.focus = order[(idx + 1) % order.len()];
    }

    /// Move registration focus to the previous input (Shift+Tab or up)
    pub fn register_focus_previous(&mut self) {
        let order = self.register.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.register.focus)
            .unwrap_or(0);
        self.register.focus = order[(idx + order.len() - 1) % order.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monex_auth::Field;

    fn test_app() -> App {
        let mut app = App::new(&MonexConfig::default());
        app.navigate_to(View::Register);
        app
    }

    #[test]
    fn focus_wraps_from_submit_to_first_field() {
        let mut app = test_app();
        app.register.focus = RegisterFocus::Submit;
        app.register_focus_next();
        assert_eq!(app.register.focus, RegisterFocus::Field(Field::FirstName));
        app.register_focus_previous();
        assert_eq!(app.register.focus, RegisterFocus::Submit);
    }

    #[test]
    fn focus_skips_hidden_self_describe() {
        let mut app = test_app();
        app.register.focus = RegisterFocus::Field(Field::Gender);
        app.register_focus_next();
        assert_eq!(app.register.focus, RegisterFocus::Field(Field::Password));
    }

    #[test]
    fn terms_round_trip_keeps_form_state() {
        let mut app = test_app();
        app.register.input_char('A', app.today);
        app.navigate_to(View::Terms);
        app.navigate_to(View::Register);
        assert_eq!(app.register.value(Field::FirstName), "A");
    }

    #[test]
    fn reopening_register_from_landing_starts_fresh() {
        let mut app = test_app();
        app.register.input_char('A', app.today);
        app.navigate_to(View::Landing);
        app.navigate_to(View::Register);
        assert_eq!(app.register.value(Field::FirstName), "");
    }
}

use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_landing_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            app.navigate_to(View::Register);
        }
        KeyCode::Char('l') | KeyCode::Char('L') => app.navigate_to(View::Login),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonexConfig;

    fn press(app: &mut App, code: KeyCode) {
        handle_landing_key(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    #[test]
    fn landing_links_to_both_forms() {
        let mut app = App::new(&MonexConfig::default());
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_view, View::Login);

        app.navigate_to(View::Landing);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.current_view, View::Register);
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(&MonexConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}

use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

mod landing_view;
mod login_view;
mod register_view;
mod terms_view;
pub(super) mod utils;
mod welcome_view;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let body = root[0];
    match app.current_view {
        View::Landing => landing_view::render_landing_view(frame, body),
        View::Register => register_view::render_register_view(frame, app, body),
        View::Terms => terms_view::render_terms_view(frame, body),
        View::Login => login_view::render_login_view(frame, app, body),
        View::Welcome => welcome_view::render_welcome_view(frame, app, body),
    }

    render_controls(frame, root[1], app);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => {
            let lower = message.to_lowercase();
            let color = if lower.contains("failed") || lower.contains("fix") {
                Color::Red
            } else if lower.contains("sent") {
                Color::Green
            } else {
                Color::White
            };
            Line::from(Span::styled(message.clone(), Style::default().fg(color)))
        }
        None => Line::from(utils::key_hints(controls_for(app))),
    };

    let controls = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(controls, area);
}

fn controls_for(app: &App) -> &'static [(&'static str, &'static str)] {
    match app.current_view {
        View::Landing => &[("r", "Register"), ("l", "Login"), ("q", "Quit")],
        View::Register => &[
            ("Tab/↑↓", "Move"),
            ("←→", "Gender"),
            ("Space", "Toggle terms"),
            ("Enter", "Submit"),
            ("Ctrl+T", "Terms"),
            ("Ctrl+L", "Login"),
            ("Esc", "Back"),
        ],
        View::Terms => &[("Esc/b", "Back to registration")],
        View::Login => &[
            ("Tab", "Switch field"),
            ("Enter", "Log in"),
            ("Ctrl+R", "Register"),
            ("Esc", "Back"),
        ],
        View::Welcome => &[("o", "Logout"), ("q", "Quit")],
    }
}

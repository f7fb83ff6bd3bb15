use super::utils::{centered_rect, to_local_time};
use super::*;
use time::macros::format_description;

pub fn render_welcome_view(frame: &mut Frame, app: &App, body: Rect) {
    let area = centered_rect(60, 15, body);

    let last_login = app
        .logged_in_at
        .and_then(|at| {
            to_local_time(at)
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]"
                ))
                .ok()
        })
        .unwrap_or_else(|| "-".to_string());

    let label = Style::default().fg(Color::DarkGray);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {}!", app.greeting_name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("You are now securely logged into Monex"),
        Line::from(""),
        Line::from(Span::styled(
            "Account Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Account Holder:  ", label),
            Span::raw(app.account_holder().unwrap_or_default()),
        ]),
        Line::from(vec![
            Span::styled("Current Balance: ", label),
            Span::raw("$0"),
        ]),
        Line::from(vec![
            Span::styled("Last Login:      ", label),
            Span::raw(last_login),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[o] Logout",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Monex "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

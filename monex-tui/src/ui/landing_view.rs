use super::utils::centered_rect;
use super::*;

pub fn render_landing_view(frame: &mut Frame, body: Rect) {
    let area = centered_rect(56, 13, body);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Monex",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your simple & secure finance platform",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] Register", Style::default().fg(Color::Yellow)),
            Span::raw("    "),
            Span::styled("[l] Login", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "© 2025 Monex Inc. All rights reserved.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Monex "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

use super::utils::centered_rect;
use super::*;

const SECTIONS: &[(&str, &str)] = &[
    (
        "1. Use of Platform",
        "You agree to use Monex for legal purposes only.",
    ),
    (
        "2. Privacy",
        "We respect your privacy. Your data is never sold.",
    ),
    (
        "3. Security",
        "Keep your password secure. Do not share your login.",
    ),
];

pub fn render_terms_view(frame: &mut Frame, body: Rect) {
    let area = centered_rect(70, 18, body);

    let mut text = vec![
        Line::from(""),
        Line::from("Welcome to Monex. Please read these terms carefully."),
    ];
    for (heading, paragraph) in SECTIONS {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            *heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            *paragraph,
            Style::default().fg(Color::Gray),
        )));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "[Esc] Back",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Terms & Privacy Policy ")
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(paragraph, area);
}

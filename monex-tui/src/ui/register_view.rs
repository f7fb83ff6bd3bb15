use super::utils::with_cursor;
use super::*;
use crate::app::{RegisterFocus, RegisterForm};
use monex_auth::{Field, Gender, PasswordStrength};
use strum::IntoEnumIterator;

const LABEL_WIDTH: usize = 18;

fn label(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name",
        Field::MiddleName => "Middle name",
        Field::LastName => "Last name",
        Field::Username => "Username",
        Field::Email => "Email",
        Field::Phone => "Phone number",
        Field::Dob => "Date of birth",
        Field::Gender => "Gender",
        Field::SelfDescribe => "Self-describe",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm password",
        Field::Terms => "Terms",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::MiddleName => "(optional)",
        Field::Phone => "555-555-5555",
        Field::Dob => "YYYY-MM-DD",
        _ => "",
    }
}

fn strength_span(strength: PasswordStrength) -> Span<'static> {
    let color = match strength {
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Medium => Color::Yellow,
        PasswordStrength::Strong => Color::Green,
    };
    Span::styled(format!("  {strength}"), Style::default().fg(color))
}

fn is_masked(field: Field) -> bool {
    matches!(field, Field::Password | Field::ConfirmPassword)
}

fn value_spans(form: &RegisterForm, field: Field, focused: bool) -> Vec<Span<'static>> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    match field {
        Field::Gender => gender_spans(form.gender, focused),
        Field::Terms => {
            let mark = if form.terms { "[x]" } else { "[ ]" };
            vec![
                Span::styled(mark, value_style),
                Span::raw(" I accept the terms & privacy policy "),
                Span::styled("(Ctrl+T to read)", Style::default().fg(Color::DarkGray)),
            ]
        }
        _ => {
            let (before, after) = match form.input(field) {
                Some(input) => {
                    let (b, a) = input.split_at_cursor();
                    (b.to_string(), a.to_string())
                }
                None => (String::new(), String::new()),
            };
            let (before, after) = if is_masked(field) {
                ("•".repeat(before.chars().count()), "•".repeat(after.chars().count()))
            } else {
                (before, after)
            };

            let mut spans = Vec::new();
            if before.is_empty() && after.is_empty() && !focused {
                spans.push(Span::styled(
                    placeholder(field),
                    Style::default().fg(Color::DarkGray),
                ));
            } else if focused {
                spans.push(Span::styled(with_cursor(&before, &after), value_style));
            } else {
                spans.push(Span::styled(format!("{before}{after}"), value_style));
            }
            if field == Field::Password {
                if let Some(strength) = form.strength {
                    spans.push(strength_span(strength));
                }
            }
            spans
        }
    }
}

fn gender_spans(selected: Option<Gender>, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if selected.is_none() {
        spans.push(Span::styled(
            "Select… ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for option in Gender::iter() {
        let is_selected = selected == Some(option);
        let style = match (is_selected, focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    spans
}

pub fn render_register_view(frame: &mut Frame, app: &App, body: Rect) {
    let form = &app.register;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create your Monex account ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = 0usize;

    if form.confirmation_sent {
        lines.push(Line::from(Span::styled(
            "Email confirmation has been sent to your email.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for field in Field::iter() {
        if field == Field::SelfDescribe && !form.self_describe_visible() {
            continue;
        }
        let focused = form.focus == RegisterFocus::Field(field);
        if focused {
            focus_line = lines.len();
        }

        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(
            format!("{marker}{:<width$}", label(field), width = LABEL_WIDTH),
            label_style,
        )];
        spans.extend(value_spans(form, field, focused));
        lines.push(Line::from(spans));

        if let Some(error) = form.visible_error(field) {
            lines.push(Line::from(Span::styled(
                format!("{:width$}{error}", "", width = LABEL_WIDTH + 2),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    let submit_focused = form.focus == RegisterFocus::Submit;
    if submit_focused {
        focus_line = lines.len();
    }
    let submit_style = if submit_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(Span::styled(" Register ", submit_style)));

    // Keep the focused row on screen when the terminal is short.
    let visible = inner.height as usize;
    let scroll = (focus_line + 2).saturating_sub(visible);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

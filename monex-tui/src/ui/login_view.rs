use super::utils::{centered_rect, with_cursor};
use super::*;
use crate::app::{LoginFocus, TextInput};
use monex_auth::LoginField;

pub fn render_login_view(frame: &mut Frame, app: &App, body: Rect) {
    let area = centered_rect(60, 16, body);
    let form = &app.login;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Login ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // identifier
            Constraint::Length(1), // identifier error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(1),
            Constraint::Min(0), // generic failure
        ])
        .split(inner);

    render_input(
        frame,
        chunks[0],
        "Username, email, or phone number",
        &form.login.value,
        &form.login,
        form.focus == LoginFocus::Login,
    );
    render_error(frame, chunks[1], form.field_errors.get(LoginField::Login));

    let masked = "•".repeat(form.password.value.chars().count());
    render_input(
        frame,
        chunks[2],
        "Password",
        &masked,
        &form.password,
        form.focus == LoginFocus::Password,
    );
    render_error(frame, chunks[3], form.field_errors.get(LoginField::Password));

    if let Some(error) = &form.error {
        let failure = Paragraph::new(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(failure, chunks[5]);
    }
}

/// `shown` is what gets drawn; the cursor position comes from `input`.
fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    shown: &str,
    input: &TextInput,
    focused: bool,
) {
    let text = if focused {
        let cursor_chars = input.value[..input.cursor].chars().count();
        let split = shown
            .char_indices()
            .nth(cursor_chars)
            .map(|(i, _)| i)
            .unwrap_or(shown.len());
        with_cursor(&shown[..split], &shown[split..])
    } else {
        shown.to_string()
    };
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {title} ")),
    );
    frame.render_widget(widget, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            area,
        );
    }
}

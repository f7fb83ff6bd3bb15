use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::style::{Color, Style};
use time::{Date, OffsetDateTime, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// Today's date on the local calendar, or in UTC when the offset is unknown.
pub fn local_today() -> Date {
    to_local_time(OffsetDateTime::now_utc()).date()
}

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// `key: description` pairs for the controls bar.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, desc)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::raw(format!(": {desc}{sep}")));
    }
    spans
}

/// Text with a block cursor at the given byte offset.
pub fn with_cursor(before: &str, after: &str) -> String {
    format!("{}█{}", before, after)
}

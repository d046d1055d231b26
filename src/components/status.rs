use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct StatusInfo<'a> {
    pub line: usize,
    pub col: usize,
    pub message: &'a str,
    pub word_count: usize,
    /// Name of the applied text color, if any.
    pub color: Option<String>,
    pub modified: bool,
}

pub fn render(frame: &mut Frame, area: Rect, info: StatusInfo) {
    // Fill the entire status bar background
    let bg = Paragraph::new("").style(theme::status_style());
    frame.render_widget(bg, area);

    // Right: color, word count, save status
    let save_status = if info.modified { "Modified" } else { "Saved" };
    let mut right_text = String::new();
    if let Some(color) = info.color {
        right_text.push_str(&color);
        right_text.push_str(" | ");
    }
    right_text.push_str(&format!("{} words | {}  ", info.word_count, save_status));
    let left_text = format!("  Ln {}, Col {}", info.line, info.col);

    let chunks = Layout::horizontal([
        Constraint::Length(left_text.chars().count() as u16),
        Constraint::Fill(1),
        Constraint::Length(right_text.chars().count() as u16),
    ])
    .split(area);

    // Left: Ln/Col
    let left = Paragraph::new(Line::from(Span::styled(left_text, theme::status_style())));
    frame.render_widget(left, chunks[0]);

    // Center: transient message
    if !info.message.is_empty() {
        let center = Paragraph::new(Line::from(Span::styled(
            info.message.to_string(),
            theme::status_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(center, chunks[1]);
    }

    let right = Paragraph::new(Line::from(Span::styled(right_text, theme::status_style())))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}

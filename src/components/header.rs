use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// Renders the window title, with a dot when the buffer has unsaved edits.
pub fn render(frame: &mut Frame, area: Rect, title: &str, modified: bool) {
    let bg = Paragraph::new("").style(theme::header_style());
    frame.render_widget(bg, area);

    let mut spans = vec![Span::styled(title.to_string(), theme::header_style())];
    if modified {
        spans.push(Span::styled(
            " \u{2022}",
            Style::default().fg(theme::WARNING).bg(theme::BAR_BG),
        ));
    }

    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(line, area);
}

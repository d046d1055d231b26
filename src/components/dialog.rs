use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::components::centered_rect;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A blocking message box with an OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub title: String,
    pub lines: Vec<String>,
    pub kind: DialogKind,
}

impl MessageDialog {
    pub fn info(title: &str, lines: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            kind: DialogKind::Info,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            title: "Error".to_string(),
            lines: vec![message.to_string()],
            kind: DialogKind::Error,
        }
    }
}

/// Keys that press the OK button.
pub fn is_dismiss_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
    )
}

pub fn render(frame: &mut Frame, dialog: &MessageDialog) {
    let longest = dialog
        .lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(dialog.title.chars().count() + 2))
        .max()
        .unwrap_or(0) as u16;
    let width = (longest + 8).max(24);
    // Borders + blank line + message lines + blank line + OK row
    let height = dialog.lines.len() as u16 + 5;
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let border_style = match dialog.kind {
        DialogKind::Info => theme::dialog_border_style(),
        DialogKind::Error => theme::error_border_style(),
    };
    let title_color = match dialog.kind {
        DialogKind::Info => theme::DIALOG_TITLE,
        DialogKind::Error => theme::ERROR,
    };

    let mut text = vec![Line::from("")];
    text.extend(dialog.lines.iter().map(|l| Line::from(l.clone())));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled("[ OK ]", theme::menu_active_style())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        ))
        .style(theme::dialog_style());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

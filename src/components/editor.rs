use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::components::color_picker::TextColor;
use crate::theme;

pub fn configure_textarea(textarea: &mut TextArea, color: Option<TextColor>) {
    // No undo/redo stack
    textarea.set_max_histories(0);

    // Line numbers
    textarea.set_line_number_style(theme::line_number_style());
    textarea.set_cursor_line_style(theme::cursor_line_style());

    apply_text_color(textarea, color);

    // Cursor style
    textarea.set_cursor_style(
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
    );

    // Selection style
    textarea.set_selection_style(Style::default().bg(theme::SELECTION));

    textarea.set_tab_length(4);
    textarea.set_hard_tab_indent(true);
}

/// Applies `color` as the foreground of the whole buffer; `None` restores the
/// terminal default.
pub fn apply_text_color(textarea: &mut TextArea, color: Option<TextColor>) {
    let style = match color {
        Some(c) => theme::editor_style().fg(c.into()),
        None => theme::editor_style(),
    };
    textarea.set_style(style);
}

use ratatui::style::{Color, Modifier, Style};

// Base colors — Color::Reset inherits terminal defaults
pub const FG: Color = Color::Reset;
pub const BORDER: Color = Color::DarkGray;

// UI elements
pub const BAR_BG: Color = Color::Reset;
pub const LINE_NUMBER: Color = Color::DarkGray;
pub const SELECTION: Color = Color::Blue;

// Menu bar
pub const MENU_BG: Color = Color::DarkGray;
pub const MENU_FG: Color = Color::White;
pub const MENU_ACTIVE_BG: Color = Color::Blue;
pub const SHORTCUT: Color = Color::Gray;

// Dialogs
pub const DIALOG_TITLE: Color = Color::Rgb(130, 170, 255);
pub const DIRECTORY: Color = Color::Cyan;
pub const HINT: Color = Color::DarkGray;

// Status indicators
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

// White for text on colored backgrounds
pub const WHITE: Color = Color::White;

// Tilde color for empty lines beyond file content
pub const TILDE: Color = Color::DarkGray;

// Pre-built styles
pub fn editor_style() -> Style {
    Style::default()
}

pub fn header_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default()
}

pub fn line_number_style() -> Style {
    Style::default().fg(LINE_NUMBER)
}

pub fn cursor_line_style() -> Style {
    Style::default()
}

pub fn menu_bar_style() -> Style {
    Style::default().fg(MENU_FG).bg(MENU_BG)
}

pub fn menu_active_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(MENU_ACTIVE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn dialog_style() -> Style {
    Style::default().fg(FG).bg(BAR_BG)
}

pub fn dialog_border_style() -> Style {
    Style::default().fg(BORDER)
}

pub fn error_border_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn highlight_style() -> Style {
    Style::default().fg(WHITE).bg(SELECTION)
}

pub fn hint_style() -> Style {
    Style::default().fg(HINT)
}

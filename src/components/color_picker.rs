//! Color chooser dialog for the Format > Change Text Color action.
//!
//! Shows a grid of named terminal colors plus a `#rrggbb` input row. The
//! dialog reports a choice or a cancel; applying the color is up to the caller.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::components::centered_rect;
use crate::theme;

/// Foreground color applied to the editor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Rgb(u8, u8, u8),
}

impl TextColor {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(TextColor::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn name(&self) -> String {
        match self {
            TextColor::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            named => PALETTE
                .iter()
                .find(|(_, c)| *c == Some(*named))
                .map(|(label, _)| label.to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<TextColor> for Color {
    fn from(color: TextColor) -> Self {
        match color {
            TextColor::Black => Color::Black,
            TextColor::Red => Color::Red,
            TextColor::Green => Color::Green,
            TextColor::Yellow => Color::Yellow,
            TextColor::Blue => Color::Blue,
            TextColor::Magenta => Color::Magenta,
            TextColor::Cyan => Color::Cyan,
            TextColor::Gray => Color::Gray,
            TextColor::DarkGray => Color::DarkGray,
            TextColor::LightRed => Color::LightRed,
            TextColor::LightGreen => Color::LightGreen,
            TextColor::LightYellow => Color::LightYellow,
            TextColor::LightBlue => Color::LightBlue,
            TextColor::LightMagenta => Color::LightMagenta,
            TextColor::LightCyan => Color::LightCyan,
            TextColor::White => Color::White,
            TextColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
        }
    }
}

/// Swatches in grid order. `None` is the terminal's default foreground.
pub const PALETTE: &[(&str, Option<TextColor>)] = &[
    ("Default", None),
    ("Black", Some(TextColor::Black)),
    ("Red", Some(TextColor::Red)),
    ("Green", Some(TextColor::Green)),
    ("Yellow", Some(TextColor::Yellow)),
    ("Blue", Some(TextColor::Blue)),
    ("Magenta", Some(TextColor::Magenta)),
    ("Cyan", Some(TextColor::Cyan)),
    ("Gray", Some(TextColor::Gray)),
    ("Dark Gray", Some(TextColor::DarkGray)),
    ("Light Red", Some(TextColor::LightRed)),
    ("Light Green", Some(TextColor::LightGreen)),
    ("Light Yellow", Some(TextColor::LightYellow)),
    ("Light Blue", Some(TextColor::LightBlue)),
    ("Light Magenta", Some(TextColor::LightMagenta)),
    ("Light Cyan", Some(TextColor::LightCyan)),
    ("White", Some(TextColor::White)),
];

/// Swatches per grid row.
pub const COLUMNS: usize = 4;

/// Width of one swatch cell: marker + block + space + longest label.
const CELL_W: u16 = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorOutcome {
    Pending,
    Chosen(Option<TextColor>),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ColorPicker {
    selected: usize,
    hex_input: String,
    hex_invalid: bool,
}

impl ColorPicker {
    /// Opens the chooser preselected on `current`. A custom RGB color that is
    /// not in the palette is shown in the hex input instead.
    pub fn new(current: Option<TextColor>) -> Self {
        let index = PALETTE.iter().position(|(_, c)| *c == current);
        let hex_input = match (index, current) {
            (None, Some(color)) => color.name(),
            _ => String::new(),
        };
        Self {
            selected: index.unwrap_or(0),
            hex_input,
            hex_invalid: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ColorOutcome {
        match key.code {
            KeyCode::Esc => return ColorOutcome::Cancelled,
            KeyCode::Enter => return self.confirm(),
            KeyCode::Left => self.move_by(-1),
            KeyCode::Right => self.move_by(1),
            KeyCode::Up => self.move_by(-(COLUMNS as isize)),
            KeyCode::Down => self.move_by(COLUMNS as isize),
            KeyCode::Backspace => {
                self.hex_input.pop();
                self.hex_invalid = false;
            }
            KeyCode::Char(ch) if ch == '#' || ch.is_ascii_hexdigit() => {
                if self.hex_input.len() < 7 {
                    self.hex_input.push(ch);
                }
                self.hex_invalid = false;
            }
            _ => {}
        }
        ColorOutcome::Pending
    }

    fn confirm(&mut self) -> ColorOutcome {
        if self.hex_input.is_empty() {
            return ColorOutcome::Chosen(PALETTE[self.selected].1);
        }
        match TextColor::from_hex(&self.hex_input) {
            Some(color) => ColorOutcome::Chosen(Some(color)),
            None => {
                self.hex_invalid = true;
                ColorOutcome::Pending
            }
        }
    }

    /// Moves the selection, staying put when the move would leave the grid.
    /// Picking a swatch clears any typed hex value.
    fn move_by(&mut self, delta: isize) {
        let target = self.selected as isize + delta;
        if target >= 0 && (target as usize) < PALETTE.len() {
            self.selected = target as usize;
            self.hex_input.clear();
            self.hex_invalid = false;
        }
    }
}

pub fn render(frame: &mut Frame, picker: &ColorPicker) {
    let rows = PALETTE.len().div_ceil(COLUMNS) as u16;
    let width = CELL_W * COLUMNS as u16 + 4;
    let height = rows + 6;
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (row_idx, swatches) in PALETTE.chunks(COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col_idx, (label, color)) in swatches.iter().enumerate() {
            let index = row_idx * COLUMNS + col_idx;
            let is_selected = index == picker.selected && picker.hex_input.is_empty();
            let marker = if is_selected { ">" } else { " " };
            let swatch_style = match color {
                Some(c) => Style::default().fg((*c).into()),
                None => Style::default(),
            };
            let label_style = if is_selected {
                theme::highlight_style()
            } else {
                Style::default()
            };
            spans.push(Span::raw(marker));
            spans.push(Span::styled("\u{2588}\u{2588}", swatch_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:<width$}", label, width = CELL_W as usize - 4),
                label_style,
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut hex_spans = vec![Span::raw(" Hex: "), Span::raw(picker.hex_input.clone())];
    hex_spans.push(Span::styled(
        " ",
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    if picker.hex_invalid {
        hex_spans.push(Span::styled(
            "  expected #rrggbb",
            Style::default().fg(theme::ERROR),
        ));
    }
    lines.push(Line::from(hex_spans));
    lines.push(Line::from(Span::styled(
        " Arrows: choose  Enter: apply  Esc: cancel",
        theme::hint_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::dialog_border_style())
        .title(Span::styled(
            " Choose Text Color ",
            Style::default()
                .fg(theme::DIALOG_TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .style(theme::dialog_style());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Menu bar: the File / Edit / Format / Help menus, their dropdowns, and the
//! geometry used for mouse hit-testing.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::Command;
use crate::theme;

pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: &'static str,
    pub command: Command,
}

pub struct Menu {
    pub title: &'static str,
    /// Letter that opens this menu together with Alt.
    pub hotkey: char,
    pub items: &'static [MenuItem],
}

macro_rules! item {
    ($label:expr, $shortcut:expr, $command:expr) => {
        MenuItem {
            label: $label,
            shortcut: $shortcut,
            command: $command,
        }
    };
}

pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        hotkey: 'f',
        items: &[
            item!("New", "Ctrl+N", Command::New),
            item!("Open", "Ctrl+O", Command::Open),
            item!("Save", "Ctrl+S", Command::Save),
            item!("Save As", "F12", Command::SaveAs),
            item!("Merge Files", "", Command::MergeFiles),
            item!("Exit", "Ctrl+Q", Command::Exit),
        ],
    },
    Menu {
        title: "Edit",
        hotkey: 'e',
        items: &[
            item!("Cut", "Ctrl+X", Command::Cut),
            item!("Copy", "Ctrl+C", Command::Copy),
            item!("Paste", "Ctrl+V", Command::Paste),
        ],
    },
    Menu {
        title: "Format",
        hotkey: 'o',
        items: &[item!("Change Text Color", "", Command::ChangeColor)],
    },
    Menu {
        title: "Help",
        hotkey: 'h',
        items: &[item!("About", "F1", Command::About)],
    },
];

/// Which menu is dropped down and which of its items is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub menu: usize,
    pub item: usize,
}

impl MenuState {
    pub fn new(menu: usize) -> Self {
        Self {
            menu: menu.min(MENUS.len() - 1),
            item: 0,
        }
    }

    /// The menu opened by Alt+`ch`, if any.
    pub fn for_hotkey(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_lowercase();
        MENUS.iter().position(|m| m.hotkey == ch).map(Self::new)
    }

    pub fn next_menu(&mut self) {
        self.menu = (self.menu + 1) % MENUS.len();
        self.item = 0;
    }

    pub fn prev_menu(&mut self) {
        self.menu = (self.menu + MENUS.len() - 1) % MENUS.len();
        self.item = 0;
    }

    pub fn next_item(&mut self) {
        let count = MENUS[self.menu].items.len();
        self.item = (self.item + 1) % count;
    }

    pub fn prev_item(&mut self) {
        let count = MENUS[self.menu].items.len();
        self.item = (self.item + count - 1) % count;
    }

    pub fn command(&self) -> Command {
        MENUS[self.menu].items[self.item].command
    }
}

// ─── Geometry ───────────────────────────────────────────────────────────

/// (x offset, width) of each title relative to the bar's left edge.
/// Titles render as " Title " after one leading space.
pub fn title_spans() -> Vec<(u16, u16)> {
    let mut x = 1u16;
    MENUS
        .iter()
        .map(|menu| {
            let width = menu.title.len() as u16 + 2;
            let span = (x, width);
            x += width;
            span
        })
        .collect()
}

/// The menu whose title covers column `offset` of the bar.
pub fn title_at(offset: u16) -> Option<usize> {
    title_spans()
        .iter()
        .position(|&(x, w)| offset >= x && offset < x + w)
}

fn label_width(menu: &Menu) -> usize {
    menu.items.iter().map(|i| i.label.len()).max().unwrap_or(0)
}

fn shortcut_width(menu: &Menu) -> usize {
    menu.items.iter().map(|i| i.shortcut.len()).max().unwrap_or(0)
}

/// Screen rect of the dropdown for `menu`, hanging below the bar.
pub fn dropdown_rect(bar: Rect, menu: usize) -> Rect {
    let m = &MENUS[menu];
    let (offset, _) = title_spans()[menu];
    // " label  shortcut " inside the borders
    let inner = label_width(m) + shortcut_width(m) + 4;
    Rect::new(
        bar.x + offset,
        bar.y + 1,
        inner as u16 + 2,
        m.items.len() as u16 + 2,
    )
}

/// The item of `menu` under the screen position, if any.
pub fn item_at(bar: Rect, menu: usize, column: u16, row: u16) -> Option<usize> {
    let rect = dropdown_rect(bar, menu);
    let inside_x = column > rect.x && column < rect.x + rect.width - 1;
    let inside_y = row > rect.y && row < rect.y + rect.height - 1;
    if inside_x && inside_y {
        Some((row - rect.y - 1) as usize)
    } else {
        None
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────

/// Renders the bar row, highlighting the open menu's title.
pub fn render(frame: &mut Frame, area: Rect, open: Option<&MenuState>) {
    let bg = Paragraph::new("").style(theme::menu_bar_style());
    frame.render_widget(bg, area);

    let mut spans = vec![Span::styled(" ", theme::menu_bar_style())];
    for (idx, menu) in MENUS.iter().enumerate() {
        let style = if open.is_some_and(|s| s.menu == idx) {
            theme::menu_active_style()
        } else {
            theme::menu_bar_style()
        };
        spans.push(Span::styled(format!(" {} ", menu.title), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the dropdown of the open menu on top of the editor.
pub fn render_dropdown(frame: &mut Frame, bar: Rect, state: &MenuState) {
    let menu = &MENUS[state.menu];
    let rect = dropdown_rect(bar, state.menu).intersection(frame.area());
    frame.render_widget(Clear, rect);

    let lw = label_width(menu);
    let sw = shortcut_width(menu);
    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == state.item {
                theme::menu_active_style()
            } else {
                theme::dialog_style()
            };
            let shortcut_style = if idx == state.item {
                style
            } else {
                Style::default().fg(theme::SHORTCUT)
            };
            Line::from(vec![
                Span::styled(format!(" {:<lw$}  ", item.label, lw = lw), style),
                Span::styled(format!("{:>sw$} ", item.shortcut, sw = sw), shortcut_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::dialog_border_style())
        .style(theme::dialog_style());
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_are_in_order() {
        let titles: Vec<&str> = MENUS.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["File", "Edit", "Format", "Help"]);
    }

    #[test]
    fn file_menu_items() {
        let labels: Vec<&str> = MENUS[0].items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["New", "Open", "Save", "Save As", "Merge Files", "Exit"]
        );
    }

    #[test]
    fn navigation_wraps() {
        let mut state = MenuState::new(0);
        state.prev_menu();
        assert_eq!(state.menu, MENUS.len() - 1);
        state.next_menu();
        assert_eq!(state.menu, 0);
        state.prev_item();
        assert_eq!(state.command(), Command::Exit);
        state.next_item();
        assert_eq!(state.command(), Command::New);
    }

    #[test]
    fn switching_menus_resets_item() {
        let mut state = MenuState::new(0);
        state.next_item();
        state.next_item();
        state.next_menu();
        assert_eq!(state.item, 0);
        assert_eq!(state.command(), Command::Cut);
    }

    #[test]
    fn hotkeys_open_menus() {
        assert_eq!(MenuState::for_hotkey('F'), Some(MenuState::new(0)));
        assert_eq!(MenuState::for_hotkey('o').map(|s| s.menu), Some(2));
        assert_eq!(MenuState::for_hotkey('z'), None);
    }

    #[test]
    fn title_hit_testing() {
        // " " + " File " + " Edit " + " Format " + " Help "
        assert_eq!(title_at(0), None);
        assert_eq!(title_at(1), Some(0));
        assert_eq!(title_at(6), Some(0));
        assert_eq!(title_at(7), Some(1));
        assert_eq!(title_at(13), Some(2));
        assert_eq!(title_at(21), Some(3));
        assert_eq!(title_at(27), None);
    }

    #[test]
    fn item_hit_testing() {
        let bar = Rect::new(0, 0, 80, 1);
        let rect = dropdown_rect(bar, 0);
        assert_eq!(rect.y, 1);
        // First item sits just inside the top border
        assert_eq!(item_at(bar, 0, rect.x + 2, 2), Some(0));
        assert_eq!(item_at(bar, 0, rect.x + 2, 7), Some(5));
        // Borders are not items
        assert_eq!(item_at(bar, 0, rect.x + 2, 1), None);
        assert_eq!(item_at(bar, 0, rect.x, 2), None);
    }
}

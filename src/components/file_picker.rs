//! File chooser dialog used by Open, Save As and Merge Files.
//!
//! Lists one directory at a time: `..` first, then subdirectories, then the
//! files accepted by the active filter, each group sorted by name. A file-name
//! input below the list takes typed names or absolute paths, so the filter
//! only narrows what is listed, never what can be picked.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::components::centered_rect;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Open,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    /// Only `*.txt` files (case-insensitive).
    Text,
    All,
}

impl FileFilter {
    pub fn label(&self) -> &'static str {
        match self {
            FileFilter::Text => "Text Files (*.txt)",
            FileFilter::All => "All Files",
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::Text => path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt")),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            FileFilter::Text => FileFilter::All,
            FileFilter::All => FileFilter::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub is_dir: bool,
}

impl PickerEntry {
    fn parent() -> Self {
        Self {
            name: "..".to_string(),
            is_dir: true,
        }
    }

    fn is_parent(&self) -> bool {
        self.name == ".."
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Pending,
    Picked(PathBuf),
    Cancelled,
}

/// Lists `dir` the way the picker shows it. Unreadable entries are skipped.
pub fn list_dir(dir: &Path, filter: FileFilter) -> std::io::Result<Vec<PickerEntry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        // Follow symlinks so a link to a directory can be entered
        if path.is_dir() {
            dirs.push(PickerEntry { name, is_dir: true });
        } else if filter.accepts(&path) {
            files.push(PickerEntry {
                name,
                is_dir: false,
            });
        }
    }
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    Ok(dirs)
}

#[derive(Debug, Clone)]
pub struct FilePicker {
    pub mode: PickerMode,
    pub title: String,
    dir: PathBuf,
    filter: FileFilter,
    entries: Vec<PickerEntry>,
    selected: usize,
    /// File-name input, edited by char index.
    input: String,
    cursor: usize,
    /// Set by arrow keys, cleared by typing. While set, Enter acts on the
    /// highlighted entry even if the input holds a name.
    browsing: bool,
}

impl FilePicker {
    pub fn new(
        mode: PickerMode,
        title: &str,
        dir: PathBuf,
        filter: FileFilter,
        initial_name: Option<String>,
    ) -> Self {
        let input = initial_name.unwrap_or_default();
        let cursor = input.chars().count();
        let dir = if dir.is_relative() {
            std::path::absolute(&dir).unwrap_or(dir)
        } else {
            dir
        };
        let mut picker = Self {
            mode,
            title: title.to_string(),
            dir,
            filter,
            entries: Vec::new(),
            selected: 0,
            input,
            cursor,
            browsing: false,
        };
        picker.refresh();
        picker
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn filter(&self) -> FileFilter {
        self.filter
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Re-reads the current directory.
    pub fn refresh(&mut self) {
        let mut entries = Vec::new();
        if self.parent_dir().is_some() {
            entries.push(PickerEntry::parent());
        }
        match list_dir(&self.dir, self.filter) {
            Ok(listed) => entries.extend(listed),
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list directory");
            }
        }
        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => return PickerOutcome::Cancelled,
            (_, KeyCode::Enter) => return self.confirm(),
            (_, KeyCode::Tab) => {
                self.filter = self.filter.toggled();
                self.selected = 0;
                self.refresh();
            }
            (_, KeyCode::Up) => self.move_selection(false),
            (_, KeyCode::Down) => self.move_selection(true),
            (_, KeyCode::Left) => self.cursor = self.cursor.saturating_sub(1),
            (_, KeyCode::Right) => self.cursor = (self.cursor + 1).min(self.input_len()),
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = self.input_len(),
            (_, KeyCode::Backspace) => {
                self.browsing = false;
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            (_, KeyCode::Delete) => {
                self.browsing = false;
                if self.cursor < self.input_len() {
                    let at = self.byte_index(self.cursor);
                    self.input.remove(at);
                }
            }
            (m, KeyCode::Char(ch)) if !m.contains(KeyModifiers::CONTROL) => {
                self.insert_char(ch);
            }
            _ => {}
        }
        PickerOutcome::Pending
    }

    /// Inserts text at the input cursor, dropping line breaks.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(ch);
        }
    }

    fn insert_char(&mut self, ch: char) {
        self.browsing = false;
        let at = self.byte_index(self.cursor);
        self.input.insert(at, ch);
        self.cursor += 1;
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(i, _)| i)
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input_len();
    }

    fn move_selection(&mut self, down: bool) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        self.selected = if down {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
        let entry = &self.entries[self.selected];
        // Save keeps the name being saved under while browsing folders
        if !entry.is_dir {
            let name = entry.name.clone();
            self.set_input(&name);
        } else if self.mode == PickerMode::Open {
            self.set_input("");
        }
        self.browsing = true;
    }

    /// The directory `..` leads to. A relative single-component path has
    /// an empty parent, which is not a directory.
    fn parent_dir(&self) -> Option<PathBuf> {
        self.dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Lists `dir`. The input is left alone.
    fn enter_dir(&mut self, dir: PathBuf) {
        self.dir = std::fs::canonicalize(&dir).unwrap_or(dir);
        self.selected = 0;
        self.browsing = false;
        self.refresh();
    }

    fn go_up(&mut self) {
        if let Some(parent) = self.parent_dir() {
            self.enter_dir(parent);
        }
    }

    fn confirm(&mut self) -> PickerOutcome {
        let typed = self.input.trim().to_string();
        let highlighted_dir = self
            .entries
            .get(self.selected)
            .filter(|e| e.is_dir)
            .cloned();
        if let (true, Some(entry)) = (self.browsing, highlighted_dir) {
            if entry.is_parent() {
                self.go_up();
            } else {
                self.enter_dir(self.dir.join(&entry.name));
            }
            return PickerOutcome::Pending;
        }

        if !typed.is_empty() {
            if typed == ".." {
                self.set_input("");
                self.go_up();
                return PickerOutcome::Pending;
            }
            let candidate = {
                let p = PathBuf::from(&typed);
                if p.is_absolute() {
                    p
                } else {
                    self.dir.join(p)
                }
            };
            if candidate.is_dir() {
                self.set_input("");
                self.enter_dir(candidate);
                return PickerOutcome::Pending;
            }
            return PickerOutcome::Picked(candidate);
        }

        let Some(entry) = self.entries.get(self.selected).cloned() else {
            return PickerOutcome::Pending;
        };
        if entry.is_parent() {
            self.go_up();
            PickerOutcome::Pending
        } else if entry.is_dir {
            self.enter_dir(self.dir.join(&entry.name));
            PickerOutcome::Pending
        } else {
            PickerOutcome::Picked(self.dir.join(&entry.name))
        }
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────

pub fn render(frame: &mut Frame, picker: &FilePicker) {
    let full = frame.area();
    let width = 64u16.min(full.width.saturating_sub(4));
    let height = 22u16.min(full.height.saturating_sub(2));
    let area = centered_rect(full, width, height);
    frame.render_widget(Clear, area);

    // Inner rows: location, blank, list..., blank, name, type, hint
    let list_rows = (height as usize).saturating_sub(2 + 6).max(1);
    let start = picker
        .selected
        .saturating_sub(list_rows.saturating_sub(1));
    let inner_w = width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(" Look in: ", theme::hint_style()),
            Span::raw(picker.dir.display().to_string()),
        ]),
        Line::from(""),
    ];

    for (idx, entry) in picker
        .entries
        .iter()
        .enumerate()
        .skip(start)
        .take(list_rows)
    {
        let label = if entry.is_dir {
            format!(" {}/", entry.name)
        } else {
            format!(" {}", entry.name)
        };
        let style = if idx == picker.selected {
            theme::highlight_style()
        } else if entry.is_dir {
            Style::default().fg(theme::DIRECTORY)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{:<inner_w$}", label, inner_w = inner_w),
            style,
        )));
    }
    while lines.len() < 2 + list_rows {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(render_input(&picker.input, picker.cursor));
    lines.push(Line::from(vec![
        Span::styled(" Files of type: ", theme::hint_style()),
        Span::raw(picker.filter.label()),
    ]));
    lines.push(Line::from(Span::styled(
        " Enter: select  Tab: file type  Esc: cancel",
        theme::hint_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::dialog_border_style())
        .title(Span::styled(
            format!(" {} ", picker.title),
            Style::default()
                .fg(theme::DIALOG_TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .style(theme::dialog_style());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input<'a>(input: &str, cursor: usize) -> Line<'a> {
    let mut spans = vec![Span::styled(" File name: ", theme::hint_style())];
    let before: String = input.chars().take(cursor).collect();
    let at: String = input.chars().nth(cursor).map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = input.chars().skip(cursor + 1).collect();
    spans.push(Span::raw(before));
    spans.push(Span::styled(
        at,
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
    ));
    spans.push(Span::raw(after));
    Line::from(spans)
}

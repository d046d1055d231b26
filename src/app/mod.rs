use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::components::color_picker::{self, ColorOutcome, ColorPicker, TextColor};
use crate::components::dialog::{self, MessageDialog};
use crate::components::file_picker::{self, FileFilter, FilePicker, PickerMode, PickerOutcome};
use crate::components::menu_bar::{self, MenuState};
use crate::components::{editor, header, status};
use crate::document;
use crate::theme;

pub use commands::Command;

/// How long status bar messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// What a pending file-picker selection will be used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickPurpose {
    Open,
    SaveAs,
    MergeFirst,
    /// Second file of a merge; holds the first.
    MergeSecond(PathBuf),
}

/// The modal layer above the editor. At most one is open; while it is, it
/// receives all input.
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    Menu(MenuState),
    FilePicker {
        picker: FilePicker,
        purpose: PickPurpose,
    },
    ColorPicker(ColorPicker),
    Message(MessageDialog),
}

pub struct App<'a> {
    // --- Document state ---
    pub textarea: TextArea<'a>,
    /// File last opened or saved; `None` for a buffer never saved or reset by New.
    pub file_path: Option<PathBuf>,
    pub text_color: Option<TextColor>,
    pub modified: bool,
    /// Buffer contents as last loaded or saved, for modification detection.
    saved_content: String,
    pub should_quit: bool,

    // --- Modal layer ---
    pub overlay: Overlay,

    // --- Status bar ---
    pub status_message: String,
    pub status_time: Option<Instant>,

    // --- File picker defaults ---
    start_dir: PathBuf,
    /// Filter the next picker opens with. Tab in a picker changes it for
    /// every later picker too.
    pick_filter: FileFilter,
    /// Directory of the last pick; the picker reopens there.
    last_pick_dir: Option<PathBuf>,

    // --- Internal tracking ---
    /// Cached rects from last render (used for mouse hit-testing).
    menu_bar_area: Rect,
    content_area: Rect,
    /// Tracks tui-textarea's scroll position for mouse click → buffer position math.
    editor_scroll_top: u16,
    /// True while left mouse button is held down for drag selection.
    mouse_dragging: bool,
}

impl Default for App<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> App<'a> {
    /// An empty, untitled buffer. The file picker starts in the working directory.
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        editor::configure_textarea(&mut textarea, None);

        let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            textarea,
            file_path: None,
            text_color: None,
            modified: false,
            saved_content: String::new(),
            should_quit: false,
            overlay: Overlay::None,
            status_message: "F10: menu | Ctrl+O: open | Ctrl+S: save | Ctrl+Q: quit".to_string(),
            status_time: Some(Instant::now()),
            start_dir,
            pick_filter: FileFilter::Text,
            last_pick_dir: None,
            menu_bar_area: Rect::new(0, 0, 0, 1),
            content_area: Rect::default(),
            editor_scroll_top: 0,
            mouse_dragging: false,
        }
    }

    pub fn with_start_dir(mut self, dir: PathBuf) -> Self {
        self.start_dir = dir;
        self
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.pick_filter = filter;
        self
    }

    /// Returns the full buffer contents as a single string.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// "Notepad" or "Notepad - name.txt".
    pub fn title(&self) -> String {
        document::window_title(self.file_path.as_deref())
    }

    /// Replaces the buffer with `content`, keeping the current text color.
    fn replace_buffer(&mut self, content: &str) {
        let lines: Vec<String> = content.split('\n').map(String::from).collect();
        let mut textarea = TextArea::new(lines);
        editor::configure_textarea(&mut textarea, self.text_color);
        self.textarea = textarea;
        self.editor_scroll_top = 0;
        self.mouse_dragging = false;
    }

    /// Replaces the buffer and treats `content` as the saved state.
    fn load_buffer(&mut self, content: &str) {
        self.replace_buffer(content);
        self.saved_content = content.to_string();
        self.modified = false;
    }

    /// Recomputes the `modified` flag against the last loaded or saved contents.
    fn update_modified(&mut self) {
        self.modified = self.content() != self.saved_content;
    }

    /// Marks the current contents as saved.
    fn mark_saved(&mut self) {
        self.saved_content = self.content();
        self.modified = false;
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called every 100ms from the main loop. Handles timer-based state cleanup.
    pub fn tick(&mut self) {
        // Auto-clear status messages after STATUS_DURATION
        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Dispatches to key, mouse, or paste handlers.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Bracketed paste: terminal sends entire clipboard as one event
            // (enabled via EnableBracketedPaste in main.rs)
            Event::Paste(text) => self.handle_paste(text),
            _ => {}
        }
    }

    /// Counts the total number of words in the buffer.
    fn word_count(&self) -> usize {
        self.textarea
            .lines()
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    /// Shows a temporary message in the status bar.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }

    /// Directory the next file picker opens in.
    fn picker_dir(&self) -> PathBuf {
        self.last_pick_dir
            .clone()
            .or_else(|| {
                self.file_path
                    .as_deref()
                    .and_then(Path::parent)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| self.start_dir.clone())
    }
}

mod clipboard;
mod commands;
mod input;
mod render;
mod selection;

//! Menu commands: New, Open, Save, Save As, Merge Files, Exit, the clipboard
//! actions, Change Text Color and About.
//!
//! Each command is one synchronous action. File failures are reported through
//! an error dialog and leave the buffer, the associated path and the color as
//! they were.

use super::*;

/// Every action reachable from the menu bar or its shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    MergeFiles,
    Exit,
    Cut,
    Copy,
    Paste,
    ChangeColor,
    About,
}

impl<'a> App<'a> {
    pub fn execute(&mut self, command: Command) {
        tracing::debug!(?command, "execute");
        match command {
            Command::New => self.new_file(),
            Command::Open => self.show_picker(PickPurpose::Open),
            Command::Save => self.save(),
            Command::SaveAs => self.show_picker(PickPurpose::SaveAs),
            Command::MergeFiles => self.show_picker(PickPurpose::MergeFirst),
            Command::Exit => self.should_quit = true,
            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::ChangeColor => {
                self.overlay = Overlay::ColorPicker(ColorPicker::new(self.text_color));
            }
            Command::About => self.show_about(),
        }
    }

    /// Clears the buffer and forgets the associated file.
    fn new_file(&mut self) {
        self.text_color = None;
        self.load_buffer("");
        self.file_path = None;
        tracing::info!("new buffer");
    }

    /// Loads `path` into the buffer and associates it. On failure shows the
    /// error dialog and changes nothing. Returns whether the file was loaded.
    pub fn open_path(&mut self, path: &Path) -> bool {
        match document::read_file(path) {
            Ok(content) => {
                self.text_color = None;
                self.load_buffer(&content);
                self.file_path = Some(path.to_path_buf());
                tracing::info!(path = %path.display(), "opened");
                self.set_status(&format!("Opened {}", document::display_name(path)));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "open failed");
                self.show_error(e.user_message());
                false
            }
        }
    }

    /// Writes the buffer to the associated file, or asks for one.
    fn save(&mut self) {
        match self.file_path.clone() {
            Some(path) => {
                self.write_to(&path);
            }
            None => self.show_picker(PickPurpose::SaveAs),
        }
    }

    /// Writes the buffer to `path` and, on success, associates it. On failure
    /// shows the error dialog and keeps the previous association.
    pub fn write_to(&mut self, path: &Path) -> bool {
        let content = self.content();
        match document::write_file(path, &content) {
            Ok(()) => {
                self.file_path = Some(path.to_path_buf());
                self.mark_saved();
                tracing::info!(path = %path.display(), bytes = content.len(), "saved");
                self.set_status("Saved");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.show_error(e.user_message());
                false
            }
        }
    }

    /// Replaces the buffer with the lines of `first` then `second`. The
    /// associated file is left alone, so the result counts as modified.
    pub fn merge_paths(&mut self, first: &Path, second: &Path) -> bool {
        match document::merge_files(first, second) {
            Ok(merged) => {
                self.replace_buffer(&merged);
                self.update_modified();
                tracing::info!(
                    first = %first.display(),
                    second = %second.display(),
                    "merged"
                );
                self.set_status("Merged");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "merge failed");
                self.show_error(document::MERGE_ERROR);
                false
            }
        }
    }

    /// Applies a color to the whole buffer; `None` restores the default.
    pub fn set_text_color(&mut self, color: Option<TextColor>) {
        self.text_color = color;
        editor::apply_text_color(&mut self.textarea, color);
    }

    // ─── Dialogs ─────────────────────────────────────────────────────────

    fn show_picker(&mut self, purpose: PickPurpose) {
        let (mode, title) = match &purpose {
            PickPurpose::Open => (PickerMode::Open, "Open"),
            PickPurpose::SaveAs => (PickerMode::Save, "Save As"),
            PickPurpose::MergeFirst => (PickerMode::Open, "Merge Files: first file"),
            PickPurpose::MergeSecond(_) => (PickerMode::Open, "Merge Files: second file"),
        };
        let initial_name = match mode {
            PickerMode::Save => self
                .file_path
                .as_deref()
                .map(document::display_name),
            PickerMode::Open => None,
        };
        let picker = FilePicker::new(
            mode,
            title,
            self.picker_dir(),
            self.pick_filter,
            initial_name,
        );
        self.overlay = Overlay::FilePicker { picker, purpose };
    }

    /// Runs the action a file picker was opened for.
    pub(super) fn finish_pick(&mut self, purpose: PickPurpose, path: PathBuf) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_pick_dir = Some(parent.to_path_buf());
        }
        match purpose {
            PickPurpose::Open => {
                self.open_path(&path);
            }
            PickPurpose::SaveAs => {
                self.write_to(&path);
            }
            PickPurpose::MergeFirst => self.show_picker(PickPurpose::MergeSecond(path)),
            PickPurpose::MergeSecond(first) => {
                self.merge_paths(&first, &path);
            }
        }
    }

    pub(super) fn show_error(&mut self, message: &str) {
        self.overlay = Overlay::Message(MessageDialog::error(message));
    }

    fn show_about(&mut self) {
        let version = format!("Version {}", env!("CARGO_PKG_VERSION"));
        self.overlay = Overlay::Message(MessageDialog::info(
            "About",
            &[
                document::APP_NAME,
                &version,
                "A terminal text editor written in Rust",
            ],
        ));
    }
}

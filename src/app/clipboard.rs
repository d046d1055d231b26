//! System clipboard integration for Edit > Cut, Copy and Paste.

use super::*;

impl<'a> App<'a> {
    // arboard::Clipboard is created on demand (not stored in App — it's not Send
    // and creating it is cheap).

    /// Writes text to the system clipboard via arboard.
    pub(super) fn copy_to_clipboard(&self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clip) => {
                if let Err(e) = clip.set_text(text.to_string()) {
                    tracing::debug!(error = %e, "clipboard write failed");
                }
            }
            Err(e) => tracing::debug!(error = %e, "system clipboard unavailable"),
        }
    }

    /// Reads text from the system clipboard. Returns None on failure.
    pub(super) fn paste_from_clipboard(&self) -> Option<String> {
        match arboard::Clipboard::new().and_then(|mut clip| clip.get_text()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard read failed");
                None
            }
        }
    }

    /// Copies the selection, then removes it from the buffer.
    pub(super) fn cut(&mut self) {
        let Some(text) = self.get_selected_text() else {
            return;
        };
        self.copy_to_clipboard(&text);
        // Also yanks internally so Paste works without a system clipboard
        self.textarea.cut();
        self.update_modified();
    }

    pub(super) fn copy(&mut self) {
        let Some(text) = self.get_selected_text() else {
            return;
        };
        self.copy_to_clipboard(&text);
        self.textarea.copy();
    }

    /// Inserts the system clipboard text, falling back to the internal yank
    /// buffer when no system clipboard is reachable.
    pub(super) fn paste(&mut self) {
        match self.paste_from_clipboard() {
            Some(text) => {
                self.textarea.insert_str(text);
            }
            None => {
                self.textarea.paste();
            }
        }
        self.update_modified();
    }
}

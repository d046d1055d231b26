//! Selected-text extraction for the clipboard commands.

use super::*;

impl<'a> App<'a> {
    /// Extracts the currently selected text. tui-textarea reports selection
    /// columns in chars, so slicing goes through char indices.
    pub(super) fn get_selected_text(&self) -> Option<String> {
        let ((sr, sc), (er, ec)) = self.textarea.selection_range()?;
        if (sr, sc) == (er, ec) {
            return None;
        }
        let lines = self.textarea.lines();

        let slice = |line: &str, from: usize, to: Option<usize>| -> String {
            let chars = line.chars().skip(from);
            match to {
                Some(to) => chars.take(to.saturating_sub(from)).collect(),
                None => chars.collect(),
            }
        };

        if sr == er {
            return Some(slice(&lines[sr], sc, Some(ec)));
        }

        let mut result = String::new();
        for (i, line) in lines.iter().enumerate().skip(sr).take(er - sr + 1) {
            if i == sr {
                result.push_str(&slice(line, sc, None));
            } else if i == er {
                result.push_str(&slice(line, 0, Some(ec)));
            } else {
                result.push_str(line);
            }
            if i < er {
                result.push('\n');
            }
        }
        Some(result)
    }
}

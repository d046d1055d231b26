//! Plain-text file I/O for the editor buffer.
//!
//! Every function opens its file, does one read or write, and drops the
//! handle before returning, on success and on error alike.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Application name shown in the window title and the About dialog.
pub const APP_NAME: &str = "Notepad";

pub const OPEN_ERROR: &str = "Error opening file!";
pub const SAVE_ERROR: &str = "Error saving file!";
pub const MERGE_ERROR: &str = "Error merging files!";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// The fixed message shown to the user. "Not found" and "permission
    /// denied" read the same.
    pub fn user_message(&self) -> &'static str {
        match self {
            DocumentError::Read { .. } => OPEN_ERROR,
            DocumentError::Write { .. } => SAVE_ERROR,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DocumentError::Read { path, .. } | DocumentError::Write { path, .. } => path,
        }
    }
}

/// Reads a whole file as text. Invalid UTF-8 is replaced and CRLF line
/// endings become LF; everything else is taken verbatim.
pub fn read_file(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.replace("\r\n", "\n"))
}

/// Reads `path` line by line until end of file, appending each line plus a
/// newline to `out`. A last line without a terminator still gets one.
///
/// `out` is only extended once the whole file has been read.
pub fn read_lines_appended(path: &Path, out: &mut String) -> Result<(), DocumentError> {
    let read_err = |source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);

    let mut collected = String::new();
    let mut raw = Vec::new();
    loop {
        raw.clear();
        let n = reader.read_until(b'\n', &mut raw).map_err(read_err)?;
        if n == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        collected.push_str(line);
        collected.push('\n');
    }

    out.push_str(&collected);
    Ok(())
}

/// Lines of `first` followed by lines of `second`, each newline-terminated.
/// Fails as a whole if either file cannot be read.
pub fn merge_files(first: &Path, second: &Path) -> Result<String, DocumentError> {
    let mut merged = String::new();
    read_lines_appended(first, &mut merged)?;
    read_lines_appended(second, &mut merged)?;
    Ok(merged)
}

/// Writes `contents` byte-for-byte, creating or truncating the file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), DocumentError> {
    std::fs::write(path, contents).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The file name component of `path`, for titles and prompts.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn window_title(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("{} - {}", APP_NAME, display_name(p)),
        None => APP_NAME.to_string(),
    }
}

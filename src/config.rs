use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::components::file_picker::FileFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "NOTEPAD_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "notepad", version, about = "A minimal terminal text editor")]
pub struct Cli {
    /// File to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory the file picker starts in (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// List all files in the file picker instead of only *.txt
    #[arg(long)]
    pub all_files: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub start_dir: PathBuf,
    pub default_filter: FileFilter,
    /// Logging is off unless a log file is given; the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    /// Builds the config from parsed arguments and the process environment.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let log_filter = std::env::var(LOG_ENV).ok();
        Self::resolve(cli, log_filter)
    }

    /// Parses `args` (including the program name) without touching the
    /// environment. Used by tests.
    pub fn from_args<I, T>(args: I, log_filter: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).context("invalid arguments")?;
        Self::resolve(cli, log_filter)
    }

    fn resolve(cli: Cli, log_filter: Option<String>) -> Result<Self> {
        let start_dir = match cli.dir {
            Some(dir) => {
                if !dir.is_dir() {
                    anyhow::bail!("Not a directory: {}", dir.display());
                }
                // The picker walks up with `..`, which needs an absolute path
                std::path::absolute(&dir)
                    .with_context(|| format!("cannot resolve {}", dir.display()))?
            }
            None => std::env::current_dir().context("cannot read working directory")?,
        };
        let default_filter = if cli.all_files {
            FileFilter::All
        } else {
            FileFilter::Text
        };
        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            file: cli.file,
            start_dir,
            default_filter,
            log_file: cli.log_file,
            log_filter,
        })
    }
}

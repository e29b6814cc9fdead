//! CLI definition and parsing for the `fx` binary.
//!
//! Notes:
//! - Global flags may appear before or after the subcommand.
//! - --debug is a shorthand for --log-level debug and wins over it.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Small file explorer. CLI flags override config values (loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Browse, copy, move, rename and trash files")]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json_logs: bool,

    /// Read configuration from this XML file instead of the default location.
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List a directory (defaults to the configured start directory)
    Ls {
        #[arg(value_hint = ValueHint::DirPath)]
        path: Option<PathBuf>,
        /// Include hidden entries
        #[arg(short = 'a', long)]
        all: bool,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show type, visibility and modification time of one entry
    Info {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Create an empty file if it does not exist
    Touch {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },
    /// Create a folder if it does not exist
    Mkdir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },
    /// Copy entries into a directory
    Cp {
        #[arg(required = true, num_args = 1.., value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
        #[arg(value_hint = ValueHint::DirPath)]
        dest_dir: PathBuf,
    },
    /// Move entries into a directory
    Mv {
        #[arg(required = true, num_args = 1.., value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
        #[arg(value_hint = ValueHint::DirPath)]
        dest_dir: PathBuf,
    },
    /// Rename an entry in place
    Rename {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
        new_name: String,
    },
    /// Send entries to the OS trash
    Trash {
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
    /// List quick-access folders and drives
    Places,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the config file location in use
    Path,
    /// Write a template config (never overwrites)
    Init,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(crate::sanitize::sanitize_path(file));
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

//! Core library for `file_explorer`.
//!
//! The model layer of a file explorer: typed entries (`FileItem`) that can be
//! moved, copied, renamed, trashed and created; a directory listing helper;
//! navigation state with history; quick-access places and a clipboard.
//! The `fx` binary is a thin command-line front end over these pieces.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod file_item;
pub mod fs_ops;
pub mod listing;
pub mod logging;
pub mod output;
pub mod platform;
pub mod quick_access;
pub mod sanitize;
pub mod shutdown;

pub use clipboard::{Clipboard, ClipboardMode, PasteReport};
pub use config::{
    Config, LogLevel, create_template_config, default_config_path, default_log_path,
    load_config_from_xml, load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{ErrorKind, FileItemError, ListingError};
pub use explorer::{DirectoryListener, Explorer};
pub use file_item::{CopyOutcome, FileItem, FileType, MISSING_MODIFIED_TIME};
pub use listing::list_directory;
pub use quick_access::QuickAccess;
pub use sanitize::sanitize_path;

//! Typed error definitions for file_explorer.
//!
//! Failures fall into three tiers (see [`ErrorKind`]): usage errors the caller
//! must never retry, expected no-ops (represented as `Ok` values, not errors),
//! and filesystem failures carrying the underlying `io::Error`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`FileItemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Programming/usage error such as a same-path move.
    InvalidOperation,
    /// The OS refused or failed the operation.
    Filesystem,
    /// The user interrupted a long-running operation.
    Interrupted,
}

#[derive(Debug, Error)]
pub enum FileItemError {
    #[error("invalid {op} on '{}': {reason}", .path.display())]
    InvalidOperation {
        op: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("{}", describe_io(.op, .path, .source))]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_space(.required, .available, .dest))]
    InsufficientSpace {
        required: u64,
        available: u64,
        dest: PathBuf,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FileItemError {
    pub(crate) fn invalid(op: &'static str, path: &Path, reason: impl Into<String>) -> Self {
        FileItemError::InvalidOperation {
            op,
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FileItemError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            FileItemError::Filesystem { .. } | FileItemError::InsufficientSpace { .. } => {
                ErrorKind::Filesystem
            }
            FileItemError::Interrupted => ErrorKind::Interrupted,
        }
    }

    /// Stable numeric code used in structured logs and as the CLI exit status.
    pub fn code(&self) -> i32 {
        match self {
            FileItemError::InvalidOperation { .. } => 2,
            FileItemError::Filesystem { .. } => 3,
            FileItemError::InsufficientSpace { .. } => 4,
            FileItemError::Interrupted => 130,
        }
    }

    /// The underlying io::Error, if this is a filesystem failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            FileItemError::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failure to produce a directory listing. Distinct from "no children".
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot read directory '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    pub fn path(&self) -> &Path {
        match self {
            ListingError::NotFound(p) | ListingError::NotADirectory(p) => p,
            ListingError::Unreadable { path, .. } => path,
        }
    }
}

/// Returns a closure for `.map_err(...)` that wraps an io::Error into
/// [`FileItemError::Filesystem`] tagged with the operation and path.
///
/// ```ignore
/// fs::create_dir(dir).map_err(io_error_with_help("create directory", dir))?;
/// ```
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FileItemError + 'a {
    move |source: io::Error| FileItemError::Filesystem {
        op,
        path: path.to_path_buf(),
        source,
    }
}

fn describe_space(required: &u64, available: &u64, dest: &Path) -> String {
    format!(
        "Insufficient disk space for destination {}: need {}, have {}",
        dest.display(),
        crate::fs_ops::format_bytes(*required),
        crate::fs_ops::format_bytes(*available)
    )
}

/// Human-friendly message with op/path plus platform-aware hints.
fn describe_io(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" - ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

fn hint_for(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and permissions"),
                libc::EXDEV => Some("cross-filesystem; rename not possible"),
                libc::EBUSY => Some("resource busy; another process is using it"),
                libc::ENOENT => Some("path not found; it may have been removed"),
                libc::EEXIST | libc::ENOTEMPTY => Some("already exists; pick another name"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem"),
                libc::ENOTDIR => Some("a path component is not a directory"),
                libc::EISDIR => Some("target is a directory"),
                libc::ENAMETOOLONG => Some("filename or path too long"),
                libc::ELOOP => Some("too many symbolic link levels"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                17 => Some("not same device; cross-filesystem move"),
                32 => Some("sharing violation; file is in use"),
                2 | 3 => Some("path not found; it may have been removed"),
                80 | 183 => Some("already exists; pick another name"),
                112 => Some("insufficient disk space"),
                19 => Some("write protected / read-only media"),
                206 => Some("filename or path too long"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed"),
        io::ErrorKind::AlreadyExists => Some("already exists; pick another name"),
        _ => None,
    }
}

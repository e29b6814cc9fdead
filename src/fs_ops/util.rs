use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::errors::{FileItemError, io_error_with_help};

pub(super) fn is_cross_device(e: &io::Error) -> bool {
    // No stable ErrorKind for EXDEV / ERROR_NOT_SAME_DEVICE; use raw codes.
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}

/// Fail with `AlreadyExists` if anything (even a dangling symlink) sits at `dest`.
pub(super) fn ensure_vacant(op: &'static str, dest: &Path) -> Result<(), FileItemError> {
    if fs::symlink_metadata(dest).is_ok() {
        return Err(io_error_with_help(op, dest)(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }
    Ok(())
}

/// Copy the modification time of `src` onto `dest` (best-effort).
pub(super) fn preserve_mtime(src_meta: &fs::Metadata, dest: &Path) {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let _ = set_file_mtime(dest, mtime);
}

/// Total size in bytes of the regular files under `root` (following links).
/// A plain file yields its own length.
pub fn tree_size(root: &Path) -> Result<u64, FileItemError> {
    let mut total = 0u64;
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(root).to_path_buf();
            io_error_with_help("measure", &at)(io::Error::from(e))
        })?;
        if entry.file_type().is_file() {
            let len = entry
                .metadata()
                .map_err(|e| io_error_with_help("stat", entry.path())(io::Error::from(e)))?
                .len();
            total = total.saturating_add(len);
        }
    }
    Ok(total)
}

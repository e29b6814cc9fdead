//! Recursive directory copy.
//! Creates the target tree first, then copies files in parallel (rayon).
//! Existing destination directories are merged into; existing files are
//! replaced through a temp sibling, so a failed copy never truncates them.

use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use crate::errors::{FileItemError, io_error_with_help};
use crate::shutdown;

use super::file_copy::copy_via_temp;
use super::space::ensure_space_for_copy;
use super::util::{preserve_mtime, tree_size};

/// Copy the tree rooted at `src_dir` to `dest` (created if missing).
/// Symlinks are followed; a link cycle is reported as a filesystem error.
pub fn copy_dir(src_dir: &Path, dest: &Path) -> Result<(), FileItemError> {
    shutdown::check()?;

    let required = tree_size(src_dir)?;
    if let Some(parent) = dest.parent() {
        ensure_space_for_copy(parent, required)?;
    }

    let mut dirs: Vec<(PathBuf, fs::Metadata)> = Vec::new();
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(src_dir).follow_links(true) {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(src_dir).to_path_buf();
            io_error_with_help("walk directory", &at)(io::Error::from(e))
        })?;
        let ft = entry.file_type();
        if ft.is_dir() {
            let meta = entry
                .metadata()
                .map_err(|e| io_error_with_help("stat directory", entry.path())(io::Error::from(e)))?;
            dirs.push((entry.into_path(), meta));
        } else if ft.is_file() {
            files.push(entry.into_path());
        }
        // Sockets, FIFOs and devices are skipped.
    }

    for (dir, _) in &dirs {
        let new_dir = target_for(src_dir, dest, dir);
        fs::create_dir_all(&new_dir).map_err(io_error_with_help("create directory", &new_dir))?;
    }

    files.par_iter().try_for_each(|path| -> Result<(), FileItemError> {
        shutdown::check()?;
        let dst = target_for(src_dir, dest, path);
        let meta = fs::metadata(path).map_err(io_error_with_help("stat source", path))?;
        copy_via_temp(path, &dst, &meta)?;
        Ok(())
    })?;

    // Deepest first, so stamping a child doesn't disturb its parent's time.
    for (dir, meta) in dirs.iter().rev() {
        preserve_mtime(meta, &target_for(src_dir, dest, dir));
    }

    info!(src = %src_dir.display(), dest = %dest.display(), files = files.len(), "Copied directory");
    Ok(())
}

/// Map a path under `root` to the same relative spot under `dest`.
fn target_for(root: &Path, dest: &Path, p: &Path) -> PathBuf {
    match p.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => dest.to_path_buf(),
        Ok(rel) => dest.join(rel),
        Err(_) => dest.to_path_buf(),
    }
}

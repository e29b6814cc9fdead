//! Directory listing: the immediate children of a folder as `FileItem`s.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::ListingError;
use crate::file_item::{FileItem, FileType};
use crate::sanitize::sanitize_path;

/// List the immediate children of `dir` (non-recursive).
///
/// - Each child is typed Folder/File by inspecting the filesystem.
/// - Hidden children are skipped unless `show_hidden` is set.
/// - Folders come first, then case-insensitive name order.
/// - An empty directory is `Ok(vec![])`; a missing path, a non-directory and
///   an unreadable directory are distinct errors.
pub fn list_directory(dir: impl AsRef<Path>, show_hidden: bool) -> Result<Vec<FileItem>, ListingError> {
    let dir = sanitize_path(dir);

    let meta = fs::metadata(&dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ListingError::NotFound(dir.clone()),
        _ => ListingError::Unreadable {
            path: dir.clone(),
            source: e,
        },
    })?;
    if !meta.is_dir() {
        return Err(ListingError::NotADirectory(dir));
    }

    let entries = fs::read_dir(&dir).map_err(|source| ListingError::Unreadable {
        path: dir.clone(),
        source,
    })?;

    let mut items: Vec<FileItem> = entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(FileItem::new(e.path())),
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(|item| show_hidden || !item.is_hidden())
        .collect();

    items.sort_by(listing_order);
    debug!(dir = %dir.display(), count = items.len(), show_hidden, "Listed directory");
    Ok(items)
}

fn listing_order(a: &FileItem, b: &FileItem) -> Ordering {
    let rank = |t: FileType| match t {
        FileType::Drive => 0,
        FileType::Folder => 1,
        FileType::File => 2,
    };
    rank(a.file_type())
        .cmp(&rank(b.file_type()))
        .then_with(|| a.file_name().to_lowercase().cmp(&b.file_name().to_lowercase()))
        .then_with(|| a.file_name().cmp(&b.file_name()))
}

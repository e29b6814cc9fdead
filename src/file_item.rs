//! A single filesystem entry (drive, folder or file) and the operations the
//! explorer performs on it.
//!
//! Failure discipline:
//! - `move_to`/`copy_to`/`write_to_disk` return typed errors; an
//!   [`FileItemError::InvalidOperation`] is always a caller bug.
//! - `rename`/`send_to_trash` report failure as `false`; their `try_*`
//!   forms return the underlying error.
//! - Copying a source that vanished is not an error: see [`CopyOutcome`].

use filetime::FileTime;
use serde::Serialize;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{FileItemError, io_error_with_help};
use crate::fs_ops;
use crate::platform;
use crate::sanitize::sanitize_path;

/// Value of [`FileItem::last_modified_time`] for entries that cannot be stat'ed.
pub const MISSING_MODIFIED_TIME: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Drive,
    Folder,
    File,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileType::Drive => "drive",
            FileType::Folder => "folder",
            FileType::File => "file",
        };
        f.write_str(s)
    }
}

/// Result of a successful [`FileItem::copy_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The entry now also exists at the returned location.
    Copied(FileItem),
    /// The source no longer existed (e.g. deleted while on the clipboard).
    /// Nothing new is left behind, but files already merged into a folder
    /// that existed before the copy stay there.
    SourceMissing,
}

/// One filesystem entry. Two items are equal iff path and type match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileItem {
    file_type: FileType,
    path: PathBuf,
}

impl FileItem {
    /// Create an item, inspecting the filesystem once to pick Folder or File.
    /// Missing paths become File. Never yields a Drive; use [`FileItem::with_type`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = sanitize_path(path);
        let file_type = if path.is_dir() {
            FileType::Folder
        } else {
            FileType::File
        };
        Self { file_type, path }
    }

    pub fn with_type(file_type: FileType, path: impl AsRef<Path>) -> Self {
        Self {
            file_type,
            path: sanitize_path(path),
        }
    }

    /// Move this entry into `target_dir`, keeping its name.
    /// Returns the item at its new location.
    pub fn move_to(&self, target_dir: impl AsRef<Path>) -> Result<FileItem, FileItemError> {
        let dest = self.destination_in("move", target_dir.as_ref())?;
        match self.file_type {
            FileType::Drive => {
                return Err(FileItemError::invalid("move", &self.path, "drives cannot be moved"));
            }
            FileType::Folder => fs_ops::move_dir(&self.path, &dest)?,
            FileType::File => fs_ops::move_file(&self.path, &dest)?,
        }
        info!(src = %self.path.display(), dest = %dest.display(), kind = %self.file_type, "Moved entry");
        Ok(FileItem {
            file_type: self.file_type,
            path: dest,
        })
    }

    /// Copy this entry into `target_dir`, keeping its name. Folders are copied
    /// recursively and merged into an existing destination folder.
    pub fn copy_to(&self, target_dir: impl AsRef<Path>) -> Result<CopyOutcome, FileItemError> {
        let dest = self.destination_in("copy", target_dir.as_ref())?;
        if self.file_type == FileType::Drive {
            return Err(FileItemError::invalid("copy", &self.path, "drives cannot be copied"));
        }

        // `exists` follows links: a link whose target is gone counts as vanished.
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Copy source no longer exists; nothing to do");
            return Ok(CopyOutcome::SourceMissing);
        }

        let dest_existed = fs::symlink_metadata(&dest).is_ok();
        let copied = match self.file_type {
            FileType::Folder => fs_ops::copy_dir(&self.path, &dest),
            FileType::File | FileType::Drive => fs_ops::copy_file(&self.path, &dest),
        };
        match copied {
            Ok(()) => {
                info!(src = %self.path.display(), dest = %dest.display(), kind = %self.file_type, "Copied entry");
                Ok(CopyOutcome::Copied(FileItem {
                    file_type: self.file_type,
                    path: dest,
                }))
            }
            // Source vanished between the check above and the copy itself.
            Err(_) if !self.path.exists() => {
                // A folder copy may have created part of a new tree; a merge
                // target that was already there is left alone.
                if self.file_type == FileType::Folder && !dest_existed {
                    let _ = fs::remove_dir_all(&dest);
                }
                debug!(path = %self.path.display(), "Copy source vanished mid-copy");
                Ok(CopyOutcome::SourceMissing)
            }
            Err(e) => Err(e),
        }
    }

    /// Create the entry on disk if absent: an empty file for File, a directory
    /// for Folder. Returns whether something was created. Drives are never created.
    pub fn write_to_disk(&self) -> Result<bool, FileItemError> {
        match self.file_type {
            FileType::Drive => Ok(false),
            FileType::Folder => match fs::create_dir(&self.path) {
                Ok(()) => {
                    info!(path = %self.path.display(), "Created folder");
                    Ok(true)
                }
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "Folder not created");
                    Ok(false)
                }
            },
            FileType::File => match OpenOptions::new().write(true).create_new(true).open(&self.path) {
                Ok(_) => {
                    info!(path = %self.path.display(), "Created file");
                    Ok(true)
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
                Err(e) => Err(io_error_with_help("create file", &self.path)(e)),
            },
        }
    }

    /// Rename in place. `false` for drives, taken names, or any I/O failure.
    pub fn rename(&self, new_name: &str) -> bool {
        match self.try_rename(new_name) {
            Ok(_) => true,
            Err(e) => {
                warn!(path = %self.path.display(), new_name, error = %e, "Rename failed");
                false
            }
        }
    }

    /// Rename in place, returning the renamed item or the reason it failed.
    /// An existing entry with the new name is never replaced.
    pub fn try_rename(&self, new_name: &str) -> Result<FileItem, FileItemError> {
        if self.file_type == FileType::Drive {
            return Err(FileItemError::invalid("rename", &self.path, "drives cannot be renamed"));
        }
        if !is_plain_name(new_name) {
            return Err(FileItemError::invalid(
                "rename",
                &self.path,
                format!("'{new_name}' is not a valid entry name"),
            ));
        }
        let parent = self
            .path
            .parent()
            .ok_or_else(|| FileItemError::invalid("rename", &self.path, "entry has no parent"))?;
        let target = parent.join(new_name);
        if target == self.path {
            return Ok(self.clone());
        }
        if fs::symlink_metadata(&target).is_ok() {
            return Err(io_error_with_help("rename", &target)(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "an entry with that name already exists",
            )));
        }
        fs::rename(&self.path, &target).map_err(io_error_with_help("rename", &self.path))?;
        info!(src = %self.path.display(), dest = %target.display(), "Renamed entry");
        Ok(FileItem {
            file_type: self.file_type,
            path: target,
        })
    }

    /// Move the entry to the OS trash. `false` for drives or if the OS refuses.
    pub fn send_to_trash(&self) -> bool {
        match self.try_send_to_trash() {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Trash failed");
                false
            }
        }
    }

    pub fn try_send_to_trash(&self) -> Result<(), FileItemError> {
        if self.file_type == FileType::Drive {
            return Err(FileItemError::invalid("trash", &self.path, "drives cannot be trashed"));
        }
        fs::symlink_metadata(&self.path).map_err(io_error_with_help("trash", &self.path))?;
        trash::delete(&self.path)
            .map_err(|e| io_error_with_help("trash", &self.path)(io::Error::other(e.to_string())))?;
        info!(path = %self.path.display(), "Sent entry to trash");
        Ok(())
    }

    /// Display name: the raw path for drives, otherwise the last segment.
    pub fn file_name(&self) -> String {
        match self.file_type {
            FileType::Drive => self.path.to_string_lossy().into_owned(),
            _ => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.to_string_lossy().into_owned()),
        }
    }

    /// Absolute, sanitized path of the entry.
    pub fn item_directory(&self) -> &Path {
        &self.path
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_hidden(&self) -> bool {
        platform::is_hidden(&self.path)
    }

    /// Last modification as milliseconds since the Unix epoch, or
    /// [`MISSING_MODIFIED_TIME`] if the entry cannot be stat'ed.
    pub fn last_modified_time(&self) -> i64 {
        match fs::metadata(&self.path) {
            Ok(meta) => {
                let ft = FileTime::from_last_modification_time(&meta);
                ft.unix_seconds() * 1000 + i64::from(ft.nanoseconds() / 1_000_000)
            }
            Err(_) => MISSING_MODIFIED_TIME,
        }
    }

    /// Whether anything (including a dangling symlink) exists at the path.
    pub fn on_disk(&self) -> bool {
        fs::symlink_metadata(&self.path).is_ok()
    }

    /// Resolve `target_dir/<name>` and apply the same-path and into-itself guards.
    fn destination_in(&self, op: &'static str, target_dir: &Path) -> Result<PathBuf, FileItemError> {
        let name = self
            .path
            .file_name()
            .ok_or_else(|| FileItemError::invalid(op, &self.path, "entry has no name"))?;
        let dest = sanitize_path(target_dir).join(name);
        if dest == self.path {
            return Err(FileItemError::invalid(op, &self.path, "destination is the current location"));
        }
        if self.file_type == FileType::Folder && dest.starts_with(&self.path) {
            return Err(FileItemError::invalid(
                op,
                &self.path,
                format!("cannot place a folder inside itself ('{}')", dest.display()),
            ));
        }
        Ok(dest)
    }
}

impl fmt::Display for FileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.file_type)
    }
}

/// A single normal path component: no separators, not `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    let mut comps = Path::new(name).components();
    matches!((comps.next(), comps.next()), (Some(Component::Normal(c)), None) if c == name)
}

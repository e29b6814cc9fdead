//! Quick-access places: user-chosen folders followed by the system's drives.

use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::file_item::{FileItem, FileType};
use crate::platform;
use crate::sanitize::sanitize_path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickAccess {
    folders: Vec<FileItem>,
}

impl QuickAccess {
    /// Keep the configured paths that currently exist as directories.
    pub fn from_config(cfg: &Config) -> Self {
        let mut qa = Self::default();
        for path in &cfg.quick_access {
            if !qa.add(path) {
                debug!(path = %path.display(), "Skipping quick-access entry");
            }
        }
        qa
    }

    /// Append a folder. `false` if it is missing, not a directory, or already listed.
    pub fn add(&mut self, path: impl AsRef<Path>) -> bool {
        let path = sanitize_path(path);
        if !path.is_dir() {
            return false;
        }
        let item = FileItem::with_type(FileType::Folder, &path);
        if self.folders.contains(&item) {
            return false;
        }
        self.folders.push(item);
        true
    }

    /// Remove a folder. `false` if it was not listed.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> bool {
        let path = sanitize_path(path);
        let before = self.folders.len();
        self.folders.retain(|item| item.item_directory() != path);
        self.folders.len() != before
    }

    pub fn folders(&self) -> &[FileItem] {
        &self.folders
    }

    /// Drive-typed items for the mounted roots.
    pub fn drives() -> Vec<FileItem> {
        platform::drives()
            .into_iter()
            .map(|root| FileItem::with_type(FileType::Drive, root))
            .collect()
    }

    /// Folders first, then drives.
    pub fn entries(&self) -> Vec<FileItem> {
        let mut all = self.folders.clone();
        all.extend(Self::drives());
        all
    }
}

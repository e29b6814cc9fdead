//! In-process clipboard for copy/cut/paste of entries.
//!
//! Items are held by reference (path + type); nothing is read until paste.
//! A copied item deleted in the meantime is skipped, not an error.

use std::path::Path;
use tracing::info;

use crate::errors::FileItemError;
use crate::file_item::{CopyOutcome, FileItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

/// What a paste did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteReport {
    /// Items now present in the target directory.
    pub pasted: Vec<FileItem>,
    /// Copy-mode sources that no longer existed.
    pub skipped: Vec<FileItem>,
}

#[derive(Debug, Clone)]
pub struct Clipboard {
    mode: ClipboardMode,
    items: Vec<FileItem>,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self {
            mode: ClipboardMode::Copy,
            items: Vec::new(),
        }
    }
}

impl Clipboard {
    pub fn copy(&mut self, items: impl IntoIterator<Item = FileItem>) {
        self.set(ClipboardMode::Copy, items);
    }

    pub fn cut(&mut self, items: impl IntoIterator<Item = FileItem>) {
        self.set(ClipboardMode::Cut, items);
    }

    fn set(&mut self, mode: ClipboardMode, items: impl IntoIterator<Item = FileItem>) {
        self.mode = mode;
        self.items = items.into_iter().collect();
    }

    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Paste every item into `target_dir`, in order. The first failure stops
    /// the paste; items already pasted stay where they are. Cut items leave
    /// the clipboard once moved.
    pub fn paste_into(&mut self, target_dir: impl AsRef<Path>) -> Result<PasteReport, FileItemError> {
        let target_dir = target_dir.as_ref();
        let mut report = PasteReport::default();
        let mut outcome = Ok(());
        for item in &self.items {
            let step = match self.mode {
                ClipboardMode::Copy => item.copy_to(target_dir).map(|copied| match copied {
                    CopyOutcome::Copied(new_item) => report.pasted.push(new_item),
                    CopyOutcome::SourceMissing => report.skipped.push(item.clone()),
                }),
                ClipboardMode::Cut => item.move_to(target_dir).map(|moved| report.pasted.push(moved)),
            };
            if let Err(e) = step {
                outcome = Err(e);
                break;
            }
        }
        if self.mode == ClipboardMode::Cut {
            self.items.drain(..report.pasted.len());
        }
        outcome?;
        info!(
            dir = %target_dir.display(),
            pasted = report.pasted.len(),
            skipped = report.skipped.len(),
            "Pasted clipboard"
        );
        Ok(report)
    }
}

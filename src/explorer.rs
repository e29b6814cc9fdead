//! Navigation state: the current directory, its listing, and back/forward
//! history.
//!
//! Refresh-on-change is an explicit contract: every successful change of the
//! current directory (or of the hidden-items flag) re-lists the directory and
//! then calls each registered [`DirectoryListener`] synchronously. A failed
//! navigation leaves the previous directory and listing in place.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::ListingError;
use crate::file_item::FileItem;
use crate::listing::list_directory;
use crate::sanitize::sanitize_path;

/// Receives the fresh listing after every successful refresh.
pub trait DirectoryListener {
    fn directory_changed(&mut self, directory: &Path, items: &[FileItem]);
}

pub struct Explorer {
    current: PathBuf,
    items: Vec<FileItem>,
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
    show_hidden: bool,
    listeners: Vec<Box<dyn DirectoryListener>>,
}

impl Explorer {
    /// Open `start` and list it immediately.
    pub fn new(start: impl AsRef<Path>, show_hidden: bool) -> Result<Self, ListingError> {
        let current = sanitize_path(start);
        let items = list_directory(&current, show_hidden)?;
        Ok(Self {
            current,
            items,
            back: Vec::new(),
            forward: Vec::new(),
            show_hidden,
            listeners: Vec::new(),
        })
    }

    pub fn add_listener(&mut self, listener: Box<dyn DirectoryListener>) {
        self.listeners.push(listener);
    }

    pub fn current_directory(&self) -> &Path {
        &self.current
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Change to `path`. On success the old directory joins the back history
    /// and the forward history is cleared.
    pub fn navigate_to(&mut self, path: impl AsRef<Path>) -> Result<(), ListingError> {
        let target = sanitize_path(path);
        if target == self.current {
            return self.refresh();
        }
        let items = list_directory(&target, self.show_hidden)?;
        let previous = std::mem::replace(&mut self.current, target);
        self.back.push(previous);
        self.forward.clear();
        self.install(items);
        Ok(())
    }

    /// Step back in history. `Ok(false)` when there is nowhere to go.
    pub fn go_back(&mut self) -> Result<bool, ListingError> {
        let Some(target) = self.back.pop() else {
            return Ok(false);
        };
        match list_directory(&target, self.show_hidden) {
            Ok(items) => {
                let previous = std::mem::replace(&mut self.current, target);
                self.forward.push(previous);
                self.install(items);
                Ok(true)
            }
            Err(e) => {
                warn!(dir = %target.display(), error = %e, "Dropping unreachable history entry");
                Err(e)
            }
        }
    }

    /// Step forward in history. `Ok(false)` when there is nowhere to go.
    pub fn go_forward(&mut self) -> Result<bool, ListingError> {
        let Some(target) = self.forward.pop() else {
            return Ok(false);
        };
        match list_directory(&target, self.show_hidden) {
            Ok(items) => {
                let previous = std::mem::replace(&mut self.current, target);
                self.back.push(previous);
                self.install(items);
                Ok(true)
            }
            Err(e) => {
                warn!(dir = %target.display(), error = %e, "Dropping unreachable history entry");
                Err(e)
            }
        }
    }

    /// Navigate to the parent directory. `Ok(false)` at a filesystem root.
    pub fn go_up(&mut self) -> Result<bool, ListingError> {
        match self.current.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.navigate_to(parent)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Re-list the current directory. On failure the old listing is kept.
    pub fn refresh(&mut self) -> Result<(), ListingError> {
        let items = list_directory(&self.current, self.show_hidden)?;
        self.install(items);
        Ok(())
    }

    pub fn set_show_hidden(&mut self, show_hidden: bool) -> Result<(), ListingError> {
        let previous = std::mem::replace(&mut self.show_hidden, show_hidden);
        self.refresh().inspect_err(|_| self.show_hidden = previous)
    }

    fn install(&mut self, items: Vec<FileItem>) {
        self.items = items;
        debug!(dir = %self.current.display(), count = self.items.len(), "Directory refreshed");
        for listener in &mut self.listeners {
            listener.directory_changed(&self.current, &self.items);
        }
    }
}

impl std::fmt::Debug for Explorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Explorer")
            .field("current", &self.current)
            .field("items", &self.items.len())
            .field("back", &self.back)
            .field("forward", &self.forward)
            .field("show_hidden", &self.show_hidden)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

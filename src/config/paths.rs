//! Default path helpers and symlink checks.

use dirs::{config_dir, data_dir, home_dir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{APP_DIR, CONFIG_ENV};

/// Config file location: `$FILE_EXPLORER_CONFIG` if set, else the
/// OS-appropriate config dir (falling back to `~/.config`).
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    config_dir()
        .or_else(|| home_dir().map(|h| h.join(".config")))
        .map(|base| base.join(APP_DIR).join("config.xml"))
}

/// Default log file location under the OS data dir. Does not create anything.
pub fn default_log_path() -> Option<PathBuf> {
    data_dir()
        .or_else(|| home_dir().map(|h| h.join(".local").join("share")))
        .map(|base| base.join(APP_DIR).join("file_explorer.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}

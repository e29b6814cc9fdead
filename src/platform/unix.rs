//! Unix implementations of platform helpers.

use anyhow::{bail, Context, Result};
use std::ffi::CString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use super::tmp_sibling_name;

/// Dot-prefixed names are hidden. The root has no name and is never hidden.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.as_bytes().first() == Some(&b'.'))
        .unwrap_or(false)
}

/// Filesystem roots shown as drives: `/`, plus mounted volumes on macOS.
pub fn drives() -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut roots = vec![PathBuf::from("/")];
    #[cfg(target_os = "macos")]
    if let Ok(rd) = fs::read_dir("/Volumes") {
        let mut volumes: Vec<PathBuf> = rd
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        volumes.sort();
        roots.extend(volumes);
    }
    roots
}

/// Bytes available to unprivileged users on the filesystem holding `path`.
pub fn free_space_bytes(path: &Path) -> io::Result<u64> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte"))?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    #[allow(clippy::unnecessary_cast)]
    Ok((stat.f_bavail as u64).saturating_mul(stat.f_frsize as u64))
}

/// Open log file for appending; a newly created file gets 0600.
/// Existing files keep their mode (e.g. group-readable for log shipping).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)
}

/// Write a new file atomically with mode 0600: temp sibling + fsync + rename
/// + fsync of the parent directory. Refuses to replace an existing file.
pub fn write_config_secure_new(path: &Path, contents: &[u8]) -> Result<()> {
    if path.exists() {
        bail!("Refusing to overwrite existing file: {}", path.display());
    }
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"))?;
    fs::create_dir_all(parent).with_context(|| format!("create parent '{}'", parent.display()))?;
    let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));

    let tmp = tmp_sibling_name(path);
    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(&tmp)
        .with_context(|| format!("create temp '{}'", tmp.display()))?;
    f.write_all(contents).context("write temp")?;
    f.sync_all().context("fsync temp")?;
    drop(f);

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("rename '{}' -> '{}'", tmp.display(), path.display()));
    }
    File::open(parent)
        .and_then(|d| d.sync_all())
        .with_context(|| format!("fsync dir '{}'", parent.display()))?;
    Ok(())
}

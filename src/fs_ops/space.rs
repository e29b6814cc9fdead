use std::path::Path;
use tracing::debug;

use crate::errors::FileItemError;
use crate::platform::free_space_bytes;

/// Headroom kept free on the destination filesystem.
const CUSHION: u64 = 4 * 1024 * 1024;

pub fn format_bytes(n: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let f = n as f64;
    if f >= GB {
        format!("{:.1} GiB", f / GB)
    } else if f >= MB {
        format!("{:.1} MiB", f / MB)
    } else if f >= KB {
        format!("{:.1} KiB", f / KB)
    } else {
        format!("{} B", n)
    }
}

/// Refuse a copy of `required` bytes into `dst_dir` when it cannot fit.
/// An unanswerable free-space query does not block the copy.
pub fn ensure_space_for_copy(dst_dir: &Path, required: u64) -> Result<(), FileItemError> {
    ensure_space(dst_dir, required, 0)
}

/// Like [`ensure_space_for_copy`], plus headroom. Used before a move turns
/// into copy+remove across filesystems, where the destination fills while the
/// source still holds its space.
pub fn ensure_space_for_move(dst_dir: &Path, required: u64) -> Result<(), FileItemError> {
    ensure_space(dst_dir, required, CUSHION)
}

fn ensure_space(dst_dir: &Path, required: u64, cushion: u64) -> Result<(), FileItemError> {
    let available = match free_space_bytes(dst_dir) {
        Ok(n) => n,
        Err(e) => {
            debug!(dir = %dst_dir.display(), error = %e, "free-space query failed; skipping check");
            return Ok(());
        }
    };
    if !fits(required, available, cushion) {
        return Err(FileItemError::InsufficientSpace {
            required,
            available,
            dest: dst_dir.to_path_buf(),
        });
    }
    Ok(())
}

fn fits(required: u64, available: u64, cushion: u64) -> bool {
    required.saturating_add(cushion) <= available
}

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{FileItemError, io_error_with_help};

use super::dir_copy::copy_dir;
use super::space::ensure_space_for_move;
use super::util::{ensure_vacant, is_cross_device, tree_size};

/// Move a directory tree to `dest`. The destination must not exist.
/// Tries a rename first; across filesystems copies the tree then removes the source.
pub fn move_dir(src_dir: &Path, dest: &Path) -> Result<(), FileItemError> {
    ensure_vacant("move directory", dest)?;

    match fs::rename(src_dir, dest) {
        Ok(()) => {
            info!(src = %src_dir.display(), dest = %dest.display(), "Renamed directory");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Rename crosses filesystems, falling back to copy+remove");
            if let Some(parent) = dest.parent() {
                ensure_space_for_move(parent, tree_size(src_dir)?)?;
            }
            if let Err(copy_err) = copy_dir(src_dir, dest) {
                let _ = fs::remove_dir_all(dest);
                return Err(copy_err);
            }
            fs::remove_dir_all(src_dir)
                .map_err(io_error_with_help("remove moved source directory", src_dir))?;
            info!(src = %src_dir.display(), dest = %dest.display(), "Copied directory and removed source");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("move directory", src_dir)(e)),
    }
}

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{FileItemError, io_error_with_help};

use super::file_copy::copy_file;
use super::space::ensure_space_for_move;
use super::util::{ensure_vacant, is_cross_device};

/// Move one file to `dest`. The destination must not exist.
/// Tries a rename first; across filesystems falls back to copy + remove.
pub fn move_file(src: &Path, dest: &Path) -> Result<(), FileItemError> {
    ensure_vacant("move file", dest)?;

    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Rename crosses filesystems, falling back to copy+remove");
            let len = fs::metadata(src).map_err(io_error_with_help("stat source", src))?.len();
            if let Some(parent) = dest.parent() {
                ensure_space_for_move(parent, len)?;
            }
            // A failed copy leaves no partial `dest` behind, so a retry is not blocked.
            copy_file(src, dest)?;
            if let Err(e) = fs::remove_file(src) {
                // Leave the source in place rather than losing both copies.
                let _ = fs::remove_file(dest);
                return Err(io_error_with_help("remove moved source", src)(e));
            }
            info!(src = %src.display(), dest = %dest.display(), "Copied file and removed source");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("move file", src)(e)),
    }
}

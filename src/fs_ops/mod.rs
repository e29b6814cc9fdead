//! Filesystem operations backing `FileItem`: single-file and directory-tree
//! move/copy with rename-first, copy-fallback semantics.
//!
//! Conventions shared by every function here:
//! - `dest` is the full destination path (not the destination directory).
//! - Errors come back as [`FileItemError`], tagged with the operation and path.
//! - Source-existence policy (e.g. "vanished source is a no-op") belongs to the caller.

mod dir_copy;
mod dir_move;
mod file_copy;
mod file_move;
mod space;
mod util;

pub use dir_copy::copy_dir;
pub use dir_move::move_dir;
pub use file_copy::copy_file;
pub use file_move::move_file;
pub use space::{ensure_space_for_copy, ensure_space_for_move, format_bytes};
pub use util::tree_size;

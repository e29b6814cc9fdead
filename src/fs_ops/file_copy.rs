use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{FileItemError, io_error_with_help};
use crate::platform::tmp_sibling_name;

use super::space::ensure_space_for_copy;
use super::util::preserve_mtime;

/// Copy one file to `dest`, replacing an existing regular file there.
/// The source's modification time is carried over.
pub fn copy_file(src: &Path, dest: &Path) -> Result<(), FileItemError> {
    let meta = fs::metadata(src).map_err(io_error_with_help("stat source", src))?;
    if let Some(parent) = dest.parent() {
        ensure_space_for_copy(parent, meta.len())?;
    }
    let bytes = copy_via_temp(src, dest, &meta)?;
    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    Ok(())
}

/// Copy `src` into a hidden sibling of `dest`, then rename it over `dest`.
/// `dest` is either left as it was or fully replaced; the temp file never
/// outlives a failure.
pub(super) fn copy_via_temp(src: &Path, dest: &Path, src_meta: &fs::Metadata) -> Result<u64, FileItemError> {
    let tmp = tmp_sibling_name(dest);
    let bytes = match fs::copy(src, &tmp) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(io_error_with_help("copy to temporary file", &tmp)(e));
        }
    };
    preserve_mtime(src_meta, &tmp);
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("rename temporary file into place", dest)(e));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(".file_explorer.tmp."))
            .collect()
    }

    #[test]
    fn failed_overwrite_keeps_old_destination() {
        let td = tempdir().unwrap();
        let not_a_file = td.path().join("folder");
        fs::create_dir(&not_a_file).unwrap();
        let dest = td.path().join("keep.txt");
        fs::write(&dest, "old content").unwrap();

        assert!(copy_file(&not_a_file, &dest).is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old content");
        assert!(leftovers(td.path()).is_empty());
    }

    // Reading /proc/self/mem from offset 0 fails after the destination is
    // opened, so this exercises a failure in the middle of the copy.
    #[cfg(target_os = "linux")]
    #[test]
    fn read_error_mid_copy_keeps_old_destination() {
        let td = tempdir().unwrap();
        let dest = td.path().join("keep.txt");
        fs::write(&dest, "old content").unwrap();

        assert!(copy_file(Path::new("/proc/self/mem"), &dest).is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old content");
        assert!(leftovers(td.path()).is_empty());
    }

    #[test]
    fn overwrite_replaces_content_without_temp_files() {
        let td = tempdir().unwrap();
        let src = td.path().join("new.txt");
        let dest = td.path().join("old.txt");
        fs::write(&src, "fresh").unwrap();
        fs::write(&dest, "stale").unwrap();

        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh");
        assert!(leftovers(td.path()).is_empty());
    }
}

use assert_fs::prelude::*;
use file_explorer::{ErrorKind, FileItem, FileItemError, shutdown};

// Runs in its own process: the shutdown flag is global.
#[test]
fn requested_shutdown_stops_folder_copy() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("big/one.bin").write_binary(&[0u8; 1024]).unwrap();
    temp.child("big/two.bin").write_binary(&[1u8; 1024]).unwrap();
    temp.child("dest").create_dir_all().unwrap();

    shutdown::request();
    assert!(shutdown::is_requested());

    let err = FileItem::new(temp.child("big").path())
        .copy_to(temp.child("dest").path())
        .unwrap_err();
    assert!(matches!(err, FileItemError::Interrupted));
    assert_eq!(err.kind(), ErrorKind::Interrupted);
    assert_eq!(err.code(), 130);
    assert!(!temp.child("dest/big/one.bin").path().exists());
}

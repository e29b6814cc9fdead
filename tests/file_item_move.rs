use std::fs;

use assert_fs::prelude::*;
use file_explorer::{ErrorKind, FileItem, FileItemError, FileType};

#[test]
fn move_file_into_sibling_folder() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("report.txt");
    src.write_str("quarterly").unwrap();
    let dest_dir = temp.child("archive");
    dest_dir.create_dir_all().unwrap();

    let moved = FileItem::new(src.path()).move_to(dest_dir.path()).unwrap();

    assert!(!src.path().exists());
    assert_eq!(moved.item_directory(), dest_dir.child("report.txt").path());
    assert_eq!(moved.file_type(), FileType::File);
    assert_eq!(fs::read_to_string(moved.item_directory()).unwrap(), "quarterly");
}

#[test]
fn move_folder_keeps_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("album/disc2/track.flac").write_str("two").unwrap();
    temp.child("album/cover.jpg").write_str("img").unwrap();
    let dest_dir = temp.child("music");
    dest_dir.create_dir_all().unwrap();

    let moved = FileItem::new(temp.child("album").path()).move_to(dest_dir.path()).unwrap();

    assert!(!temp.child("album").path().exists());
    assert_eq!(moved.file_type(), FileType::Folder);
    assert_eq!(
        fs::read_to_string(moved.item_directory().join("disc2/track.flac")).unwrap(),
        "two"
    );
    assert!(moved.item_directory().join("cover.jpg").is_file());
}

#[test]
fn move_into_current_parent_is_invalid_for_every_type() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("f.txt").touch().unwrap();
    temp.child("d").create_dir_all().unwrap();

    let items = [
        FileItem::with_type(FileType::File, temp.child("f.txt").path()),
        FileItem::with_type(FileType::Folder, temp.child("d").path()),
        FileItem::with_type(FileType::Drive, temp.child("d").path()),
    ];
    for item in items {
        let err = item.move_to(temp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation, "{item}: {err}");
        assert!(item.item_directory().exists());
    }
}

#[test]
fn drive_cannot_be_moved() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = if cfg!(windows) { "C:\\" } else { "/" };
    let err = FileItem::with_type(FileType::Drive, root).move_to(temp.path()).unwrap_err();
    assert!(matches!(err, FileItemError::InvalidOperation { .. }));
}

#[test]
fn folder_cannot_move_into_itself() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("outer/inner").create_dir_all().unwrap();

    let outer = FileItem::new(temp.child("outer").path());
    let err = outer.move_to(temp.child("outer/inner").path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert!(temp.child("outer/inner").path().is_dir());
}

#[test]
fn move_refuses_to_replace_existing_destination() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("new").unwrap();
    temp.child("dest/a.txt").write_str("old").unwrap();

    let err = FileItem::new(temp.child("a.txt").path())
        .move_to(temp.child("dest").path())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Filesystem);
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(std::io::ErrorKind::AlreadyExists)
    );
    assert_eq!(fs::read_to_string(temp.child("dest/a.txt").path()).unwrap(), "old");
    assert_eq!(fs::read_to_string(temp.child("a.txt").path()).unwrap(), "new");
}

#[test]
fn moving_a_missing_file_is_a_filesystem_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("dest").create_dir_all().unwrap();
    let err = FileItem::with_type(FileType::File, temp.child("ghost.txt").path())
        .move_to(temp.child("dest").path())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Filesystem);
}

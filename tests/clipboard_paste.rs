use std::fs;

use assert_fs::prelude::*;
use file_explorer::{Clipboard, ClipboardMode, ErrorKind, FileItem, FileType};

#[test]
fn copy_paste_keeps_clipboard_and_sources() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("dir/inner.txt").write_str("i").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let mut clip = Clipboard::default();
    clip.copy(vec![
        FileItem::new(temp.child("a.txt").path()),
        FileItem::new(temp.child("dir").path()),
    ]);
    assert_eq!(clip.mode(), ClipboardMode::Copy);

    let report = clip.paste_into(temp.child("dest").path()).unwrap();
    assert_eq!(report.pasted.len(), 2);
    assert!(report.skipped.is_empty());
    assert!(temp.child("dest/a.txt").path().is_file());
    assert!(temp.child("dest/dir/inner.txt").path().is_file());
    assert!(temp.child("a.txt").path().exists());
    assert_eq!(clip.items().len(), 2, "copy mode can paste again");
}

#[test]
fn vanished_sources_are_skipped() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("gone.txt").touch().unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let mut clip = Clipboard::default();
    clip.copy(vec![FileItem::new(temp.child("gone.txt").path())]);
    fs::remove_file(temp.child("gone.txt").path()).unwrap();

    let report = clip.paste_into(temp.child("dest").path()).unwrap();
    assert!(report.pasted.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(fs::read_dir(temp.child("dest").path()).unwrap().count(), 0);
}

#[test]
fn cut_paste_moves_and_clears() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("move-me.txt").write_str("m").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let mut clip = Clipboard::default();
    clip.cut(vec![FileItem::new(temp.child("move-me.txt").path())]);
    let report = clip.paste_into(temp.child("dest").path()).unwrap();

    assert_eq!(report.pasted[0].item_directory(), temp.child("dest/move-me.txt").path());
    assert!(!temp.child("move-me.txt").path().exists());
    assert!(clip.is_empty());
}

#[test]
fn failing_cut_keeps_unpasted_items() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("first.txt").touch().unwrap();
    temp.child("second.txt").touch().unwrap();
    temp.child("dest/second.txt").touch().unwrap();

    let first = FileItem::new(temp.child("first.txt").path());
    let second = FileItem::new(temp.child("second.txt").path());
    let mut clip = Clipboard::default();
    clip.cut(vec![first, second.clone()]);

    let err = clip.paste_into(temp.child("dest").path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Filesystem);
    assert!(temp.child("dest/first.txt").path().exists());
    assert_eq!(clip.items(), &[second]);
}

#[test]
fn pasting_into_own_parent_is_invalid() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("x.txt").touch().unwrap();

    let mut clip = Clipboard::default();
    clip.copy(vec![FileItem::with_type(FileType::File, temp.child("x.txt").path())]);
    let err = clip.paste_into(temp.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);

    clip.clear();
    assert!(clip.is_empty());
}

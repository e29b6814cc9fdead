use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use file_explorer::{DirectoryListener, Explorer, FileItem, ListingError};

/// Records every directory it is told about.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(PathBuf, usize)>>>);

impl DirectoryListener for Recorder {
    fn directory_changed(&mut self, directory: &Path, items: &[FileItem]) {
        self.0.lock().unwrap().push((directory.to_path_buf(), items.len()));
    }
}

fn tree() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("docs/a.txt").touch().unwrap();
    temp.child("docs/b.txt").touch().unwrap();
    temp.child("music").create_dir_all().unwrap();
    temp.child(".hidden").touch().unwrap();
    temp
}

#[test]
fn navigate_back_and_forward() {
    let temp = tree();
    let mut ex = Explorer::new(temp.path(), false).unwrap();
    assert!(!ex.can_go_back());

    ex.navigate_to(temp.child("docs").path()).unwrap();
    assert_eq!(ex.current_directory(), temp.child("docs").path());
    assert_eq!(ex.items().len(), 2);

    assert!(ex.go_back().unwrap());
    assert_eq!(ex.current_directory(), temp.path());
    assert!(ex.can_go_forward());

    assert!(ex.go_forward().unwrap());
    assert_eq!(ex.current_directory(), temp.child("docs").path());
    assert!(!ex.go_forward().unwrap());
}

#[test]
fn new_navigation_clears_forward_history() {
    let temp = tree();
    let mut ex = Explorer::new(temp.path(), false).unwrap();
    ex.navigate_to(temp.child("docs").path()).unwrap();
    ex.go_back().unwrap();
    ex.navigate_to(temp.child("music").path()).unwrap();
    assert!(!ex.can_go_forward());
}

#[test]
fn failed_navigation_keeps_previous_state() {
    let temp = tree();
    let mut ex = Explorer::new(temp.path(), false).unwrap();
    let before = ex.items().to_vec();

    let err = ex.navigate_to(temp.child("nope").path()).unwrap_err();
    assert!(matches!(err, ListingError::NotFound(_)));
    assert_eq!(ex.current_directory(), temp.path());
    assert_eq!(ex.items(), before.as_slice());
    assert!(!ex.can_go_back());
}

#[test]
fn go_up_reaches_parent() {
    let temp = tree();
    let mut ex = Explorer::new(temp.child("docs").path(), false).unwrap();
    assert!(ex.go_up().unwrap());
    assert_eq!(ex.current_directory(), temp.path());
}

#[test]
fn go_up_at_root_is_false() {
    let root = if cfg!(windows) { "C:\\" } else { "/" };
    let mut ex = Explorer::new(root, false).unwrap();
    assert!(!ex.go_up().unwrap());
}

#[test]
fn listeners_see_every_refresh() {
    let temp = tree();
    let rec = Recorder::default();
    let mut ex = Explorer::new(temp.path(), false).unwrap();
    ex.add_listener(Box::new(rec.clone()));

    ex.navigate_to(temp.child("docs").path()).unwrap();
    ex.refresh().unwrap();
    let _ = ex.navigate_to(temp.child("missing").path());

    let seen = rec.0.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            (temp.child("docs").path().to_path_buf(), 2),
            (temp.child("docs").path().to_path_buf(), 2),
        ]
    );
}

#[cfg(unix)]
#[test]
fn toggling_hidden_refreshes_listing() {
    let temp = tree();
    let mut ex = Explorer::new(temp.path(), false).unwrap();
    assert_eq!(ex.items().len(), 2);

    ex.set_show_hidden(true).unwrap();
    assert!(ex.show_hidden());
    assert_eq!(ex.items().len(), 3);
}

#[test]
fn refresh_sees_new_entries() {
    let temp = tree();
    let mut ex = Explorer::new(temp.child("music").path(), false).unwrap();
    assert!(ex.items().is_empty());
    temp.child("music/track.ogg").touch().unwrap();
    ex.refresh().unwrap();
    assert_eq!(ex.items().len(), 1);
}

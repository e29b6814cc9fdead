use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use assert_fs::prelude::*;
use serde_json::Value;

/// Run `fx` with an isolated config and log file under `sandbox`.
fn fx(sandbox: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("fx");
    Command::new(me)
        .env("FILE_EXPLORER_CONFIG", sandbox.join("no-config.xml"))
        .arg("--log-file")
        .arg(sandbox.join("fx.log"))
        .args(args)
        .output()
        .expect("spawn fx")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn ls_json_lists_folders_first() {
    let temp = assert_fs::TempDir::new().unwrap();
    let work = temp.child("work");
    work.child("b.txt").touch().unwrap();
    work.child("a-dir").create_dir_all().unwrap();
    let path = work.path().to_str().unwrap();

    let out = fx(temp.path(), &["ls", path, "--json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let rows: Value = serde_json::from_str(&stdout(&out)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "a-dir");
    assert_eq!(rows[0]["type"], "folder");
    assert_eq!(rows[1]["name"], "b.txt");
    assert_eq!(rows[1]["type"], "file");
    assert!(rows[1]["modified"].as_i64().unwrap() > 0);
}

#[test]
fn touch_mkdir_cp_mv_rename() {
    let temp = assert_fs::TempDir::new().unwrap();
    let work = temp.child("work");
    work.create_dir_all().unwrap();
    let p = |rel: &str| work.path().join(rel).to_string_lossy().into_owned();

    assert!(fx(temp.path(), &["touch", &p("a.txt")]).status.success());
    assert!(fx(temp.path(), &["mkdir", &p("sub")]).status.success());
    assert!(fx(temp.path(), &["mkdir", &p("other")]).status.success());
    assert!(work.child("a.txt").path().is_file());
    assert!(work.child("sub").path().is_dir());

    let out = fx(temp.path(), &["cp", &p("a.txt"), &p("sub")]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Copied"));
    assert!(work.child("sub/a.txt").path().is_file());

    assert!(fx(temp.path(), &["mv", &p("sub"), &p("other")]).status.success());
    assert!(work.child("other/sub/a.txt").path().is_file());
    assert!(!work.child("sub").path().exists());

    assert!(fx(temp.path(), &["rename", &p("a.txt"), "b.txt"]).status.success());
    assert!(work.child("b.txt").path().is_file());
}

#[test]
fn invalid_move_exits_with_invalid_operation_code() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/sub").create_dir_all().unwrap();
    let sub = temp.child("work/sub");
    let work = temp.child("work");

    let out = fx(
        temp.path(),
        &["mv", sub.path().to_str().unwrap(), work.path().to_str().unwrap()],
    );
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
    assert!(sub.path().is_dir());
}

#[test]
fn ls_of_missing_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let out = fx(temp.path(), &["ls", missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Directory not found"));
}

#[test]
fn rename_onto_existing_name_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.txt").write_str("b").unwrap();

    let out = fx(temp.path(), &["rename", temp.child("a.txt").path().to_str().unwrap(), "b.txt"]);
    assert_eq!(out.status.code(), Some(3));
    assert_eq!(fs::read_to_string(temp.child("b.txt").path()).unwrap(), "b");
}

#[test]
fn config_init_then_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let cfg = temp.path().join("conf").join("config.xml");
    let cfg_str = cfg.to_str().unwrap();

    let out = fx(temp.path(), &["--config", cfg_str, "config", "init"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(cfg.is_file());

    let again = fx(temp.path(), &["--config", cfg_str, "config", "init"]);
    assert!(!again.status.success(), "init must not overwrite");

    let out = fx(temp.path(), &["--config", cfg_str, "config", "path"]);
    assert!(stdout(&out).contains("config.xml"));

    let out = fx(temp.path(), &["--config", cfg_str, "places"]);
    assert!(out.status.success());
}

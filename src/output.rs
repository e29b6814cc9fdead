//! User-facing terminal output. Colors only when the stream is a TTY.

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use crate::file_item::{FileItem, FileType, MISSING_MODIFIED_TIME};

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Plain line without a prefix, for output users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One listing line: type tag, local modified time, name.
pub fn format_entry(item: &FileItem) -> String {
    let tag = match item.file_type() {
        FileType::Drive => "drv",
        FileType::Folder => "dir",
        FileType::File => "   ",
    };
    format!("{}  {}  {}", tag, format_modified(item.last_modified_time()), item.file_name())
}

/// `YYYY-MM-DD HH:MM` in local time, or dashes when unknown.
pub fn format_modified(millis: i64) -> String {
    if millis == MISSING_MODIFIED_TIME {
        return "----------------".into();
    }
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "----------------".into())
}

pub fn print_entry(item: &FileItem) {
    let line = format_entry(item);
    if stdout_tty() && item.file_type() != FileType::File {
        println!("{}", line.blue().bold());
    } else {
        println!("{}", line);
    }
}

//! Path sanitization applied to every user-supplied or listed path.
//!
//! - A leading `~` component expands to the user's home directory.
//! - Relative paths are made absolute against the current directory.
//! - `.` segments, duplicate and trailing separators are dropped and `..`
//!   is resolved lexically (symlinks are NOT resolved).
//! - Windows verbatim prefixes (`\\?\C:\`) are simplified via `dunce`.

use std::path::{Component, Path, PathBuf};

/// Sanitize a path as described in the module docs. Never touches the disk
/// beyond reading the current directory for relative inputs.
pub fn sanitize_path(raw: impl AsRef<Path>) -> PathBuf {
    let expanded = expand_home(raw.as_ref());
    let absolute = std::path::absolute(&expanded).unwrap_or(expanded);
    let normalized = normalize_lexically(&absolute);
    dunce::simplified(&normalized).to_path_buf()
}

/// Replace a leading `~` component with the home directory (if known).
fn expand_home(p: &Path) -> PathBuf {
    let mut comps = p.components();
    match comps.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(comps.as_path()),
            None => p.to_path_buf(),
        },
        _ => p.to_path_buf(),
    }
}

fn normalize_lexically(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in p.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if popped {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
                // `..` at the root stays at the root.
            }
            Component::Normal(seg) => out.push(seg),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(sanitize_path("~"), sanitize_path(&home));
            assert_eq!(sanitize_path("~/Documents"), sanitize_path(home.join("Documents")));
        }
    }

    #[test]
    fn tilde_inside_a_name_is_literal() {
        let p = sanitize_path("/tmp/~notes");
        assert!(p.ends_with("~notes"));
    }

    #[cfg(unix)]
    #[test]
    fn redundant_segments_and_trailing_separators_are_removed() {
        assert_eq!(sanitize_path("/tmp//a/./b/"), PathBuf::from("/tmp/a/b"));
        assert_eq!(sanitize_path("/tmp/a/../b"), PathBuf::from("/tmp/b"));
        assert_eq!(sanitize_path("/../.."), PathBuf::from("/"));
        assert_eq!(sanitize_path("/"), PathBuf::from("/"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let p = sanitize_path("some/relative");
        assert!(p.is_absolute());
        assert!(p.ends_with("some/relative"));
    }
}

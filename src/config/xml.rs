//! XML configuration support (quick_xml + serde).
//!
//! ```xml
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/home/me/.local/share/file_explorer/file_explorer.log</log_file>
//!   <show_hidden>false</show_hidden>
//!   <start_directory>~</start_directory>
//!   <quick_access>
//!     <path>~/Documents</path>
//!     <path>/mnt/media</path>
//!   </quick_access>
//! </config>
//! ```
//!
//! Every field is optional. Unknown fields are rejected so typos surface early.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::platform::write_config_secure_new;
use crate::sanitize::sanitize_path;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config", deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    show_hidden: Option<bool>,
    start_directory: Option<String>,
    quick_access: Option<XmlQuickAccess>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlQuickAccess {
    #[serde(rename = "path", default)]
    paths: Vec<String>,
}

// Accept " true " and friends; anything unparsable counts as unset.
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(level) = non_empty(parsed.log_level.as_deref()).and_then(LogLevel::parse) {
        cfg.log_level = level;
    }
    if let Some(file) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(sanitize_path(file));
    }
    if let Some(show) = parsed.show_hidden {
        cfg.show_hidden = show;
    }
    if let Some(start) = non_empty(parsed.start_directory.as_deref()) {
        cfg.start_directory = sanitize_path(start);
    }
    if let Some(qa) = parsed.quick_access {
        cfg.quick_access = qa
            .paths
            .iter()
            .filter_map(|p| non_empty(Some(p.as_str())))
            .map(|p| sanitize_path(p))
            .collect();
    }
    cfg
}

/// Load a Config from a specific XML file.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(xml_to_config(parsed))
}

/// Load the config from the default location (or `$FILE_EXPLORER_CONFIG`).
/// `Ok(None)` when no config file exists there.
pub fn load_config_from_xml() -> Result<Option<Config>> {
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}

/// Write a commented template config at `path`. Refuses to overwrite an
/// existing file or to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!("Refusing to create config: ancestor of {} is a symlink", path.display());
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/file_explorer.log".into());

    let content = format!(
        "<!--\n  file_explorer configuration (XML)\n\n    log_level        -> quiet | normal | info | debug\n    log_file         -> path to log file (optional; stderr still used)\n    show_hidden      -> true to list hidden entries\n    start_directory  -> directory opened when none is given (~ allowed)\n    quick_access     -> one <path> per shortcut, in display order\n\n  CLI flags override XML values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <show_hidden>false</show_hidden>\n  <start_directory>~</start_directory>\n  <quick_access>\n{}  </quick_access>\n</config>\n",
        suggested_log,
        template_quick_access(),
    );

    write_config_secure_new(path, content.as_bytes())?;
    info!("Created template config at {}", path.display());
    Ok(())
}

fn template_quick_access() -> String {
    super::types::default_quick_access()
        .iter()
        .map(|p| format!("    <path>{}</path>\n", p.display()))
        .collect()
}

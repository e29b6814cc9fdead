//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler and
//! runs one subcommand against the library.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use file_explorer::cli::{Args, Command, ConfigAction};
use file_explorer::logging::init_tracing;
use file_explorer::output as out;
use file_explorer::{
    Config, CopyOutcome, FileItem, FileItemError, FileType, QuickAccess, create_template_config,
    default_config_path, list_directory, load_config_from_xml, load_config_from_xml_path,
    sanitize_path, shutdown,
};

/// One row of `fx ls --json`.
#[derive(Debug, Serialize)]
struct EntryJson {
    name: String,
    path: PathBuf,
    #[serde(rename = "type")]
    file_type: FileType,
    hidden: bool,
    modified: i64,
}

impl From<&FileItem> for EntryJson {
    fn from(item: &FileItem) -> Self {
        Self {
            name: item.file_name(),
            path: item.item_directory().to_path_buf(),
            file_type: item.file_type(),
            hidden: item.is_hidden(),
            modified: item.last_modified_time(),
        }
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config management runs before logging so a broken config can still be inspected.
    if let Command::Config { action } = &args.command {
        return run_config(*action, args.config.as_deref());
    }

    let mut cfg = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json_logs)
        .context("initialize logging")?;

    // Dropping the guard on interrupt flushes the file appender.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current file...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install interrupt handler")?;
    }

    debug!(command = ?args.command, log_level = %cfg.log_level, "Starting fx");
    let result = dispatch(&args.command, &cfg);

    if let Err(e) = &result {
        match e.downcast_ref::<FileItemError>() {
            Some(fe) => error!(code = fe.code(), kind = ?fe.kind(), error = %fe, "Command failed"),
            None => error!(error = %e, "Command failed"),
        }
    }

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_from_xml_path(&sanitize_path(path)),
        None => Ok(load_config_from_xml()?.unwrap_or_default()),
    }
}

fn config_location(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(sanitize_path(p)),
        None => default_config_path().context("could not determine a default config path"),
    }
}

fn run_config(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    let path = config_location(explicit)?;
    match action {
        ConfigAction::Path => {
            out::print_user(&path.display().to_string());
            if !path.exists() {
                out::print_info("No config file exists there yet. Run `fx config init` to create one.");
            }
        }
        ConfigAction::Init => {
            create_template_config(&path)?;
            out::print_success(&format!("Wrote template config to {}", path.display()));
        }
    }
    Ok(())
}

fn dispatch(command: &Command, cfg: &Config) -> Result<()> {
    match command {
        Command::Ls { path, all, json } => {
            let dir = path.as_deref().map(sanitize_path).unwrap_or_else(|| cfg.start_directory.clone());
            let items = list_directory(&dir, *all || cfg.show_hidden)?;
            if *json {
                let rows: Vec<EntryJson> = items.iter().map(EntryJson::from).collect();
                out::print_user(&serde_json::to_string_pretty(&rows)?);
            } else {
                items.iter().for_each(out::print_entry);
            }
        }
        Command::Info { path } => {
            let item = FileItem::new(path);
            if !item.on_disk() {
                bail!("No such file or directory: {}", item.item_directory().display());
            }
            out::print_user(&format!("path:     {}", item.item_directory().display()));
            out::print_user(&format!("type:     {}", item.file_type()));
            out::print_user(&format!("hidden:   {}", item.is_hidden()));
            out::print_user(&format!("modified: {}", out::format_modified(item.last_modified_time())));
        }
        Command::Touch { path } => create(FileItem::with_type(FileType::File, path))?,
        Command::Mkdir { path } => create(FileItem::with_type(FileType::Folder, path))?,
        Command::Cp { sources, dest_dir } => {
            let dest_dir = existing_dir(dest_dir)?;
            for src in sources {
                shutdown::check()?;
                match FileItem::new(src).copy_to(&dest_dir)? {
                    CopyOutcome::Copied(copy) => {
                        out::print_user(&format!("Copied {} -> {}", src.display(), copy.item_directory().display()))
                    }
                    CopyOutcome::SourceMissing => {
                        out::print_warn(&format!("Skipped {}: it no longer exists", src.display()))
                    }
                }
            }
        }
        Command::Mv { sources, dest_dir } => {
            let dest_dir = existing_dir(dest_dir)?;
            for src in sources {
                shutdown::check()?;
                let moved = FileItem::new(src).move_to(&dest_dir)?;
                out::print_user(&format!("Moved {} -> {}", src.display(), moved.item_directory().display()));
            }
        }
        Command::Rename { path, new_name } => {
            let renamed = FileItem::new(path).try_rename(new_name)?;
            out::print_user(&format!("Renamed {} -> {}", path.display(), renamed.item_directory().display()));
        }
        Command::Trash { paths } => {
            for p in paths {
                FileItem::new(p).try_send_to_trash()?;
                out::print_user(&format!("Trashed {}", p.display()));
            }
        }
        Command::Places => {
            QuickAccess::from_config(cfg).entries().iter().for_each(out::print_entry);
        }
        // Handled before logging init.
        Command::Config { .. } => {}
    }
    Ok(())
}

fn create(item: FileItem) -> Result<()> {
    if item.write_to_disk()? {
        out::print_success(&format!("Created {}", item.item_directory().display()));
        return Ok(());
    }
    let exists = match item.file_type() {
        FileType::Folder => item.item_directory().is_dir(),
        _ => item.item_directory().is_file(),
    };
    if !exists {
        bail!("Could not create {}", item.item_directory().display());
    }
    out::print_info(&format!("Already exists: {}", item.item_directory().display()));
    Ok(())
}

fn existing_dir(dir: &Path) -> Result<PathBuf> {
    let dir = sanitize_path(dir);
    if !dir.is_dir() {
        bail!("Destination is not a directory: {}", dir.display());
    }
    Ok(dir)
}

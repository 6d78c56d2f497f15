//! Implementation of the `scaffold init` command.
//!
//! # What `scaffold init` does
//!
//! 1. Creates the `.scaffold/` state directory
//! 2. Creates `config.yaml` with defaults (if missing)
//! 3. Creates an empty `catalog.yaml` (if missing)
//! 4. Creates the `events/` directory and records an `init` event
//!
//! The command is idempotent: existing files are never overwritten.

use crate::catalog::FileCatalog;
use crate::config::Config;
use crate::context::{WorkspaceContext, resolve_context};
use crate::error::{Result, ScaffoldError};
use crate::events::{Event, EventAction, log_event};
use crate::fs::atomic_write_file;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the `scaffold init` command.
pub fn cmd_init(workspace: Option<&Path>) -> Result<()> {
    let ctx = resolve_context(workspace)?;
    let created = create_workspace_structure(&ctx)?;

    let config = Config::load_or_default(ctx.config_path())?;
    if config.log_events {
        let event = Event::new(EventAction::Init).with_details(json!({
            "root": ctx.root.display().to_string(),
            "created": created.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        }));
        log_event(&ctx, &event);
    }

    if created.is_empty() {
        println!("Scaffold workspace already initialized.");
        println!();
        println!("Workspace: {}", ctx.root.display());
        return Ok(());
    }

    println!("Initialized scaffold workspace.");
    println!();
    println!("Workspace: {}", ctx.root.display());
    println!();
    println!("Created:");
    for path in &created {
        let shown = path.strip_prefix(&ctx.root).unwrap_or(path);
        println!("  {}", shown.display());
    }
    println!();
    println!("Add apps, tasks and fields to .scaffold/catalog.yaml, then save a template");
    println!("with `scaffold template save --app <APP> --task <TASK> --file <FILE>`.");

    Ok(())
}

/// Create whatever parts of the workspace are missing.
///
/// Returns the paths that were created, in creation order.
pub(crate) fn create_workspace_structure(ctx: &WorkspaceContext) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    if ctx.state_dir.exists() && !ctx.state_dir.is_dir() {
        return Err(ScaffoldError::UserError(format!(
            "'{}' exists but is not a directory.\n\n\
             Delete or rename it and run `scaffold init` again.",
            ctx.state_dir.display()
        )));
    }

    for dir in [ctx.state_dir.clone(), ctx.events_dir()] {
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                ScaffoldError::UserError(format!(
                    "failed to create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            created.push(dir);
        }
    }

    let config_path = ctx.config_path();
    if !config_path.exists() {
        atomic_write_file(&config_path, &Config::default().to_yaml()?)?;
        created.push(config_path);
    }

    let catalog_path = ctx.catalog_path();
    if !catalog_path.exists() {
        FileCatalog::default().save(&catalog_path)?;
        created.push(catalog_path);
    }

    Ok(created)
}

//! Command implementations for scaffold.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the workspace loading every command but `init`
//! shares.

mod fields;
mod generate;
mod init;
mod lint;
mod template;

use crate::catalog::{FileCatalog, slugify_field_name};
use crate::cli::{Cli, Command, SlugArgs, TemplateAction};
use crate::config::Config;
use crate::context::{WorkspaceContext, require_initialized_workspace};
use crate::error::{Result, ScaffoldError};
use crate::events::{Event, log_event};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let workspace = cli.workspace.as_deref();

    match cli.command {
        Command::Init => init::cmd_init(workspace),
        Command::Generate(args) => generate::cmd_generate(workspace, args),
        Command::Lint(args) => lint::cmd_lint(workspace, args),
        Command::Template(cmd) => match cmd.action {
            TemplateAction::Draft(args) => template::cmd_draft(workspace, args),
            TemplateAction::Show(args) => template::cmd_show(workspace, args),
            TemplateAction::Save(args) => template::cmd_save(workspace, args),
        },
        Command::Fields(args) => fields::cmd_fields(workspace, args),
        Command::Slug(args) => cmd_slug(args),
    }
}

/// An initialized workspace with its config and catalog loaded.
pub(crate) struct Workspace {
    pub ctx: WorkspaceContext,
    pub config: Config,
    pub catalog: FileCatalog,
}

impl Workspace {
    /// Resolve and load the workspace, failing if it is not initialized.
    pub fn open(workspace: Option<&Path>) -> Result<Self> {
        let ctx = require_initialized_workspace(workspace)?;
        let config = Config::load_or_default(ctx.config_path())?;
        let catalog = FileCatalog::load(ctx.catalog_path())?;

        Ok(Self {
            ctx,
            config,
            catalog,
        })
    }

    /// Persist the catalog.
    pub fn save_catalog(&self) -> Result<()> {
        self.catalog.save(self.ctx.catalog_path())
    }

    /// Record an event unless logging is switched off.
    pub fn log(&self, event: &Event) {
        if self.config.log_events {
            log_event(&self.ctx, event);
        }
    }
}

/// Read a UTF-8 text file given on the command line.
pub(crate) fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ScaffoldError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

fn cmd_slug(args: SlugArgs) -> Result<()> {
    let slug = slugify_field_name(&args.label);
    if slug.is_empty() {
        return Err(ScaffoldError::UserError(format!(
            "label '{}' has no characters usable in a field name",
            args.label
        )));
    }

    println!("{}", slug);
    Ok(())
}

//! CLI argument parsing for scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scaffold: compose AI prompts from task templates and form values.
///
/// A workspace keeps a catalog of apps, tasks, form fields and prompt
/// templates in `.scaffold/catalog.yaml`:
/// - Templates use `{{field_name}}` placeholders and a `<<fixed>>` marker
/// - The newest saved template of a task is the one used
/// - Generated prompts come with a ready-to-open chat link
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace directory (default: nearest parent containing `.scaffold/`).
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for scaffold.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a scaffold workspace in the current directory.
    ///
    /// Creates `.scaffold/` with a default `config.yaml` and an empty
    /// `catalog.yaml`. Existing files are left untouched.
    Init,

    /// Generate the prompt for a task.
    ///
    /// Layers global, task, field and runtime values, fills the latest
    /// template, and prints the prompt (or JSON with the chat link).
    Generate(GenerateArgs),

    /// Check a template for undefined variables.
    ///
    /// Lints the task's latest template, or a template file if given.
    Lint(LintArgs),

    /// Template management commands.
    ///
    /// Draft a starter template, show the current one, or save a new version.
    Template(TemplateCommand),

    /// List a task's fields in form order.
    Fields(TaskArgs),

    /// Print the field name derived from a label.
    Slug(SlugArgs),
}

/// Identifies one task within an app.
#[derive(Parser, Debug, Clone)]
pub struct TaskArgs {
    /// App ID.
    #[arg(long = "app", value_name = "APP_ID")]
    pub app_id: String,

    /// Task name within the app.
    #[arg(long = "task", value_name = "TASK_NAME")]
    pub task_name: String,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// App ID (required unless given in --request).
    #[arg(long = "app", value_name = "APP_ID")]
    pub app_id: Option<String>,

    /// Task name (required unless given in --request).
    #[arg(long = "task", value_name = "TASK_NAME")]
    pub task_name: Option<String>,

    /// Form field value.
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub field_values: Vec<(String, String)>,

    /// Global (profile) value shared by all tasks.
    #[arg(long = "global", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub global_values: Vec<(String, String)>,

    /// Task-level value; overrides field defaults.
    #[arg(long = "task-value", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub task_values: Vec<(String, String)>,

    /// Runtime value from the embedding application; wins over everything.
    #[arg(long = "runtime", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub runtime_values: Vec<(String, String)>,

    /// Text substituted at the `<<fixed>>` marker.
    #[arg(long, value_name = "TEXT")]
    pub fixed: Option<String>,

    /// Read the request from a JSON file; flags are layered on top.
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Print `{success, prompt, chat_url}` as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print only the chat link.
    #[arg(long, conflicts_with = "json")]
    pub link: bool,
}

/// Arguments for the `lint` command.
#[derive(Parser, Debug)]
pub struct LintArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Lint this template file instead of the saved template.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Exit with a validation failure when variables are undefined.
    #[arg(long)]
    pub strict: bool,
}

/// Template management commands.
#[derive(Parser, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Template subcommands.
#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Print a starter template built from the task's fields.
    Draft(TaskArgs),

    /// Print the task's latest template.
    Show(TaskArgs),

    /// Save a new template version for the task.
    Save(TemplateSaveArgs),
}

/// Arguments for `template save`.
#[derive(Parser, Debug)]
pub struct TemplateSaveArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// File holding the template text.
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the `slug` command.
#[derive(Parser, Debug)]
pub struct SlugArgs {
    /// Field label, e.g. "Email Recipient".
    pub label: String,
}

/// Parse a `KEY=VALUE` pair. The value may contain further `=` signs.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{}'", s));
    }

    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

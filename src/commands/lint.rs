//! Implementation of the `scaffold lint` command.

use super::{Workspace, read_text_file};
use crate::catalog::Catalog;
use crate::cli::LintArgs;
use crate::error::{Result, ScaffoldError};
use crate::lint::{LintReport, lint_template};
use std::path::Path;

/// Execute the `scaffold lint` command.
///
/// Prints the lint summary. With `--strict`, undefined variables turn
/// into a validation failure.
pub fn cmd_lint(workspace: Option<&Path>, args: LintArgs) -> Result<()> {
    let ws = Workspace::open(workspace)?;
    let report = lint_task(&ws, &args)?;

    print!("{}", report.format_summary());

    if args.strict && !report.is_clean() {
        return Err(ScaffoldError::ValidationError(format!(
            "{} undefined variable(s) in template",
            report.undefined.len()
        )));
    }

    Ok(())
}

fn lint_task(ws: &Workspace, args: &LintArgs) -> Result<LintReport> {
    let app_id = &args.task.app_id;
    let task_name = &args.task.task_name;
    ws.catalog.task(app_id, task_name)?;

    let template = match &args.file {
        Some(path) => read_text_file(path)?,
        None => ws.catalog.latest_template(app_id, task_name)?.template.clone(),
    };

    Ok(lint_template(&template, &ws.catalog.fields(app_id, task_name)))
}

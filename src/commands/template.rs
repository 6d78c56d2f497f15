//! Implementation of the `scaffold template` subcommands.

use super::{Workspace, read_text_file};
use crate::catalog::{Catalog, TemplateRecord};
use crate::cli::{TaskArgs, TemplateSaveArgs};
use crate::draft::generate_template_with_header;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::lint::{LintReport, lint_template};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::Path;

/// Execute `scaffold template draft`: print a starter template.
pub fn cmd_draft(workspace: Option<&Path>, args: TaskArgs) -> Result<()> {
    let ws = Workspace::open(workspace)?;
    ws.catalog.task(&args.app_id, &args.task_name)?;

    let fields = ws.catalog.fields(&args.app_id, &args.task_name);
    println!(
        "{}",
        generate_template_with_header(&ws.config.draft_header, &fields)
    );

    Ok(())
}

/// Execute `scaffold template show`: print the latest template.
pub fn cmd_show(workspace: Option<&Path>, args: TaskArgs) -> Result<()> {
    let ws = Workspace::open(workspace)?;
    ws.catalog.task(&args.app_id, &args.task_name)?;
    let record = ws.catalog.latest_template(&args.app_id, &args.task_name)?;

    println!("================================================================================");
    println!("{} [{} / {}]", record.id, record.app_id, record.task_name);
    println!("================================================================================");
    println!("Created: {}", record.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("{}", record.template);

    Ok(())
}

/// Execute `scaffold template save`: append a new template version.
///
/// Lint findings are printed as a warning and never block the save.
pub fn cmd_save(workspace: Option<&Path>, args: TemplateSaveArgs) -> Result<()> {
    let mut ws = Workspace::open(workspace)?;
    let text = read_text_file(&args.file)?;

    let (record, report) = save_template(
        &mut ws,
        &args.task.app_id,
        &args.task.task_name,
        &text,
        Utc::now(),
    )?;

    if let Some(warning) = report.warning() {
        eprintln!("Warning: {}", warning);
    }

    println!(
        "Saved template {} for task '{}' in app '{}'.",
        record.id, record.task_name, record.app_id
    );

    Ok(())
}

/// Add the template to the catalog, write it out and record the event.
fn save_template(
    ws: &mut Workspace,
    app_id: &str,
    task_name: &str,
    text: &str,
    now: DateTime<Utc>,
) -> Result<(TemplateRecord, LintReport)> {
    let record = ws.catalog.add_template(app_id, task_name, text, now)?;
    let report = lint_template(text, &ws.catalog.fields(app_id, task_name));

    ws.save_catalog()?;

    ws.log(
        &Event::new(EventAction::TemplateSave)
            .with_task(task_name)
            .with_details(json!({
                "app_id": app_id,
                "template_id": record.id,
                "undefined_variables": report.undefined,
            })),
    );

    Ok((record, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FileCatalog;
    use crate::error::ScaffoldError;
    use crate::test_support::{APP_ID, TASK_NAME, create_test_workspace, timestamp};

    #[test]
    fn test_save_template_persists_new_version() {
        let temp_dir = create_test_workspace();
        let mut ws = Workspace::open(Some(temp_dir.path())).unwrap();

        let (record, report) =
            save_template(&mut ws, APP_ID, TASK_NAME, "Hi {{recipient}}", timestamp(20)).unwrap();

        assert_eq!(record.id, "TPL-004");
        assert!(report.is_clean());

        let reloaded = FileCatalog::load(ws.ctx.catalog_path()).unwrap();
        assert_eq!(reloaded.templates.len(), 4);
        assert_eq!(
            reloaded.latest_template(APP_ID, TASK_NAME).unwrap().template,
            "Hi {{recipient}}"
        );

        let events = std::fs::read_to_string(ws.ctx.events_file()).unwrap();
        assert!(events.contains("\"template_save\""));
        assert!(events.contains("TPL-004"));
    }

    #[test]
    fn test_save_template_with_undefined_variables_still_saves() {
        let temp_dir = create_test_workspace();
        let mut ws = Workspace::open(Some(temp_dir.path())).unwrap();

        let (_, report) =
            save_template(&mut ws, APP_ID, TASK_NAME, "Hi {{nobody}}", timestamp(20)).unwrap();

        assert_eq!(report.undefined, vec!["nobody"]);
        let reloaded = FileCatalog::load(ws.ctx.catalog_path()).unwrap();
        assert_eq!(reloaded.templates.len(), 4);
    }

    #[test]
    fn test_save_blank_template_is_rejected() {
        let temp_dir = create_test_workspace();
        let mut ws = Workspace::open(Some(temp_dir.path())).unwrap();

        let err = save_template(&mut ws, APP_ID, TASK_NAME, "   ", timestamp(20)).unwrap_err();
        assert!(matches!(err, ScaffoldError::InputError(_)));

        let reloaded = FileCatalog::load(ws.ctx.catalog_path()).unwrap();
        assert_eq!(reloaded.templates.len(), 3);
    }

    #[test]
    fn test_cmd_save_from_file() {
        let temp_dir = create_test_workspace();
        let file = temp_dir.path().join("new.txt");
        std::fs::write(&file, "Dear {{recipient}},\n<<fixed>>\n").unwrap();

        cmd_save(
            Some(temp_dir.path()),
            TemplateSaveArgs {
                task: TaskArgs {
                    app_id: APP_ID.to_string(),
                    task_name: TASK_NAME.to_string(),
                },
                file,
            },
        )
        .unwrap();

        let ws = Workspace::open(Some(temp_dir.path())).unwrap();
        let latest = ws.catalog.latest_template(APP_ID, TASK_NAME).unwrap();
        assert_eq!(latest.template, "Dear {{recipient}},\n<<fixed>>\n");
    }

    #[test]
    fn test_cmd_draft_and_show_unknown_task() {
        let temp_dir = create_test_workspace();
        let args = TaskArgs {
            app_id: APP_ID.to_string(),
            task_name: "ghost".to_string(),
        };

        assert!(matches!(
            cmd_draft(Some(temp_dir.path()), args.clone()),
            Err(ScaffoldError::NotFound(_))
        ));
        assert!(matches!(
            cmd_show(Some(temp_dir.path()), args),
            Err(ScaffoldError::NotFound(_))
        ));
    }
}

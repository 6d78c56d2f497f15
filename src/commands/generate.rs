//! Implementation of the `scaffold generate` command.

use super::Workspace;
use crate::cli::GenerateArgs;
use crate::error::{Result, ScaffoldError};
use crate::events::{Event, EventAction};
use crate::generation::{GeneratedPrompt, GenerationRequest, generate_prompt};
use serde_json::{Map, Value, json};
use std::path::Path;

/// Execute the `scaffold generate` command.
///
/// Required-field warnings go to stderr; the prompt, link or JSON goes
/// to stdout.
pub fn cmd_generate(workspace: Option<&Path>, args: GenerateArgs) -> Result<()> {
    let ws = Workspace::open(workspace)?;
    let request = build_request(&args)?;
    let generated = generate_prompt(&ws.catalog, &ws.config, &request)?;

    for warning in &generated.warnings {
        eprintln!("Warning: {}", warning);
    }

    ws.log(
        &Event::new(EventAction::Generate)
            .with_task(&request.task_name)
            .with_details(json!({
                "app_id": request.app_id,
                "prompt_chars": generated.prompt.chars().count(),
                "warnings": generated.warnings.len(),
            })),
    );

    if args.json {
        println!("{}", render_json(&generated)?);
    } else if args.link {
        println!("{}", generated.chat_url);
    } else {
        println!("{}", generated.prompt);
    }

    Ok(())
}

/// Build the request from `--request` (if any) with flag values layered on top.
fn build_request(args: &GenerateArgs) -> Result<GenerationRequest> {
    let mut request = match &args.request {
        Some(path) => GenerationRequest::load(path)?,
        None => GenerationRequest::new(
            args.app_id.as_deref().unwrap_or_default(),
            args.task_name.as_deref().unwrap_or_default(),
        ),
    };

    if let Some(app_id) = &args.app_id {
        request.app_id = app_id.clone();
    }
    if let Some(task_name) = &args.task_name {
        request.task_name = task_name.clone();
    }
    if let Some(fixed) = &args.fixed {
        request.fixed_content = Some(fixed.clone());
    }

    insert_pairs(&mut request.global_values, &args.global_values);
    insert_pairs(&mut request.task_values, &args.task_values);
    insert_pairs(&mut request.field_values, &args.field_values);
    insert_pairs(&mut request.runtime_context, &args.runtime_values);

    if request.app_id.trim().is_empty() || request.task_name.trim().is_empty() {
        return Err(ScaffoldError::UserError(
            "--app and --task are required (or set app_id and task_name in --request)"
                .to_string(),
        ));
    }

    Ok(request)
}

fn insert_pairs(map: &mut Map<String, Value>, pairs: &[(String, String)]) {
    for (key, value) in pairs {
        map.insert(key.clone(), Value::String(value.clone()));
    }
}

/// The `--json` output: `{success, prompt, chat_url}` plus any warnings.
fn render_json(generated: &GeneratedPrompt) -> Result<String> {
    let mut output = json!({
        "success": true,
        "prompt": generated.prompt,
        "chat_url": generated.chat_url,
    });
    if !generated.warnings.is_empty() {
        output["warnings"] = json!(generated.warnings);
    }

    serde_json::to_string_pretty(&output)
        .map_err(|e| ScaffoldError::UserError(format!("failed to serialize output: {}", e)))
}

//! Implementation of the `scaffold fields` command.

use super::Workspace;
use crate::catalog::{Catalog, Field};
use crate::cli::TaskArgs;
use crate::error::Result;
use std::path::Path;

/// Execute the `scaffold fields` command.
pub fn cmd_fields(workspace: Option<&Path>, args: TaskArgs) -> Result<()> {
    let ws = Workspace::open(workspace)?;
    let task = ws.catalog.task(&args.app_id, &args.task_name)?;
    let fields = ws.catalog.fields(&args.app_id, &args.task_name);

    println!("Fields for {} / {}:", args.app_id, args.task_name);
    if !task.has_form {
        println!("  (task has no form; field values are ignored)");
    }
    print!("{}", format_fields(&fields));

    Ok(())
}

/// One line per field, in the given order.
fn format_fields(fields: &[&Field]) -> String {
    if fields.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut out = String::new();
    for field in fields {
        let required = if field.required { "required" } else { "optional" };
        out.push_str(&format!(
            "  {:>3}  {:<24} {:<9} {:<9} {}\n",
            field.order,
            field.field_name,
            field.field_type.as_str(),
            required,
            field.field_label
        ));

        if let Some(options) = &field.options {
            out.push_str(&format!("       options: {}\n", options.join(", ")));
        }
        if let Some(default) = &field.default_value {
            out.push_str(&format!("       default: {}\n", default));
        }
    }
    out
}

//! Placeholder extraction and lint checks.

use super::types::{LintReport, VariableUsage};
use crate::catalog::Field;
use crate::compose::{FIXED_MARKER, SYSTEM_HEADER_VAR};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A `{{name}}` placeholder whose name is ASCII word characters.
static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid variable regex"));

/// Every `{{name}}` variable in template order, duplicates included.
pub fn extract_variables(template: &str) -> Vec<String> {
    VARIABLE_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Variables the template uses that have no field definition.
///
/// `system_header` is always excluded. Each name is reported once, at the
/// position of its first occurrence.
///
/// # Example
///
/// ```ignore
/// use std::collections::HashSet;
/// use scaffold::lint::find_undefined_variables;
///
/// let fields: HashSet<&str> = ["y"].into_iter().collect();
/// let undefined = find_undefined_variables("Hi {{x}} {{system_header}}", &fields);
/// assert_eq!(undefined, vec!["x"]);
/// ```
pub fn find_undefined_variables(template: &str, field_names: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_variables(template)
        .into_iter()
        .filter(|name| name.as_str() != SYSTEM_HEADER_VAR)
        .filter(|name| !field_names.contains(name.as_str()))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Which insertable tokens the template already contains.
///
/// The `<<fixed>>` marker comes first, followed by one `{{name}}` per field
/// in the given order.
pub fn variable_usage(template: &str, field_names: &[&str]) -> Vec<VariableUsage> {
    let mut usage = Vec::with_capacity(field_names.len() + 1);
    usage.push(VariableUsage::new(
        FIXED_MARKER,
        template.contains(FIXED_MARKER),
    ));
    for name in field_names {
        let token = format!("{{{{{}}}}}", name);
        let used = template.contains(&token);
        usage.push(VariableUsage::new(token, used));
    }
    usage
}

/// Run every lint check for a template against its task's fields.
pub fn lint_template(template: &str, fields: &[&Field]) -> LintReport {
    let names: Vec<&str> = fields.iter().map(|f| f.field_name.as_str()).collect();
    let name_set: HashSet<&str> = names.iter().copied().collect();

    let usage = variable_usage(template, &names);
    let unused_fields = usage
        .iter()
        .skip(1)
        .zip(&names)
        .filter(|(entry, _)| !entry.used)
        .map(|(_, name)| name.to_string())
        .collect();

    LintReport {
        undefined: find_undefined_variables(template, &name_set),
        unused_fields,
        usage,
    }
}

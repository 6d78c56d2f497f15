//! The composition pipeline.
//!
//! Stages, each a pure transform over the previous stage's output:
//!
//! 1. Header selection (task header, else app header, else none)
//! 2. Header + blank line + template
//! 3. `<<fixed>>` substitution
//! 4. `{{key}}` substitution from the merged values
//! 5. Removal of unresolved `{{...}}` placeholders
//! 6. Cosmetic cleanup (see [`super::cleanup`])
//!
//! Stages 3-5 only resolve tokens that touch header or template text; text
//! inserted by an earlier stage is never rescanned on its own. Stages 3-6
//! repeat until the text stops changing, so a token that cleanup joins
//! together (`{{x}()}` becomes `{{x}}`) is resolved too.

use super::cleanup::{CleanupOptions, clean_to_fixpoint};
use super::working::WorkingText;
use std::collections::BTreeMap;

/// Marker replaced by the out-of-band fixed content.
pub const FIXED_MARKER: &str = "<<fixed>>";

/// Reserved variable name; resolved structurally by header selection.
pub const SYSTEM_HEADER_VAR: &str = "system_header";

/// Everything one composition needs.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    /// App-level fallback header.
    pub app_header: Option<&'a str>,
    /// Task-level header; wins over the app header when non-blank.
    pub task_header: Option<&'a str>,
    /// The stored template. Callers guarantee it is non-empty.
    pub template: &'a str,
    /// Merged substitution values (see [`super::ValueLayers::merged`]).
    pub values: &'a BTreeMap<String, String>,
    /// Text for the `<<fixed>>` marker.
    pub fixed_content: Option<&'a str>,
}

/// Pick the header paragraph: the trimmed task header if non-blank,
/// otherwise the trimmed app header if non-blank, otherwise none.
pub fn select_header<'a>(app_header: Option<&'a str>, task_header: Option<&'a str>) -> Option<&'a str> {
    [task_header, app_header]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|header| !header.is_empty())
}

/// Compose the final prompt with default cleanup options.
///
/// # Examples
///
/// ```ignore
/// use std::collections::BTreeMap;
/// use scaffold::compose::{ComposeInput, compose};
///
/// let mut values = BTreeMap::new();
/// values.insert("name".to_string(), "Sam".to_string());
/// values.insert("city".to_string(), "Denver".to_string());
///
/// let prompt = compose(&ComposeInput {
///     app_header: None,
///     task_header: None,
///     template: "Hello {{name}}, find <<fixed>> near {{city}}.",
///     values: &values,
///     fixed_content: Some("tacos"),
/// });
/// assert_eq!(prompt, "Hello Sam, find tacos near Denver.");
/// ```
pub fn compose(input: &ComposeInput<'_>) -> String {
    compose_with(input, &CleanupOptions::default())
}

/// Compose the final prompt.
///
/// Never fails: missing values become empty strings and unresolved
/// placeholders are dropped.
pub fn compose_with(input: &ComposeInput<'_>, options: &CleanupOptions) -> String {
    let working = match select_header(input.app_header, input.task_header) {
        Some(header) => format!("{}\n\n{}", header, input.template),
        None => input.template.to_string(),
    };

    let fixed_content = input.fixed_content.unwrap_or("");
    let mut text = WorkingText::new(working);
    loop {
        let before = text.clone();
        text.replace_marker(FIXED_MARKER, fixed_content);
        text.substitute_placeholders(input.values);
        text.strip_placeholders();
        clean_to_fixpoint(&mut text, options);
        if text == before {
            return text.into_string();
        }
    }
}

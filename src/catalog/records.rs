//! Record types stored in the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level container owning tasks and an optional fallback header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Immutable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Fallback system header for tasks without their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_header: Option<String>,
}

/// A named unit of work within an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,

    /// Owning app.
    pub app_id: String,

    /// Unique within the app. Fields and templates refer to tasks by name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Overrides the app header when non-blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_header: Option<String>,

    /// `false` means the embedded form shows no fields and the prompt is
    /// generated from fixed content alone.
    #[serde(default = "default_has_form")]
    pub has_form: bool,
}

fn default_has_form() -> bool {
    true
}

/// Input type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Select,
    Number,
    /// Supplied by the embedding application, never shown in the form.
    Runtime,
}

impl FieldType {
    /// The serialized name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Number => "number",
            FieldType::Runtime => "runtime",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form input definition, or a runtime value slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,

    pub app_id: String,

    /// Name of the owning task.
    pub task_name: String,

    /// Placeholder name: `[a-z0-9_]`, at most 48 characters.
    pub field_name: String,

    /// Label shown in the form.
    pub field_label: String,

    pub field_type: FieldType,

    #[serde(default)]
    pub required: bool,

    /// Display and draft-template order, ascending.
    #[serde(default)]
    pub order: i64,

    /// Choices for `select` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Pre-filled value; also used when the submission leaves the field out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Field {
    /// Whether the value comes from the embedding application.
    pub fn is_runtime(&self) -> bool {
        self.field_type == FieldType::Runtime
    }
}

/// One saved version of a task's prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,

    pub app_id: String,

    pub task_name: String,

    /// Template text with `{{field_name}}` and `<<fixed>>` placeholders.
    pub template: String,

    /// Creation time; the newest row for a task is authoritative.
    pub created_at: DateTime<Utc>,
}

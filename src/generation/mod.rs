//! Prompt generation for one task.
//!
//! Ties the catalog, the config and an end-user submission together:
//! resolve the task's records, layer the submitted values over field
//! defaults, enforce required fields, compose, and build the chat link.

use crate::catalog::{Catalog, Field, Task};
use crate::compose::{ComposeInput, ValueLayers, compose_with, stringify_map, stringify_value};
use crate::config::{Config, RequiredFieldPolicy};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;


/// A submission asking for one task's prompt.
///
/// ```json
/// {
///   "app_id": "demo",
///   "task_name": "write_email",
///   "global_values": {"company": "Acme"},
///   "task_values": {},
///   "field_values": {"recipient": "Sam"},
///   "runtime_context": {"ticket_id": 42},
///   "fixed_content": "Thread so far..."
/// }
/// ```
///
/// Every value map is optional; values may be any JSON and are stringified
/// before substitution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub app_id: String,
    pub task_name: String,
    pub global_values: Map<String, Value>,
    pub task_values: Map<String, Value>,
    pub field_values: Map<String, Value>,
    pub runtime_context: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_content: Option<String>,
}

impl GenerationRequest {
    /// Empty request for a task.
    pub fn new(app_id: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            task_name: task_name.into(),
            ..Self::default()
        }
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScaffoldError::UserError(format!("failed to parse request JSON: {}", e)))
    }

    /// Read and parse a request file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read request file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }
}

/// The composed prompt and its chat link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
    pub chat_url: String,
    /// Required fields left empty under the `warn` policy.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Generate the prompt for the task named in `request`.
///
/// # Errors
///
/// * `UserError` - blank `app_id` or `task_name`
/// * `NotFound` - unknown task or app, or no saved template
/// * `ValidationError` - a required field is empty under the `fail` policy
pub fn generate_prompt<C: Catalog + ?Sized>(
    catalog: &C,
    config: &Config,
    request: &GenerationRequest,
) -> Result<GeneratedPrompt> {
    if request.app_id.trim().is_empty() || request.task_name.trim().is_empty() {
        return Err(ScaffoldError::UserError(
            "app_id and task_name are required".to_string(),
        ));
    }

    let task = catalog.task(&request.app_id, &request.task_name)?;
    let app = catalog.app(&request.app_id)?;
    let template = catalog.latest_template(&request.app_id, &request.task_name)?;
    let fields = catalog.fields(&request.app_id, &request.task_name);

    let values = value_layers(task, &fields, request).merged();

    let mut warnings = Vec::new();
    if task.has_form && config.required_fields != RequiredFieldPolicy::Ignore {
        let missing = missing_required_fields(&fields, &values);
        if config.required_fields == RequiredFieldPolicy::Fail
            && let Some(field) = missing.first()
        {
            return Err(ScaffoldError::ValidationError(format!(
                "Required field missing: {}",
                field.field_label
            )));
        }
        warnings.extend(
            missing
                .iter()
                .map(|field| format!("Required field missing: {}", field.field_label)),
        );
    }

    let prompt = compose_with(
        &ComposeInput {
            app_header: app.system_header.as_deref(),
            task_header: task.system_header.as_deref(),
            template: &template.template,
            values: &values,
            fixed_content: request.fixed_content.as_deref(),
        },
        &config.cleanup_options(),
    );
    let chat_url = config.chat_link(&prompt);

    Ok(GeneratedPrompt {
        prompt,
        chat_url,
        warnings,
    })
}

/// Arrange the request's values into layers.
///
/// Field defaults sit under the request's task values. A task without a
/// form only takes global and runtime values.
pub fn value_layers(task: &Task, fields: &[&Field], request: &GenerationRequest) -> ValueLayers {
    let global = stringify_map(&request.global_values);
    let runtime = stringify_map(&request.runtime_context);

    if !task.has_form {
        return ValueLayers {
            global,
            runtime,
            ..ValueLayers::default()
        };
    }

    let mut task_defaults: BTreeMap<String, String> = fields
        .iter()
        .filter_map(|field| {
            field
                .default_value
                .as_ref()
                .map(|value| (field.field_name.clone(), value.clone()))
        })
        .collect();
    for (key, value) in &request.task_values {
        task_defaults.insert(key.clone(), stringify_value(value));
    }

    ValueLayers {
        global,
        task_defaults,
        fields: stringify_map(&request.field_values),
        runtime,
    }
}

/// Required form fields with no non-blank value, in form order.
pub fn missing_required_fields<'a>(
    fields: &[&'a Field],
    values: &BTreeMap<String, String>,
) -> Vec<&'a Field> {
    fields
        .iter()
        .copied()
        .filter(|field| field.required && !field.is_runtime())
        .filter(|field| {
            values
                .get(&field.field_name)
                .is_none_or(|value| value.trim().is_empty())
        })
        .collect()
}

//! YAML-backed catalog file.

use super::records::{App, Field, FieldType, Task, TemplateRecord};
use super::{Catalog, naming};
use crate::error::{Result, ScaffoldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Prefix of generated template ids (`TPL-001`, `TPL-002`, ...).
const TEMPLATE_ID_PREFIX: &str = "TPL-";

/// The contents of `.scaffold/catalog.yaml`.
///
/// ```yaml
/// apps:
///   - id: demo
///     name: Demo App
///     system_header: You are a helpful assistant.
/// tasks:
///   - id: t1
///     app_id: demo
///     name: write_email
/// fields:
///   - id: f1
///     app_id: demo
///     task_name: write_email
///     field_name: recipient
///     field_label: Email Recipient
///     field_type: text
///     required: true
///     order: 1
/// templates:
///   - id: TPL-001
///     app_id: demo
///     task_name: write_email
///     template: "Write an email to {{recipient}}."
///     created_at: 2026-01-13T10:00:00Z
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalog {
    pub apps: Vec<App>,
    pub tasks: Vec<Task>,
    pub fields: Vec<Field>,
    pub templates: Vec<TemplateRecord>,
}

impl FileCatalog {
    /// Load and validate a catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: FileCatalog = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::UserError(format!("failed to parse catalog YAML: {}", e)))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize the catalog to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize catalog to YAML: {}", e))
        })
    }

    /// Atomically write the catalog to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_yaml()?;
        crate::fs::atomic_write_file(path, &content)
    }

    /// Validate cross-record invariants.
    ///
    /// Validation rules:
    /// - app ids are unique
    /// - task names are unique within their app, and the app exists
    /// - fields belong to an existing task, have valid names that are
    ///   unique within the task, and carry options iff they are `select`
    /// - templates belong to an existing task
    pub fn validate(&self) -> Result<()> {
        let mut app_ids = HashSet::new();
        for app in &self.apps {
            if !app_ids.insert(app.id.as_str()) {
                return Err(invalid(format!("duplicate app id '{}'", app.id)));
            }
        }

        let mut task_keys = HashSet::new();
        for task in &self.tasks {
            if !app_ids.contains(task.app_id.as_str()) {
                return Err(invalid(format!(
                    "task '{}' references unknown app '{}'",
                    task.name, task.app_id
                )));
            }
            if !task_keys.insert((task.app_id.as_str(), task.name.as_str())) {
                return Err(invalid(format!(
                    "duplicate task name '{}' in app '{}'",
                    task.name, task.app_id
                )));
            }
        }

        let mut field_keys = HashSet::new();
        for field in &self.fields {
            if !task_keys.contains(&(field.app_id.as_str(), field.task_name.as_str())) {
                return Err(invalid(format!(
                    "field '{}' references unknown task '{}' in app '{}'",
                    field.field_name, field.task_name, field.app_id
                )));
            }
            if !naming::is_valid_field_name(&field.field_name) {
                return Err(invalid(format!(
                    "field name '{}' must match [a-z0-9_] and be at most {} characters (suggested: '{}')",
                    field.field_name,
                    naming::MAX_FIELD_NAME_LEN,
                    naming::slugify_field_name(&field.field_name)
                )));
            }
            if !field_keys.insert((
                field.app_id.as_str(),
                field.task_name.as_str(),
                field.field_name.as_str(),
            )) {
                return Err(invalid(format!(
                    "duplicate field name '{}' in task '{}'",
                    field.field_name, field.task_name
                )));
            }
            validate_options(field)?;
        }

        for template in &self.templates {
            if !task_keys.contains(&(template.app_id.as_str(), template.task_name.as_str())) {
                return Err(invalid(format!(
                    "template '{}' references unknown task '{}' in app '{}'",
                    template.id, template.task_name, template.app_id
                )));
            }
        }

        Ok(())
    }

    /// Append a new template version for a task.
    ///
    /// Older versions are kept; the new row becomes the latest because it
    /// carries the newest `created_at`.
    pub fn add_template(
        &mut self,
        app_id: &str,
        task_name: &str,
        template: &str,
        created_at: DateTime<Utc>,
    ) -> Result<TemplateRecord> {
        if template.trim().is_empty() {
            return Err(ScaffoldError::InputError(
                "template must be a non-empty string".to_string(),
            ));
        }

        self.task(app_id, task_name)?;

        let record = TemplateRecord {
            id: self.next_template_id(),
            app_id: app_id.to_string(),
            task_name: task_name.to_string(),
            template: template.to_string(),
            created_at,
        };
        self.templates.push(record.clone());
        Ok(record)
    }

    fn next_template_id(&self) -> String {
        let max = self
            .templates
            .iter()
            .filter_map(|t| t.id.strip_prefix(TEMPLATE_ID_PREFIX))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", TEMPLATE_ID_PREFIX, max + 1)
    }
}

fn invalid(message: String) -> ScaffoldError {
    ScaffoldError::UserError(format!("catalog validation failed: {}", message))
}

fn validate_options(field: &Field) -> Result<()> {
    let has_options = field.options.as_ref().is_some_and(|o| !o.is_empty());

    match (field.field_type, has_options) {
        (FieldType::Select, false) => Err(invalid(format!(
            "field '{}' is a select and needs at least one option",
            field.field_name
        ))),
        (FieldType::Select, true) | (_, false) => Ok(()),
        (other, true) => Err(invalid(format!(
            "field '{}' has options but its type is '{}'; only select fields take options",
            field.field_name, other
        ))),
    }
}

impl Catalog for FileCatalog {
    fn app(&self, app_id: &str) -> Result<&App> {
        self.apps
            .iter()
            .find(|app| app.id == app_id)
            .ok_or_else(|| ScaffoldError::NotFound(format!("App '{}' not found", app_id)))
    }

    fn task(&self, app_id: &str, task_name: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|task| task.app_id == app_id && task.name == task_name)
            .ok_or_else(|| {
                ScaffoldError::NotFound(format!(
                    "Task '{}' not found in app '{}'",
                    task_name, app_id
                ))
            })
    }

    fn latest_template(&self, app_id: &str, task_name: &str) -> Result<&TemplateRecord> {
        self.templates
            .iter()
            .filter(|t| t.app_id == app_id && t.task_name == task_name)
            .max_by_key(|t| t.created_at)
            .ok_or_else(|| {
                ScaffoldError::NotFound(format!(
                    "No template found for app_id {} and task_name \"{}\". \
                     Save one with `scaffold template save`.",
                    app_id, task_name
                ))
            })
    }

    fn fields(&self, app_id: &str, task_name: &str) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self
            .fields
            .iter()
            .filter(|f| f.app_id == app_id && f.task_name == task_name)
            .collect();
        fields.sort_by_key(|f| f.order);
        fields
    }
}

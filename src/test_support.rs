use crate::catalog::{App, Field, FieldType, FileCatalog, Task, TemplateRecord};
use crate::context::WorkspaceContext;
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) const APP_ID: &str = "demo";
pub(crate) const TASK_NAME: &str = "write_email";
pub(crate) const FORMLESS_TASK: &str = "summarize";

/// A field of the sample task.
pub(crate) fn field(name: &str, label: &str, field_type: FieldType, order: i64) -> Field {
    Field {
        id: format!("f-{}", name),
        app_id: APP_ID.to_string(),
        task_name: TASK_NAME.to_string(),
        field_name: name.to_string(),
        field_label: label.to_string(),
        field_type,
        required: false,
        order,
        options: None,
        default_value: None,
    }
}

pub(crate) fn timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 10, 0, 0).unwrap()
}

/// A catalog with one app and two tasks:
///
/// - `write_email`: has a form with a required `recipient`, an optional
///   `tone` defaulting to "friendly" and a runtime `ticket_id`
/// - `summarize`: formless, template uses only fixed content
pub(crate) fn sample_catalog() -> FileCatalog {
    let mut recipient = field("recipient", "Recipient", FieldType::Text, 1);
    recipient.required = true;

    let mut tone = field("tone", "Tone", FieldType::Select, 2);
    tone.options = Some(vec!["friendly".to_string(), "formal".to_string()]);
    tone.default_value = Some("friendly".to_string());

    let ticket = field("ticket_id", "Ticket", FieldType::Runtime, 3);

    FileCatalog {
        apps: vec![App {
            id: APP_ID.to_string(),
            name: "Demo App".to_string(),
            system_header: Some("You are a helpful assistant.".to_string()),
        }],
        tasks: vec![
            Task {
                id: "t1".to_string(),
                app_id: APP_ID.to_string(),
                name: TASK_NAME.to_string(),
                description: Some("Draft an email".to_string()),
                system_header: None,
                has_form: true,
            },
            Task {
                id: "t2".to_string(),
                app_id: APP_ID.to_string(),
                name: FORMLESS_TASK.to_string(),
                description: None,
                system_header: Some("You summarize text.".to_string()),
                has_form: false,
            },
        ],
        fields: vec![recipient, tone, ticket],
        templates: vec![
            TemplateRecord {
                id: "TPL-001".to_string(),
                app_id: APP_ID.to_string(),
                task_name: TASK_NAME.to_string(),
                template: "Old template for {{recipient}}".to_string(),
                created_at: timestamp(1),
            },
            TemplateRecord {
                id: "TPL-002".to_string(),
                app_id: APP_ID.to_string(),
                task_name: TASK_NAME.to_string(),
                template: "Write a {{tone}} email to {{recipient}} about ticket {{ticket_id}}."
                    .to_string(),
                created_at: timestamp(2),
            },
            TemplateRecord {
                id: "TPL-003".to_string(),
                app_id: APP_ID.to_string(),
                task_name: FORMLESS_TASK.to_string(),
                template: "Summarize for {{company}}:\n<<fixed>>".to_string(),
                created_at: timestamp(1),
            },
        ],
    }
}

/// A temporary directory holding an initialized workspace with the sample catalog.
pub(crate) fn create_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WorkspaceContext::at(temp_dir.path());
    std::fs::create_dir_all(&ctx.state_dir).unwrap();
    sample_catalog().save(ctx.catalog_path()).unwrap();
    temp_dir
}

//! Tests for the catalog.

use super::*;
use crate::error::ScaffoldError;
use crate::test_support::{APP_ID, FORMLESS_TASK, TASK_NAME, sample_catalog, timestamp};

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn test_app_lookup() {
    let catalog = sample_catalog();
    assert_eq!(catalog.app(APP_ID).unwrap().name, "Demo App");

    let err = catalog.app("missing").unwrap_err();
    assert!(matches!(err, ScaffoldError::NotFound(_)));
    assert_eq!(err.to_string(), "App 'missing' not found");
}

#[test]
fn test_task_lookup_is_scoped_to_app() {
    let mut catalog = sample_catalog();
    catalog.apps.push(App {
        id: "other".to_string(),
        name: "Other".to_string(),
        system_header: None,
    });

    assert!(catalog.task(APP_ID, TASK_NAME).is_ok());

    let err = catalog.task("other", TASK_NAME).unwrap_err();
    assert!(matches!(err, ScaffoldError::NotFound(_)));
    assert!(err.to_string().contains("not found in app 'other'"));
}

#[test]
fn test_latest_template_by_created_at() {
    let catalog = sample_catalog();
    let latest = catalog.latest_template(APP_ID, TASK_NAME).unwrap();
    assert_eq!(latest.id, "TPL-002");
}

#[test]
fn test_latest_template_ignores_row_order() {
    let mut catalog = sample_catalog();
    catalog.templates.reverse();

    let latest = catalog.latest_template(APP_ID, TASK_NAME).unwrap();
    assert_eq!(latest.id, "TPL-002");
}

#[test]
fn test_latest_template_tie_prefers_later_row() {
    let mut catalog = sample_catalog();
    let mut twin = catalog.templates[1].clone();
    twin.id = "TPL-009".to_string();
    twin.template = "Same timestamp".to_string();
    catalog.templates.push(twin);

    let latest = catalog.latest_template(APP_ID, TASK_NAME).unwrap();
    assert_eq!(latest.id, "TPL-009");
}

#[test]
fn test_latest_template_missing() {
    let mut catalog = sample_catalog();
    catalog.templates.clear();

    let err = catalog.latest_template(APP_ID, TASK_NAME).unwrap_err();
    assert!(matches!(err, ScaffoldError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        "No template found for app_id demo and task_name \"write_email\". \
         Save one with `scaffold template save`."
    );
}

#[test]
fn test_fields_sorted_by_order_stably() {
    let mut catalog = sample_catalog();
    // Same order as `recipient`, stored after it.
    let mut cc = catalog.fields[0].clone();
    cc.id = "f-cc".to_string();
    cc.field_name = "cc".to_string();
    catalog.fields.push(cc);
    catalog.fields.reverse();

    let names: Vec<&str> = catalog
        .fields(APP_ID, TASK_NAME)
        .iter()
        .map(|f| f.field_name.as_str())
        .collect();
    assert_eq!(names, vec!["cc", "recipient", "tone", "ticket_id"]);
}

#[test]
fn test_fields_for_formless_task_is_empty() {
    let catalog = sample_catalog();
    assert!(catalog.fields(APP_ID, FORMLESS_TASK).is_empty());
}

// ============================================================================
// YAML and validation
// ============================================================================

#[test]
fn test_yaml_round_trip_keeps_records() {
    let catalog = sample_catalog();
    let yaml = catalog.to_yaml().unwrap();
    let parsed = FileCatalog::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn test_parse_minimal_catalog() {
    let catalog = FileCatalog::from_yaml("").unwrap();
    assert!(catalog.apps.is_empty());
    assert!(catalog.templates.is_empty());
}

#[test]
fn test_parse_defaults() {
    let yaml = r#"
apps:
  - id: demo
    name: Demo
tasks:
  - id: t1
    app_id: demo
    name: write_email
fields:
  - id: f1
    app_id: demo
    task_name: write_email
    field_name: recipient
    field_label: Recipient
    field_type: text
"#;
    let catalog = FileCatalog::from_yaml(yaml).unwrap();

    assert!(catalog.tasks[0].has_form);
    assert!(!catalog.fields[0].required);
    assert_eq!(catalog.fields[0].order, 0);
    assert!(catalog.apps[0].system_header.is_none());
}

#[test]
fn test_validate_duplicate_app() {
    let mut catalog = sample_catalog();
    catalog.apps.push(catalog.apps[0].clone());

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("catalog validation failed"));
    assert!(err.to_string().contains("duplicate app id 'demo'"));
}

#[test]
fn test_validate_task_with_unknown_app() {
    let mut catalog = sample_catalog();
    catalog.tasks[0].app_id = "ghost".to_string();

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("unknown app 'ghost'"));
}

#[test]
fn test_validate_duplicate_task_name() {
    let mut catalog = sample_catalog();
    let mut twin = catalog.tasks[0].clone();
    twin.id = "t9".to_string();
    catalog.tasks.push(twin);

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate task name 'write_email'"));
}

#[test]
fn test_validate_bad_field_name_suggests_slug() {
    let mut catalog = sample_catalog();
    catalog.fields[0].field_name = "Email Recipient".to_string();

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("suggested: 'email_recipient'"));
}

#[test]
fn test_validate_duplicate_field_name() {
    let mut catalog = sample_catalog();
    let mut twin = catalog.fields[0].clone();
    twin.id = "f-twin".to_string();
    catalog.fields.push(twin);

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate field name 'recipient'"));
}

#[test]
fn test_validate_select_needs_options() {
    let mut catalog = sample_catalog();
    catalog.fields[1].options = Some(Vec::new());

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("needs at least one option"));
}

#[test]
fn test_validate_options_only_on_select() {
    let mut catalog = sample_catalog();
    catalog.fields[0].options = Some(vec!["a".to_string()]);

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("only select fields take options"));
}

#[test]
fn test_validate_template_with_unknown_task() {
    let mut catalog = sample_catalog();
    catalog.templates[0].task_name = "ghost".to_string();

    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("unknown task 'ghost'"));
}

#[test]
fn test_from_yaml_rejects_invalid_catalog() {
    let yaml = r#"
tasks:
  - id: t1
    app_id: nowhere
    name: orphan
"#;
    assert!(FileCatalog::from_yaml(yaml).is_err());
}

// ============================================================================
// add_template / save / load
// ============================================================================

#[test]
fn test_add_template_assigns_next_id() {
    let mut catalog = sample_catalog();
    let record = catalog
        .add_template(APP_ID, FORMLESS_TASK, "New {{company}}", timestamp(9))
        .unwrap();

    assert_eq!(record.id, "TPL-004");
    assert_eq!(record.created_at, timestamp(9));
    assert_eq!(catalog.templates.len(), 4);
    assert_eq!(
        catalog.latest_template(APP_ID, FORMLESS_TASK).unwrap().template,
        "New {{company}}"
    );
}

#[test]
fn test_add_template_first_id() {
    let mut catalog = sample_catalog();
    catalog.templates.clear();

    let record = catalog
        .add_template(APP_ID, TASK_NAME, "Hi", timestamp(3))
        .unwrap();
    assert_eq!(record.id, "TPL-001");
}

#[test]
fn test_add_template_rejects_blank() {
    let mut catalog = sample_catalog();
    let err = catalog
        .add_template(APP_ID, TASK_NAME, "  \n ", timestamp(3))
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::InputError(_)));
    assert_eq!(catalog.templates.len(), 3);
}

#[test]
fn test_add_template_unknown_task() {
    let mut catalog = sample_catalog();
    let err = catalog
        .add_template(APP_ID, "ghost", "Hi", timestamp(3))
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::NotFound(_)));
}

#[test]
fn test_save_and_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(".scaffold").join("catalog.yaml");

    let catalog = sample_catalog();
    catalog.save(&path).unwrap();

    let loaded = FileCatalog::load(&path).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = FileCatalog::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read catalog file"));
}

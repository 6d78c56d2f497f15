//! Event logging subsystem for scaffold.
//!
//! This module implements append-only event logging so a workspace keeps a
//! record of what was generated and saved. Events are stored in NDJSON format
//! (one JSON object per line) in `.scaffold/events/events.ndjson`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (init, generate, template_save)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `task`: Optional task name for task-specific events
//! - `details`: Freeform object with action-specific details
//!
//! Logging is best-effort: commands call [`log_event`], which prints a
//! warning instead of failing when the log cannot be written.

use crate::context::WorkspaceContext;
use crate::error::{Result, ScaffoldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Workspace initialization
    Init,
    /// Prompt generated for a task
    Generate,
    /// Template saved for a task
    TemplateSave,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::Generate => write!(f, "generate"),
            EventAction::TemplateSave => write!(f, "template_save"),
        }
    }
}

/// An event record for the workspace log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Optional task name for task-specific events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            task: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the task name for this event.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the events log.
///
/// The file and its directory are created if missing. Each append results
/// in one line with a trailing newline.
///
/// # Returns
///
/// * `Ok(())` - Event was successfully appended
/// * `Err(ScaffoldError::UserError)` - Serialization or write failed
pub fn append_event(ctx: &WorkspaceContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    if !events_dir.exists() {
        fs::create_dir_all(&events_dir).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to create events directory '{}': {}",
                events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ScaffoldError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event, downgrading failures to a warning on stderr.
pub fn log_event(ctx: &WorkspaceContext, event: &Event) {
    if let Err(e) = append_event(ctx, event) {
        eprintln!("Warning: failed to record {} event: {}", event.action, e);
    }
}

//! Configuration types and defaults for scaffold.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use crate::draft::DEFAULT_DRAFT_HEADER;
use serde::{Deserialize, Serialize};

/// Policy when a required form field is missing from a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequiredFieldPolicy {
    /// Refuse to generate (default).
    #[default]
    Fail,
    /// Print a warning and generate anyway.
    Warn,
    /// Generate without checking.
    Ignore,
}

/// Default chat assistant URL.
pub const DEFAULT_CHAT_URL: &str = "https://chatgpt.com/";

// Default value functions for serde
pub(crate) fn default_chat_url() -> String {
    DEFAULT_CHAT_URL.to_string()
}
pub(crate) fn default_draft_header() -> String {
    DEFAULT_DRAFT_HEADER.to_string()
}
pub(crate) fn default_true() -> bool {
    true
}

//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a scaffold workspace.
///
/// This struct represents the contents of `.scaffold/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Chat link settings
    // =========================================================================
    /// Base URL of the chat assistant the prompt link opens.
    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    /// Whether to append `embed=true` to chat links.
    #[serde(default = "default_true")]
    pub chat_embed: bool,

    // =========================================================================
    // Composition settings
    // =========================================================================
    /// Strip a trailing ` at` left behind by an empty value.
    #[serde(default = "default_true")]
    pub strip_dangling_at: bool,

    /// What to do when a required form field has no value.
    #[serde(default)]
    pub required_fields: RequiredFieldPolicy,

    // =========================================================================
    // Builder settings
    // =========================================================================
    /// First line of templates drafted from fields.
    #[serde(default = "default_draft_header")]
    pub draft_header: String,

    // =========================================================================
    // Event log
    // =========================================================================
    /// Whether to append generation and save events to the event log.
    #[serde(default = "default_true")]
    pub log_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_url: default_chat_url(),
            chat_embed: default_true(),
            strip_dangling_at: default_true(),
            required_fields: RequiredFieldPolicy::default(),
            draft_header: default_draft_header(),
            log_events: default_true(),
        }
    }
}

//! Prompt composition engine.
//!
//! This module provides:
//!
//! - **Pipeline**: header selection, fixed-content and value substitution
//! - **Cleanup**: cosmetic passes that tidy up after empty values
//! - **Values**: the four value layers and JSON stringification
//! - **Link**: chat links carrying the composed prompt
//!
//! # Template Syntax
//!
//! ```text
//! Write an email to {{recipient}} about {{subject}}.
//!
//! Context:
//! <<fixed>>
//! ```
//!
//! - `{{name}}` - Substitutes the value of `name`, or nothing if it has none
//! - `<<fixed>>` - Substitutes the out-of-band fixed content
//!
//! There is no escaping and no error: anything that is not a well-formed
//! placeholder passes through untouched.

mod cleanup;
mod link;
mod pipeline;
mod values;
mod working;


pub use cleanup::{CleanupOptions, cleanup, cleanup_with};
pub use link::chat_link;
pub use pipeline::{
    ComposeInput, FIXED_MARKER, SYSTEM_HEADER_VAR, compose, compose_with, select_header,
};
pub use values::{ValueLayers, stringify_map, stringify_value};

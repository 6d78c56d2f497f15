//! Template lint for scaffold.
//!
//! Scans a template for `{{name}}` placeholders and reports:
//! - undefined variables: placeholders with no matching field definition
//! - unused fields: fields the template never references
//! - variable usage: which of `<<fixed>>` and the field placeholders appear
//!
//! The lint is advisory. The composer never consults it and will drop any
//! unresolved placeholder on its own; saving a template is never blocked by
//! lint findings.

mod scan;
mod types;


pub use scan::{extract_variables, find_undefined_variables, lint_template, variable_usage};
pub use types::{LintReport, VariableUsage};

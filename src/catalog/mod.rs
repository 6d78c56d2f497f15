//! Catalog of apps, tasks, fields and templates.
//!
//! The prompt composer needs a resolved snapshot of records for one
//! (app, task) pair. The [`Catalog`] trait is that lookup boundary;
//! [`FileCatalog`] implements it over `.scaffold/catalog.yaml`.
//!
//! Lookups that miss return [`ScaffoldError::NotFound`], and the composer
//! is never invoked in that case.
//!
//! [`ScaffoldError::NotFound`]: crate::error::ScaffoldError::NotFound

mod file;
mod naming;
mod records;

#[cfg(test)]
mod tests;

use crate::error::Result;

pub use file::FileCatalog;
pub use naming::{MAX_FIELD_NAME_LEN, is_valid_field_name, slugify_field_name};
pub use records::{App, Field, FieldType, Task, TemplateRecord};

/// Read access to catalog records.
pub trait Catalog {
    /// Look up an app by id.
    fn app(&self, app_id: &str) -> Result<&App>;

    /// Look up a task by app and name.
    fn task(&self, app_id: &str, task_name: &str) -> Result<&Task>;

    /// The most recently created template for a task.
    ///
    /// Rows are compared by `created_at`; on a tie the row stored later wins.
    fn latest_template(&self, app_id: &str, task_name: &str) -> Result<&TemplateRecord>;

    /// The task's fields ordered by `order`, ties keeping stored order.
    fn fields(&self, app_id: &str, task_name: &str) -> Vec<&Field>;
}

//! Workspace context resolution for scaffold.
//!
//! This module finds the scaffold workspace from any working directory and
//! resolves the paths of the catalog, config and event log inside it.
//!
//! A workspace is any directory containing a `.scaffold/` state directory.
//! Commands walk up from the invocation directory until they find one, so
//! scaffold can be run from anywhere below the workspace root.

use crate::error::{Result, ScaffoldError};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the state directory marking a workspace root.
pub const STATE_DIR: &str = ".scaffold";

/// File name of the catalog inside the state directory.
pub const CATALOG_FILE: &str = "catalog.yaml";

/// File name of the config inside the state directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolved paths for a scaffold workspace.
///
/// All paths are absolute when resolved from an absolute directory.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Workspace root (the directory holding `.scaffold/`).
    pub root: PathBuf,

    /// State directory (`{root}/.scaffold/`).
    pub state_dir: PathBuf,
}

impl WorkspaceContext {
    /// Resolve the workspace context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkspaceContext)` - Successfully resolved context
    /// * `Err(ScaffoldError::UserError)` - If the working directory is unreadable
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ScaffoldError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(&cwd))
    }

    /// Resolve the workspace context from a specific directory.
    ///
    /// Walks up from `dir` looking for a `.scaffold/` directory. If none is
    /// found, `dir` itself becomes the root so `init` can create one there.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();

        let root = dir
            .ancestors()
            .find(|candidate| candidate.join(STATE_DIR).is_dir())
            .unwrap_or(dir)
            .to_path_buf();

        Self::at(root)
    }

    /// Context rooted exactly at `root`, without searching parents.
    pub fn at<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        let state_dir = root.join(STATE_DIR);
        Self { root, state_dir }
    }

    /// Check if the workspace state directory exists.
    pub fn is_initialized(&self) -> bool {
        self.state_dir.is_dir()
    }

    /// Ensure the workspace is initialized, returning an error if not.
    ///
    /// This should be called by all commands except `init` to provide
    /// a helpful error message guiding users to run `scaffold init`.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(ScaffoldError::UserError(format!(
                "scaffold workspace not initialized.\n\
                 Expected state directory at: {}\n\n\
                 Run `scaffold init` to create one.",
                self.state_dir.display()
            )));
        }

        if !self.catalog_path().is_file() {
            return Err(ScaffoldError::UserError(format!(
                "scaffold catalog not found.\n\
                 Expected: {}\n\n\
                 Run `scaffold init` to create one.",
                self.catalog_path().display()
            )));
        }

        Ok(())
    }

    /// Get the path to the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.state_dir.join(CATALOG_FILE)
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join(CONFIG_FILE)
    }

    /// Get the path to the events directory.
    pub fn events_dir(&self) -> PathBuf {
        self.state_dir.join("events")
    }

    /// Get the path to the main events log file.
    pub fn events_file(&self) -> PathBuf {
        self.events_dir().join("events.ndjson")
    }
}

/// Resolve the workspace, honoring an explicit `--workspace` directory.
pub fn resolve_context(workspace: Option<&Path>) -> Result<WorkspaceContext> {
    match workspace {
        Some(dir) => Ok(WorkspaceContext::resolve_from(dir)),
        None => WorkspaceContext::resolve(),
    }
}

/// Convenience function to resolve context and ensure the workspace is initialized.
///
/// Use this in every command except `init`.
pub fn require_initialized_workspace(workspace: Option<&Path>) -> Result<WorkspaceContext> {
    let ctx = resolve_context(workspace)?;
    ctx.ensure_initialized()?;
    Ok(ctx)
}

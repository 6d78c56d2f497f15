//! Filesystem utilities for scaffold.
//!
//! Workspace files are only ever replaced whole, through atomic writes.

pub mod atomic;

pub use atomic::atomic_write_file;

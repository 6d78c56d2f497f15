//! Cosmetic cleanup passes for composed prompts.
//!
//! Templates are written with every field filled in mind. When some values
//! resolve empty, the text around them is left dangling: `Report ()`,
//! `Email sent at`, runs of blank lines. These passes tidy that up:
//!
//! 1. Collapse parenthesis pairs holding only whitespace.
//! 2. Drop a trailing ` at` token at the end of a line (see below).
//! 3. Trim every line, drop the empty ones and separate the rest with a
//!    blank line.
//!
//! The three passes are repeated until the text stops changing, so
//! `cleanup(cleanup(x)) == cleanup(x)` for every input. Each repeat removes
//! at least one non-whitespace character, which bounds the loop.
//!
//! # The dangling `at` heuristic
//!
//! Only a lowercase `at`, preceded by a space or tab on the same line and
//! followed by nothing but spaces or tabs before the line break, is removed.
//! `at` in the middle of a line, `At`/`AT`, and words ending in "at" are left
//! alone. The pass can be switched off with `strip_dangling_at: false`.

use super::working::WorkingText;
use regex::Regex;
use std::sync::LazyLock;

static EMPTY_PARENS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("Invalid empty parens regex"));

static DANGLING_AT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+at[ \t\r]*$").expect("Invalid dangling at regex"));

/// Switches for the cleanup passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Remove a trailing ` at` left behind by an empty value.
    pub strip_dangling_at: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            strip_dangling_at: true,
        }
    }
}

/// Clean up a composed prompt with the default options.
pub fn cleanup(text: &str) -> String {
    cleanup_with(text, &CleanupOptions::default())
}

/// Clean up a composed prompt, repeating the passes to a fixpoint.
pub fn cleanup_with(text: &str, options: &CleanupOptions) -> String {
    let mut working = WorkingText::new(text);
    clean_to_fixpoint(&mut working, options);
    working.into_string()
}

/// Repeat the cleanup passes over `text` until it stops changing.
pub(crate) fn clean_to_fixpoint(text: &mut WorkingText, options: &CleanupOptions) {
    loop {
        let before = text.clone();
        cleanup_pass(text, options);
        if *text == before {
            return;
        }
    }
}

fn cleanup_pass(text: &mut WorkingText, options: &CleanupOptions) {
    text.delete_matches(&EMPTY_PARENS_REGEX);
    if options.strip_dangling_at {
        text.delete_matches(&DANGLING_AT_REGEX);
    }
    text.normalize_lines();
}

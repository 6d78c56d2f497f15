//! Working text of the composition pipeline.
//!
//! The header and template enter the pipeline as *source* text. Whatever a
//! stage inserts (fixed content, field values) is marked *inserted*, byte by
//! byte. Substitution stages only resolve tokens that touch source text, so
//! a value holding `<<fixed>>` or `{{other}}` is emitted exactly as the user
//! typed it. Cleanup edits carry the marks along, which lets the pipeline
//! resolve a token that cleanup joined together out of template text.

use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

/// A well-formed `{{name}}` placeholder. The name may not contain braces.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("Invalid placeholder regex"));

/// One replacement over the current text.
struct Edit {
    range: Range<usize>,
    replacement: String,
    inserted: bool,
}

impl Edit {
    fn insert(range: Range<usize>, replacement: &str) -> Self {
        Self {
            range,
            replacement: replacement.to_string(),
            inserted: true,
        }
    }

    fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
            inserted: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WorkingText {
    text: String,
    /// One flag per byte of `text`, set where a stage inserted the byte.
    inserted: Vec<bool>,
}

impl WorkingText {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        let text = source.into();
        let inserted = vec![false; text.len()];
        Self { text, inserted }
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }

    fn push(&mut self, text: &str, inserted: bool) {
        self.text.push_str(text);
        self.inserted.extend(std::iter::repeat_n(inserted, text.len()));
    }

    fn push_span(&mut self, from: &WorkingText, range: Range<usize>) {
        self.text.push_str(&from.text[range.clone()]);
        self.inserted.extend_from_slice(&from.inserted[range]);
    }

    fn touches_source(&self, range: &Range<usize>) -> bool {
        self.inserted[range.clone()].iter().any(|inserted| !inserted)
    }

    /// Apply sorted, non-overlapping edits. Returns whether any was applied.
    fn apply(&mut self, edits: Vec<Edit>) -> bool {
        if edits.is_empty() {
            return false;
        }

        let mut out = WorkingText::default();
        let mut last = 0;
        for edit in edits {
            out.push_span(self, last..edit.range.start);
            out.push(&edit.replacement, edit.inserted);
            last = edit.range.end;
        }
        out.push_span(self, last..self.text.len());

        *self = out;
        true
    }

    /// Apply the edits found by `find` that touch source text, until it
    /// finds none.
    ///
    /// Every applied edit consumes source bytes and adds only inserted ones,
    /// which bounds the number of rounds by the source length.
    fn resolve_until_stable<F>(&mut self, find: F)
    where
        F: Fn(&str) -> Vec<Edit>,
    {
        loop {
            let edits: Vec<Edit> = find(&self.text)
                .into_iter()
                .filter(|edit| self.touches_source(&edit.range))
                .collect();
            if !self.apply(edits) {
                return;
            }
        }
    }

    /// Replace every `marker` that touches source text with `replacement`.
    pub(crate) fn replace_marker(&mut self, marker: &str, replacement: &str) {
        debug_assert!(!marker.is_empty(), "marker must not be empty");

        self.resolve_until_stable(|text| {
            text.match_indices(marker)
                .map(|(start, _)| Edit::insert(start..start + marker.len(), replacement))
                .collect()
        });
    }

    /// Replace every `{{key}}` whose key is present in `values`.
    ///
    /// Keys are compared literally against the text between the braces.
    /// Placeholders with no entry are left for `strip_placeholders`.
    pub(crate) fn substitute_placeholders(&mut self, values: &BTreeMap<String, String>) {
        self.resolve_until_stable(|text| {
            PLACEHOLDER_REGEX
                .captures_iter(text)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let value = values.get(caps.get(1)?.as_str())?;
                    Some(Edit::insert(whole.range(), value))
                })
                .collect()
        });
    }

    /// Delete every remaining `{{...}}` placeholder that touches source text.
    pub(crate) fn strip_placeholders(&mut self) {
        self.resolve_until_stable(|text| {
            PLACEHOLDER_REGEX
                .find_iter(text)
                .map(|found| Edit::delete(found.range()))
                .collect()
        });
    }

    /// Delete every match of `regex`, inserted or not.
    pub(crate) fn delete_matches(&mut self, regex: &Regex) {
        let edits = regex
            .find_iter(&self.text)
            .map(|found| Edit::delete(found.range()))
            .collect();
        self.apply(edits);
    }

    /// Trim each line, drop empty lines, and join the rest with a blank line.
    ///
    /// A separator takes the mark of the line break it replaces.
    pub(crate) fn normalize_lines(&mut self) {
        let mut out = WorkingText::default();
        let mut separator: Option<bool> = None;
        let mut start = 0;

        for line in self.text.split('\n') {
            let end = start + line.len();
            let kept_start = end - line.trim_start().len();
            let kept_end = start + line.trim_end().len();

            if kept_start < kept_end {
                if let Some(inserted) = separator {
                    out.push("\n\n", inserted);
                }
                out.push_span(self, kept_start..kept_end);
                separator = Some(self.inserted.get(end).copied().unwrap_or(false));
            }
            start = end + 1;
        }

        *self = out;
    }
}

//! Field name rules and slug generation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a field name.
pub const MAX_FIELD_NAME_LEN: usize = 48;

static FIELD_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]{1,48}$").expect("Invalid field name regex"));

/// Whether `name` is usable as a field name (and so as a `{{placeholder}}`).
pub fn is_valid_field_name(name: &str) -> bool {
    FIELD_NAME_REGEX.is_match(name)
}

/// Derive a field name from a free-form label.
///
/// Trims and lowercases the label, drops every character outside
/// `[a-z0-9_ ]`, turns each run of spaces into `_` and truncates to
/// 48 characters.
///
/// # Examples
///
/// ```ignore
/// use scaffold::catalog::slugify_field_name;
///
/// assert_eq!(slugify_field_name("  Email Recipient "), "email_recipient");
/// assert_eq!(slugify_field_name("Tone (optional)!"), "tone_optional");
/// ```
pub fn slugify_field_name(label: &str) -> String {
    let mut slug = String::new();
    let mut last_was_space = false;

    for c in label.trim().to_lowercase().chars() {
        if c == ' ' {
            if !last_was_space {
                slug.push('_');
            }
            last_was_space = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            slug.push(c);
            last_was_space = false;
        }
    }

    // Only ASCII remains, so byte truncation is safe.
    slug.truncate(MAX_FIELD_NAME_LEN);
    slug
}

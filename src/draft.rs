//! Starter templates generated from a task's fields.
//!
//! The draft is a convenience for operators: a header line to fill in,
//! then one `Label: {{name}}` line per field the end user fills in.
//!
//! ```text
//! You are a [define here]
//!
//! Name: {{name}}
//! Tone: {{tone}}
//! ```

use crate::catalog::Field;

/// Header line placed at the top of every draft.
pub const DEFAULT_DRAFT_HEADER: &str = "You are a [define here]";

/// Generate a starter template with the default header.
pub fn generate_template(fields: &[&Field]) -> String {
    generate_template_with_header(DEFAULT_DRAFT_HEADER, fields)
}

/// Generate a starter template.
///
/// Fields are stably sorted by `order` and `runtime` fields are left out.
/// With no eligible fields the result is just `header`.
pub fn generate_template_with_header(header: &str, fields: &[&Field]) -> String {
    let mut eligible: Vec<&Field> = fields.iter().copied().filter(|f| !f.is_runtime()).collect();
    eligible.sort_by_key(|f| f.order);

    if eligible.is_empty() {
        return header.to_string();
    }

    let lines = eligible
        .iter()
        .map(|f| format!("{}: {{{{{}}}}}", f.field_label, f.field_name))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", header, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldType;
    use crate::test_support::field;

    #[test]
    fn test_no_fields_yields_header_only() {
        assert_eq!(generate_template(&[]), "You are a [define here]");
    }

    #[test]
    fn test_fields_in_order() {
        let tone = field("tone", "Tone", FieldType::Text, 2);
        let name = field("name", "Name", FieldType::Text, 1);

        let draft = generate_template(&[&tone, &name]);
        assert_eq!(
            draft,
            "You are a [define here]\n\nName: {{name}}\nTone: {{tone}}"
        );
    }

    #[test]
    fn test_runtime_fields_are_excluded() {
        let name = field("name", "Name", FieldType::Text, 1);
        let ticket = field("ticket_id", "Ticket", FieldType::Runtime, 0);

        let draft = generate_template(&[&name, &ticket]);
        assert!(!draft.contains("ticket_id"));
        assert_eq!(draft, "You are a [define here]\n\nName: {{name}}");
    }

    #[test]
    fn test_only_runtime_fields_yields_header_only() {
        let ticket = field("ticket_id", "Ticket", FieldType::Runtime, 0);
        assert_eq!(generate_template(&[&ticket]), DEFAULT_DRAFT_HEADER);
    }

    #[test]
    fn test_order_ties_keep_original_order() {
        let b = field("b", "B", FieldType::Text, 1);
        let a = field("a", "A", FieldType::Textarea, 1);
        let c = field("c", "C", FieldType::Number, 0);

        let draft = generate_template(&[&b, &a, &c]);
        assert_eq!(
            draft,
            "You are a [define here]\n\nC: {{c}}\nB: {{b}}\nA: {{a}}"
        );
    }

    #[test]
    fn test_custom_header() {
        let name = field("name", "Name", FieldType::Text, 1);
        let draft = generate_template_with_header("You are a support agent", &[&name]);
        assert_eq!(draft, "You are a support agent\n\nName: {{name}}");
    }
}

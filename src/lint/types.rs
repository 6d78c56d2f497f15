//! Result types for template lint.

/// Whether a template references one insertable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableUsage {
    /// The token as it would be written in a template (`<<fixed>>`, `{{name}}`).
    pub token: String,
    /// Whether the template already contains it.
    pub used: bool,
}

impl VariableUsage {
    pub fn new(token: impl Into<String>, used: bool) -> Self {
        Self {
            token: token.into(),
            used,
        }
    }
}

/// Lint findings for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Placeholders with no field definition, first occurrence order.
    pub undefined: Vec<String>,
    /// Field names the template never references, in field order.
    pub unused_fields: Vec<String>,
    /// Per-token usage, `<<fixed>>` first, then each field.
    pub usage: Vec<VariableUsage>,
}

impl LintReport {
    /// True when no placeholder is undefined.
    pub fn is_clean(&self) -> bool {
        self.undefined.is_empty()
    }

    /// The operator-facing warning for undefined variables, if any.
    ///
    /// ```text
    /// Template uses undefined variables: tone, city. Add these as fields or remove them from the template.
    /// ```
    pub fn warning(&self) -> Option<String> {
        if self.undefined.is_empty() {
            return None;
        }
        Some(format!(
            "Template uses undefined variables: {}. Add these as fields or remove them from the template.",
            self.undefined.join(", ")
        ))
    }

    /// Render the report as a multi-line summary.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();

        match self.warning() {
            Some(warning) => {
                out.push_str(&warning);
                out.push('\n');
            }
            None => out.push_str("No undefined variables.\n"),
        }

        if !self.unused_fields.is_empty() {
            out.push_str(&format!(
                "Fields not referenced by the template: {}\n",
                self.unused_fields.join(", ")
            ));
        }

        if !self.usage.is_empty() {
            out.push('\n');
            out.push_str("Variables:\n");
            for usage in &self.usage {
                let mark = if usage.used { "x" } else { " " };
                out.push_str(&format!("  [{}] {}\n", mark, usage.token));
            }
        }

        out
    }
}

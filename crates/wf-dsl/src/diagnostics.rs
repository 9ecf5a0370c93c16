use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The world cannot be built.
    Error,
    /// The world loads, but part of the file was ignored.
    Warning,
}

/// A diagnostic message with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: Severity,
    /// Byte range in the entities file.
    pub span: std::ops::Range<usize>,
    /// Headline message.
    pub message: String,
    /// Optional text attached to the highlighted span.
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attach a label to the highlighted span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this diagnostic prevents the world from loading.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

/// Render diagnostics using ariadne for pretty terminal output.
pub fn render_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();

    for diag in diagnostics {
        let (kind, color) = match diag.severity {
            Severity::Error => (ReportKind::Error, Color::Red),
            Severity::Warning => (ReportKind::Warning, Color::Yellow),
        };

        let label_text = diag.label.as_deref().unwrap_or(&diag.message);
        Report::build(kind, (filename, diag.span.clone()))
            .with_message(&diag.message)
            .with_label(
                Label::new((filename, diag.span.clone()))
                    .with_message(label_text)
                    .with_color(color),
            )
            .finish()
            .write((filename, Source::from(source)), &mut output)
            .ok();
    }

    String::from_utf8(output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(0..5, "unknown entity type 'vehicles'");
        assert_eq!(d.to_string(), "error: unknown entity type 'vehicles'");
        assert!(d.is_error());
        assert!(!Diagnostic::warning(0..1, "w").is_error());
    }

    #[test]
    fn render_produces_output() {
        let source = "digraph {\n  subgraph vehicles { cart }\n}";
        let diags = vec![
            Diagnostic::error(21..29, "unknown entity type 'vehicles'")
                .with_label("expected artefacts, furniture or characters"),
        ];
        let output = render_diagnostics(source, "entities.dot", &diags);
        assert!(output.contains("unknown entity type"));
    }
}

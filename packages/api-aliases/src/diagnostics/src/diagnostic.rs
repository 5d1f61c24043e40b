use super::error_code::ErrorCode;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// A single message produced while generating or checking the alias file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: Option<ErrorCode>,
    pub message: String,
    /// File the diagnostic is about, if any.
    pub file: Option<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code: Some(code),
            message: message.into(),
            file: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code: None,
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self.category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
        };
        write!(f, "{}", category)?;
        if let Some(code) = self.code {
            write!(f, " {}", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(file) = &self.file {
            write!(f, " ({})", file)?;
        }
        Ok(())
    }
}

/// Format diagnostics for display, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();
    for diag in diagnostics {
        output.push_str(&diag.to_string());
        output.push('\n');
    }
    output
}

/// Exit code for a set of diagnostics: 0 without errors, otherwise the code
/// of the first error.
pub fn exit_code_from_diagnostics(diagnostics: &[Diagnostic]) -> i32 {
    diagnostics
        .iter()
        .find(|d| d.is_error())
        .map(|d| d.code.map_or(1, ErrorCode::exit_code))
        .unwrap_or(0)
}

use super::diagnostic::{exit_code_from_diagnostics, format_diagnostics, Diagnostic};
use super::error_code::ErrorCode;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal failure inside one component. The driver turns it into a
/// [`Diagnostic`] before anything is reported.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generated directory not found: {}", .0.display())]
    MissingGeneratedDir(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid source pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl GenerateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerateError::MissingGeneratedDir(_) => ErrorCode::MissingGeneratedDir,
            GenerateError::SourceRead { .. } | GenerateError::Pattern { .. } => {
                ErrorCode::SourceRead
            }
            GenerateError::OutputWrite { .. } => ErrorCode::OutputWrite,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

/// Every error a run produced, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateFailure {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn exit_code(&self) -> i32 {
        match exit_code_from_diagnostics(&self.diagnostics) {
            0 => 1,
            code => code,
        }
    }

    /// Whether any diagnostic carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == Some(code))
    }
}

impl From<GenerateError> for GenerateFailure {
    fn from(error: GenerateError) -> Self {
        Self::new(vec![error.to_diagnostic()])
    }
}

impl fmt::Display for GenerateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_diagnostics(&self.diagnostics).trim_end())
    }
}

impl std::error::Error for GenerateFailure {}

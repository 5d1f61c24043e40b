//! Perform Generate
//!
//! The single linear pass of a run:
//! collect -> validate -> resolve -> write or check.

use crate::collector::collect;
use crate::config::load_and_validate;
use crate::diagnostics::{Diagnostic, ErrorCode, GenerateError, GenerateFailure};
use crate::emitter::{check_committed, emit, CheckOutcome, EmitContext, EmitStats};
use crate::file_system::{import_path, write_file_atomic};
use crate::logging::Logger;
use crate::options::{GenerateOptions, RunMode};
use crate::version::version_string;
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Write mode: the alias file was replaced.
    Written { path: PathBuf, stats: EmitStats },
    /// Check mode: the committed alias file matches.
    UpToDate { path: PathBuf, stats: EmitStats },
}

impl GenerateOutcome {
    pub fn stats(&self) -> &EmitStats {
        match self {
            GenerateOutcome::Written { stats, .. } | GenerateOutcome::UpToDate { stats, .. } => {
                stats
            }
        }
    }
}

/// Current time as written into the generated header.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn perform_generate(
    options: &GenerateOptions,
    logger: &dyn Logger,
) -> Result<GenerateOutcome, GenerateFailure> {
    perform_generate_at(options, logger, &current_timestamp())
}

/// Run with a fixed header timestamp.
pub fn perform_generate_at(
    options: &GenerateOptions,
    logger: &dyn Logger,
    generated_at: &str,
) -> Result<GenerateOutcome, GenerateFailure> {
    let registry = collect(&options.generated_dir, &options.output, logger)?;

    let validated = load_and_validate(&options.config, &registry, logger);
    for warning in &validated.warnings {
        logger.warn(&warning.to_string());
    }

    let schemas_import = import_path(&options.output, &options.schemas_dir).map_err(|source| {
        GenerateError::SourceRead {
            path: options.schemas_dir.clone(),
            source,
        }
    })?;
    let context = EmitContext {
        tool_version: version_string(),
        regenerate_command: options.regenerate_command.clone(),
        generated_at: generated_at.to_string(),
        schemas_import,
    };
    let result = emit(
        &registry,
        &validated.aliases,
        &validated.type_aliases,
        &context,
    );

    let mut errors = validated.errors;
    errors.extend(result.collision_errors);
    if !errors.is_empty() {
        return Err(GenerateFailure::new(errors));
    }

    for block in &result.file.blocks {
        for item in block.items.iter().filter(|item| item.is_renamed()) {
            logger.debug(&format!("{} -> {}", item.original, item.alias));
        }
    }

    let stats = result.stats;
    match options.mode {
        RunMode::Write => {
            write_file_atomic(&options.output, &result.content).map_err(|source| {
                GenerateError::OutputWrite {
                    path: options.output.clone(),
                    source,
                }
            })?;
            logger.info(&format!("Wrote {}: {}", options.output.display(), stats));
            Ok(GenerateOutcome::Written {
                path: options.output.clone(),
                stats,
            })
        }
        RunMode::Check => match check_committed(&options.output, &result.content)? {
            CheckOutcome::UpToDate => {
                logger.info(&format!("{} is up to date", options.output.display()));
                Ok(GenerateOutcome::UpToDate {
                    path: options.output.clone(),
                    stats,
                })
            }
            CheckOutcome::Missing => Err(GenerateFailure::new(vec![Diagnostic::error(
                ErrorCode::MissingCommittedOutput,
                format!(
                    "{} does not exist. Run `{}` and commit the result.",
                    options.output.display(),
                    options.regenerate_command
                ),
            )])),
            CheckOutcome::Drift { excerpt } => Err(GenerateFailure::new(vec![Diagnostic::error(
                ErrorCode::OutputDrift,
                format!(
                    "{} is out of date. Run `{}` and commit the result.\n{}",
                    options.output.display(),
                    options.regenerate_command,
                    excerpt.join("\n")
                ),
            )])),
        },
    }
}

// Alias Config Validation
//
// Manual overrides are cross-checked against the collected exports. Entries
// that went stale after a regeneration are dropped with a warning; authoring
// mistakes are errors.

use super::alias_config::AliasConfig;
use crate::collector::ExportRegistry;
use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::logging::Logger;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// The overrides that survived validation, plus everything found wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedAliasConfig {
    pub aliases: BTreeMap<String, String>,
    pub type_aliases: BTreeMap<String, String>,
    /// Fatal: the run must stop.
    pub errors: Vec<Diagnostic>,
    /// Informational: the entry was dropped and generation continues.
    pub warnings: Vec<Diagnostic>,
}

impl ValidatedAliasConfig {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Which registry names an override table is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Hook and function aliases: sources and targets are checked against
    /// every export.
    AllExports,
    /// Type aliases: checked against exported types only.
    TypesOnly,
}

impl Scope {
    fn label(self) -> &'static str {
        match self {
            Scope::AllExports => "Alias",
            Scope::TypesOnly => "Type alias",
        }
    }

    fn contains(self, registry: &ExportRegistry, name: &str) -> bool {
        match self {
            Scope::AllExports => registry.contains(name),
            Scope::TypesOnly => registry.types.contains_key(name),
        }
    }
}

/// Load the config at `config_path` and validate it against `registry`.
///
/// Load failures are collected into `errors` rather than returned, so that
/// every configuration problem is reported in one run.
pub fn load_and_validate(
    config_path: &Path,
    registry: &ExportRegistry,
    logger: &dyn Logger,
) -> ValidatedAliasConfig {
    let file = config_path.display().to_string();
    match AliasConfig::load(config_path) {
        Ok(Some(config)) => {
            logger.debug(&format!(
                "Loaded {} aliases and {} type aliases from {}",
                config.aliases.len(),
                config.type_aliases.len(),
                file
            ));
            validate(&config, registry, Some(&file))
        }
        Ok(None) => {
            logger.info(&format!("No alias config at {}; using rules only", file));
            ValidatedAliasConfig::default()
        }
        Err(e) => {
            let code = if e.downcast_ref::<serde_json::Error>().is_some() {
                ErrorCode::ConfigParse
            } else {
                ErrorCode::ConfigRead
            };
            ValidatedAliasConfig {
                errors: vec![Diagnostic::error(code, format!("{:#}", e)).with_file(file)],
                ..ValidatedAliasConfig::default()
            }
        }
    }
}

/// Validate `config` against the collected exports.
pub fn validate(
    config: &AliasConfig,
    registry: &ExportRegistry,
    file: Option<&str>,
) -> ValidatedAliasConfig {
    let mut result = ValidatedAliasConfig::default();

    result.aliases = validate_table(
        &config.aliases,
        Scope::AllExports,
        registry,
        file,
        &mut result.errors,
        &mut result.warnings,
    );
    result.type_aliases = validate_table(
        &config.type_aliases,
        Scope::TypesOnly,
        registry,
        file,
        &mut result.errors,
        &mut result.warnings,
    );
    result
}

fn validate_table(
    table: &IndexMap<String, String>,
    scope: Scope,
    registry: &ExportRegistry,
    file: Option<&str>,
    errors: &mut Vec<Diagnostic>,
    warnings: &mut Vec<Diagnostic>,
) -> BTreeMap<String, String> {
    let located = |diagnostic: Diagnostic| match file {
        Some(file) => diagnostic.with_file(file),
        None => diagnostic,
    };
    let label = scope.label();

    let mut valid = BTreeMap::new();
    let mut sources_by_target: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for (original, alias) in table {
        if !scope.contains(registry, original) {
            warnings.push(located(Diagnostic::warning(format!(
                "{} \"{}\" -> \"{}\" skipped: source not found (Orval may have renamed it)",
                label, original, alias
            ))));
            continue;
        }
        if original == alias {
            warnings.push(located(Diagnostic::warning(format!(
                "{} \"{}\" skipped: alias is identical to the source name",
                label, original
            ))));
            continue;
        }
        if !IDENTIFIER.is_match(alias) {
            errors.push(located(Diagnostic::error(
                ErrorCode::InvalidAliasName,
                format!(
                    "{} \"{}\" -> \"{}\": target is not a valid identifier",
                    label, original, alias
                ),
            )));
            continue;
        }
        if scope.contains(registry, alias) {
            warnings.push(located(Diagnostic::warning(format!(
                "{} \"{}\" -> \"{}\" skipped: target already exists (would create a duplicate)",
                label, original, alias
            ))));
            continue;
        }

        sources_by_target
            .entry(alias.as_str())
            .or_default()
            .push(original.as_str());
        valid.insert(original.clone(), alias.clone());
    }

    for (alias, sources) in &sources_by_target {
        if sources.len() > 1 {
            errors.push(located(Diagnostic::error(
                ErrorCode::DuplicateAliasTarget,
                format!(
                    "{} target \"{}\" is used by multiple sources: {}",
                    label,
                    alias,
                    sources.join(", ")
                ),
            )));
        }
    }

    valid
}

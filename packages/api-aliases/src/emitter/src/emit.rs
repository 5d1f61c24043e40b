// Emit
//
// Turns the registry and the validated overrides into the alias file model.

use super::render::render;
use crate::collector::ExportRegistry;
use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::transform::{resolve_with_source, ResolutionSource};
use std::collections::BTreeMap;
use std::fmt;

/// Name fragments of the data-fetching layer's helper exports. Hooks containing
/// any of these are implementation details and never get re-exported.
pub const INTERNAL_HELPER_MARKERS: &[&str] = &[
    "QueryKey",
    "QueryOptions",
    "QueryResult",
    "QueryError",
    "MutationOptions",
    "MutationResult",
    "MutationBody",
    "MutationError",
];

pub fn is_internal_helper(name: &str) -> bool {
    INTERNAL_HELPER_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Values that end up in the generated header and trailing re-exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitContext {
    pub tool_version: String,
    pub regenerate_command: String,
    pub generated_at: String,
    /// Import specifier of the schema (model types) module.
    pub schemas_import: String,
}

/// A single `original` or `original as alias` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExport {
    pub original: String,
    pub alias: String,
}

impl ReExport {
    pub fn is_renamed(&self) -> bool {
        self.original != self.alias
    }
}

impl fmt::Display for ReExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_renamed() {
            write!(f, "{} as {}", self.original, self.alias)
        } else {
            write!(f, "{}", self.original)
        }
    }
}

/// Every re-export from one defining module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlock {
    pub source_path: String,
    pub items: Vec<ReExport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasExport {
    pub original: String,
    pub alias: String,
    pub source_path: String,
}

/// In-memory form of the alias module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedAliasFile {
    pub blocks: Vec<ExportBlock>,
    pub schemas_import: String,
    pub type_aliases: Vec<TypeAliasExport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub files: usize,
    pub hooks: usize,
    pub skipped_internal: usize,
    pub manual_aliases: usize,
    pub rule_aliases: usize,
    pub unchanged: usize,
    pub type_aliases: usize,
}

impl fmt::Display for EmitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hooks from {} files ({} manual, {} by rule, {} unchanged, {} internal skipped), {} type aliases",
            self.hooks,
            self.files,
            self.manual_aliases,
            self.rule_aliases,
            self.unchanged,
            self.skipped_internal,
            self.type_aliases
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitResult {
    /// Rendered module; empty when there are collisions.
    pub content: String,
    pub file: GeneratedAliasFile,
    pub stats: EmitStats,
    pub collision_errors: Vec<Diagnostic>,
}

impl EmitResult {
    pub fn has_collisions(&self) -> bool {
        !self.collision_errors.is_empty()
    }
}

/// Origin of one exported binding, for collision reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingOrigin {
    Hook(ResolutionSource),
    TypeAlias,
}

/// Build the alias module for every public hook in `registry`.
///
/// Any two distinct exports that would share a binding are reported in
/// `collision_errors` and nothing is rendered. This covers hooks renamed onto
/// the same name, a hook renamed onto an unchanged one, and a type alias
/// landing on a hook binding.
pub fn emit(
    registry: &ExportRegistry,
    aliases: &BTreeMap<String, String>,
    type_aliases: &BTreeMap<String, String>,
    context: &EmitContext,
) -> EmitResult {
    let mut stats = EmitStats::default();
    let mut grouped: BTreeMap<&str, Vec<ReExport>> = BTreeMap::new();
    let mut bindings: BTreeMap<String, Vec<(String, BindingOrigin)>> = BTreeMap::new();

    for (name, record) in &registry.hooks {
        if is_internal_helper(name) {
            stats.skipped_internal += 1;
            continue;
        }

        let resolution = resolve_with_source(name, aliases);
        match resolution.source {
            ResolutionSource::Manual => stats.manual_aliases += 1,
            ResolutionSource::Rule(_) => stats.rule_aliases += 1,
            ResolutionSource::Unchanged => stats.unchanged += 1,
        }
        stats.hooks += 1;

        bindings
            .entry(resolution.name.clone())
            .or_default()
            .push((name.clone(), BindingOrigin::Hook(resolution.source)));
        grouped
            .entry(record.defining_path.as_str())
            .or_default()
            .push(ReExport {
                original: name.clone(),
                alias: resolution.name,
            });
    }

    let blocks: Vec<ExportBlock> = grouped
        .into_iter()
        .map(|(source_path, items)| ExportBlock {
            source_path: source_path.to_string(),
            items,
        })
        .collect();
    stats.files = blocks.len();

    let type_aliases: Vec<TypeAliasExport> = type_aliases
        .iter()
        .filter_map(|(original, alias)| {
            registry.types.get(original).map(|record| TypeAliasExport {
                original: original.clone(),
                alias: alias.clone(),
                source_path: record.defining_path.clone(),
            })
        })
        .collect();
    stats.type_aliases = type_aliases.len();
    for alias in &type_aliases {
        bindings
            .entry(alias.alias.clone())
            .or_default()
            .push((alias.original.clone(), BindingOrigin::TypeAlias));
    }

    let collision_errors = collision_errors(&bindings);

    let file = GeneratedAliasFile {
        blocks,
        schemas_import: context.schemas_import.clone(),
        type_aliases,
    };
    let content = if collision_errors.is_empty() {
        render(&file, context)
    } else {
        String::new()
    };

    EmitResult {
        content,
        file,
        stats,
        collision_errors,
    }
}

fn describe(original: &str, origin: BindingOrigin) -> String {
    match origin {
        BindingOrigin::Hook(ResolutionSource::Manual) => format!("{} (manual alias)", original),
        BindingOrigin::Hook(ResolutionSource::Rule(rule)) => {
            format!("{} (rule {})", original, rule)
        }
        BindingOrigin::Hook(ResolutionSource::Unchanged) => format!("{} (unchanged)", original),
        BindingOrigin::TypeAlias => format!("{} (type alias)", original),
    }
}

fn collision_errors(bindings: &BTreeMap<String, Vec<(String, BindingOrigin)>>) -> Vec<Diagnostic> {
    bindings
        .iter()
        .filter(|(_, originals)| originals.len() > 1)
        .map(|(binding, originals)| {
            let sources: Vec<String> = originals
                .iter()
                .map(|(original, origin)| describe(original, *origin))
                .collect();
            Diagnostic::error(
                ErrorCode::AliasCollision,
                format!(
                    "Alias collision: \"{}\" would be exported by {}",
                    binding,
                    sources.join(", ")
                ),
            )
        })
        .collect()
}

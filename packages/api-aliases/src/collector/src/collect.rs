// Collect
//
// Builds the export registry from a directory of generated bindings.

use super::registry::{ExportKind, ExportRegistry};
use super::scanner::scan_exports;
use crate::diagnostics::GenerateError;
use crate::file_system::{absolute_posix, dirname, is_declaration_file, module_specifier};
use crate::logging::Logger;
use std::fs;
use std::path::{Path, PathBuf};

/// Every non-declaration `.ts` file below `root_dir`, in lexicographic order.
pub fn discover_source_files(root_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let escaped_root = glob::Pattern::escape(&root_dir.to_string_lossy());
    let pattern = format!("{}/**/*.ts", escaped_root.trim_end_matches('/'));

    let entries = glob::glob(&pattern).map_err(|source| GenerateError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GenerateError::SourceRead {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() && !is_declaration_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Collect the exports of every generated file below `root_dir`.
///
/// Defining paths are computed relative to the directory of `output_file`,
/// where the alias module will live. The output file itself is skipped if it
/// sits inside the scanned tree. Files are visited in sorted order, so when a
/// name is exported twice the lexicographically last file wins.
pub fn collect(
    root_dir: &Path,
    output_file: &Path,
    logger: &dyn Logger,
) -> Result<ExportRegistry, GenerateError> {
    if !root_dir.is_dir() {
        return Err(GenerateError::MissingGeneratedDir(root_dir.to_path_buf()));
    }

    let absolute = |path: &Path| {
        absolute_posix(path).map_err(|source| GenerateError::SourceRead {
            path: path.to_path_buf(),
            source,
        })
    };

    let output = absolute(output_file)?;
    let output_dir = dirname(&output);
    let files = discover_source_files(root_dir)?;
    logger.debug(&format!(
        "Scanning {} source files under {}",
        files.len(),
        root_dir.display()
    ));

    let mut registry = ExportRegistry::new();
    for file in &files {
        let file_path = absolute(file)?;
        if file_path == output {
            logger.debug(&format!("Skipping output file {}", file.display()));
            continue;
        }

        let content = fs::read_to_string(file).map_err(|source| GenerateError::SourceRead {
            path: file.clone(),
            source,
        })?;
        let exports = scan_exports(&content);
        if exports.is_empty() {
            continue;
        }

        let specifier = module_specifier(&output_dir, &file_path);
        let categories = [
            (ExportKind::Hook, &exports.hooks),
            (ExportKind::Type, &exports.types),
            (ExportKind::Function, &exports.functions),
        ];
        for (kind, names) in categories {
            for name in names {
                if !registry.record(kind, name, &specifier) {
                    logger.debug(&format!(
                        "{} in {} is already exported as a {:?}; keeping the first category",
                        name, specifier, registry.kind_of(name).unwrap_or(kind)
                    ));
                }
            }
        }
    }

    logger.info(&format!(
        "Collected {} hooks, {} types, {} functions from {} files",
        registry.hooks.len(),
        registry.types.len(),
        registry.functions.len(),
        files.len()
    ));
    Ok(registry)
}

use once_cell::sync::Lazy;
use regex::Regex;
use std::io;
use std::path::Path;

static TS_EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.d\.ts$|\.tsx?$").unwrap());

/// Convert Windows-style separators to POSIX separators.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Remove a .ts, .tsx or .d.ts extension from a file name.
pub fn strip_extension(path: &str) -> String {
    TS_EXTENSION.replace(path, "").to_string()
}

/// Whether `path` names a TypeScript declaration file.
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".d.ts"))
        .unwrap_or(false)
}

/// Lexically resolve `.` and `..` segments and collapse separators. A leading
/// `/` is kept and `..` at the root is dropped.
pub fn clean_path(path: &str) -> String {
    let normalized = normalize_separators(path);
    let mut segments: Vec<&str> = Vec::new();
    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if normalized.starts_with('/') {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Absolute, cleaned POSIX form of `path`. Relative paths are taken from the
/// current working directory. The path does not need to exist.
pub fn absolute_posix(path: &Path) -> io::Result<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(clean_path(&absolute.to_string_lossy()))
}

/// Parent directory of a cleaned POSIX path.
pub fn dirname(path: &str) -> String {
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
        None => ".".to_string(),
    }
}

/// Relative POSIX path from directory `from` to `to`. Both must be cleaned
/// paths of the same kind (both absolute or both relative).
pub fn relative(from: &str, to: &str) -> String {
    let from_segments: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_segments
        .iter()
        .zip(to_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..from_segments.len() {
        parts.push("..");
    }
    parts.extend_from_slice(&to_segments[common..]);
    parts.join("/")
}

/// Import specifier for `target` as seen from a module inside `from_dir`:
/// relative, extensionless, and always starting with `.`.
pub fn module_specifier(from_dir: &str, target: &str) -> String {
    let relative = strip_extension(&relative(from_dir, target));
    if relative.is_empty() {
        ".".to_string()
    } else if relative.starts_with('.') {
        relative
    } else {
        format!("./{}", relative)
    }
}

/// Import specifier for `target` as seen from the file at `importer`.
pub fn import_path(importer: &Path, target: &Path) -> io::Result<String> {
    let importer = absolute_posix(importer)?;
    let target = absolute_posix(target)?;
    Ok(module_specifier(&dirname(&importer), &target))
}

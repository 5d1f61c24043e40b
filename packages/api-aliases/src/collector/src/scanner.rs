// Export Scanner
//
// Extracts top-level export names from TypeScript source text. Only the
// lexical surface is needed, so line-anchored patterns stand in for a parser.

use once_cell::sync::Lazy;
use regex::Regex;

static HOOK_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+(?:const|(?:async\s+)?function)\s+(use[A-Z][A-Za-z0-9_$]*)")
        .unwrap()
});

static TYPE_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+(?:type|interface)\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

static VALUE_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+(?:const|(?:async\s+)?function)\s+([a-z][A-Za-z0-9_$]*)").unwrap()
});

/// Prefix reserved for the query-key/query-options getters of the generator.
const RESERVED_GETTER_PREFIX: &str = "get";

/// `use` followed by an uppercase-led word.
pub fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Export names found in one source file, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedExports {
    pub hooks: Vec<String>,
    pub types: Vec<String>,
    pub functions: Vec<String>,
}

impl ScannedExports {
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.types.is_empty() && self.functions.is_empty()
    }
}

/// Scan `source` for top-level hook, type and plain function exports.
pub fn scan_exports(source: &str) -> ScannedExports {
    let captured = |re: &Regex| -> Vec<String> {
        re.captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    };

    let hooks = captured(&HOOK_EXPORT);
    let types = captured(&TYPE_EXPORT);
    let functions = captured(&VALUE_EXPORT)
        .into_iter()
        .filter(|name| !is_hook_name(name) && !name.starts_with(RESERVED_GETTER_PREFIX))
        .collect();

    ScannedExports {
        hooks,
        types,
        functions,
    }
}

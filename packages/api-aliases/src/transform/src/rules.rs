// Rewrite Rules
//
// The generator builds names from FastAPI operation ids of the form
// `{handler}_api_{path}_{verb}`, which leaves an `Api` infix between the
// handler name and the path. These rules drop the handler and the infix,
// keeping `{path}{Verb}`.

use crate::collector::is_hook_name;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Shape of name a rule may rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape {
    Hook,
    Plain,
}

impl NameShape {
    pub fn of(name: &str) -> Self {
        if is_hook_name(name) {
            NameShape::Hook
        } else {
            NameShape::Plain
        }
    }
}

/// A named pattern/replacement pair.
pub struct RewriteRule {
    pub name: &'static str,
    pub shape: NameShape,
    pattern: Regex,
    rewrite: fn(&Captures<'_>) -> String,
}

impl RewriteRule {
    /// Rewritten name, if this rule applies to `name`.
    pub fn apply(&self, name: &str) -> Option<String> {
        if NameShape::of(name) != self.shape {
            return None;
        }
        self.pattern.captures(name).map(|caps| (self.rewrite)(&caps))
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        // useGetPartiesApiPartiesGet -> usePartiesGet
        RewriteRule {
            name: "hook-api-infix",
            shape: NameShape::Hook,
            pattern: Regex::new(
                r"^use([A-Z][A-Za-z0-9_]*?)Api([A-Z][A-Za-z0-9_]*)(Get|Post|Put|Patch|Delete)$",
            )
            .unwrap(),
            rewrite: |caps| format!("use{}{}", &caps[2], &caps[3]),
        },
        // getInventoryApiInventoryGet -> inventoryGet
        RewriteRule {
            name: "function-api-infix",
            shape: NameShape::Plain,
            pattern: Regex::new(
                r"^([a-z][A-Za-z0-9_]*?)Api([A-Z][A-Za-z0-9_]*)(Get|Post|Put|Patch|Delete)$",
            )
            .unwrap(),
            rewrite: |caps| format!("{}{}", lower_first(&caps[2]), &caps[3]),
        },
    ]
});

/// The rules, in the order they are tried.
pub fn rules() -> &'static [RewriteRule] {
    &RULES
}

/// Apply the first matching rule. Returns the rule name and the rewritten name.
pub fn apply_rules(name: &str) -> Option<(&'static str, String)> {
    rules()
        .iter()
        .find_map(|rule| rule.apply(name).map(|rewritten| (rule.name, rewritten)))
}

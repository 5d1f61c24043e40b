use super::rules::apply_rules;
use std::collections::BTreeMap;

/// Where a resolved name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A validated manual override.
    Manual,
    /// The named rewrite rule.
    Rule(&'static str),
    /// Nothing applied; the original name is kept.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub source: ResolutionSource,
}

/// Resolve `original` to its final exported name.
///
/// A manual override always wins, even over a matching rule. Names that no
/// rule matches are returned unchanged.
pub fn resolve_with_source(original: &str, valid_aliases: &BTreeMap<String, String>) -> Resolution {
    if let Some(alias) = valid_aliases.get(original) {
        return Resolution {
            name: alias.clone(),
            source: ResolutionSource::Manual,
        };
    }
    match apply_rules(original) {
        Some((rule, name)) => Resolution {
            name,
            source: ResolutionSource::Rule(rule),
        },
        None => Resolution {
            name: original.to_string(),
            source: ResolutionSource::Unchanged,
        },
    }
}

pub fn resolve(original: &str, valid_aliases: &BTreeMap<String, String>) -> String {
    resolve_with_source(original, valid_aliases).name
}

use super::*;
use std::collections::BTreeMap;

fn no_overrides() -> BTreeMap<String, String> {
    BTreeMap::new()
}

#[test]
fn test_hook_rule_strips_api_infix() {
    assert_eq!(resolve("useGetPartiesApiPartiesGet", &no_overrides()), "usePartiesGet");
    assert_eq!(
        resolve("useCreatePartyApiPartiesPost", &no_overrides()),
        "usePartiesPost"
    );
    assert_eq!(
        resolve("useUpdatePartyApiPartiesPartyIdPatch", &no_overrides()),
        "usePartiesPartyIdPatch"
    );
}

#[test]
fn test_function_rule_lowercases_path() {
    assert_eq!(resolve("getInventoryApiInventoryGet", &no_overrides()), "inventoryGet");
    assert_eq!(
        resolve("deleteItemApiInventoryItemIdDelete", &no_overrides()),
        "inventoryItemIdDelete"
    );
}

#[test]
fn test_unmatched_names_are_unchanged() {
    assert_eq!(resolve("useCustomWidget", &no_overrides()), "useCustomWidget");
    assert_eq!(resolve("useApiKeysGet", &no_overrides()), "useApiKeysGet");
    assert_eq!(resolve("useGetPartiesApiGet", &no_overrides()), "useGetPartiesApiGet");
    assert_eq!(resolve("PartyRead", &no_overrides()), "PartyRead");
}

#[test]
fn test_plain_rule_never_rewrites_hooks() {
    // Would match the plain pattern and lose its `use` prefix.
    assert_eq!(apply_rules("useApiKeysGet"), None);
}

#[test]
fn test_manual_override_wins_over_rule() {
    let mut overrides = BTreeMap::new();
    overrides.insert("useGetPartiesApiPartiesGet".to_string(), "useParties".to_string());

    let resolution = resolve_with_source("useGetPartiesApiPartiesGet", &overrides);
    assert_eq!(resolution.name, "useParties");
    assert_eq!(resolution.source, ResolutionSource::Manual);
}

#[test]
fn test_resolution_source_names_rule() {
    let resolution = resolve_with_source("useGetPartiesApiPartiesGet", &no_overrides());
    assert_eq!(resolution.source, ResolutionSource::Rule("hook-api-infix"));

    let resolution = resolve_with_source("useCustomWidget", &no_overrides());
    assert_eq!(resolution.source, ResolutionSource::Unchanged);
}

#[test]
fn test_rules_are_ordered() {
    let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["hook-api-infix", "function-api-infix"]);
}

use super::*;
use crate::collector::{ExportKind, ExportRegistry};
use crate::diagnostics::ErrorCode;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;

fn context(generated_at: &str) -> EmitContext {
    EmitContext {
        tool_version: "api-aliases v0.1.0".to_string(),
        regenerate_command: "api-aliases --app=web".to_string(),
        generated_at: generated_at.to_string(),
        schemas_import: "./generated/schemas".to_string(),
    }
}

fn registry() -> ExportRegistry {
    let mut registry = ExportRegistry::new();
    registry.record(ExportKind::Hook, "useGetPartiesApiPartiesGet", "./generated/parties/parties");
    registry.record(ExportKind::Hook, "useCreatePartyApiPartiesPost", "./generated/parties/parties");
    registry.record(ExportKind::Hook, "usePartiesQueryKey", "./generated/parties/parties");
    registry.record(ExportKind::Hook, "useGetInventoryApiInventoryGet", "./generated/inventory/inventory");
    registry.record(ExportKind::Hook, "useCustomWidget", "./generated/widgets/widgets");
    registry.record(ExportKind::Type, "PartyRead", "./generated/schemas/partyRead");
    registry
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Local bindings introduced by the re-export statements of `content`.
fn bindings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.starts_with("  ") && line.ends_with(','))
        .map(|line| {
            let item = line.trim().trim_end_matches(',');
            item.rsplit(" as ").next().unwrap_or(item).to_string()
        })
        .collect()
}

mod emit_tests {
    use super::*;

    #[test]
    fn should_group_by_defining_path() {
        let result = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        assert!(!result.has_collisions());

        let paths: Vec<&str> = result
            .file
            .blocks
            .iter()
            .map(|b| b.source_path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "./generated/inventory/inventory",
                "./generated/parties/parties",
                "./generated/widgets/widgets"
            ]
        );
        assert_eq!(result.stats.files, 3);
        assert_eq!(result.stats.hooks, 4);
        assert_eq!(result.stats.rule_aliases, 3);
        assert_eq!(result.stats.unchanged, 1);
        assert_eq!(result.stats.skipped_internal, 1);
    }

    #[test]
    fn should_skip_internal_helpers() {
        assert!(is_internal_helper("usePartiesQueryKey"));
        assert!(is_internal_helper("useCreatePartyMutationOptions"));
        assert!(!is_internal_helper("useGetPartiesApiPartiesGet"));

        let result = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        assert!(!result.content.contains("usePartiesQueryKey"));
    }

    #[test]
    fn should_render_aliases_and_schema_reexport() {
        let result = emit(
            &registry(),
            &map(&[("useCreatePartyApiPartiesPost", "useCreateParty")]),
            &map(&[("PartyRead", "Party")]),
            &context("2026-01-01T00:00:00Z"),
        );
        let expected = "\
/**
 * AUTO-GENERATED FILE - DO NOT EDIT
 *
 * Generated by api-aliases v0.1.0
 * Regenerate with: api-aliases --app=web
 * Generated at: 2026-01-01T00:00:00Z
 */

// ./generated/inventory/inventory
export {
  useGetInventoryApiInventoryGet as useInventoryGet,
} from './generated/inventory/inventory';

// ./generated/parties/parties
export {
  useCreatePartyApiPartiesPost as useCreateParty,
  useGetPartiesApiPartiesGet as usePartiesGet,
} from './generated/parties/parties';

// ./generated/widgets/widgets
export {
  useCustomWidget,
} from './generated/widgets/widgets';

export * from './generated/schemas';

// Type aliases
export type { PartyRead as Party } from './generated/schemas/partyRead';
";
        assert_eq!(result.content, expected);
        assert_eq!(result.stats.manual_aliases, 1);
        assert_eq!(result.stats.type_aliases, 1);
    }

    #[test]
    fn should_report_collision_between_rule_aliases() {
        let mut registry = registry();
        registry.record(ExportKind::Hook, "useListPartiesApiPartiesGet", "./generated/parties/parties");

        let result = emit(&registry, &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        assert!(result.content.is_empty());
        assert_eq!(result.collision_errors.len(), 1);
        let error = &result.collision_errors[0];
        assert_eq!(error.code, Some(ErrorCode::AliasCollision));
        assert!(error.message.contains("\"usePartiesGet\""));
        assert!(error.message.contains("useGetPartiesApiPartiesGet"));
        assert!(error.message.contains("useListPartiesApiPartiesGet"));
    }

    #[test]
    fn should_report_alias_shadowing_unchanged_export() {
        let result = emit(
            &registry(),
            &map(&[("useGetInventoryApiInventoryGet", "useCustomWidget")]),
            &BTreeMap::new(),
            &context("t"),
        );
        assert_eq!(result.collision_errors.len(), 1);
        assert!(result.collision_errors[0].message.contains("(manual alias)"));
        assert!(result.collision_errors[0].message.contains("(unchanged)"));
    }

    #[test]
    fn should_report_type_alias_landing_on_hook_binding() {
        let mut registry = registry();
        registry.record(ExportKind::Type, "InventoryItem", "./generated/schemas/inventoryItem");

        let result = emit(
            &registry,
            &BTreeMap::new(),
            &map(&[("PartyRead", "useCustomWidget"), ("InventoryItem", "usePartiesGet")]),
            &context("t"),
        );
        assert!(result.content.is_empty());
        assert_eq!(result.collision_errors.len(), 2);
        let messages: Vec<&str> = result
            .collision_errors
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert!(messages[0].contains("\"useCustomWidget\""));
        assert!(messages[0].contains("PartyRead (type alias)"));
        assert!(messages[1].contains("\"usePartiesGet\""));
        assert!(messages[1].contains("InventoryItem (type alias)"));
        assert!(messages[1].contains("(rule hook-api-infix)"));
    }

    #[test]
    fn should_never_emit_duplicate_bindings() {
        let result = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        let all = bindings(&result.content);
        let unique: BTreeSet<&String> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert!(all.contains(&"usePartiesGet".to_string()));
    }

    #[test]
    fn should_omit_type_alias_block_without_type_aliases() {
        let result = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        assert!(!result.content.contains("// Type aliases"));
        assert!(result.content.ends_with("export * from './generated/schemas';\n"));
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn should_normalize_timestamp_and_line_endings() {
        let a = "/**\n * Generated at: 2026-01-01T00:00:00Z\n */\nexport * from './s';\n";
        let b = "/**\r\n * Generated at: 2026-10-19T12:00:00Z\r\n */\r\nexport * from './s';\r\n";
        assert_eq!(normalize_for_comparison(a), normalize_for_comparison(b));
    }

    #[test]
    fn should_ignore_regenerate_command_when_comparing() {
        let from_preset = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("t"));
        let mut explicit = context("t");
        explicit.regenerate_command =
            "api-aliases --generated-dir=apps/web/src/api/generated --output=apps/web/src/api/aliases.ts --config=apps/web/api-aliases.json".to_string();
        let from_paths = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &explicit);

        assert_ne!(from_preset.content, from_paths.content);
        assert_eq!(
            compare(&from_preset.content, &from_paths.content),
            CheckOutcome::UpToDate
        );
    }

    #[test]
    fn should_render_identically_apart_from_timestamp() {
        let first = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("one"));
        let second = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("two"));
        assert_ne!(first.content, second.content);
        assert_eq!(
            normalize_for_comparison(&first.content),
            normalize_for_comparison(&second.content)
        );
    }
}

mod check_tests {
    use super::*;

    #[test]
    fn should_report_missing_committed_file() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = check_committed(&dir.path().join("aliases.ts"), "content\n").unwrap();
        assert_eq!(outcome, CheckOutcome::Missing);
    }

    #[test]
    fn should_accept_file_differing_only_in_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("aliases.ts");
        let committed = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("one"));
        fs::write(&output, &committed.content).unwrap();

        let fresh = emit(&registry(), &BTreeMap::new(), &BTreeMap::new(), &context("two"));
        assert_eq!(
            check_committed(&output, &fresh.content).unwrap(),
            CheckOutcome::UpToDate
        );
    }

    #[test]
    fn should_show_changed_line() {
        let outcome = compare(
            "export {\n  useA as useAlpha,\n} from './a';\n",
            "export {\n  useA as useAy,\n} from './a';\n",
        );
        assert_eq!(
            outcome,
            CheckOutcome::Drift {
                excerpt: vec![
                    "@@ line 2 @@".to_string(),
                    "-   useA as useAlpha,".to_string(),
                    "+   useA as useAy,".to_string(),
                ]
            }
        );
    }

    #[test]
    fn should_cap_diff_excerpt() {
        let committed: String = (0..20).map(|i| format!("a{}\n", i)).collect();
        let expected: String = (0..20).map(|i| format!("b{}\n", i)).collect();
        let excerpt = diff_excerpt(&committed, &expected, 3);
        assert_eq!(excerpt.len(), 3 * 3 + 1);
        assert_eq!(excerpt.last().unwrap(), "... 17 more differing lines");
    }

    #[test]
    fn should_show_added_lines() {
        let excerpt = diff_excerpt("a\n", "a\nb\n", MAX_DIFF_LINES);
        assert_eq!(excerpt, vec!["@@ line 2 @@", "+ b"]);
    }
}

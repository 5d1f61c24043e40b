// Render
//
// Serializes the alias module. Apart from the two volatile header lines the
// output is a pure function of its inputs.

use super::emit::{EmitContext, GeneratedAliasFile};

/// Header line that changes on every run.
pub const GENERATED_AT_PREFIX: &str = " * Generated at: ";

/// Header line that depends on how the tool was invoked (preset or paths).
pub const REGENERATE_PREFIX: &str = " * Regenerate with: ";

const VOLATILE_HEADER_PREFIXES: [&str; 2] = [GENERATED_AT_PREFIX, REGENERATE_PREFIX];

pub fn render(file: &GeneratedAliasFile, context: &EmitContext) -> String {
    let mut out = String::new();

    out.push_str("/**\n");
    out.push_str(" * AUTO-GENERATED FILE - DO NOT EDIT\n");
    out.push_str(" *\n");
    out.push_str(&format!(" * Generated by {}\n", context.tool_version));
    out.push_str(&format!("{}{}\n", REGENERATE_PREFIX, context.regenerate_command));
    out.push_str(&format!("{}{}\n", GENERATED_AT_PREFIX, context.generated_at));
    out.push_str(" */\n");

    for block in &file.blocks {
        out.push('\n');
        out.push_str(&format!("// {}\n", block.source_path));
        out.push_str("export {\n");
        for item in &block.items {
            out.push_str(&format!("  {},\n", item));
        }
        out.push_str(&format!("}} from '{}';\n", block.source_path));
    }

    out.push('\n');
    out.push_str(&format!("export * from '{}';\n", file.schemas_import));

    if !file.type_aliases.is_empty() {
        out.push('\n');
        out.push_str("// Type aliases\n");
        for alias in &file.type_aliases {
            out.push_str(&format!(
                "export type {{ {} as {} }} from '{}';\n",
                alias.original, alias.alias, alias.source_path
            ));
        }
    }

    out
}

/// Content with the volatile header lines removed and line endings unified,
/// for comparing a committed file against a fresh render.
pub fn normalize_for_comparison(content: &str) -> String {
    let mut out = String::new();
    for line in content.lines() {
        if VOLATILE_HEADER_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
        {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

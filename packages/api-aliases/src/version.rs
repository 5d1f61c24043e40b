//! Version
//!
//! Tool identity written into the generated file header.

/// Tool name as it appears in generated headers and remediation messages.
pub const TOOL_NAME: &str = "api-aliases";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string, e.g. `api-aliases v0.1.0`.
pub fn version_string() -> String {
    format!("{} v{}", TOOL_NAME, VERSION)
}

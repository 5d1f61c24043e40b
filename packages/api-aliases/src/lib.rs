#![deny(clippy::all)]

/**
 * API Aliases - Rust Implementation
 *
 * Builds a stable alias layer over the hooks that Orval generates from the
 * backend's OpenAPI schema, and keeps the committed alias file in sync.
 */
pub mod collector;
pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod file_system;
pub mod logging;
pub mod main_entry;
pub mod options;
pub mod perform_generate;
pub mod transform;
pub mod version;

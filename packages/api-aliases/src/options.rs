//! Options
//!
//! The run configuration, built once from the command line and passed by
//! reference through every stage.

use crate::logging::LogLevel;
use crate::version::TOOL_NAME;
use std::path::{Path, PathBuf};

/// Config file looked up next to the output when no other path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "api-aliases.json";

/// Directory below the generated tree holding the schema (model) types.
pub const DEFAULT_SCHEMAS_DIR_NAME: &str = "schemas";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Regenerate and overwrite the alias file.
    Write,
    /// Verify the committed alias file is current; never writes.
    Check,
}

/// Fixed path layouts of the frontend applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPreset {
    Web,
    Admin,
}

/// Paths of a preset, relative to the repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetPaths {
    pub generated_dir: &'static str,
    pub output: &'static str,
    pub config: &'static str,
}

impl AppPreset {
    pub const ALL: [AppPreset; 2] = [AppPreset::Web, AppPreset::Admin];

    pub fn name(self) -> &'static str {
        match self {
            AppPreset::Web => "web",
            AppPreset::Admin => "admin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|preset| preset.name()).collect()
    }

    pub fn paths(self) -> PresetPaths {
        match self {
            AppPreset::Web => PresetPaths {
                generated_dir: "apps/web/src/api/generated",
                output: "apps/web/src/api/aliases.ts",
                config: "apps/web/api-aliases.json",
            },
            AppPreset::Admin => PresetPaths {
                generated_dir: "apps/admin/src/api/generated",
                output: "apps/admin/src/api/aliases.ts",
                config: "apps/admin/api-aliases.json",
            },
        }
    }
}

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub generated_dir: PathBuf,
    pub output: PathBuf,
    pub config: PathBuf,
    pub schemas_dir: PathBuf,
    pub mode: RunMode,
    pub verbose: bool,
    /// Command printed in the header and in check-mode failures.
    pub regenerate_command: String,
}

impl GenerateOptions {
    /// Options with the conventional defaults for the config and schemas paths.
    pub fn new(generated_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let generated_dir = generated_dir.into();
        let output = output.into();
        let config = default_config_path(&output);
        let schemas_dir = generated_dir.join(DEFAULT_SCHEMAS_DIR_NAME);
        let regenerate_command = explicit_command(&generated_dir, &output, &config);
        Self {
            generated_dir,
            output,
            config,
            schemas_dir,
            mode: RunMode::Write,
            verbose: false,
            regenerate_command,
        }
    }

    pub fn with_config(mut self, config: impl Into<PathBuf>) -> Self {
        self.config = config.into();
        self.regenerate_command = explicit_command(&self.generated_dir, &self.output, &self.config);
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_verbose(self.verbose)
    }
}

/// `api-aliases.json` beside the output file.
pub fn default_config_path(output: &Path) -> PathBuf {
    output
        .parent()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE_NAME))
}

/// `api-aliases --app=<preset>`
pub fn preset_command(preset: AppPreset) -> String {
    format!("{} --app={}", TOOL_NAME, preset.name())
}

/// The explicit-path form of the regenerate command.
pub fn explicit_command(generated_dir: &Path, output: &Path, config: &Path) -> String {
    format!(
        "{} --generated-dir={} --output={} --config={}",
        TOOL_NAME,
        generated_dir.display(),
        output.display(),
        config.display()
    )
}

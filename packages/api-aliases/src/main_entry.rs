// Main Entry Point
//
// Command-line parsing and the process-level adapter around
// `perform_generate`. Nothing below this module reads process state or exits.

use crate::diagnostics::{format_diagnostics, ErrorCode};
use crate::logging::ConsoleLogger;
use crate::options::{
    default_config_path, explicit_command, preset_command, AppPreset, GenerateOptions, RunMode,
    DEFAULT_SCHEMAS_DIR_NAME,
};
use crate::perform_generate::{perform_generate, GenerateOutcome};
use crate::version::{TOOL_NAME, VERSION};
use clap::builder::PossibleValuesParser;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Parsed command-line arguments, before preset resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub app: Option<String>,
    pub generated_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub schemas: Option<PathBuf>,
    pub check: bool,
    pub verbose: bool,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let path = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);
        Self {
            app: matches.get_one::<String>("app").cloned(),
            generated_dir: path("generated-dir"),
            output: path("output"),
            config: path("config"),
            schemas: path("schemas"),
            check: matches.get_flag("check"),
            verbose: matches.get_flag("verbose"),
        }
    }
}

pub fn command() -> Command {
    Command::new(TOOL_NAME)
        .version(VERSION)
        .about("Generate stable, collision-free aliases for Orval-generated API hooks")
        .arg(
            Arg::new("app")
                .long("app")
                .value_name("PRESET")
                .value_parser(PossibleValuesParser::new(AppPreset::names()))
                .help("Use the generated-dir/output/config paths of a frontend app"),
        )
        .arg(
            Arg::new("generated-dir")
                .long("generated-dir")
                .value_name("DIR")
                .help("Directory of generated bindings to scan"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .help("Alias module to write or check"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Manual alias overrides (JSON); optional"),
        )
        .arg(
            Arg::new("schemas")
                .long("schemas")
                .value_name("DIR")
                .help("Schema types module re-exported wholesale [default: <generated-dir>/schemas]"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Verify the committed alias file is up to date; never writes"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print every resolved alias and extra diagnostics"),
        )
}

/// Resolve presets and explicit overrides into the run options.
///
/// Explicit path flags override the preset field by field. Returns a usage
/// message when the generated directory or output cannot be determined.
pub fn resolve_options(args: &CliArgs) -> Result<GenerateOptions, String> {
    let preset = match args.app.as_deref() {
        Some(name) => Some(AppPreset::from_name(name).ok_or_else(|| {
            format!(
                "unknown app preset '{}' (expected one of: {})",
                name,
                AppPreset::names().join(", ")
            )
        })?),
        None => None,
    };
    let paths = preset.map(AppPreset::paths);

    let generated_dir = args
        .generated_dir
        .clone()
        .or_else(|| paths.map(|p| PathBuf::from(p.generated_dir)))
        .ok_or_else(|| "missing --generated-dir (or --app)".to_string())?;
    let output = args
        .output
        .clone()
        .or_else(|| paths.map(|p| PathBuf::from(p.output)))
        .ok_or_else(|| "missing --output (or --app)".to_string())?;
    let config = args
        .config
        .clone()
        .or_else(|| paths.map(|p| PathBuf::from(p.config)))
        .unwrap_or_else(|| default_config_path(&output));
    let schemas_dir = args
        .schemas
        .clone()
        .unwrap_or_else(|| generated_dir.join(DEFAULT_SCHEMAS_DIR_NAME));

    let uses_only_preset = preset.is_some()
        && args.generated_dir.is_none()
        && args.output.is_none()
        && args.config.is_none()
        && args.schemas.is_none();
    let regenerate_command = match preset {
        Some(preset) if uses_only_preset => preset_command(preset),
        _ => {
            let mut command = explicit_command(&generated_dir, &output, &config);
            if let Some(schemas) = &args.schemas {
                command.push_str(&format!(" --schemas={}", schemas.display()));
            }
            command
        }
    };

    Ok(GenerateOptions {
        generated_dir,
        output,
        config,
        schemas_dir,
        mode: if args.check {
            RunMode::Check
        } else {
            RunMode::Write
        },
        verbose: args.verbose,
        regenerate_command,
    })
}

/// Main entry point.
///
/// # Arguments
/// * `args` - Command line arguments, including the program name
/// * `console_out` - Receives diagnostics and help output
/// * `console_error` - Receives usage errors
///
/// # Returns
/// Exit code (0 for success, non-zero for failure)
pub fn main_fn<F, G>(args: &[String], console_out: F, console_error: G) -> i32
where
    F: Fn(&str),
    G: Fn(&str),
{
    let mut cmd = command();
    let matches = match cmd.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    console_out(&e.render().to_string());
                    0
                }
                _ => {
                    console_error(&e.render().to_string());
                    ErrorCode::Usage.exit_code()
                }
            };
        }
    };

    let options = match resolve_options(&CliArgs::from_matches(&matches)) {
        Ok(options) => options,
        Err(message) => {
            let error = cmd.error(ErrorKind::MissingRequiredArgument, message);
            console_error(&error.render().to_string());
            return ErrorCode::Usage.exit_code();
        }
    };

    let logger = ConsoleLogger::new(options.log_level(), &console_out, &console_error);
    match perform_generate(&options, &logger) {
        Ok(GenerateOutcome::Written { .. }) => 0,
        Ok(GenerateOutcome::UpToDate { .. }) => 0,
        Err(failure) => {
            console_out(&format_diagnostics(&failure.diagnostics));
            failure.exit_code()
        }
    }
}

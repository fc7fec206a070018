// Rust guideline compliant 2026-10-16

//! AFU-9 CLI Application
//!
//! Command-line interface for the AFU-9 issue lifecycle state machine.

use afu9_cli::terminal::print_error;
use afu9_cli::{commands, create_formatter, logging, should_use_color, OutputFormatter};
use afu9_core::{Config, LogLevel, OutputFormat};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "afu9",
    version,
    about = "AFU-9: deterministic issue lifecycle state machine",
    long_about = "Resolves the next workflow step of AFU-9 issues, checks status transitions against the lifecycle, and summarizes blockers across issue snapshots.",
    after_help = "Examples:\n  afu9 next-step --issue issue.json --draft draft.json\n  afu9 transition CREATED SPEC_READY\n  afu9 transitions SPEC_READY\n  afu9 path CREATED DONE\n  afu9 status --issues issues.jsonl --drafts drafts.jsonl\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, default_value = ".afu9")]
    config: PathBuf,

    /// Minimum log level
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve the next workflow step of one issue
    NextStep {
        /// Issue JSON file
        #[arg(long)]
        issue: PathBuf,

        /// Draft JSON file
        #[arg(long)]
        draft: Option<PathBuf>,
    },

    /// Check whether a status change is allowed
    Transition {
        /// Current status
        from: String,

        /// Requested status
        to: String,
    },

    /// List statuses reachable in one step
    Transitions {
        /// Current status
        status: String,
    },

    /// Show the shortest legal path between two statuses
    Path {
        /// Starting status
        from: String,

        /// Target status
        to: String,
    },

    /// List blocker codes and their descriptions
    Blockers,

    /// Summarize loop status over issue and draft snapshots
    Status {
        /// Issues JSONL snapshot
        #[arg(long)]
        issues: PathBuf,

        /// Drafts JSONL snapshot
        #[arg(long)]
        drafts: Option<PathBuf>,
    },
}

/// Exit code for a rejected transition.
const EXIT_REJECTED: u8 = 1;

/// Exit code for command failures.
const EXIT_FAILURE: u8 = 2;

fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    match cli.format {
        Some(format) => format.into(),
        None if cli.json => OutputFormat::Json,
        None => config.output_format,
    }
}

fn run(
    command: Commands,
    config: &Config,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::NextStep { issue, draft } => {
            commands::next_step::execute(&issue, draft.as_deref(), formatter)?;
        }
        Commands::Transition { from, to } => {
            if !commands::transition::execute(from, to, formatter)? {
                return Ok(ExitCode::from(EXIT_REJECTED));
            }
        }
        Commands::Transitions { status } => {
            commands::transition::list_targets(status, formatter)?;
        }
        Commands::Path { from, to } => {
            commands::path::execute(from, to, formatter)?;
        }
        Commands::Blockers => {
            commands::blockers::execute(formatter);
        }
        Commands::Status { issues, drafts } => {
            commands::status::execute(&issues, drafts.as_deref(), config, formatter, use_color)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(dir: &Path, log_level: Option<LogLevelArg>) -> anyhow::Result<Config> {
    let mut config = Config::load(dir)
        .with_context(|| format!("Failed to load configuration from {}", dir.display()))?;
    if let Some(level) = log_level {
        config.log_level = level.into();
    }
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let config = match load_config(&cli.config, cli.log_level) {
        Ok(config) => config,
        Err(err) => {
            print_error(&format!("{:#}", err), use_color);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let _guard = match logging::init_tracing(config.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            print_error(&format!("Failed to open log file: {}", err), use_color);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let format = output_format(&cli, &config);
    let formatter = create_formatter(format, use_color);
    tracing::debug!(?format, config = %cli.config.display(), "starting afu9");

    match run(cli.command, &config, formatter.as_ref(), use_color) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            if format == OutputFormat::Json {
                println!("{}", formatter.format_error(&format!("{:#}", err)));
            } else {
                print_error(&format!("{:#}", err), use_color);
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

//! CLI entry and dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use timestable_core::Coord;
use timestable_core::config;

use crate::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "timestable")]
#[command(version)]
#[command(about = "Interactive 12x12 multiplication table")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial selection as ROW,COLUMN (1-12 each)
    #[arg(long, value_name = "ROW,COLUMN")]
    select: Option<Coord>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write interactive-mode logs to PATH (default: $TIMESTABLE_HOME/timestable.log)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the table as plain text
    Snapshot {
        /// Selection as ROW,COLUMN (1-12 each)
        #[arg(long, value_name = "ROW,COLUMN", default_value = "1,1")]
        select: Coord,

        /// Trace the outline of the highlighted rectangle with | and -
        #[arg(long)]
        borders: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the default config template
    Generate,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Cli {
        command,
        select,
        verbose,
        log_file,
    } = cli;

    match command {
        // config commands must keep working when the file itself is broken
        Some(Commands::Config { command }) => {
            let _guard = logging::init(
                &LogTarget::Stderr,
                &config::LoggingConfig::default().level,
                verbose,
            )?;
            match command {
                ConfigCommands::Path => commands::config::path(),
                ConfigCommands::Init => commands::config::init()?,
                ConfigCommands::Generate => commands::config::generate()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Snapshot { select, borders }) => {
            let config = config::Config::load().context("load config")?;
            let _guard = logging::init(&LogTarget::Stderr, &config.logging.level, verbose)?;
            commands::snapshot::run(select, borders)?;
            Ok(ExitCode::SUCCESS)
        }
        // default to the interactive table
        None => {
            let config = config::Config::load().context("load config")?;
            let target = match log_file {
                Some(Some(path)) => LogTarget::File(path),
                Some(None) => LogTarget::File(config::paths::default_log_path()),
                None => config
                    .logging
                    .file
                    .clone()
                    .map_or(LogTarget::Disabled, LogTarget::File),
            };
            let _guard = logging::init(&target, &config.logging.level, verbose)?;
            commands::interactive::run(&config, select)
        }
    }
}

//! Command-line interface for practice-desk.
//!
//! This module handles CLI argument parsing and the subcommands that finish
//! without starting a session (`routes`, `init-config`).

use practice_desk_config::{Config, LogLevel};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// practice-desk - tabbed back-office workspace for a healthcare practice
#[derive(Parser)]
#[command(name = "practice-desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Maximum open tabs for this run (clamped to 5..=50)
    #[arg(long, value_name = "N", global = true)]
    pub max_tabs: Option<String>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a workspace session, reading commands from SCRIPT or stdin
    Run {
        /// Script file with one command per line
        script: Option<PathBuf>,
    },
    /// Print the navigation menu
    Routes,
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Runtime options passed from CLI to the session
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    /// Raw `--max-tabs` input, clamped when applied
    pub max_tabs: Option<String>,
    pub log_level: Option<LogLevel>,
    /// Session script; `None` reads stdin
    pub script: Option<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal session startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand was handled)
    Exit(i32),
}

impl RuntimeOptions {
    /// Load the config these options point at, creating it if missing
    pub fn load_config(&self) -> Result<Config, practice_desk_config::ConfigError> {
        match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Read the config these options point at without writing anything
    pub fn read_config(&self) -> Result<Config, practice_desk_config::ConfigError> {
        let path = self.config_path.clone().unwrap_or_else(Config::config_path);
        Config::read_from(&path)
    }
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    handle_cli(Cli::parse())
}

fn handle_cli(cli: Cli) -> CliResult {
    let options = RuntimeOptions {
        config_path: cli.config,
        max_tabs: cli.max_tabs,
        log_level: cli.log_level,
        script: None,
    };

    match cli.command {
        None => CliResult::Continue(options),
        Some(Commands::Run { script }) => CliResult::Continue(RuntimeOptions { script, ..options }),
        Some(Commands::Routes) => print_routes(&options),
        Some(Commands::InitConfig { force }) => init_config(&options, force),
    }
}

fn print_routes(options: &RuntimeOptions) -> CliResult {
    let config = match options.read_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return CliResult::Exit(1);
        }
    };
    for entry in &config.menu {
        let icon = entry
            .icon
            .as_ref()
            .map(|icon| icon.to_string())
            .unwrap_or_default();
        let pinned = if entry.closable { "" } else { " (pinned)" };
        println!("{:<20} {:<20} {}{}", entry.route(), entry.title, icon, pinned);
    }
    CliResult::Exit(0)
}

fn init_config(options: &RuntimeOptions, force: bool) -> CliResult {
    let path = options.config_path.clone().unwrap_or_else(Config::config_path);
    if path.exists() && !force {
        eprintln!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
        return CliResult::Exit(1);
    }
    match Config::default().save_to(&path) {
        Ok(()) => {
            println!("Wrote default config to {}", path.display());
            CliResult::Exit(0)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            CliResult::Exit(1)
        }
    }
}

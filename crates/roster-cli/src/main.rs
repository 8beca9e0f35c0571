//! Roster CLI
//!
//! Command-line interface for Roster - student records in a CSV file.
//! With no subcommand it runs the interactive numbered menu.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roster_core::{Config, Store, StudentUpdate};

mod commands;
mod logging;
mod menu;
mod output;
mod prompt;

use menu::Menu;
use output::{recovery_hint, Output, OutputFormat};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - student records in a CSV file")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config file (overrides ROSTER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Add a student
    #[command(alias = "create")]
    Add {
        /// Full name
        name: String,
        /// Roll number
        roll_number: String,
        /// Email address
        email: String,
        /// Grade
        grade: String,
    },
    /// List all students
    #[command(alias = "ls")]
    List,
    /// Show one student
    Show {
        /// Student ID
        id: u32,
    },
    /// Search by name, roll number or email
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Update fields of a student
    Update {
        /// Student ID
        id: u32,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New roll number
        #[arg(long = "roll")]
        roll_number: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New grade
        #[arg(long)]
        grade: Option<String>,
    },
    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Student ID
        id: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the plain-text report
    Report {
        /// Report file (defaults to the configured report_file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_file, report_file, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            if let Some(hint) = recovery_hint(&e) {
                eprintln!("\nHint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let mut config = Config::load_with_cli_override(cli.config.as_ref())?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    logging::init(&config);

    let mut store = Store::open_with_config(&config)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            Menu::new(io::stdin().lock(), io::stdout(), config.report_file.clone()).run(&mut store)
        }
        Commands::Add {
            name,
            roll_number,
            email,
            grade,
        } => commands::student::add(&mut store, name, roll_number, email, grade, &output),
        Commands::List => commands::student::list(&store, &output),
        Commands::Show { id } => commands::student::show(&store, id, &output),
        Commands::Search { query } => commands::student::search(&store, query, &output),
        Commands::Update {
            id,
            name,
            roll_number,
            email,
            grade,
        } => {
            let update = StudentUpdate {
                name,
                roll_number,
                email,
                grade,
            };
            commands::student::update(&mut store, id, update, &output)
        }
        Commands::Delete { id, yes } => commands::student::delete(&mut store, id, yes, &output),
        Commands::Report { output: path } => {
            commands::report::generate(&store, &config, path, &output)
        }
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

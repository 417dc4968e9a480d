//! PPIN CLI - Main entry point

use clap::Parser;
use colored::Colorize;
use ppin_cli::{Cli, Commands, Config, ConfigCommand};
use ppin_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env must be loaded before parsing so env-backed flags see it
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    // Verbose mode logs debug to the console; otherwise warnings only
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("ppin")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _guard = init_logging(&log_config).ok().flatten();

    // Execute command
    if let Err(e) = execute_command(&cli).await {
        if e.is_notice() {
            eprintln!("{} {}", "⚠".yellow(), e);
        } else {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> ppin_cli::Result<()> {
    // Command is guaranteed to exist at this point (checked in main)
    let Some(ref command) = cli.command else {
        unreachable!("Command should have been validated in main");
    };

    let config = Config::from_cli(cli)?;

    match command {
        Commands::Analyze(args) => ppin_cli::commands::analyze::run(&config, args).await,
        Commands::Interactive => ppin_cli::commands::interactive::run(&config).await,
        Commands::Config { command } => match command {
            ConfigCommand::Show => ppin_cli::commands::config::show(&config),
        },
    }
}

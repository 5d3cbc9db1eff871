//! Reviewer CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reviewer_cli::cli::{Cli, Commands};
use reviewer_cli::commands;
use reviewer_cli::tui;
use reviewer_models::Language;

fn main() {
    // Load .env.local if it exists (for REVIEWER_API_URL etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.client_config();

    // Handle command or open the review screen
    let result = match cli.command {
        Some(Commands::Tui { file, language }) => tui::run(config, file, language),
        Some(cmd) => commands::execute(cmd, config),
        None => {
            // No command = open the review screen with an empty buffer
            tui::run(config, None, Language::default())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use reviewer_client::ClientConfig;
use reviewer_models::Language;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-08-07)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Reviewer - terminal client for the AI code-review service
#[derive(Parser, Debug)]
#[command(name = "reviewer")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the analysis service
    #[arg(short, long, env = "REVIEWER_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source file (or stdin) and print the findings
    Analyze {
        /// Source file to analyze (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Declared language of the source
        #[arg(short, long, default_value = "python")]
        language: Language,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Check that the analysis service is reachable
    Health,

    /// Open the interactive review screen
    Tui {
        /// Source file to review (starts with an empty buffer if omitted)
        file: Option<PathBuf>,

        /// Declared language of the source
        #[arg(short, long, default_value = "python")]
        language: Language,
    },
}

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Client configuration from `--api-url` / the environment.
    pub fn client_config(&self) -> ClientConfig {
        match &self.api_url {
            Some(base_url) => ClientConfig::new(base_url.clone()),
            None => ClientConfig::from_env(),
        }
    }

    /// Returns the tracing level corresponding to the verbosity flags.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults_to_tui() {
        let cli = Cli::parse_from(["reviewer"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_log_level_mapping() {
        let cli = Cli::parse_from(["reviewer"]);
        assert_eq!(cli.log_level(), tracing::Level::WARN);

        let cli = Cli::parse_from(["reviewer", "-v"]);
        assert_eq!(cli.log_level(), tracing::Level::INFO);

        let cli = Cli::parse_from(["reviewer", "-vv"]);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let cli = Cli::parse_from(["reviewer", "-vvv"]);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_analyze_parses_language_and_format() {
        let cli = Cli::parse_from([
            "reviewer", "analyze", "main.go", "--language", "go", "--format", "json",
        ]);
        match cli.command {
            Some(Commands::Analyze {
                file,
                language,
                format,
            }) => {
                assert_eq!(file, Some(PathBuf::from("main.go")));
                assert_eq!(language, Language::Go);
                assert!(matches!(format, OutputFormat::Json));
            }
            other => panic!("expected analyze command, got {:?}", other),
        }
    }

    #[test]
    fn test_analyze_rejects_unknown_language() {
        let result = Cli::try_parse_from(["reviewer", "analyze", "--language", "cobol"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_url_flag_overrides_config() {
        let cli = Cli::parse_from(["reviewer", "--api-url", "http://reviews.internal:9000", "health"]);
        assert_eq!(
            cli.client_config().base_url,
            "http://reviews.internal:9000"
        );
    }

    #[test]
    fn test_cli_help() {
        // Verify help can be generated without panic
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

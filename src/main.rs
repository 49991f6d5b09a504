//! Prefix Matches - command-line entry point.
//!
//! Loads a word file into a dictionary and answers prefix queries against it.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use prefix_matches_lib::config::{self, ConfigLoader, LogConfig, PrefixMatchesConfig};
use prefix_matches_lib::data_structures::trie::RWayTrie;
use prefix_matches_lib::dictionary::PrefixMatches;
use prefix_matches_lib::error::{
    report_error, set_error_reporter, ErrorContext, PrefixMatchesError, PrefixMatchesResult,
    TracingErrorReporter,
};
use prefix_matches_lib::source::WordSource;

/// Command line arguments for Prefix Matches.
#[derive(Parser, Debug)]
#[clap(name = "prefix_matches", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the words of a file that start with a prefix
    Query {
        /// Word file to load
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Prefix to match (at least two characters)
        #[clap(short, long)]
        prefix: String,

        /// Extra characters allowed past the prefix
        #[clap(short = 'k', long)]
        max_extra: Option<usize>,

        /// Print the matches as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Print every word of a file in breadth-first order
    List {
        /// Word file to load
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> PrefixMatchesResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.map_err(|e| {
        PrefixMatchesError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Reads `path` into a fresh dictionary.
fn load_dictionary(
    path: &Path,
    config: &PrefixMatchesConfig,
) -> PrefixMatchesResult<PrefixMatches<RWayTrie>> {
    let source = WordSource::with_config(path, &config.source);
    PrefixMatches::from_source(&source, config.dictionary.clone())
}

fn run(command: Command, config: PrefixMatchesConfig) -> PrefixMatchesResult<()> {
    match command {
        Command::Query {
            words,
            prefix,
            max_extra,
            json,
        } => {
            let dictionary = load_dictionary(&words, &config)?;
            let max_extra = max_extra.unwrap_or(dictionary.config().default_max_extra);
            let matches: Vec<String> = dictionary
                .words_with_prefix_limited(&prefix, max_extra)?
                .collect();

            info!(prefix = %prefix, max_extra, matches = matches.len(), "query finished");
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for word in matches {
                    println!("{word}");
                }
            }
            Ok(())
        }
        Command::List { words } => {
            let dictionary = load_dictionary(&words, &config)?;
            for word in dictionary.words() {
                println!("{word}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = PrefixMatchesConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| PrefixMatchesError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e, "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        report_error(ErrorContext::new(e, "logging"));
        process::exit(1);
    }
    if !set_error_reporter(Arc::new(TracingErrorReporter)) {
        warn!("Error reporter already installed, keeping the existing one");
    }

    if let Err(e) = run(args.command, config) {
        report_error(ErrorContext::new(e, "prefix_matches"));
        process::exit(1);
    }
}

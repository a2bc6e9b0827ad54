//! Wehewehe - Main entrypoint.
//!
//! This is the main entry point for the Wehewehe dictionary. It initializes
//! the logging system, loads configuration and the dictionary, then answers
//! queries.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;

use wehewehe_lib::config::{self, ConfigLoader, LogConfig, WeheweheConfig};
use wehewehe_lib::dictionary::{describe, DictionaryLoader, LoadedDictionary, QueryLoop};
use wehewehe_lib::error::{WeheweheError, WeheweheResult};

/// Command line arguments for Wehewehe.
#[derive(Parser, Debug)]
#[clap(name = "wehewehe", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding `dictionary.path`
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Answer lookups interactively until `#` is entered
    Repl,

    /// Look up a single word and exit
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Print bucket distribution statistics for the loaded dictionary
    Stats,

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
fn init_logging(log: &LogConfig) -> WeheweheResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        WeheweheError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Loads the configured dictionary.
fn load_dictionary(config: &WeheweheConfig) -> WeheweheResult<LoadedDictionary> {
    DictionaryLoader::from_config(&config.dictionary, &config.table)
        .load_file(&config.dictionary.path)
}

/// Main entry point for the application.
fn main() -> WeheweheResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let mut config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    if let Some(path) = args.dictionary {
        config.dictionary.path = path;
    }

    init_logging(&config.log)?;
    wehewehe_lib::init();

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let loaded = load_dictionary(&config)?;
            if let Some(error) = &loaded.report.source_error {
                println!("Error: {error}");
            }

            let stdin = io::stdin();
            let mut query_loop = QueryLoop::new(stdin.lock(), io::stdout(), config.repl.clone());
            let stats = query_loop.run(&loaded.table)?;
            info!(queries = stats.queries, hits = stats.hits, "Session finished");
            Ok(())
        }
        Command::Lookup { word } => {
            let loaded = load_dictionary(&config)?;
            println!(
                "{}",
                describe(&loaded.table, word.trim(), &config.repl.not_found_message)
            );
            Ok(())
        }
        Command::Stats => {
            let loaded = load_dictionary(&config)?;
            let stats = loaded.table.stats();
            println!("source:           {}", config.dictionary.path.display());
            println!("entries loaded:   {}", loaded.report.loaded);
            println!("lines skipped:    {}", loaded.report.skipped);
            println!("capacity:         {}", loaded.table.capacity());
            println!("occupied buckets: {}", stats.occupied_buckets);
            println!("empty buckets:    {}", stats.empty_buckets);
            println!("longest chain:    {}", stats.longest_chain);
            println!("load factor:      {:.3}", stats.load_factor);
            if let Some(error) = loaded.report.source_error {
                println!("source error:     {error}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = WeheweheConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| WeheweheError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

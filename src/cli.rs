//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use nonsense::config::Config;
use nonsense::output::OutputMode;

/// nonsense - Flag nonsense text with statistical heuristics
#[derive(Parser, Debug)]
#[command(
    name = "nonsense",
    version,
    about = "Flag nonsense text with statistical heuristics",
    long_about = "Classify text as nonsense or acceptable.\n\n\
                  Seven independent heuristics (trigram diversity, dominant characters and words,\n\
                  repetition runs, word length, pure punctuation) run over each text;\n\
                  any heuristic that fires explains why."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./nonsense.toml, then the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a single text
    Check {
        /// Text to classify (reads stdin when omitted)
        text: Option<String>,

        /// Show every filter's verdict, not only the ones that fired
        #[arg(short, long)]
        explain: bool,

        /// Exit with status 1 when the text is nonsense
        #[arg(long)]
        strict: bool,
    },

    /// Classify a batch of texts
    Bulk {
        /// JSON file ({"texts":[{"text":..,"rowNumber":..}]} or an array), or - for stdin
        file: PathBuf,

        /// Treat the input as plain text, one item per line
        #[arg(long)]
        lines: bool,
    },

    /// List the filter battery and its thresholds
    Filters,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Serve the classifier over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective config as TOML
    Show,

    /// Print the global config path
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let explicit_config = cli.config.as_deref();

    match cli.command {
        Some(Command::Check {
            text,
            explain,
            strict,
        }) => {
            let config = Config::load(explicit_config)?;
            commands::check(&config, text, explain, strict, output_mode)
        },
        Some(Command::Bulk { file, lines }) => {
            let config = Config::load(explicit_config)?;
            commands::bulk(&config, &file, lines, output_mode)
        },
        Some(Command::Filters) => {
            let config = Config::load(explicit_config)?;
            commands::filters(&config, output_mode);
            Ok(())
        },
        Some(Command::Config { action }) => commands::config_cmd(action, explicit_config, output_mode),
        #[cfg(feature = "server")]
        Some(Command::Serve { host, port }) => {
            let config = Config::load(explicit_config)?;
            commands::serve(config, host, port)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("nonsense v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("nonsense v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'nonsense --help' for usage");
                println!("Run 'nonsense check \"some text\"' to get started");
            }
            Ok(())
        },
    }
}

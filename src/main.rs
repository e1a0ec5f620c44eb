//! 命令行入口

use std::time::Duration;

use clap::{Parser, Subcommand};

use lectura::config::load_reading_config;
use lectura::env::{self, EnvVar};
use lectura::level::profiles;
use lectura::{detect_language, ConfigManager, ReadingPipeline, ReadingRequest};

#[derive(Parser, Debug)]
#[command(name = "lectura", version, about = "Leveled reading practice with vocabulary glosses")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Builds a reading passage and prints it as JSON.
    Read {
        /// Proficiency level (a1..c2), unknown codes fall back to b1
        #[arg(short, long, default_value = "b1")]
        level: String,
        #[arg(short, long)]
        topic: Option<String>,
        #[arg(short, long)]
        user: Option<String>,
        /// Overall timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Configuration file (otherwise the default search paths are used)
        #[arg(short, long)]
        config: Option<String>,
        #[arg(long)]
        pretty: bool,
    },
    /// Prints the per-level budgets.
    Levels,
    /// Detects the language of a text.
    Detect { text: String },
    /// Writes an example configuration file.
    Config {
        #[arg(short, long, default_value = "lectura.toml")]
        output: String,
    },
    /// Prints the environment variable documentation.
    EnvDocs,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        env::core::LogLevel::get_or_default("info".to_string())
    };
    let max_level = level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(!env::core::NoColor::get_or_default(false))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Read {
            level,
            topic,
            user,
            timeout,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => ConfigManager::from_file(&path)?.into_config(),
                None => load_reading_config(),
            };
            let pipeline = ReadingPipeline::from_config(&config)?;

            let mut request = ReadingRequest::new(level);
            request.topic = topic;
            request.user = user;

            let response = match timeout {
                Some(secs) => {
                    pipeline
                        .run_with_timeout(&request, Duration::from_secs(secs))
                        .await?
                }
                None => pipeline.run(&request).await?,
            };

            let output = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", output);
        }
        Commands::Levels => {
            println!("{:<6}{:>10}{:>10}{:>10}", "level", "chars", "summary", "words");
            for profile in profiles() {
                println!(
                    "{:<6}{:>10}{:>10}{:>10}",
                    profile.level.code(),
                    profile.max_body_length,
                    profile.summary_sentence_count,
                    profile.max_unknown_word_count
                );
            }
        }
        Commands::Detect { text } => {
            println!("{}", detect_language(&text));
        }
        Commands::Config { output } => {
            ConfigManager::generate_example_config(&output)?;
            println!("Example configuration written to {}", output);
        }
        Commands::EnvDocs => {
            print!("{}", env::generate_env_docs());
        }
    }

    Ok(())
}

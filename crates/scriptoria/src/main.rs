//! Scriptoria CLI binary.
//!
//! This binary provides command-line access to the screenplay pipeline:
//! - Generate a production package from a premise
//! - Analyze an existing script into a production package
//! - Inspect the resolved configuration

use clap::Parser;
use scriptoria::ScriptoriaConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_analyze, run_generate, show_config};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_filter = if cli.verbose {
        "info,scriptoria=debug"
    } else {
        "warn,scriptoria=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    let config = match &cli.config {
        Some(path) => ScriptoriaConfig::from_file(path)?,
        None => ScriptoriaConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            premise,
            genre,
            output,
        } => {
            run_generate(&config, &premise, genre, &output).await?;
        }

        Commands::Analyze {
            script,
            genre,
            output,
        } => {
            run_analyze(&config, &script, genre, &output).await?;
        }

        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}

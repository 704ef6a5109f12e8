//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scriptoria - screenplay production packages from a premise or a script
#[derive(Parser, Debug)]
#[command(name = "scriptoria")]
#[command(about = "Generate screenplay production packages with model fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a production package from a story premise
    Generate {
        /// Story premise (20 to 500 characters)
        #[arg(long)]
        premise: String,

        /// Genre label
        #[arg(long)]
        genre: Option<String>,

        /// Output options
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Reverse-engineer a production package from a script file
    Analyze {
        /// Path to the script text
        #[arg(long)]
        script: PathBuf,

        /// Genre label
        #[arg(long)]
        genre: Option<String>,

        /// Output options
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the resolved configuration
    Config,
}

/// Options shared by the pipeline commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the package to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abort the run after this many seconds
    #[arg(long)]
    pub deadline_secs: Option<u64>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text production document
    Text,
    /// The package as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_parses_with_defaults() {
        let cli = Cli::try_parse_from([
            "scriptoria",
            "generate",
            "--premise",
            "A lighthouse keeper finds a map",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                premise,
                genre,
                output,
            } => {
                assert_eq!(premise, "A lighthouse keeper finds a map");
                assert!(genre.is_none());
                assert_eq!(output.format, OutputFormat::Text);
                assert!(output.output.is_none());
                assert!(output.deadline_secs.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn analyze_accepts_output_options_and_global_flags() {
        let cli = Cli::try_parse_from([
            "scriptoria",
            "analyze",
            "--script",
            "draft.txt",
            "--genre",
            "Noir",
            "--format",
            "json",
            "-o",
            "package.json",
            "--deadline-secs",
            "300",
            "--verbose",
            "--json-logs",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.json_logs);
        match cli.command {
            Commands::Analyze {
                script,
                genre,
                output,
            } => {
                assert_eq!(script, PathBuf::from("draft.txt"));
                assert_eq!(genre.as_deref(), Some("Noir"));
                assert_eq!(output.format, OutputFormat::Json);
                assert_eq!(output.output, Some(PathBuf::from("package.json")));
                assert_eq!(output.deadline_secs, Some(300));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_requires_premise() {
        assert!(Cli::try_parse_from(["scriptoria", "generate"]).is_err());
    }
}

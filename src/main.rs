//! Corti CLI: replay recognizer sessions and print the events they emit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use corti_rs::{Config, OutputFormat, OutputWriter, Scenario, SpeechRecognition, Step};
use corti_rs::scenario::Utterance;

/// Mock SpeechRecognition session runner
#[derive(Parser)]
#[command(name = "corti")]
#[command(about = "Replay mock speech recognition sessions and print their events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Also append events to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Disable console output
    #[arg(long, global = true)]
    no_console: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file
    Run {
        /// Scenario TOML file
        scenario: PathBuf,
    },

    /// Start a session, say one utterance and report the events
    Say {
        /// Ranked transcripts for the utterance
        #[arg(required = true)]
        transcripts: Vec<String>,

        /// Number of alternatives per result
        #[arg(short, long)]
        max_alternatives: Option<usize>,

        /// Recognition language tag
        #[arg(short, long)]
        lang: Option<String>,

        /// Stay in the listening state after the utterance
        #[arg(long)]
        continuous: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - quiet by default, use -v for more
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    // Load configuration
    let mut config = if let Some(ref config_path) = cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.output.format = format
            .parse::<OutputFormat>()
            .context("Unsupported output format")?;
    }
    if let Some(output) = cli.output {
        config.output.output_path = Some(output);
    }
    if cli.no_console {
        config.output.enable_console = false;
    }

    let scenario = match cli.command {
        Commands::Run { scenario } => Scenario::from_file(&scenario)
            .with_context(|| format!("Failed to load scenario from {}", scenario.display()))?,
        Commands::Say {
            transcripts,
            max_alternatives,
            lang,
            continuous,
        } => {
            if let Some(max_alternatives) = max_alternatives {
                config.recognizer.max_alternatives = max_alternatives;
            }
            if let Some(lang) = lang {
                config.recognizer.lang = lang;
            }
            config.recognizer.continuous |= continuous;

            Scenario {
                steps: vec![
                    Step::Start,
                    Step::Say {
                        alternatives: Utterance::Many(transcripts),
                    },
                ],
            }
        }
    };

    run_scenario(config, &scenario)
}

/// Replay the scenario on a fresh recognizer and write the event log
fn run_scenario(config: Config, scenario: &Scenario) -> Result<()> {
    info!("Replaying {} steps", scenario.steps.len());

    let recognition = SpeechRecognition::with_config(config.recognizer);
    let report = scenario.run(&recognition);

    let mut output = OutputWriter::new(config.output).context("Failed to open output")?;
    output.write_all(&report.events)?;

    for error in &report.errors {
        eprintln!("step {}: {}", error.step, error.message);
    }

    info!(
        "Emitted {} events, {} step errors, recognizer {}",
        report.events.len(),
        report.errors.len(),
        if recognition.is_started() { "still listening" } else { "idle" }
    );

    Ok(())
}

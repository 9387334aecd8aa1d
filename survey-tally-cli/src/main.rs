use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use survey_tally::{Response, SurveyDefinition, aggregate, json};

#[derive(Parser)]
#[command(name = "survey-tally")]
#[command(about = "Tally anonymous survey responses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-question breakdown of a survey's responses as JSON
    Analyze {
        /// Survey definition (JSON document)
        #[arg(short, long)]
        survey: PathBuf,

        /// Responses (JSON array of response documents); none if omitted
        #[arg(short, long)]
        responses: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Check that a survey definition is well formed
    Validate {
        /// Survey definition (JSON document)
        #[arg(short, long)]
        survey: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_survey(path: &Path) -> anyhow::Result<SurveyDefinition> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read survey file {}", path.display()))?;
    json::decode_survey(&raw).with_context(|| format!("Invalid survey in {}", path.display()))
}

fn read_responses(path: &Path) -> anyhow::Result<Vec<Response>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses file {}", path.display()))?;
    json::decode_responses(&raw)
        .with_context(|| format!("Invalid responses in {}", path.display()))
}

fn run(command: &Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            survey,
            responses,
            pretty,
        } => {
            let survey = read_survey(survey)?;
            let responses = match responses {
                Some(path) => read_responses(path)?,
                None => Vec::new(),
            };
            tracing::info!(
                "Tallying {} responses over {} questions",
                responses.len(),
                survey.len()
            );

            let survey_id = survey.id.as_deref();
            let breakdown = aggregate(
                &survey,
                responses
                    .iter()
                    .filter(|r| survey_id.is_none_or(|id| r.belongs_to(id))),
            );

            if *pretty {
                serde_json::to_writer_pretty(&mut *out, &breakdown)?;
            } else {
                serde_json::to_writer(&mut *out, &breakdown)?;
            }
            writeln!(out)?;
        }
        Command::Validate { survey } => {
            let survey = read_survey(survey)?;
            survey
                .validate()
                .with_context(|| format!("Survey '{}' is not valid", survey.title))?;

            let choice = survey
                .questions()
                .iter()
                .filter(|q| q.kind().is_choice())
                .count();
            writeln!(
                out,
                "{}: {} questions ({} choice, {} free text), {}",
                if survey.title.is_empty() {
                    "<untitled>"
                } else {
                    survey.title.as_str()
                },
                survey.len(),
                choice,
                survey.len() - choice,
                if survey.accepts_responses() {
                    "published"
                } else {
                    "not published"
                }
            )?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let stdout = io::stdout();
    run(&cli.command, &mut stdout.lock())
}

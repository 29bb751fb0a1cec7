//! CodeSmith — a CLI wrapper around a single-agent coding crew.
//!
//! Configures one coding agent and one coding task, kicks off the crew
//! engine, validates the JSON result, renders it to the terminal, and saves
//! the generated code and execution output as timestamped files.

mod persist;
mod prompt;
mod render;

use clap::{Parser, Subcommand};
use codesmith_core::CrewInputs;
use codesmith_crew::{Crew, ModelConfig};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "codesmith", about = "CodeSmith — AI coding crew in your terminal")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "codesmith.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one coding assignment
    Run {
        /// Target language (prompted for when omitted)
        #[arg(long)]
        language: Option<String>,
        /// The coding assignment (prompted for when omitted)
        #[arg(long)]
        question: Option<String>,
    },
    /// Run the crew repeatedly and record each result
    Train {
        /// Number of iterations
        iterations: u32,
        /// Training records file to append to (JSON lines)
        #[arg(long, default_value = "training.jsonl")]
        filename: PathBuf,
        /// Target language (prompted for when omitted)
        #[arg(long)]
        language: Option<String>,
        /// The coding assignment (prompted for when omitted)
        #[arg(long)]
        question: Option<String>,
    },
    /// Re-run a recorded task from a training file
    Replay {
        /// Task id from the training file
        task_id: Uuid,
        /// Training file to look the task up in
        #[arg(long, default_value = "training.jsonl")]
        filename: PathBuf,
    },
    /// Run the crew repeatedly and report pass/fail counts
    Test {
        /// Number of iterations
        iterations: u32,
        /// Model id to evaluate with, overriding the configured one
        #[arg(long)]
        eval_model: Option<String>,
        /// Target language (prompted for when omitted)
        #[arg(long)]
        language: Option<String>,
        /// The coding assignment (prompted for when omitted)
        #[arg(long)]
        question: Option<String>,
    },
}

#[derive(Deserialize)]
struct CodesmithConfig {
    model: ModelConfig,
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
    #[serde(default)]
    verbose: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

/// Builds the request inputs, prompting on stdin for whatever the flags
/// left out.
fn resolve_inputs(
    language: Option<String>,
    question: Option<String>,
) -> anyhow::Result<CrewInputs> {
    let language = match language {
        Some(l) => l,
        None => prompt::read_line("Enter programming language: ")?,
    };
    let question = match question {
        Some(q) => q,
        None => prompt::read_line("Enter your coding assignment/question: ")?,
    };
    Ok(CrewInputs::new(language, question)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered panels.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config
    let config_str = tokio::fs::read_to_string(&cli.config).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to read config file '{}': {}",
            cli.config.display(),
            e
        )
    })?;
    let mut config: CodesmithConfig = toml::from_str(&config_str)?;

    if config.model.api_key.is_empty() {
        if let Ok(key) = std::env::var("CODESMITH_API_KEY") {
            config.model.api_key = key;
        }
    }

    match cli.command {
        Commands::Run { language, question } => {
            let inputs = resolve_inputs(language, question)?;
            persist::init_output_dir(&config.output_dir)?;

            let crew = Crew::coding(config.model).verbose(config.verbose);
            let output = crew.kickoff(&inputs).await?;

            render::print_result(&output.result);
            let artifacts = persist::save_artifacts(&config.output_dir, &output.result)?;
            render::print_saved(&artifacts);
        }

        Commands::Train {
            iterations,
            filename,
            language,
            question,
        } => {
            let inputs = resolve_inputs(language, question)?;
            let crew = Crew::coding(config.model).verbose(config.verbose);

            let records = crew.train(iterations, &filename, &inputs).await?;
            println!(
                "Recorded {} training run(s) to {}",
                records.len(),
                filename.display()
            );
            for record in &records {
                println!("  iteration {} -> task {}", record.iteration, record.task_id);
            }
        }

        Commands::Replay { task_id, filename } => {
            persist::init_output_dir(&config.output_dir)?;
            let crew = Crew::coding(config.model).verbose(config.verbose);

            let output = crew.replay(task_id, &filename).await?;
            render::print_result(&output.result);
            let artifacts = persist::save_artifacts(&config.output_dir, &output.result)?;
            render::print_saved(&artifacts);
        }

        Commands::Test {
            iterations,
            eval_model,
            language,
            question,
        } => {
            let inputs = resolve_inputs(language, question)?;

            let mut model = config.model;
            if let Some(eval_model) = eval_model {
                info!(model = %eval_model, "Evaluating with overridden model");
                model.model_id = eval_model;
            }
            let crew = Crew::coding(model).verbose(config.verbose);

            let report = crew.test(iterations, &inputs).await;
            render::print_test_report(&report);
            if !report.all_passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

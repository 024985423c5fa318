//! Developer harness for mission objective validators.
//!
//! Exercises the objectives shipped in this crate without the game engine:
//! scaffold and lint descriptors, and run submissions against registered
//! validators to see the verdict a player would get.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use missions::{cli, exit_codes};

#[derive(Parser)]
#[command(
    name = "missions",
    version,
    about = "Harness for mission objective validators"
)]
struct Cli {
    /// Directory holding `<id>/objective.toml` descriptors.
    #[arg(long, default_value = "objectives")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scaffold `<dir>/<id>/objective.toml` for a new objective.
    Init {
        id: String,
        /// Overwrite an existing descriptor.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the id of every discovered objective.
    List,
    /// Check descriptors and registry coverage.
    Validate,
    /// Print the rendered summary of an objective.
    Describe { id: String },
    /// Evaluate a submission against an objective's validator.
    Check {
        id: String,
        /// Submission document (`{"fields": {...}}`).
        #[arg(long, conflicts_with = "field")]
        submission: Option<PathBuf>,
        /// Inline field value as `name=value`; repeatable.
        #[arg(long = "field", value_parser = parse_field)]
        field: Vec<(String, String)>,
        /// Emit the verdict as JSON instead of the message alone.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    objective::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { id, force } => {
            cli::init_objective(&cli.dir, &id, force)?;
            Ok(exit_codes::OK)
        }
        Command::List => {
            cli::list_objectives(&cli.dir)?;
            Ok(exit_codes::OK)
        }
        Command::Validate => {
            cli::validate_objectives(&cli.dir)?;
            Ok(exit_codes::OK)
        }
        Command::Describe { id } => {
            cli::describe_objective(&cli.dir, &id)?;
            Ok(exit_codes::OK)
        }
        Command::Check {
            id,
            submission,
            field,
            json,
        } => cli::check_submission(&cli.dir, &id, submission.as_deref(), &field, json),
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

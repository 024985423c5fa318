//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use objective::core::context::ValidationFields;
use objective::core::evaluate::evaluate;
use objective::io::descriptor::{
    DESCRIPTOR_FILE_NAME, ObjectiveFile, default_objective, discover_objectives, write_objective,
};
use objective::io::submission::Submission;
use objective::messages::render_objective_summary;
use tracing::{debug, warn};

use crate::{exit_codes, registered_ids, validator_for};

/// Scaffold a descriptor for a new objective.
pub fn init_objective(dir: &Path, id: &str, force: bool) -> Result<()> {
    let path = descriptor_path(dir, id);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_objective(&path, &default_objective(id))?;
    println!("{}", path.display());
    Ok(())
}

/// List all discovered objectives.
pub fn list_objectives(dir: &Path) -> Result<()> {
    for objective in discover_objectives(dir)? {
        println!("{}", objective.objective.id);
    }
    Ok(())
}

/// Validate every descriptor and check registry coverage both ways.
pub fn validate_objectives(dir: &Path) -> Result<()> {
    let objectives = discover_objectives(dir)?;
    let mut violations = Vec::new();
    for objective in &objectives {
        let id = &objective.objective.id;
        if validator_for(id).is_none() {
            violations.push(format!("objective '{}' has no registered validator", id));
        }
    }
    for id in registered_ids() {
        if !objectives.iter().any(|o| o.objective.id == id) {
            violations.push(format!(
                "validator '{}' has no descriptor under {}",
                id,
                dir.display()
            ));
        }
    }
    if !violations.is_empty() {
        bail!("validation failed:\n- {}", violations.join("\n- "));
    }
    println!("ok: {} objectives", objectives.len());
    Ok(())
}

/// Print the rendered summary of one objective.
pub fn describe_objective(dir: &Path, id: &str) -> Result<()> {
    let objective = load_descriptor(dir, id)?;
    println!("{}", render_objective_summary(&objective)?);
    Ok(())
}

/// Evaluate a submission against an objective's registered validator.
///
/// Returns the exit code for the verdict; descriptor or submission problems
/// surface as errors instead.
pub fn check_submission(
    dir: &Path,
    id: &str,
    submission: Option<&Path>,
    inline: &[(String, String)],
    json: bool,
) -> Result<i32> {
    let descriptor = load_descriptor(dir, id)?;
    let validator = validator_for(id)
        .ok_or_else(|| anyhow!("no validator registered for objective '{}'", id))?;
    let fields = submitted_fields(submission, inline)?;

    for name in fields.names() {
        if !descriptor.fields.iter().any(|field| field.name == name) {
            warn!(field = name, objective = id, "submitted field not declared by descriptor");
        }
    }

    debug!(objective = id, fields = fields.len(), "evaluating submission");
    let verdict = evaluate(&validator, &fields);
    if json {
        println!("{}", serde_json::to_string(&verdict).context("serialize verdict")?);
    } else {
        println!("{}", verdict.message());
    }
    Ok(if verdict.is_success() {
        exit_codes::OK
    } else {
        exit_codes::INCOMPLETE
    })
}

fn submitted_fields(
    submission: Option<&Path>,
    inline: &[(String, String)],
) -> Result<ValidationFields> {
    match submission {
        Some(path) => Ok(Submission::load(path)?.into_fields()),
        None if inline.is_empty() => bail!("provide --submission <file> or --field name=value"),
        None => Ok(inline.iter().cloned().collect()),
    }
}

fn load_descriptor(dir: &Path, id: &str) -> Result<ObjectiveFile> {
    let path = descriptor_path(dir, id);
    if !path.exists() {
        bail!("objective '{}' not found at {}", id, path.display());
    }
    ObjectiveFile::load(&path)
}

fn descriptor_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(id).join(DESCRIPTOR_FILE_NAME)
}

//! Objective descriptor files (`objectives/<id>/objective.toml`).
//!
//! A descriptor carries the authoring metadata for one objective: the answer
//! fields shown in the hack interface and optional message templates. The
//! evaluation logic itself lives in validator code registered separately;
//! descriptors are data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of a descriptor inside its objective directory.
pub const DESCRIPTOR_FILE_NAME: &str = "objective.toml";

/// A parsed descriptor: metadata, fields, and messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectiveFile {
    pub objective: ObjectiveMeta,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub messages: Messages,
}

/// Objective metadata: identifier and player-facing copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectiveMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// Title shown in the mission log.
    pub title: String,
    /// Challenge description shown above the answer fields.
    pub description: String,
}

/// One answer field in the hack interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used by the host when submitting the player's input.
    pub name: String,
    /// Question shown next to the input field.
    pub label: String,
    /// Ghost text shown in the empty input field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Optional message templates for the objective.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Messages {
    /// Completion message shown when the validator reports success.
    /// Validator code may override this at runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl ObjectiveFile {
    /// Load and validate a descriptor from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read descriptor {}", path.display()))?;
        let objective: ObjectiveFile = toml::from_str(&contents)
            .with_context(|| format!("parse descriptor {}", path.display()))?;
        objective
            .validate()
            .with_context(|| format!("validate descriptor {}", path.display()))?;
        debug!(id = %objective.objective.id, "descriptor loaded");
        Ok(objective)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let objective: ObjectiveFile = toml::from_str(contents).context("parse descriptor")?;
        objective.validate()?;
        Ok(objective)
    }

    fn validate(&self) -> Result<()> {
        validate_objective_id(&self.objective.id)?;
        if self.objective.title.trim().is_empty() {
            bail!("objective.title must be non-empty");
        }
        if self.objective.description.trim().is_empty() {
            bail!("objective.description must be non-empty");
        }
        if self.fields.is_empty() {
            bail!("fields must be a non-empty array");
        }
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            field
                .validate()
                .with_context(|| format!("fields[{}] invalid", index))?;
            if !seen.insert(field.name.clone()) {
                bail!("duplicate field name '{}'", field.name);
            }
        }
        if let Some(success) = &self.messages.success
            && success.trim().is_empty()
        {
            bail!("messages.success must be non-empty when set");
        }
        Ok(())
    }
}

impl FieldSpec {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("field name must be non-empty");
        }
        if self.name.chars().any(char::is_whitespace) {
            bail!("field name '{}' must not contain whitespace", self.name);
        }
        if self.label.trim().is_empty() {
            bail!("field '{}' label must be non-empty", self.name);
        }
        Ok(())
    }
}

/// Discover and load all descriptors under `dir` (one objective per
/// subdirectory, each holding an `objective.toml`).
///
/// Returns descriptors sorted by id. Errors if duplicate ids are found.
/// Subdirectories without a descriptor are skipped; objectives may keep
/// other assets next to it.
pub fn discover_objectives(dir: &Path) -> Result<Vec<ObjectiveFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut objectives = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("read objectives dir {}", dir.display()))?
    {
        let entry = entry.context("read objectives entry")?;
        if !entry.path().is_dir() {
            continue;
        }
        let descriptor_path = entry.path().join(DESCRIPTOR_FILE_NAME);
        if !descriptor_path.exists() {
            continue;
        }
        objectives.push(ObjectiveFile::load(&descriptor_path)?);
    }
    objectives.sort_by(|left, right| left.objective.id.cmp(&right.objective.id));
    for pair in objectives.windows(2) {
        if pair[0].objective.id == pair[1].objective.id {
            return Err(anyhow!("duplicate objective id {}", pair[0].objective.id));
        }
    }
    Ok(objectives)
}

/// Atomically write a descriptor to disk (temp file + rename).
pub fn write_objective(path: &Path, objective: &ObjectiveFile) -> Result<()> {
    objective.validate()?;
    let mut buf = toml::to_string_pretty(objective).context("serialize descriptor toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Scaffold descriptor used by `init` for a new objective.
pub fn default_objective(id: &str) -> ObjectiveFile {
    ObjectiveFile {
        objective: ObjectiveMeta {
            id: id.to_string(),
            title: "New objective".to_string(),
            description: "Describe the challenge the player must complete.".to_string(),
        },
        fields: vec![FieldSpec {
            name: "answer1".to_string(),
            label: "First question".to_string(),
            placeholder: None,
        }],
        messages: Messages {
            success: Some("You have successfully completed the challenge!".to_string()),
        },
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("descriptor path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp descriptor {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace descriptor {}", path.display()))?;
    Ok(())
}

fn validate_objective_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("objective.id must be non-empty");
    }
    if id.contains('/') || id.contains('\\') {
        bail!("objective.id must not contain path separators");
    }
    if id.contains("..") {
        bail!("objective.id must not contain '..'");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("objective.id must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[objective]
id = "example_objective"
title = "Answer the survey"
description = "Answer four questions."

[[fields]]
name = "answer1"
label = "What company makes this game?"
placeholder = "Company name"

[[fields]]
name = "answer2"
label = "What is 2 + 2?"

[messages]
success = "You have successfully completed the challenge!"
"#;

    #[test]
    fn parses_valid_descriptor() {
        let objective = ObjectiveFile::parse_str(VALID).expect("descriptor parses");
        assert_eq!(objective.objective.id, "example_objective");
        assert_eq!(objective.fields.len(), 2);
        assert_eq!(objective.fields[0].placeholder.as_deref(), Some("Company name"));
        assert_eq!(objective.fields[1].placeholder, None);
    }

    #[test]
    fn rejects_invalid_id() {
        let input = VALID.replace("example_objective", "bad/id");
        let err = ObjectiveFile::parse_str(&input).expect_err("invalid id");
        assert!(err.to_string().contains("objective.id"));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let input = VALID.replace("answer2", "answer1");
        let err = ObjectiveFile::parse_str(&input).expect_err("duplicate field");
        assert!(err.to_string().contains("duplicate field name"));
    }

    #[test]
    fn rejects_missing_fields() {
        let input = r#"
[objective]
id = "empty"
title = "Empty"
description = "No fields."
"#;
        let err = ObjectiveFile::parse_str(input).expect_err("no fields");
        assert!(err.to_string().contains("fields"));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("example").join(DESCRIPTOR_FILE_NAME);
        let objective = default_objective("example");

        write_objective(&path, &objective).expect("write");
        let loaded = ObjectiveFile::load(&path).expect("load");
        assert_eq!(loaded, objective);
    }

    #[test]
    fn discover_returns_sorted_and_skips_bare_dirs() {
        let temp = tempfile::tempdir().expect("tempdir");
        for id in ["beta", "alpha"] {
            let path = temp.path().join(id).join(DESCRIPTOR_FILE_NAME);
            write_objective(&path, &default_objective(id)).expect("write");
        }
        fs::create_dir(temp.path().join("assets")).expect("bare dir");

        let objectives = discover_objectives(temp.path()).expect("discover");
        let ids: Vec<&str> = objectives
            .iter()
            .map(|o| o.objective.id.as_str())
            .collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    fn discover_missing_dir_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let objectives = discover_objectives(&temp.path().join("missing")).expect("discover");
        assert!(objectives.is_empty());
    }

    #[test]
    fn scaffold_descriptor_is_valid() {
        default_objective("new_objective").validate().expect("valid");
    }
}

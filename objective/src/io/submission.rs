//! Submission documents produced by the host UI.
//!
//! A submission is a JSON object holding the player's answers:
//! `{ "fields": { "answer1": "Twilio", ... } }`. Documents are checked
//! against the embedded schema before parsing so malformed host input is
//! reported with every violation at once.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde::Deserialize;
use serde_json::Value;

use crate::core::context::ValidationFields;

const SUBMISSION_SCHEMA: &str = include_str!("../../schemas/submission/v1.schema.json");

/// One submitted attempt.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub fields: ValidationFields,
}

impl Submission {
    /// Load a submission document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read submission {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("parse submission {}", path.display()))
    }

    /// Parse and validate a submission document.
    pub fn parse_str(raw: &str) -> Result<Self> {
        let instance: Value = serde_json::from_str(raw).context("parse submission json")?;
        let schema: Value =
            serde_json::from_str(SUBMISSION_SCHEMA).context("parse submission schema")?;
        validate_schema(&instance, &schema)?;
        let submission: Submission =
            serde_json::from_value(instance).context("parse submission as v1 struct")?;
        Ok(submission)
    }

    /// Consume the document, keeping only the submitted fields.
    pub fn into_fields(self) -> ValidationFields {
        self.fields
    }
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile submission schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}

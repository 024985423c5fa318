//! Player-facing message rendering.
//!
//! Thin wrapper around minijinja. Content code renders parameterized hints
//! with [`render_inline`] so prose and expected values cannot drift; the
//! harness renders descriptor summaries with [`render_objective_summary`].

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::io::descriptor::ObjectiveFile;

const DESCRIBE_TEMPLATE: &str = include_str!("templates/describe.md");

/// Render a one-off message template against `ctx`.
pub fn render_inline<S: Serialize>(template: &str, ctx: S) -> Result<String> {
    let env = Environment::new();
    env.render_str(template, ctx)
        .context("render message template")
}

/// Render the human-readable summary of an objective descriptor.
pub fn render_objective_summary(objective: &ObjectiveFile) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("describe", DESCRIBE_TEMPLATE)
        .expect("describe template should be valid");
    let template = env.get_template("describe").context("get describe template")?;
    let rendered = template
        .render(context! {
            objective => &objective.objective,
            fields => &objective.fields,
            success_message => &objective.messages.success,
        })
        .context("render objective summary")?;
    Ok(rendered)
}

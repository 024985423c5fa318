//! Stable exit codes for the `missions` CLI.

/// Command succeeded; for `check`, the submission completed the objective.
pub const OK: i32 = 0;
/// `check` ran, but the submission did not complete the objective.
pub const INCOMPLETE: i32 = 1;
/// Bad usage, unknown objective, or invalid descriptor/submission input.
pub const INVALID: i32 = 2;

//! Side-effecting operations: descriptor files and submission documents.

pub mod descriptor;
pub mod submission;

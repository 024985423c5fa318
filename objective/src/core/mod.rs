//! Pure evaluation logic: submission data, checks, and verdict resolution.
//!
//! Nothing in this module performs I/O or touches process-wide state; a
//! given submission always resolves to the same verdict.

pub mod context;
pub mod evaluate;
pub mod rules;
pub mod verdict;

//! SDK for writing mission objective validators.
//!
//! A mission objective asks the player to fill in answer fields through the
//! game UI; a validator judges one submitted attempt and reports a
//! success/fail verdict with a player-facing message. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic evaluation logic (submission data,
//!   verdict resolution, answer checks). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (descriptor files, submission
//!   documents). Isolated to keep validator code free of filesystem concerns.
//!
//! [`messages`] renders player-facing text, [`logging`] wires dev
//! diagnostics for harness binaries.

pub mod core;
pub mod io;
pub mod logging;
pub mod messages;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

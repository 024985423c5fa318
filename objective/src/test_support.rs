//! Test-only helpers for building submissions and capturing signals.

use crate::core::context::{OutcomeSink, ValidationFields};
use crate::core::verdict::Signal;

/// Build validation fields from `(name, value)` pairs.
pub fn fields(pairs: &[(&str, &str)]) -> ValidationFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// [`OutcomeSink`] that captures every callback invocation in order,
/// for asserting the exactly-one-terminal-signal properties.
#[derive(Debug, Default)]
pub struct CapturingSink {
    pub signals: Vec<Signal>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> usize {
        self.signals
            .iter()
            .filter(|signal| matches!(signal, Signal::Success(_)))
            .count()
    }

    pub fn failures(&self) -> usize {
        self.signals
            .iter()
            .filter(|signal| matches!(signal, Signal::Fail(_)))
            .count()
    }
}

impl OutcomeSink for CapturingSink {
    fn success(&mut self, message: &str) {
        self.signals.push(Signal::Success(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        self.signals.push(Signal::Fail(message.to_string()));
    }
}

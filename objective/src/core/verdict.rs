//! Terminal verdicts and signal recording.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::context::OutcomeSink;

/// Terminal outcome of one evaluated attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "message")]
pub enum Verdict {
    /// The objective is complete.
    Success(String),
    /// The objective is not yet complete.
    Fail(String),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success(_))
    }

    /// Player-facing message attached to the verdict.
    pub fn message(&self) -> &str {
        match self {
            Verdict::Success(message) | Verdict::Fail(message) => message,
        }
    }
}

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Success(String),
    Fail(String),
}

/// [`OutcomeSink`] that records every signal and resolves the final verdict.
///
/// The first signal is authoritative: exactly one terminal outcome is the
/// intended final signal per attempt, and a validator that signals again
/// after that has a content bug. Later signals are retained for inspection
/// and logged, never allowed to change the verdict.
#[derive(Debug, Default)]
pub struct VerdictRecorder {
    signals: Vec<Signal>,
}

impl VerdictRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full ordered transcript of signals received so far.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Resolve the recorded signals into the final verdict.
    ///
    /// Returns `None` when the validator never signaled.
    pub fn into_verdict(self) -> Option<Verdict> {
        match self.signals.into_iter().next() {
            Some(Signal::Success(message)) => Some(Verdict::Success(message)),
            Some(Signal::Fail(message)) => Some(Verdict::Fail(message)),
            None => None,
        }
    }

    fn record(&mut self, signal: Signal) {
        if let Some(first) = self.signals.first() {
            warn!(
                first = ?first,
                extra = ?signal,
                "validator signaled after a terminal outcome; extra signal ignored"
            );
        }
        self.signals.push(signal);
    }
}

impl OutcomeSink for VerdictRecorder {
    fn success(&mut self, message: &str) {
        self.record(Signal::Success(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        self.record(Signal::Fail(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_signal_is_authoritative() {
        let mut recorder = VerdictRecorder::new();
        recorder.fail("wrong answer");
        recorder.success("you did it");

        assert_eq!(recorder.signals().len(), 2);
        assert_eq!(
            recorder.into_verdict(),
            Some(Verdict::Fail("wrong answer".to_string()))
        );
    }

    #[test]
    fn no_signal_resolves_to_none() {
        let recorder = VerdictRecorder::new();
        assert_eq!(recorder.into_verdict(), None);
    }

    #[test]
    fn single_success_resolves_to_success() {
        let mut recorder = VerdictRecorder::new();
        recorder.success("you did it");

        let verdict = recorder.into_verdict().expect("verdict");
        assert!(verdict.is_success());
        assert_eq!(verdict.message(), "you did it");
    }

    #[test]
    fn verdict_serializes_with_stable_tags() {
        let verdict = Verdict::Fail("try again".to_string());
        let json = serde_json::to_string(&verdict).expect("serialize");
        assert_eq!(json, r#"{"outcome":"fail","message":"try again"}"#);
    }
}

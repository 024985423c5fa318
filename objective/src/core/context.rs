//! Submitted answer data and the host callback surface.
//!
//! The host constructs a fresh [`SubmissionContext`] for each player
//! attempt, passes it once to the objective's validator, and discards it
//! after the validator returns. Outcomes flow back exclusively through the
//! [`OutcomeSink`] callbacks; validators never return a value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answer fields submitted for one attempt, keyed by host-defined field name.
///
/// Values are stored as entered, including empty strings. Checks in
/// [`crate::core::rules`] decide how absent and blank values are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationFields(BTreeMap<String, String>);

impl ValidationFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submitted value for `name`, if the field was present in the attempt.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Field names present in the attempt, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ValidationFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Host-supplied outcome callbacks.
///
/// Implementations receive every signal a validator emits, in order. The
/// first terminal signal is the authoritative verdict; see
/// [`crate::core::verdict::VerdictRecorder`].
pub trait OutcomeSink {
    /// The objective is complete.
    fn success(&mut self, message: &str);

    /// The objective is not yet complete.
    fn fail(&mut self, message: &str);
}

/// Per-attempt view handed to a validator: the submitted fields plus the
/// success/fail callbacks.
pub struct SubmissionContext<'a> {
    fields: &'a ValidationFields,
    sink: &'a mut dyn OutcomeSink,
}

impl<'a> SubmissionContext<'a> {
    pub fn new(fields: &'a ValidationFields, sink: &'a mut dyn OutcomeSink) -> Self {
        Self { fields, sink }
    }

    /// Submitted value for `name`, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    /// All submitted fields for this attempt.
    pub fn fields(&self) -> &ValidationFields {
        self.fields
    }

    /// Signal that the objective is complete.
    pub fn success(&mut self, message: &str) {
        self.sink.success(message);
    }

    /// Signal that the objective is not yet complete.
    pub fn fail(&mut self, message: &str) {
        self.sink.fail(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verdict::Signal;
    use crate::test_support::{CapturingSink, fields};

    #[test]
    fn field_lookup_distinguishes_absent_from_empty() {
        let fields = fields(&[("answer1", "")]);
        assert_eq!(fields.get("answer1"), Some(""));
        assert_eq!(fields.get("answer2"), None);
    }

    #[test]
    fn names_are_sorted() {
        let fields = fields(&[("b", "2"), ("a", "1")]);
        let names: Vec<&str> = fields.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn context_forwards_signals_in_order() {
        let fields = fields(&[("answer1", "Twilio")]);
        let mut sink = CapturingSink::new();
        let mut ctx = SubmissionContext::new(&fields, &mut sink);

        ctx.fail("not yet");
        ctx.success("done");

        assert_eq!(
            sink.signals,
            vec![
                Signal::Fail("not yet".to_string()),
                Signal::Success("done".to_string()),
            ]
        );
    }
}

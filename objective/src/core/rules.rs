//! Fail-fast checks over submitted answers.
//!
//! Validators compose these and stop at the first failed check, so the
//! player gets one hint at a time. All checks are pure and deterministic;
//! an absent field and a blank field fail the same way.

use regex::Regex;

/// Present, non-blank value of a submitted field.
///
/// Returns the value as entered; only the presence check trims.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// True when `value` parses as a number equal to `expected`.
///
/// Surrounding whitespace is tolerated and decimal spellings of the same
/// value pass (`"4"`, `" 4 "`, `"4.0"`). Non-numeric input is simply false.
pub fn number_equals(value: &str, expected: f64) -> bool {
    value.trim().parse::<f64>().is_ok_and(|n| n == expected)
}

/// Exact, case-sensitive membership in the accepted token set.
pub fn one_of(value: &str, accepted: &[&str]) -> bool {
    accepted.contains(&value)
}

/// Full-string match against an accepted-answer pattern.
///
/// The pattern does not need to be anchored; partial matches never pass.
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern
        .find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len())
}

/// Present, non-blank, and passing the injected predicate.
///
/// Predicates are opaque capabilities supplied by mission content (e.g. a
/// company-name check); the rule only guarantees the presence contract.
pub fn satisfies(value: Option<&str>, predicate: impl Fn(&str) -> bool) -> bool {
    non_empty(value).is_some_and(|v| predicate(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_absent_blank_and_whitespace() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" x ")), Some(" x "));
    }

    #[test]
    fn number_equals_accepts_numeric_spellings() {
        assert!(number_equals("4", 4.0));
        assert!(number_equals(" 4 ", 4.0));
        assert!(number_equals("4.0", 4.0));
    }

    #[test]
    fn number_equals_rejects_wrong_and_non_numeric() {
        assert!(!number_equals("5", 4.0));
        assert!(!number_equals("four", 4.0));
        assert!(!number_equals("", 4.0));
        assert!(!number_equals("4x", 4.0));
    }

    #[test]
    fn one_of_is_exact_and_case_sensitive() {
        let accepted = ["Yes", "No"];
        assert!(one_of("Yes", &accepted));
        assert!(one_of("No", &accepted));
        assert!(!one_of("yes", &accepted));
        assert!(!one_of("Maybe", &accepted));
        assert!(!one_of("Yes ", &accepted));
    }

    #[test]
    fn matches_requires_full_string() {
        let pattern = Regex::new("[0-9]+").expect("pattern");
        assert!(matches("42", &pattern));
        assert!(!matches("42x", &pattern));
        assert!(!matches("x42", &pattern));
    }

    #[test]
    fn satisfies_requires_presence_before_predicate() {
        let is_twilio = |answer: &str| answer == "Twilio";
        assert!(satisfies(Some("Twilio"), is_twilio));
        assert!(!satisfies(Some("Acme"), is_twilio));
        assert!(!satisfies(Some(""), is_twilio));
        assert!(!satisfies(None, is_twilio));
    }
}

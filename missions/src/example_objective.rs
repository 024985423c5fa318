//! The shipped example objective: four questions about the game and the
//! platform behind it.
//!
//! Checks run in field order and stop at the first wrong answer, so the
//! player gets one hint per attempt and iterates.

use objective::core::context::SubmissionContext;
use objective::core::rules;
use objective::messages;

use crate::helpers;

const SUM_LHS: i64 = 2;
const SUM_RHS: i64 = 2;

/// Accepted answers for the enjoyment question.
const ENJOYMENT_TOKENS: &[&str] = &["Yes", "No"];
/// Accepted answers for the trial-pricing question.
const TRIAL_TOKENS: &[&str] = &["Yes", "No", "TrialisFree"];

const COMPANY_HINT: &str = "The answer to the first question is incorrect. The company that \
     makes this game starts with a \"T\" and ends with a \"wilio\".";
const ARITHMETIC_HINT_TEMPLATE: &str = "The second answer you provided was either not a number, \
     or not the correct response for \"what is {{ lhs }} + {{ rhs }}\".";
const ENJOYMENT_HINT: &str = "The third response should be either \"Yes\" or \"No\", indicating \
     whether you enjoy the game so far.";
const TRIAL_HINT: &str = "The fourth response should be \"Yes\", \"No\" or \"TrialisFree\", \
     indicating whether the platform is free to use.";
const SUCCESS_MESSAGE: &str = "Hooray! You did it!";

/// Judge one submission.
pub fn validate(ctx: &mut SubmissionContext) {
    if !rules::satisfies(ctx.field("answer1"), helpers::is_twilio) {
        ctx.fail(COMPANY_HINT);
        return;
    }

    let expected = (SUM_LHS + SUM_RHS) as f64;
    match rules::non_empty(ctx.field("answer2")) {
        Some(answer) if rules::number_equals(answer, expected) => {}
        _ => {
            ctx.fail(&arithmetic_hint());
            return;
        }
    }

    match rules::non_empty(ctx.field("answer3")) {
        Some(answer) if rules::one_of(answer, ENJOYMENT_TOKENS) => {}
        _ => {
            ctx.fail(ENJOYMENT_HINT);
            return;
        }
    }

    match rules::non_empty(ctx.field("answer4")) {
        Some(answer) if rules::one_of(answer, TRIAL_TOKENS) => {}
        _ => {
            ctx.fail(TRIAL_HINT);
            return;
        }
    }

    ctx.success(SUCCESS_MESSAGE);
}

fn arithmetic_hint() -> String {
    messages::render_inline(
        ARITHMETIC_HINT_TEMPLATE,
        minijinja_context(SUM_LHS, SUM_RHS),
    )
    .expect("arithmetic hint template should render")
}

fn minijinja_context(lhs: i64, rhs: i64) -> serde_json::Value {
    serde_json::json!({ "lhs": lhs, "rhs": rhs })
}

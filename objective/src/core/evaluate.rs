//! Evaluation driver: runs a validator with fault containment.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::core::context::{SubmissionContext, ValidationFields};
use crate::core::verdict::{Verdict, VerdictRecorder};

/// Message reported when validator code faults or returns without signaling.
pub const INTERNAL_FAULT_MESSAGE: &str =
    "Something went wrong while checking your answers. Please try again.";

/// An objective validator: judges one submitted attempt and signals the
/// outcome through the context callbacks.
pub trait Validator {
    fn validate(&self, ctx: &mut SubmissionContext);
}

/// Plain functions are validators; mission content registers bare `fn`s.
impl<F> Validator for F
where
    F: Fn(&mut SubmissionContext),
{
    fn validate(&self, ctx: &mut SubmissionContext) {
        self(ctx);
    }
}

/// Validator function type used by content registries.
pub type ValidatorFn = fn(&mut SubmissionContext);

/// Run `validator` against `fields` and resolve a terminal verdict.
///
/// Exactly one verdict is produced per call:
/// - A panic inside validator code never escapes to the host; it is logged
///   and, unless a terminal signal was already recorded, resolved as a
///   failed attempt with [`INTERNAL_FAULT_MESSAGE`].
/// - A validator that returns without signaling is resolved the same way.
/// - Signals after the first are ignored for verdict purposes (see
///   [`VerdictRecorder`]).
pub fn evaluate<V: Validator + ?Sized>(validator: &V, fields: &ValidationFields) -> Verdict {
    let mut recorder = VerdictRecorder::new();
    // The recorder is append-only; a partial transcript is still valid after
    // an unwind.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut ctx = SubmissionContext::new(fields, &mut recorder);
        validator.validate(&mut ctx);
    }));
    if let Err(payload) = outcome {
        warn!(panic = panic_message(&payload), "validator panicked during evaluation");
    }
    match recorder.into_verdict() {
        Some(verdict) => verdict,
        None => {
            warn!("validator returned without signaling an outcome");
            Verdict::Fail(INTERNAL_FAULT_MESSAGE.to_string())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

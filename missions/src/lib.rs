//! Mission content: objective validators shipped with the training game.
//!
//! Each objective under `objectives/<id>/` pairs a descriptor
//! (`objective.toml`) with a validator function registered here. The host
//! resolves a player's submission to a validator through this registry;
//! descriptors stay data-only.

pub mod cli;
pub mod example_objective;
pub mod exit_codes;
pub mod helpers;

use objective::core::evaluate::ValidatorFn;

/// Registered objective validators, keyed by objective id.
const VALIDATORS: &[(&str, ValidatorFn)] =
    &[("example_objective", example_objective::validate)];

/// Look up the validator registered for `id`.
pub fn validator_for(id: &str) -> Option<ValidatorFn> {
    VALIDATORS
        .iter()
        .find(|(registered, _)| *registered == id)
        .map(|(_, validator)| *validator)
}

/// Ids of all registered validators, in registry order.
pub fn registered_ids() -> impl Iterator<Item = &'static str> {
    VALIDATORS.iter().map(|(id, _)| *id)
}

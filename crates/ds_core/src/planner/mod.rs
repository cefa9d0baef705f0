//! Path Planner & Scorer
//!
//! Consumes a [`FieldModel`](crate::field::FieldModel) plus
//! [`MatchParams`](crate::models::MatchParams) and produces an ordered
//! visiting sequence with per-step timing and the expected score.

mod engine;
pub mod scoring;

pub use engine::{PlanEngine, PlanSetup};

use crate::error::Result;
use crate::field::FieldModel;
use crate::models::{MatchParams, PlanResult};

/// One-shot planning run - the crate's single logical operation.
///
/// Equivalent to `PlanEngine::new(..)?.run()`; fails only on parameters that
/// make the computation meaningless (zero speed, no time budget).
pub fn simulate(field: &FieldModel, params: &MatchParams) -> Result<PlanResult> {
    let engine = PlanEngine::new(PlanSetup { field: field.clone(), params: params.clone() })?;
    Ok(engine.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::default_field_layout;

    #[test]
    fn test_simulate_matches_engine() {
        let field = default_field_layout();
        let params = MatchParams::default();
        let via_fn = simulate(&field, &params).unwrap();
        let via_engine =
            PlanEngine::new(PlanSetup { field, params }).unwrap().run();
        assert_eq!(via_fn, via_engine);
    }

    #[test]
    fn test_simulate_rejects_zero_speed() {
        let params = MatchParams { robot_speed: 0.0, ..Default::default() };
        assert!(simulate(&default_field_layout(), &params).is_err());
    }
}

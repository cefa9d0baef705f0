//! Parameter sensitivity analysis
//!
//! Re-runs the planner over a grid of parameter values, the batch analogue
//! of a user dragging a slider and watching the score move. Runs are
//! independent pure functions, so the grid is evaluated in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::field::FieldModel;
use crate::models::MatchParams;
use crate::planner;

/// Outcome of one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// The swept parameter value
    pub value: f32,
    pub artifacts_collected: usize,
    pub total_score: f32,
    pub time_used: f32,
}

/// Evenly spaced grid over `[min, max]`, inclusive of both ends.
/// `steps < 2` collapses to a single point at `min`.
pub fn linear_grid(min: f32, max: f32, steps: usize) -> Vec<f32> {
    if steps < 2 {
        return vec![min];
    }
    let span = max - min;
    (0..steps).map(|i| min + span * i as f32 / (steps - 1) as f32).collect()
}

/// Sweep the total match duration.
///
/// Grid values that would fail parameter validation (e.g. shorter than the
/// autonomous window) are clamped up to the smallest valid duration, so a
/// caller can sweep all the way down to zero and still get a curve.
pub fn sweep_match_duration(
    field: &FieldModel,
    params: &MatchParams,
    durations: &[f32],
) -> Result<Vec<SweepPoint>> {
    durations
        .par_iter()
        .map(|&duration| {
            let mut p = params.clone();
            p.match_time = duration.max(p.auton_time + 1e-3);
            let result = planner::simulate(field, &p)?;
            Ok(SweepPoint {
                value: duration,
                artifacts_collected: result.artifacts_collected,
                total_score: result.total_score,
                time_used: result.time_used,
            })
        })
        .collect()
}

/// Sweep the robot speed.
pub fn sweep_robot_speed(
    field: &FieldModel,
    params: &MatchParams,
    speeds: &[f32],
) -> Result<Vec<SweepPoint>> {
    speeds
        .par_iter()
        .map(|&speed| {
            let mut p = params.clone();
            p.robot_speed = speed;
            let result = planner::simulate(field, &p)?;
            Ok(SweepPoint {
                value: speed,
                artifacts_collected: result.artifacts_collected,
                total_score: result.total_score,
                time_used: result.time_used,
            })
        })
        .collect()
}

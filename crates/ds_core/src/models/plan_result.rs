//! Planner output structures
//!
//! These structures are the sink of the pipeline: everything the greedy loop
//! decides flows into a [`PlanResult`], which the presentation layer (CLI,
//! JSON API consumers) then renders. A result is produced once per run and
//! owned by the caller; nothing here is shared or persisted.

use serde::{Deserialize, Serialize};

use crate::field::FieldPos;

/// One pickup in the planned path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Index into `FieldModel::artifacts`
    pub artifact_index: usize,
    pub pos: FieldPos,
    /// Travel time from the previous position, seconds
    pub travel_time: f32,
    /// Pickup duration, seconds
    pub pickup_time: f32,
    /// Elapsed match time when the pickup completes
    pub time_at_pickup: f32,
    /// Whether the robot arrived within the autonomous window
    pub in_auton: bool,
    /// Base point value used for this artifact
    pub base_points: f32,
    /// Decode-zone bonus applied (0 outside the zone)
    pub bonus_points: f32,
    /// Points actually earned after the scoring rules
    pub gained: f32,
}

/// Time spent in each match phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TimeBreakdown {
    pub autonomous: f32,
    pub teleop: f32,
}

/// Result of one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Pickups in visiting order
    pub steps: Vec<PlanStep>,
    pub total_score: f32,
    pub artifacts_collected: usize,
    /// Artifacts the robot could not reach before the match ends
    pub artifacts_remaining: usize,
    /// Elapsed time when the last pickup completed
    pub time_used: f32,
    pub time_breakdown: TimeBreakdown,
}

impl PlanResult {
    /// Trivial result for a field the robot cannot score on
    pub fn empty(artifacts_remaining: usize) -> Self {
        Self {
            steps: Vec::new(),
            total_score: 0.0,
            artifacts_collected: 0,
            artifacts_remaining,
            time_used: 0.0,
            time_breakdown: TimeBreakdown::default(),
        }
    }

    /// Positions along the planned path, start excluded
    pub fn path_positions(&self) -> impl Iterator<Item = FieldPos> + '_ {
        self.steps.iter().map(|s| s.pos)
    }
}

//! Coach tips
//!
//! Rule-based textual suggestions derived from a finished plan. This layer
//! only reads the planner's output; it never feeds back into the path
//! selection.

use serde::{Deserialize, Serialize};

use crate::models::{MatchParams, PlanResult};

/// Autonomous multiplier above which the multiplier tip fires
const AUTON_MULTIPLIER_TIP_MIN: f32 = 1.2;
/// Autonomous window (seconds) above which the multiplier tip fires
const AUTON_WINDOW_TIP_MIN_S: f32 = 10.0;

/// A single coaching suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachTip {
    /// Some artifacts were left on the field
    IncreaseSpeedOrPrioritizeZone,
    /// The autonomous multiplier is worth chasing
    ExploitAutonMultiplier,
    /// Decode-zone artifacts are worth routing early
    RouteZoneArtifactsEarly,
    /// Nothing stands out
    Balanced,
}

impl CoachTip {
    pub fn message(&self) -> &'static str {
        match self {
            CoachTip::IncreaseSpeedOrPrioritizeZone => {
                "Consider increasing robot speed, or prioritizing artifacts inside the decode zone during auton."
            }
            CoachTip::ExploitAutonMultiplier => {
                "Focus on quick pickups during autonomous to exploit the multiplier."
            }
            CoachTip::RouteZoneArtifactsEarly => {
                "Decode zone grants bonus: plan path to include those artifacts early if close."
            }
            CoachTip::Balanced => "Strategy looks balanced for current parameters.",
        }
    }
}

/// Derive tips from the parameters and the finished result.
///
/// Always returns at least one tip; [`CoachTip::Balanced`] stands in when no
/// other rule fires.
pub fn tips_for(params: &MatchParams, result: &PlanResult) -> Vec<CoachTip> {
    let mut tips = Vec::new();
    if result.artifacts_remaining > 0 {
        tips.push(CoachTip::IncreaseSpeedOrPrioritizeZone);
    }
    if params.scoring.auton_multiplier > AUTON_MULTIPLIER_TIP_MIN
        && params.auton_time > AUTON_WINDOW_TIP_MIN_S
    {
        tips.push(CoachTip::ExploitAutonMultiplier);
    }
    if params.scoring.decode_bonus > 0.0 {
        tips.push(CoachTip::RouteZoneArtifactsEarly);
    }
    if tips.is_empty() {
        tips.push(CoachTip::Balanced);
    }
    tips
}

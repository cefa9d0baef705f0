//! Pure scoring functions for a single pickup
//!
//! All functions are pure - they take the scoring rules and pickup context
//! as input and return the points breakdown. This allows easy unit testing
//! without needing a full PlanEngine.

use crate::models::{BonusApplication, ScoringRules};

/// Points breakdown for one pickup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsBreakdown {
    /// Base value before any rule is applied
    pub base: f32,
    /// Decode-zone bonus (0 outside the zone)
    pub bonus: f32,
    /// Points earned after applying the rules
    pub gained: f32,
}

/// Compute the points earned for one pickup.
///
/// `base` is the artifact's base value (per-artifact override or the global
/// `points_per_artifact`). The decode bonus stacks with the autonomous
/// multiplier according to `ScoringRules::bonus_application`.
#[inline]
pub fn pickup_points(
    rules: &ScoringRules,
    base: f32,
    in_zone: bool,
    in_auton: bool,
) -> PointsBreakdown {
    let bonus = if in_zone { rules.decode_bonus } else { 0.0 };
    let gained = match rules.bonus_application {
        BonusApplication::BeforeMultiplier => {
            let combined = base + bonus;
            if in_auton {
                combined * rules.auton_multiplier
            } else {
                combined
            }
        }
        BonusApplication::AfterMultiplier => {
            let multiplied = if in_auton { base * rules.auton_multiplier } else { base };
            multiplied + bonus
        }
    };
    PointsBreakdown { base, bonus, gained }
}

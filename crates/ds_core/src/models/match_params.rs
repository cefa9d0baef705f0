//! Match and robot parameters
//!
//! Immutable configuration for one planning run. Scoring rules are kept in
//! their own struct because they are season-specific and expected to change;
//! they can be loaded from a YAML file (rules-as-data) so a new season does
//! not require a code change.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// When the decode-zone bonus is applied relative to the autonomous
/// multiplier. Both readings exist in the wild; the default matches the
/// reference scoring used by the default layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BonusApplication {
    /// Bonus is added to the base value first, so the autonomous multiplier
    /// applies to both: `(base + bonus) * multiplier`
    #[default]
    BeforeMultiplier,
    /// Multiplier applies to the base value only: `base * multiplier + bonus`
    AfterMultiplier,
}

/// Season-specific scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Base points per collected artifact
    #[serde(default = "default_points_per_artifact")]
    pub points_per_artifact: f32,
    /// Extra points for an artifact collected inside the decode zone
    #[serde(default = "default_decode_bonus")]
    pub decode_bonus: f32,
    /// Multiplier on points scored during the autonomous phase
    #[serde(default = "default_auton_multiplier")]
    pub auton_multiplier: f32,
    #[serde(default)]
    pub bonus_application: BonusApplication,
}

fn default_points_per_artifact() -> f32 {
    5.0
}

fn default_decode_bonus() -> f32 {
    3.0
}

fn default_auton_multiplier() -> f32 {
    1.5
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_artifact: default_points_per_artifact(),
            decode_bonus: default_decode_bonus(),
            auton_multiplier: default_auton_multiplier(),
            bonus_application: BonusApplication::default(),
        }
    }
}

impl ScoringRules {
    /// Load scoring rules from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Robot performance and match timing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchParams {
    /// Robot speed in field units per second
    #[serde(default = "default_robot_speed")]
    pub robot_speed: f32,
    /// Seconds to pick up one artifact
    #[serde(default = "default_pickup_time")]
    pub pickup_time: f32,
    /// Total match time in seconds
    #[serde(default = "default_match_time")]
    pub match_time: f32,
    /// Autonomous phase duration in seconds (starts at t=0)
    #[serde(default = "default_auton_time")]
    pub auton_time: f32,
    #[serde(default)]
    pub scoring: ScoringRules,
}

fn default_robot_speed() -> f32 {
    150.0
}

fn default_pickup_time() -> f32 {
    3.0
}

fn default_match_time() -> f32 {
    150.0
}

fn default_auton_time() -> f32 {
    30.0
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            robot_speed: default_robot_speed(),
            pickup_time: default_pickup_time(),
            match_time: default_match_time(),
            auton_time: default_auton_time(),
            scoring: ScoringRules::default(),
        }
    }
}

impl MatchParams {
    /// Boundary validation. Zero speed and a non-positive time budget make
    /// the planning run meaningless (division by zero / nothing reachable),
    /// so they are rejected here; every other degenerate input degrades to
    /// an empty plan instead of erroring.
    pub fn validate(&self) -> Result<()> {
        if !self.robot_speed.is_finite() || self.robot_speed <= 0.0 {
            return Err(PlanError::InvalidParameter(format!(
                "robot_speed must be positive, got {}",
                self.robot_speed
            )));
        }
        if !self.pickup_time.is_finite() || self.pickup_time < 0.0 {
            return Err(PlanError::InvalidParameter(format!(
                "pickup_time must be non-negative, got {}",
                self.pickup_time
            )));
        }
        if !self.auton_time.is_finite() || self.auton_time < 0.0 {
            return Err(PlanError::InvalidParameter(format!(
                "auton_time must be non-negative, got {}",
                self.auton_time
            )));
        }
        if !self.match_time.is_finite() || self.match_time <= 0.0 {
            return Err(PlanError::InvalidParameter(format!(
                "match_time must be positive, got {}",
                self.match_time
            )));
        }
        if self.match_time <= self.auton_time {
            return Err(PlanError::InvalidParameter(format!(
                "match_time ({}) must exceed auton_time ({})",
                self.match_time, self.auton_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MatchParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_speed_rejected() {
        let params = MatchParams { robot_speed: 0.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_negative_pickup_rejected() {
        let params = MatchParams { pickup_time: -1.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_match_shorter_than_auton_rejected() {
        let params = MatchParams { match_time: 20.0, auton_time: 30.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_speed_rejected() {
        let params = MatchParams { robot_speed: f32::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: MatchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, MatchParams::default());
    }

    #[test]
    fn test_scoring_rules_from_yaml() {
        let yaml = "points_per_artifact: 7\ndecode_bonus: 2\nbonus_application: after_multiplier\n";
        let rules = ScoringRules::from_yaml(yaml).unwrap();
        assert_eq!(rules.points_per_artifact, 7.0);
        assert_eq!(rules.decode_bonus, 2.0);
        assert_eq!(rules.auton_multiplier, 1.5, "unspecified field keeps default");
        assert_eq!(rules.bonus_application, BonusApplication::AfterMultiplier);
    }

    #[test]
    fn test_scoring_rules_bad_yaml() {
        assert!(ScoringRules::from_yaml("points_per_artifact: [oops").is_err());
    }
}

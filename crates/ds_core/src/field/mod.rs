//! Field model - static geometry of one match scenario
//!
//! A [`FieldModel`] holds the artifact positions, the robot start position
//! and the decode-zone region. It is immutable during planning: collection
//! state lives in the planner's per-run scratch, so the same field can be
//! re-planned any number of times with different parameters.

pub mod geometry;
pub mod layout;

pub use geometry::{distance, FieldPos};
pub use layout::{default_field_layout, parse_artifact_list, random_field_layout};

use serde::{Deserialize, Serialize};

/// Region of the field granting a scoring bonus for artifacts inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DecodeZone {
    /// Circular zone - the shape used by the default layout
    Circle { center: FieldPos, radius: f32 },
    /// Axis-aligned rectangle from `min` to `max`
    Rect { min: FieldPos, max: FieldPos },
}

impl DecodeZone {
    /// Deterministic containment test; boundary positions count as inside.
    pub fn contains(&self, pos: FieldPos) -> bool {
        match self {
            DecodeZone::Circle { center, radius } => geometry::distance(pos, *center) <= *radius,
            DecodeZone::Rect { min, max } => {
                pos.0 >= min.0 && pos.0 <= max.0 && pos.1 >= min.1 && pos.1 <= max.1
            }
        }
    }
}

/// A collectible scoring object at a fixed field position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub pos: FieldPos,
    /// Overrides `ScoringRules::points_per_artifact` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_value: Option<f32>,
}

impl Artifact {
    pub fn at(x: f32, y: f32) -> Self {
        Self { pos: (x, y), point_value: None }
    }
}

/// Static geometry of one match scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    /// Robot start position
    pub start: FieldPos,
    /// Artifacts in entry order; the planner's tie-break keys off this order
    pub artifacts: Vec<Artifact>,
    pub decode_zone: DecodeZone,
}

impl FieldModel {
    pub fn new(start: FieldPos, artifacts: Vec<Artifact>, decode_zone: DecodeZone) -> Self {
        Self { start, artifacts, decode_zone }
    }

    /// Whether a position lies inside the decode zone
    pub fn is_in_decode_zone(&self, pos: FieldPos) -> bool {
        self.decode_zone.contains(pos)
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }
}

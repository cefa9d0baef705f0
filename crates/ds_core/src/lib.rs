//! # ds_core - Greedy Match-Strategy Planner
//!
//! This library estimates how many scoring artifacts a robot can collect
//! during a timed match and suggests a collection path, with a JSON API for
//! easy integration with interactive front-ends.
//!
//! ## Features
//! - 100% deterministic planning (same field + parameters = same plan)
//! - Greedy nearest-first heuristic with transparent per-step timing
//! - Season-configurable scoring rules (autonomous multiplier, decode bonus)
//! - JSON API for easy integration

pub mod analysis;
pub mod api;
pub mod coach;
pub mod error;
pub mod field;
pub mod models;
pub mod planner;

// Re-export main API functions
pub use api::{simulate_plan_json, tips_json, PlanRequest, PlanResponse};
pub use coach::{tips_for, CoachTip};
pub use error::{PlanError, Result};
pub use field::{
    default_field_layout, parse_artifact_list, random_field_layout, Artifact, DecodeZone,
    FieldModel, FieldPos,
};
pub use models::{BonusApplication, MatchParams, PlanResult, PlanStep, ScoringRules, TimeBreakdown};
pub use planner::{simulate, PlanEngine, PlanSetup};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

pub mod match_params;
pub mod plan_result;

pub use match_params::{BonusApplication, MatchParams, ScoringRules};
pub use plan_result::{PlanResult, PlanStep, TimeBreakdown};

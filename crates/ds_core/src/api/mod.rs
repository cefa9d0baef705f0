pub mod plan_json;

pub use plan_json::{
    simulate_plan_json, tips_json, LayoutRequest, PlanRequest, PlanResponse, TipEntry,
};

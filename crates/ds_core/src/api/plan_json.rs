//! JSON API layer
//!
//! String-in, string-out seam for presentation layers (a UI, a notebook, a
//! shell). Requests are schema-versioned; responses echo the resolved field
//! so the caller can draw it without re-deriving the layout.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coach::{self, CoachTip};
use crate::field::{
    default_field_layout, parse_artifact_list, random_field_layout, Artifact, DecodeZone,
    FieldModel,
};
use crate::models::{MatchParams, PlanResult};
use crate::planner;

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub layout: LayoutRequest,
    #[serde(default)]
    pub params: MatchParams,
}

/// How the request describes the field
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutRequest {
    /// Built-in eight-artifact preset
    #[default]
    Default,
    /// Seeded random scatter; same seed produces the same field
    Random { count: usize, seed: u64 },
    /// Manual entry string, e.g. `"200,80;250,160"`; start and decode zone
    /// come from the default layout
    Manual { artifacts: String },
    /// Fully explicit field description
    Explicit { start: (f32, f32), artifacts: Vec<ArtifactData>, decode_zone: DecodeZone },
}

#[derive(Debug, Deserialize)]
pub struct ArtifactData {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub point_value: Option<f32>,
}

/// One coach tip with its rendered message
#[derive(Debug, Serialize)]
pub struct TipEntry {
    pub code: CoachTip,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub schema_version: u8,
    /// The field the plan was computed on (resolved from the layout request)
    pub field: FieldModel,
    /// Parameters echoed back so the caller can render them with the result
    pub params: MatchParams,
    pub result: PlanResult,
    pub tips: Vec<TipEntry>,
}

fn resolve_layout(layout: LayoutRequest) -> FieldModel {
    match layout {
        LayoutRequest::Default => default_field_layout(),
        LayoutRequest::Random { count, seed } => random_field_layout(count, seed),
        LayoutRequest::Manual { artifacts } => {
            let preset = default_field_layout();
            FieldModel::new(preset.start, parse_artifact_list(&artifacts), preset.decode_zone)
        }
        LayoutRequest::Explicit { start, artifacts, decode_zone } => FieldModel::new(
            start,
            artifacts
                .into_iter()
                .map(|a| Artifact { pos: (a.x, a.y), point_value: a.point_value })
                .collect(),
            decode_zone,
        ),
    }
}

fn run_request(request_json: &str) -> Result<(FieldModel, MatchParams, PlanResult), String> {
    let request: PlanRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    request.params.validate().map_err(|e| format!("Parameter validation failed: {}", e))?;

    let field = resolve_layout(request.layout);
    if field.artifacts.is_empty() {
        warn!("plan request resolved to an empty field; returning a trivial plan");
    }
    debug!(artifacts = field.artifacts.len(), "running plan request");

    let result = planner::simulate(&field, &request.params).map_err(|e| e.to_string())?;
    Ok((field, request.params, result))
}

/// Run one planning request and return the full response as JSON.
pub fn simulate_plan_json(request_json: &str) -> Result<String, String> {
    let (field, params, result) = run_request(request_json)?;

    let tips = coach::tips_for(&params, &result)
        .into_iter()
        .map(|code| TipEntry { code, message: code.message() })
        .collect();

    let response =
        PlanResponse { schema_version: crate::SCHEMA_VERSION, field, params, result, tips };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Run one planning request and return only the coach tips as JSON.
pub fn tips_json(request_json: &str) -> Result<String, String> {
    let (_, params, result) = run_request(request_json)?;
    let tips: Vec<TipEntry> = coach::tips_for(&params, &result)
        .into_iter()
        .map(|code| TipEntry { code, message: code.message() })
        .collect();
    serde_json::to_string(&tips).map_err(|e| format!("Failed to serialize result: {}", e))
}

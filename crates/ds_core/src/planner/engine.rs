//! Greedy nearest-first planning engine
//!
//! The engine is intentionally myopic: it always drives to the closest
//! uncollected artifact and never reorders for a globally better score.
//! That mirrors the quick estimate a coach would make at the whiteboard;
//! do not replace it with an exhaustive tour optimizer.

use crate::error::Result;
use crate::field::{geometry, Artifact, FieldModel, FieldPos};
use crate::models::{MatchParams, PlanResult, PlanStep, TimeBreakdown};

use super::scoring;

/// Everything one planning run needs
#[derive(Debug, Clone)]
pub struct PlanSetup {
    pub field: FieldModel,
    pub params: MatchParams,
}

/// One-shot planning engine. `new` validates the parameters; `run` is then
/// infallible and side-effect free, so the same engine can be re-run.
#[derive(Debug)]
pub struct PlanEngine {
    setup: PlanSetup,
}

impl PlanEngine {
    pub fn new(setup: PlanSetup) -> Result<Self> {
        setup.params.validate()?;
        Ok(Self { setup })
    }

    /// Execute the greedy selection loop.
    ///
    /// Loop policy (kept stable for reproducibility):
    /// - nearest uncollected artifact next, ties broken by lowest index;
    /// - stop as soon as the next pickup would overrun the match clock
    ///   (finishing exactly at the buzzer is allowed);
    /// - autonomous eligibility is decided by the arrival time, before the
    ///   pickup duration elapses.
    pub fn run(&self) -> PlanResult {
        let field = &self.setup.field;
        let params = &self.setup.params;

        let mut collected = vec![false; field.artifacts.len()];
        let mut pos = field.start;
        let mut elapsed = 0.0f32;
        let mut total_score = 0.0f32;
        let mut steps: Vec<PlanStep> = Vec::new();

        while let Some((idx, dist)) = nearest_uncollected(pos, &field.artifacts, &collected) {
            let travel_time = dist / params.robot_speed;
            if elapsed + travel_time + params.pickup_time > params.match_time {
                log::debug!(
                    "stopping with {} artifacts left: next pickup would overrun the match",
                    collected.iter().filter(|c| !**c).count()
                );
                break;
            }

            elapsed += travel_time;
            let in_auton = elapsed <= params.auton_time;
            elapsed += params.pickup_time;

            let artifact = &field.artifacts[idx];
            let base = artifact.point_value.unwrap_or(params.scoring.points_per_artifact);
            let in_zone = field.is_in_decode_zone(artifact.pos);
            let points = scoring::pickup_points(&params.scoring, base, in_zone, in_auton);

            total_score += points.gained;
            steps.push(PlanStep {
                artifact_index: idx,
                pos: artifact.pos,
                travel_time,
                pickup_time: params.pickup_time,
                time_at_pickup: elapsed,
                in_auton,
                base_points: points.base,
                bonus_points: points.bonus,
                gained: points.gained,
            });

            collected[idx] = true;
            pos = artifact.pos;
        }

        let artifacts_collected = steps.len();
        PlanResult {
            artifacts_remaining: field.artifacts.len() - artifacts_collected,
            artifacts_collected,
            total_score,
            time_breakdown: TimeBreakdown {
                autonomous: elapsed.min(params.auton_time),
                teleop: (elapsed - params.auton_time).max(0.0),
            },
            time_used: elapsed,
            steps,
        }
    }
}

/// Nearest uncollected artifact from `from`, scanning in index order.
/// Strict `<` comparison keeps the lowest index on distance ties.
fn nearest_uncollected(
    from: FieldPos,
    artifacts: &[Artifact],
    collected: &[bool],
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, artifact) in artifacts.iter().enumerate() {
        if collected[idx] {
            continue;
        }
        let dist = geometry::distance(from, artifact.pos);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((idx, dist));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{default_field_layout, DecodeZone};
    use crate::models::ScoringRules;

    fn line_field() -> FieldModel {
        FieldModel::new(
            (-1.0, 0.0),
            vec![Artifact::at(0.0, 0.0), Artifact::at(1.0, 0.0), Artifact::at(2.0, 0.0)],
            // far away from everything
            DecodeZone::Circle { center: (500.0, 300.0), radius: 10.0 },
        )
    }

    fn line_params() -> MatchParams {
        MatchParams {
            robot_speed: 1.0,
            pickup_time: 0.0,
            match_time: 10.0,
            auton_time: 1.0,
            scoring: ScoringRules {
                points_per_artifact: 1.0,
                decode_bonus: 0.0,
                auton_multiplier: 2.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_reference_scenario() {
        // Three artifacts on a line, speed 1, no pickup time: pickups land at
        // t=1 (autonomous, doubled), t=2 and t=3 (teleop).
        let engine = PlanEngine::new(PlanSetup { field: line_field(), params: line_params() })
            .expect("valid setup");
        let result = engine.run();

        assert_eq!(result.artifacts_collected, 3);
        assert_eq!(result.total_score, 4.0);
        let times: Vec<f32> = result.steps.iter().map(|s| s.time_at_pickup).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert!(result.steps[0].in_auton);
        assert!(!result.steps[1].in_auton);
        assert_eq!(result.steps[0].gained, 2.0);
        assert_eq!(result.steps[1].gained, 1.0);
    }

    #[test]
    fn test_empty_field_gives_empty_plan() {
        let field = FieldModel::new(
            (50.0, 200.0),
            vec![],
            DecodeZone::Circle { center: (470.0, 160.0), radius: 70.0 },
        );
        let engine = PlanEngine::new(PlanSetup { field, params: MatchParams::default() }).unwrap();
        let result = engine.run();
        assert_eq!(result, PlanResult::empty(0));
    }

    #[test]
    fn test_unreachable_field_gives_zero_score() {
        // One second of match time is not enough to cross the field.
        let params = MatchParams { match_time: 1.0, auton_time: 0.0, ..Default::default() };
        let field = FieldModel::new(
            (0.0, 0.0),
            vec![Artifact::at(590.0, 390.0)],
            DecodeZone::Circle { center: (470.0, 160.0), radius: 70.0 },
        );
        let result = PlanEngine::new(PlanSetup { field, params }).unwrap().run();
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.artifacts_remaining, 1);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Two artifacts equidistant from the start; index 0 must win.
        let field = FieldModel::new(
            (0.0, 0.0),
            vec![Artifact::at(0.0, 10.0), Artifact::at(10.0, 0.0)],
            DecodeZone::Rect { min: (500.0, 300.0), max: (600.0, 400.0) },
        );
        let params = MatchParams { robot_speed: 10.0, ..Default::default() };
        let result = PlanEngine::new(PlanSetup { field, params }).unwrap().run();
        assert_eq!(result.steps[0].artifact_index, 0);
        assert_eq!(result.steps[1].artifact_index, 1);
    }

    #[test]
    fn test_finishing_at_the_buzzer_is_allowed() {
        // Exactly enough time for one pickup: travel 1s + pickup 1s = 2s.
        let field = FieldModel::new(
            (0.0, 0.0),
            vec![Artifact::at(1.0, 0.0)],
            DecodeZone::Rect { min: (500.0, 300.0), max: (600.0, 400.0) },
        );
        let params = MatchParams {
            robot_speed: 1.0,
            pickup_time: 1.0,
            match_time: 2.0,
            auton_time: 0.0,
            ..Default::default()
        };
        let result = PlanEngine::new(PlanSetup { field, params }).unwrap().run();
        assert_eq!(result.artifacts_collected, 1);
        assert_eq!(result.time_used, 2.0);
    }

    #[test]
    fn test_no_duplicate_artifacts_in_path() {
        let setup =
            PlanSetup { field: default_field_layout(), params: MatchParams::default() };
        let result = PlanEngine::new(setup).unwrap().run();
        let mut seen = std::collections::HashSet::new();
        for step in &result.steps {
            assert!(seen.insert(step.artifact_index), "artifact visited twice: {:?}", step);
        }
    }

    #[test]
    fn test_score_is_sum_of_steps() {
        let setup =
            PlanSetup { field: default_field_layout(), params: MatchParams::default() };
        let result = PlanEngine::new(setup).unwrap().run();
        let sum: f32 = result.steps.iter().map(|s| s.gained).sum();
        assert!((sum - result.total_score).abs() < 1e-4, "{} vs {}", sum, result.total_score);
    }

    #[test]
    fn test_time_breakdown_sums_to_time_used() {
        let setup =
            PlanSetup { field: default_field_layout(), params: MatchParams::default() };
        let result = PlanEngine::new(setup).unwrap().run();
        let sum = result.time_breakdown.autonomous + result.time_breakdown.teleop;
        assert!((sum - result.time_used).abs() < 1e-4);
        assert!(result.time_used <= MatchParams::default().match_time);
    }

    #[test]
    fn test_per_artifact_point_value_override() {
        let field = FieldModel::new(
            (0.0, 0.0),
            vec![Artifact { pos: (1.0, 0.0), point_value: Some(20.0) }],
            DecodeZone::Rect { min: (500.0, 300.0), max: (600.0, 400.0) },
        );
        let params = MatchParams {
            robot_speed: 1.0,
            pickup_time: 0.0,
            match_time: 10.0,
            auton_time: 0.0,
            ..Default::default()
        };
        let result = PlanEngine::new(PlanSetup { field, params }).unwrap().run();
        assert_eq!(result.total_score, 20.0);
    }

    #[test]
    fn test_determinism_repeated_runs() {
        let setup =
            PlanSetup { field: default_field_layout(), params: MatchParams::default() };
        let engine = PlanEngine::new(setup).unwrap();
        assert_eq!(engine.run(), engine.run(), "same setup should produce the same plan");
    }

    #[test]
    fn test_invalid_params_rejected_at_construction() {
        let setup = PlanSetup {
            field: default_field_layout(),
            params: MatchParams { robot_speed: 0.0, ..Default::default() },
        };
        assert!(PlanEngine::new(setup).is_err());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_params() -> impl Strategy<Value = MatchParams> {
            (1.0f32..500.0, 0.0f32..10.0, 10.0f32..300.0).prop_map(
                |(robot_speed, pickup_time, teleop_len)| MatchParams {
                    robot_speed,
                    pickup_time,
                    match_time: 30.0 + teleop_len,
                    auton_time: 30.0,
                    ..Default::default()
                },
            )
        }

        fn arb_field() -> impl Strategy<Value = FieldModel> {
            (0usize..40, any::<u64>())
                .prop_map(|(count, seed)| crate::field::random_field_layout(count, seed))
        }

        proptest! {
            /// Property: the path never visits an artifact twice
            #[test]
            fn prop_no_duplicate_visits(field in arb_field(), params in arb_params()) {
                let result = PlanEngine::new(PlanSetup { field, params }).expect("valid setup").run();
                let mut seen = std::collections::HashSet::new();
                for step in &result.steps {
                    prop_assert!(seen.insert(step.artifact_index));
                }
            }

            /// Property: timestamps along the path strictly increase
            #[test]
            fn prop_timestamps_increase(field in arb_field(), mut params in arb_params()) {
                // distinct artifact positions plus a real pickup duration
                params.pickup_time = params.pickup_time.max(0.1);
                let result = PlanEngine::new(PlanSetup { field, params }).expect("valid setup").run();
                for pair in result.steps.windows(2) {
                    prop_assert!(pair[1].time_at_pickup > pair[0].time_at_pickup);
                }
            }

            /// Property: the clock never overruns the match
            #[test]
            fn prop_time_within_match(field in arb_field(), params in arb_params()) {
                let match_time = params.match_time;
                let result = PlanEngine::new(PlanSetup { field, params }).expect("valid setup").run();
                prop_assert!(result.time_used <= match_time + 1e-3);
            }

            /// Property: shrinking the match duration never collects more
            #[test]
            fn prop_collected_monotone_in_duration(
                field in arb_field(),
                params in arb_params(),
                cut in 0.1f32..0.9f32,
            ) {
                let longer = PlanEngine::new(PlanSetup {
                    field: field.clone(),
                    params: params.clone(),
                }).expect("valid setup").run();
                let mut shorter_params = params;
                shorter_params.match_time =
                    (shorter_params.match_time * cut).max(shorter_params.auton_time + 0.1);
                let shorter = PlanEngine::new(PlanSetup { field, params: shorter_params })
                    .expect("valid setup")
                    .run();
                prop_assert!(shorter.artifacts_collected <= longer.artifacts_collected);
            }

            /// Property: total score equals the sum over steps
            #[test]
            fn prop_score_sums(field in arb_field(), params in arb_params()) {
                let result = PlanEngine::new(PlanSetup { field, params }).expect("valid setup").run();
                let sum: f32 = result.steps.iter().map(|s| s.gained).sum();
                prop_assert!((sum - result.total_score).abs() < 1e-2);
            }
        }
    }
}

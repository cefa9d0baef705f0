//! Field layout presets and generators
//!
//! Three ways to obtain a [`FieldModel`]:
//! - the built-in default layout (fixed, reproducible),
//! - a seeded random scatter (same seed = same layout),
//! - manual entry parsed from a `"x,y;x,y;..."` string.

use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::geometry::{self, bounds};
use super::{Artifact, DecodeZone, FieldModel};

/// Margin kept between randomly placed artifacts and the field walls
const RANDOM_WALL_MARGIN: f32 = 40.0;

static DEFAULT_LAYOUT: Lazy<FieldModel> = Lazy::new(|| {
    FieldModel::new(
        (50.0, 200.0),
        vec![
            Artifact::at(200.0, 80.0),
            Artifact::at(250.0, 160.0),
            Artifact::at(300.0, 240.0),
            Artifact::at(220.0, 320.0),
            Artifact::at(420.0, 90.0),
            Artifact::at(470.0, 160.0),
            Artifact::at(520.0, 220.0),
            Artifact::at(430.0, 300.0),
        ],
        DecodeZone::Circle { center: (470.0, 160.0), radius: 70.0 },
    )
});

/// Built-in reproducible layout: eight artifacts on the 600x400 field with
/// the decode zone over the right-hand cluster.
pub fn default_field_layout() -> FieldModel {
    DEFAULT_LAYOUT.clone()
}

/// Seeded random layout: `count` artifacts scattered uniformly inside the
/// field walls (with a margin), start and decode zone from the default
/// layout. Same seed produces the same field.
pub fn random_field_layout(count: usize, seed: u64) -> FieldModel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let artifacts = (0..count)
        .map(|_| {
            Artifact::at(
                rng.gen_range(RANDOM_WALL_MARGIN..=bounds::WIDTH - RANDOM_WALL_MARGIN),
                rng.gen_range(RANDOM_WALL_MARGIN..=bounds::HEIGHT - RANDOM_WALL_MARGIN),
            )
        })
        .collect();
    let preset = default_field_layout();
    FieldModel::new(preset.start, artifacts, preset.decode_zone)
}

/// Parse a manual artifact entry string, e.g. `"200,80;250,160;300,240"`.
///
/// Blank segments are skipped; segments that do not parse as an `x,y` pair
/// are logged and skipped rather than failing the whole entry, since this is
/// a planning aid rather than a hard-validation surface. Out-of-bounds
/// positions are clamped to the field.
pub fn parse_artifact_list(input: &str) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    for segment in input.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let mut parts = segment.splitn(2, ',');
        let parsed = match (parts.next(), parts.next()) {
            (Some(x), Some(y)) => match (x.trim().parse::<f32>(), y.trim().parse::<f32>()) {
                (Ok(x), Ok(y)) => Some((x, y)),
                _ => None,
            },
            _ => None,
        };
        match parsed {
            Some(pos) => {
                artifacts.push(Artifact { pos: geometry::clamp_to_bounds(pos), point_value: None })
            }
            None => log::warn!("Could not parse artifact position: {:?}", segment),
        }
    }
    artifacts
}

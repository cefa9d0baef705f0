//! Strategy planner CLI
//!
//! Runs one planning simulation (or a parameter sweep) and renders the
//! result as text, JSON or SVG.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use ds_core::{
    analysis, api::TipEntry, coach, default_field_layout, parse_artifact_list,
    random_field_layout, simulate, FieldModel, MatchParams, ScoringRules,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ds_cli")]
#[command(about = "Estimate a robot's collection strategy for one match", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run one planning simulation
    Plan {
        /// Field layout: "default", "random", or an artifact list "x,y;x,y;..."
        #[arg(long, default_value = "default")]
        layout: String,

        /// Artifact count for --layout random
        #[arg(long, default_value = "8")]
        count: usize,

        /// RNG seed for --layout random
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Robot speed in field units per second
        #[arg(long)]
        speed: Option<f32>,

        /// Pickup time per artifact, seconds
        #[arg(long)]
        pickup: Option<f32>,

        /// Total match time, seconds
        #[arg(long)]
        match_time: Option<f32>,

        /// Autonomous window, seconds
        #[arg(long)]
        auton_time: Option<f32>,

        /// Scoring rules YAML file
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,

        /// Write an SVG rendering of the field and path
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Sweep one parameter and tabulate score sensitivity
    Sweep {
        /// Swept parameter: "match-time" or "speed"
        #[arg(long, default_value = "match-time")]
        parameter: String,

        /// Lowest swept value
        #[arg(long)]
        min: f32,

        /// Highest swept value
        #[arg(long)]
        max: f32,

        /// Number of grid points
        #[arg(long, default_value = "10")]
        steps: usize,

        /// Field layout: "default", "random", or an artifact list "x,y;x,y;..."
        #[arg(long, default_value = "default")]
        layout: String,

        /// Artifact count for --layout random
        #[arg(long, default_value = "8")]
        count: usize,

        /// RNG seed for --layout random
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            layout,
            count,
            seed,
            speed,
            pickup,
            match_time,
            auton_time,
            rules,
            format,
            svg,
        } => {
            let field = build_field(&layout, count, seed);
            let params = build_params(speed, pickup, match_time, auton_time, rules)?;
            let result = simulate(&field, &params)?;
            let tips = coach::tips_for(&params, &result);

            match format.as_str() {
                "json" => {
                    let entries: Vec<TipEntry> = tips
                        .iter()
                        .map(|&code| TipEntry { code, message: code.message() })
                        .collect();
                    let doc = serde_json::json!({
                        "field": field,
                        "result": result,
                        "tips": entries,
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
                "text" => {
                    println!("🤖 Strategy plan ({} artifacts)", field.artifact_count());
                    ds_cli::render::print_summary(&params, &result);
                    ds_cli::render::print_step_table(&result);
                    println!("\n🗺 Field map");
                    println!("{}", ds_cli::render::ascii_map(&field, &result));
                    ds_cli::render::print_tips(&tips);
                }
                other => anyhow::bail!("Unknown format: {other} (expected \"text\" or \"json\")"),
            }

            if let Some(path) = svg {
                write_svg(&path, &field, &result)?;
            }
        }

        Commands::Sweep { parameter, min, max, steps, layout, count, seed } => {
            let field = build_field(&layout, count, seed);
            let params = MatchParams::default();
            let grid = analysis::linear_grid(min, max, steps);

            match parameter.as_str() {
                "match-time" => {
                    let points = analysis::sweep_match_duration(&field, &params, &grid)?;
                    ds_cli::render::print_sweep_table("Match(s)", &points);
                }
                "speed" => {
                    let points = analysis::sweep_robot_speed(&field, &params, &grid)?;
                    ds_cli::render::print_sweep_table("Speed", &points);
                }
                other => anyhow::bail!(
                    "Unknown parameter: {other} (expected \"match-time\" or \"speed\")"
                ),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn build_field(layout: &str, count: usize, seed: u64) -> FieldModel {
    match layout {
        "default" => default_field_layout(),
        "random" => random_field_layout(count, seed),
        list => {
            // manual artifact list; start and zone come from the preset
            let preset = default_field_layout();
            FieldModel::new(preset.start, parse_artifact_list(list), preset.decode_zone)
        }
    }
}

#[cfg(feature = "cli")]
fn build_params(
    speed: Option<f32>,
    pickup: Option<f32>,
    match_time: Option<f32>,
    auton_time: Option<f32>,
    rules: Option<PathBuf>,
) -> Result<MatchParams> {
    let mut params = MatchParams::default();

    if let Some(path) = rules {
        let yaml = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        params.scoring = ScoringRules::from_yaml(&yaml)
            .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;
    }

    if let Some(v) = speed {
        params.robot_speed = v;
    }
    if let Some(v) = pickup {
        params.pickup_time = v;
    }
    if let Some(v) = match_time {
        params.match_time = v;
    }
    if let Some(v) = auton_time {
        params.auton_time = v;
    }

    Ok(params)
}

#[cfg(feature = "cli")]
fn write_svg(path: &PathBuf, field: &FieldModel, result: &ds_core::PlanResult) -> Result<()> {
    let svg = ds_cli::svg::SvgPlanRenderer::new(field, result, ds_cli::svg::SvgConfig::default())
        .with_title(format!(
            "{} collected, {:.1} pts",
            result.artifacts_collected, result.total_score
        ))
        .render();
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG: {}", path.display()))?;
    println!("\n📄 SVG saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ds_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

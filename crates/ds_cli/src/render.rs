//! Text rendering for plan results
//!
//! Summary metrics, the per-step table and an ASCII field map. All functions
//! build strings or print to stdout; nothing here feeds back into planning.

use ds_core::analysis::SweepPoint;
use ds_core::field::geometry::bounds;
use ds_core::{CoachTip, FieldModel, MatchParams, PlanResult};

/// Character cells in the ASCII map (x direction)
const MAP_COLS: usize = 60;
/// Character cells in the ASCII map (y direction)
const MAP_ROWS: usize = 20;

pub fn print_summary(params: &MatchParams, result: &PlanResult) {
    println!("\n🔎 Strategy summary");
    println!("   Expected score:      {:.1} pts", result.total_score);
    println!(
        "   Used time:           {:.1} s / {:.0} s",
        result.time_used, params.match_time
    );
    println!(
        "   Phase split:         {:.1} s auton, {:.1} s teleop",
        result.time_breakdown.autonomous, result.time_breakdown.teleop
    );
    println!("   Artifacts collected: {}", result.artifacts_collected);
    println!("   Artifacts remaining: {}", result.artifacts_remaining);
}

pub fn print_step_table(result: &PlanResult) {
    if result.steps.is_empty() {
        println!("\n(no reachable artifacts)");
        return;
    }
    println!(
        "\n{:>5} {:>8} {:>8} {:>10} {:>10} {:>7} {:>8}",
        "Order", "X", "Y", "Travel(s)", "At(s)", "Auton", "Points"
    );
    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "{:>5} {:>8.1} {:>8.1} {:>10.2} {:>10.2} {:>7} {:>8.2}",
            i + 1,
            step.pos.0,
            step.pos.1,
            step.travel_time,
            step.time_at_pickup,
            if step.in_auton { "yes" } else { "no" },
            step.gained
        );
    }
}

pub fn print_tips(tips: &[CoachTip]) {
    println!("\nCoach tips:");
    for tip in tips {
        println!("  - {}", tip.message());
    }
}

pub fn print_sweep_table(label: &str, points: &[SweepPoint]) {
    println!(
        "\n{:>12} {:>10} {:>10} {:>10}",
        label, "Collected", "Score", "Used(s)"
    );
    for point in points {
        println!(
            "{:>12.1} {:>10} {:>10.1} {:>10.1}",
            point.value, point.artifacts_collected, point.total_score, point.time_used
        );
    }
}

/// Render the field and path as a character grid.
///
/// Legend: `S` start, digits/`*` visiting order, `o` unreached artifact,
/// `~` decode zone, `.` open field.
pub fn ascii_map(field: &FieldModel, result: &PlanResult) -> String {
    let mut grid = vec![vec!['.'; MAP_COLS]; MAP_ROWS];

    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if field.is_in_decode_zone(cell_center(col, row)) {
                *cell = '~';
            }
        }
    }

    for artifact in &field.artifacts {
        let (col, row) = cell_of(artifact.pos);
        grid[row][col] = 'o';
    }
    for (order, step) in result.steps.iter().enumerate() {
        let (col, row) = cell_of(step.pos);
        grid[row][col] = order_marker(order);
    }
    let (col, row) = cell_of(field.start);
    grid[row][col] = 'S';

    let mut out = String::with_capacity((MAP_COLS + 3) * (MAP_ROWS + 2));
    out.push('+');
    out.push_str(&"-".repeat(MAP_COLS));
    out.push_str("+\n");
    for cells in &grid {
        out.push('|');
        out.extend(cells.iter());
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(MAP_COLS));
    out.push('+');
    out
}

fn order_marker(order: usize) -> char {
    match order {
        0..=8 => char::from_digit(order as u32 + 1, 10).unwrap_or('*'),
        _ => '*',
    }
}

fn cell_of(pos: (f32, f32)) -> (usize, usize) {
    let col = (pos.0 / bounds::WIDTH * MAP_COLS as f32) as usize;
    let row = (pos.1 / bounds::HEIGHT * MAP_ROWS as f32) as usize;
    (col.min(MAP_COLS - 1), row.min(MAP_ROWS - 1))
}

fn cell_center(col: usize, row: usize) -> (f32, f32) {
    (
        (col as f32 + 0.5) / MAP_COLS as f32 * bounds::WIDTH,
        (row as f32 + 0.5) / MAP_ROWS as f32 * bounds::HEIGHT,
    )
}

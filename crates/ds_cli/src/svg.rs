//! SVG visualization of a planned run
//!
//! Renders the field, decode zone, artifacts and the planned path to SVG
//! format. The SVG serves as a shareable audit file showing:
//! - The field with the decode zone
//! - Every artifact, numbered in visiting order where reached
//! - The robot start position and the planned path

use std::fmt::Write as _;

use ds_core::field::geometry::bounds;
use ds_core::{DecodeZone, FieldModel, PlanResult};

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Field background color
    pub field: &'static str,
    /// Decode zone fill
    pub zone: &'static str,
    /// Unreached artifact color
    pub artifact: &'static str,
    /// Collected artifact color
    pub collected: &'static str,
    /// Start marker color
    pub start: &'static str,
    /// Path polyline color
    pub path: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            field: "#F8F8F8",
            zone: "#2222AA",
            artifact: "#888888",
            collected: "#AA2222",
            start: "#22AA22",
            path: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per field unit
    pub scale: f32,
    /// Path line width
    pub path_width: f32,
    /// Artifact marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the field in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            path_width: 3.0,
            marker_radius: 6.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG plan renderer
pub struct SvgPlanRenderer<'a> {
    config: SvgConfig,
    field: &'a FieldModel,
    result: &'a PlanResult,
    title: Option<String>,
}

impl<'a> SvgPlanRenderer<'a> {
    pub fn new(field: &'a FieldModel, result: &'a PlanResult, config: SvgConfig) -> Self {
        Self { config, field, result, title: None }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn px(&self, pos: (f32, f32)) -> (f32, f32) {
        (
            self.config.padding + pos.0 * self.config.scale,
            self.config.padding + pos.1 * self.config.scale,
        )
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let width = bounds::WIDTH * self.config.scale + 2.0 * self.config.padding;
        let height = bounds::HEIGHT * self.config.scale + 2.0 * self.config.padding;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(&mut svg, "<!-- generated {} -->", chrono::Utc::now().to_rfc3339()).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        // Field background
        let origin = self.px((0.0, 0.0));
        writeln!(
            &mut svg,
            r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="#333333"/>"##,
            origin.0,
            origin.1,
            bounds::WIDTH * self.config.scale,
            bounds::HEIGHT * self.config.scale,
            self.config.colors.field
        )
        .unwrap();

        self.write_zone(&mut svg);
        self.write_path(&mut svg);
        self.write_artifacts(&mut svg);
        self.write_start(&mut svg);

        if let Some(title) = &self.title {
            writeln!(
                &mut svg,
                r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="14">{}</text>"#,
                origin.0,
                self.config.padding * 0.7,
                title
            )
            .unwrap();
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn write_zone(&self, svg: &mut String) {
        match &self.field.decode_zone {
            DecodeZone::Circle { center, radius } => {
                let c = self.px(*center);
                writeln!(
                    svg,
                    r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="0.15" stroke="{}"/>"#,
                    c.0,
                    c.1,
                    radius * self.config.scale,
                    self.config.colors.zone,
                    self.config.colors.zone
                )
                .unwrap();
            }
            DecodeZone::Rect { min, max } => {
                let lo = self.px(*min);
                writeln!(
                    svg,
                    r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="0.15" stroke="{}"/>"#,
                    lo.0,
                    lo.1,
                    (max.0 - min.0) * self.config.scale,
                    (max.1 - min.1) * self.config.scale,
                    self.config.colors.zone,
                    self.config.colors.zone
                )
                .unwrap();
            }
        }
    }

    fn write_path(&self, svg: &mut String) {
        if self.result.steps.is_empty() {
            return;
        }
        let mut points = String::new();
        let start = self.px(self.field.start);
        write!(&mut points, "{:.1},{:.1}", start.0, start.1).unwrap();
        for step in &self.result.steps {
            let p = self.px(step.pos);
            write!(&mut points, " {:.1},{:.1}", p.0, p.1).unwrap();
        }
        writeln!(
            svg,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-dasharray="6 3"/>"#,
            points, self.config.colors.path, self.config.path_width
        )
        .unwrap();
    }

    fn write_artifacts(&self, svg: &mut String) {
        // visiting order by artifact index, where reached
        let mut order: Vec<Option<usize>> = vec![None; self.field.artifacts.len()];
        for (i, step) in self.result.steps.iter().enumerate() {
            order[step.artifact_index] = Some(i + 1);
        }

        for (idx, artifact) in self.field.artifacts.iter().enumerate() {
            let p = self.px(artifact.pos);
            let color = if order[idx].is_some() {
                self.config.colors.collected
            } else {
                self.config.colors.artifact
            };
            writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                p.0, p.1, self.config.marker_radius, color
            )
            .unwrap();
            let label = match order[idx] {
                Some(n) => format!("{}", n),
                None => "-".to_string(),
            };
            writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="middle">{}</text>"#,
                p.0,
                p.1 - self.config.marker_radius - 3.0,
                label
            )
            .unwrap();
        }
    }

    fn write_start(&self, svg: &mut String) {
        let p = self.px(self.field.start);
        let r = self.config.marker_radius + 2.0;
        writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            p.0 - r,
            p.1 - r,
            2.0 * r,
            2.0 * r,
            self.config.colors.start
        )
        .unwrap();
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="middle">Start</text>"#,
            p.0,
            p.1 + r + 12.0
        )
        .unwrap();
    }
}

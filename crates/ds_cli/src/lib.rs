//! Presentation glue for the planner: text rendering and SVG export.
//!
//! Kept as a library so the rendering code is testable without the `cli`
//! feature; the binary in `main.rs` is a thin argument-parsing shell.

pub mod render;
pub mod svg;

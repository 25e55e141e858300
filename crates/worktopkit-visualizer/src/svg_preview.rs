//! SVG rendering of projected panel geometry
//! Draw order: sides, bottom, top, cut-out, then dimension labels.

use crate::projection::{EdgeLabel, ProjectedGeometry};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Shown when the active panel has no length or width
pub const NO_DIMENSIONS_PLACEHOLDER: &str = "No dimensions";

/// Shown when no panel is active
pub const NO_SELECTION_PLACEHOLDER: &str = "Select a worktop";

/// Colors and stroke widths of the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewPalette {
    pub side_fill: String,
    pub bottom_fill: String,
    pub top_fill: String,
    pub inner_fill: String,
    pub edge_stroke: String,
    pub top_stroke: String,
    pub label_color: String,
    pub face_stroke_width: f64,
    pub label_stroke_width: f64,
}

impl Default for PreviewPalette {
    fn default() -> Self {
        Self {
            side_fill: "#444444".to_string(),
            bottom_fill: "#555555".to_string(),
            top_fill: "#666666".to_string(),
            inner_fill: "#222222".to_string(),
            edge_stroke: "#888888".to_string(),
            top_stroke: "#AAAAAA".to_string(),
            label_color: "white".to_string(),
            face_stroke_width: 0.05,
            label_stroke_width: 0.02,
        }
    }
}

fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_polygon(svg: &mut String, points: &[DVec2], fill: &str, stroke: &str, width: f64) {
    let _ = writeln!(
        svg,
        r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        points_attr(points),
        fill,
        stroke,
        width
    );
}

fn push_label(svg: &mut String, label: &EdgeLabel, palette: &PreviewPalette) {
    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        label.line_start.x,
        label.line_start.y,
        label.line_end.x,
        label.line_end.y,
        palette.label_color,
        palette.label_stroke_width
    );

    let transform = if label.rotation_deg != 0.0 {
        format!(
            r#" transform="rotate({} {} {})""#,
            label.rotation_deg, label.anchor.x, label.anchor.y
        )
    } else {
        String::new()
    };
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle"{}>{}</text>"#,
        label.anchor.x,
        label.anchor.y,
        label.font_size,
        palette.label_color,
        transform,
        escape_text(&label.text)
    );
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render one panel as a standalone SVG document
pub fn render_svg(geometry: &ProjectedGeometry, palette: &PreviewPalette) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" preserveAspectRatio="xMidYMid meet">"#,
        geometry.viewport.to_svg_attr()
    );

    for face in geometry.side_faces() {
        push_polygon(
            &mut svg,
            &face,
            &palette.side_fill,
            &palette.edge_stroke,
            palette.face_stroke_width,
        );
    }
    push_polygon(
        &mut svg,
        &geometry.bottom,
        &palette.bottom_fill,
        &palette.edge_stroke,
        palette.face_stroke_width,
    );
    push_polygon(
        &mut svg,
        &geometry.top,
        &palette.top_fill,
        &palette.top_stroke,
        palette.face_stroke_width,
    );
    if let Some(inner) = &geometry.inner {
        push_polygon(
            &mut svg,
            inner,
            &palette.inner_fill,
            &palette.top_stroke,
            palette.face_stroke_width,
        );
    }

    push_label(&mut svg, &geometry.length_label, palette);
    push_label(&mut svg, &geometry.width_label, palette);

    svg.push_str("</svg>\n");
    svg
}

/// Render a centered placeholder message instead of geometry
pub fn render_placeholder(message: &str, palette: &PreviewPalette) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10" preserveAspectRatio="xMidYMid meet">"#
    );
    let _ = writeln!(
        svg,
        r#"  <text x="10" y="5" font-size="1" fill="{}" text-anchor="middle">{}</text>"#,
        palette.label_color,
        escape_text(message)
    );
    svg.push_str("</svg>\n");
    svg
}

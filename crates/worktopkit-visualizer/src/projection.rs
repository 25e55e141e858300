//! Isometric projection of a panel
//!
//! A panel is drawn as a thin slab: the top face at z = 0, the bottom face
//! at z = -thickness, and an optional cut-out centered in the top face. Each
//! 3D point maps to screen space with
//!
//! ```text
//! x' = (x - y) * sqrt(3)/2
//! y' = (x + y) * 0.5 - z
//! ```
//!
//! Corner order is the same on every face (origin, +length, +length+width,
//! +width), so index `i` of the top face sits above index `i` of the bottom
//! face and side faces connect `i` to `(i + 1) % 4`.

use crate::viewport::{Bounds, ViewBox};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;
use worktopkit_core::units::{format_dimension_label, MeasurementUnit};
use worktopkit_core::{PanelDimensions, PanelSpec};

/// `sqrt(3) / 2`
pub const ISO_COS: f64 = 0.866_025_403_784_438_6;

/// Project a 3D point to isometric screen space
#[inline]
pub fn project(p: DVec3) -> DVec2 {
    DVec2::new((p.x - p.y) * ISO_COS, (p.x + p.y) * 0.5 - p.z)
}

/// Four corners of an axis-aligned rectangle at height `z`
pub fn rectangle_corners(origin: DVec2, length: f64, width: f64, z: f64) -> [DVec3; 4] {
    [
        DVec3::new(origin.x, origin.y, z),
        DVec3::new(origin.x + length, origin.y, z),
        DVec3::new(origin.x + length, origin.y + width, z),
        DVec3::new(origin.x, origin.y + width, z),
    ]
}

fn project_all(corners: [DVec3; 4]) -> [DVec2; 4] {
    corners.map(project)
}

/// Constants shaping the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewStyle {
    /// Slab thickness in display units (not a priced quantity)
    pub thickness: f64,
    /// Margin added around the projected geometry
    pub padding: f64,
    /// Distance between an edge and its dimension line
    pub label_offset: f64,
    /// Extra lift of the length text above its dimension line
    pub label_text_offset: f64,
    pub label_font_size: f64,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            padding: 1.0,
            label_offset: 0.5,
            label_text_offset: 0.8,
            label_font_size: 0.7,
        }
    }
}

/// Dimension label drawn next to an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    /// e.g. `"200 cm"`
    pub text: String,
    pub line_start: DVec2,
    pub line_end: DVec2,
    /// Text anchor (middle of the text)
    pub anchor: DVec2,
    /// Clockwise rotation in degrees, in (-90, 90]
    pub rotation_deg: f64,
    pub font_size: f64,
}

/// Screen-space geometry of one panel, ready to be filled as polygons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedGeometry {
    pub top: [DVec2; 4],
    pub bottom: [DVec2; 4],
    /// Present when both cut-out dimensions are non-zero
    pub inner: Option<[DVec2; 4]>,
    pub viewport: ViewBox,
    /// Along the top-front edge (corner 0 to 1)
    pub length_label: EdgeLabel,
    /// Along the top-right edge (corner 1 to 2)
    pub width_label: EdgeLabel,
}

impl ProjectedGeometry {
    /// The four side quads, each `[top i, top j, bottom j, bottom i]`
    pub fn side_faces(&self) -> [[DVec2; 4]; 4] {
        std::array::from_fn(|i| {
            let j = (i + 1) % 4;
            [self.top[i], self.top[j], self.bottom[j], self.bottom[i]]
        })
    }
}

/// Screen angle of the edge `a -> b`, folded into (-90, 90] so text stays upright
pub fn edge_angle_deg(a: DVec2, b: DVec2) -> f64 {
    let d = b - a;
    let mut angle = d.y.atan2(d.x).to_degrees();
    while angle > 90.0 {
        angle -= 180.0;
    }
    while angle <= -90.0 {
        angle += 180.0;
    }
    angle
}

/// Builds preview geometry for panels
#[derive(Debug, Clone, Default)]
pub struct IsometricProjector {
    style: PreviewStyle,
}

impl IsometricProjector {
    pub fn new(style: PreviewStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PreviewStyle {
        &self.style
    }

    /// Project a panel; `None` when its length or width is zero.
    pub fn project_panel(&self, panel: &PanelSpec) -> Option<ProjectedGeometry> {
        let geometry = self.project_dimensions(&panel.dimensions());
        if geometry.is_none() {
            debug!(panel = %panel.id, "no renderable geometry");
        }
        geometry
    }

    /// Project parsed dimensions; `None` when length or width is zero.
    pub fn project_dimensions(&self, dims: &PanelDimensions) -> Option<ProjectedGeometry> {
        if !dims.is_renderable() {
            return None;
        }

        let length = dims.length_cm;
        let width = dims.width_cm;
        let s = &self.style;

        let top = project_all(rectangle_corners(DVec2::ZERO, length, width, 0.0));
        let bottom = project_all(rectangle_corners(DVec2::ZERO, length, width, -s.thickness));

        let inner_origin = DVec2::new(
            (length - dims.inner_length_cm) / 2.0,
            (width - dims.inner_width_cm) / 2.0,
        );
        let inner_points = project_all(rectangle_corners(
            inner_origin,
            dims.inner_length_cm,
            dims.inner_width_cm,
            0.0,
        ));

        // The cut-out corners count towards the viewport even when only one
        // of its dimensions is set.
        let mut bounds = Bounds::new();
        bounds.extend(&top);
        bounds.extend(&bottom);
        bounds.extend(&inner_points);
        let viewport = bounds.finalize_with_padding(s.padding);

        let length_shift = DVec2::new(0.0, -s.label_offset);
        let length_line = (top[0] + length_shift, top[1] + length_shift);
        let length_label = EdgeLabel {
            text: format_dimension_label(length, MeasurementUnit::Centimeter),
            line_start: length_line.0,
            line_end: length_line.1,
            anchor: (top[0] + top[1]) / 2.0 + DVec2::new(0.0, -s.label_text_offset),
            rotation_deg: 0.0,
            font_size: s.label_font_size,
        };

        let width_shift = DVec2::new(s.label_offset, 0.0);
        let width_label = EdgeLabel {
            text: format_dimension_label(width, MeasurementUnit::Centimeter),
            line_start: top[1] + width_shift,
            line_end: top[2] + width_shift,
            anchor: (top[1] + top[2]) / 2.0 + width_shift,
            rotation_deg: edge_angle_deg(top[1], top[2]),
            font_size: s.label_font_size,
        };

        Some(ProjectedGeometry {
            top,
            bottom,
            inner: dims.has_inner_cut().then_some(inner_points),
            viewport,
            length_label,
            width_label,
        })
    }
}

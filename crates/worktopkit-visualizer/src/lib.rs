//! # WorktopKit Visualizer
//!
//! Isometric preview of a single panel.
//! Projects the panel slab and its cut-out to screen space, places the
//! dimension labels and renders the result as SVG.

pub mod preview;
pub mod projection;
pub mod svg_preview;
pub mod viewport;

pub use preview::Preview;

pub use projection::{
    edge_angle_deg, project, EdgeLabel, IsometricProjector, PreviewStyle, ProjectedGeometry,
    ISO_COS,
};

pub use svg_preview::{
    render_placeholder, render_svg, PreviewPalette, NO_DIMENSIONS_PLACEHOLDER,
    NO_SELECTION_PLACEHOLDER,
};

pub use viewport::{Bounds, ViewBox};

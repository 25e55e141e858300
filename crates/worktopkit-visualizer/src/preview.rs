//! What the preview area shows for the current selection

use crate::projection::{IsometricProjector, ProjectedGeometry};
use crate::svg_preview::{
    render_placeholder, render_svg, PreviewPalette, NO_DIMENSIONS_PLACEHOLDER,
    NO_SELECTION_PLACEHOLDER,
};
use worktopkit_core::PanelSpec;

/// Preview state derived from the active panel
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// No panel is active
    NoSelection,
    /// The active panel has a zero length or width
    NoDimensions,
    Geometry(Box<ProjectedGeometry>),
}

impl Preview {
    /// Derive the preview for the active panel, if any
    pub fn for_panel(projector: &IsometricProjector, panel: Option<&PanelSpec>) -> Self {
        match panel {
            None => Preview::NoSelection,
            Some(panel) => match projector.project_panel(panel) {
                Some(geometry) => Preview::Geometry(Box::new(geometry)),
                None => Preview::NoDimensions,
            },
        }
    }

    /// Placeholder text, when there is no geometry to draw
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Preview::NoSelection => Some(NO_SELECTION_PLACEHOLDER),
            Preview::NoDimensions => Some(NO_DIMENSIONS_PLACEHOLDER),
            Preview::Geometry(_) => None,
        }
    }

    pub fn geometry(&self) -> Option<&ProjectedGeometry> {
        match self {
            Preview::Geometry(g) => Some(g.as_ref()),
            _ => None,
        }
    }

    /// Render as SVG: the geometry, or the placeholder message
    pub fn to_svg(&self, palette: &PreviewPalette) -> String {
        match self {
            Preview::Geometry(g) => render_svg(g, palette),
            other => render_placeholder(other.placeholder().unwrap_or_default(), palette),
        }
    }
}

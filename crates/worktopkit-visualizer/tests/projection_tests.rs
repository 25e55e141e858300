use glam::DVec2;
use proptest::prelude::*;
use worktopkit_core::{PanelId, PanelSpec};
use worktopkit_visualizer::{
    render_svg, IsometricProjector, PreviewPalette, PreviewStyle, ProjectedGeometry,
};

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn assert_point(p: DVec2, x: f64, y: f64) {
    assert_eq!((round1(p.x), round1(p.y)), (x, y), "point {:?}", p);
}

fn project(length: &str, width: &str) -> Option<ProjectedGeometry> {
    let panel = PanelSpec::new(PanelId(1)).with_size(length, width);
    IsometricProjector::default().project_panel(&panel)
}

#[test]
fn test_top_face_corners() {
    let g = project("200", "100").expect("renderable");
    assert_point(g.top[0], 0.0, 0.0);
    assert_point(g.top[1], 173.2, 100.0);
    assert_point(g.top[2], 86.6, 150.0);
    assert_point(g.top[3], -86.6, 50.0);
}

#[test]
fn test_bottom_face_is_offset_by_thickness() {
    let g = project("200", "100").expect("renderable");
    for (top, bottom) in g.top.iter().zip(g.bottom.iter()) {
        assert!((bottom.x - top.x).abs() < 1e-9);
        assert!((bottom.y - top.y - 2.0).abs() < 1e-9);
    }
}

#[test]
fn test_viewport_encloses_slab_with_padding() {
    let g = project("200", "100").expect("renderable");
    let vb = g.viewport;
    assert!((vb.min_x - (-86.6025 - 1.0)).abs() < 1e-3);
    assert!((vb.min_y - (-1.0)).abs() < 1e-9);
    assert!((vb.max_x() - (173.2051 + 1.0)).abs() < 1e-3);
    assert!((vb.max_y() - 153.0).abs() < 1e-9);
    for p in g.top.iter().chain(g.bottom.iter()) {
        assert!(vb.contains(*p));
    }
}

#[test]
fn test_zero_dimension_is_not_renderable() {
    assert!(project("0", "60").is_none());
    assert!(project("200", "").is_none());
    assert!(project("abc", "60").is_none());
}

#[test]
fn test_inner_cut_is_centered() {
    let panel = PanelSpec::new(PanelId(1))
        .with_size("200", "100")
        .with_inner_cut("50", "20");
    let g = IsometricProjector::default()
        .project_panel(&panel)
        .expect("renderable");
    let inner = g.inner.expect("cut-out present");

    // (75, 40) projects to ((75-40)*sqrt(3)/2, (75+40)/2)
    assert_point(inner[0], 30.3, 57.5);
    // (125, 60)
    assert_point(inner[2], 56.3, 92.5);
}

#[test]
fn test_inner_cut_needs_both_dimensions() {
    let panel = PanelSpec::new(PanelId(1))
        .with_size("200", "100")
        .with_inner_cut("50", "0");
    let g = IsometricProjector::default()
        .project_panel(&panel)
        .expect("renderable");
    assert!(g.inner.is_none());
}

#[test]
fn test_edge_labels() {
    let g = project("200", "100").expect("renderable");

    assert_eq!(g.length_label.text, "200 cm");
    assert_eq!(g.length_label.rotation_deg, 0.0);
    assert!((g.length_label.line_start.y - (-0.5)).abs() < 1e-9);
    assert!((g.length_label.anchor.y - (50.0 - 0.8)).abs() < 1e-9);

    assert_eq!(g.width_label.text, "100 cm");
    assert!((g.width_label.rotation_deg - (-30.0)).abs() < 1e-9);
    assert!((g.width_label.line_start.x - (g.top[1].x + 0.5)).abs() < 1e-9);
    assert!((g.width_label.line_end.x - (g.top[2].x + 0.5)).abs() < 1e-9);
}

#[test]
fn test_fractional_label_text() {
    let g = project("200.5", "60").expect("renderable");
    assert_eq!(g.length_label.text, "200.5 cm");
}

#[test]
fn test_custom_thickness() {
    let projector = IsometricProjector::new(PreviewStyle {
        thickness: 4.0,
        ..Default::default()
    });
    let panel = PanelSpec::new(PanelId(1)).with_size("10", "10");
    let g = projector.project_panel(&panel).expect("renderable");
    assert!((g.bottom[0].y - 4.0).abs() < 1e-9);
}

#[test]
fn test_side_faces_connect_neighbouring_corners() {
    let g = project("200", "100").expect("renderable");
    let sides = g.side_faces();
    assert_eq!(sides[3][0], g.top[3]);
    assert_eq!(sides[3][1], g.top[0]);
    assert_eq!(sides[3][2], g.bottom[0]);
    assert_eq!(sides[3][3], g.bottom[3]);
}

#[test]
fn test_svg_output() {
    let panel = PanelSpec::new(PanelId(1))
        .with_size("200", "100")
        .with_inner_cut("50", "20");
    let g = IsometricProjector::default()
        .project_panel(&panel)
        .expect("renderable");
    let svg = render_svg(&g, &PreviewPalette::default());

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<polygon").count(), 7);
    assert!(svg.contains("fill=\"#666666\""));
    assert!(svg.contains("fill=\"#222222\""));
    assert!(svg.contains(">200 cm</text>"));
    assert!(svg.contains(">100 cm</text>"));
    assert!(svg.contains("rotate("));
}

proptest! {
    #[test]
    fn prop_viewport_contains_all_corners(l in 1u32..2000, w in 1u32..2000) {
        let g = project(&l.to_string(), &w.to_string()).expect("renderable");
        for p in g.top.iter().chain(g.bottom.iter()) {
            prop_assert!(g.viewport.contains(*p));
        }
        prop_assert!(g.viewport.width > 0.0);
        prop_assert!(g.viewport.height > 0.0);
    }

    #[test]
    fn prop_width_label_angle_is_fixed(l in 1u32..2000, w in 1u32..2000) {
        let g = project(&l.to_string(), &w.to_string()).expect("renderable");
        prop_assert!((g.width_label.rotation_deg + 30.0).abs() < 1e-6);
    }
}

//! Panel geometry
//!
//! Area and perimeter of a panel, recomputed from its raw fields on every
//! call. Lengths are entered in centimeters; area is returned in square
//! meters and perimeter in meters.

use crate::data::PanelSpec;
use crate::units::{cm2_to_m2, cm_to_m, to_number};

/// Outer area in m²: `length * width / 10000`
pub fn area_m2(panel: &PanelSpec) -> f64 {
    cm2_to_m2(to_number(&panel.length_cm) * to_number(&panel.width_cm))
}

/// Perimeter of the outer outline in m: `(length * 2 + width * 2) / 100`
pub fn auto_perimeter_m(panel: &PanelSpec) -> f64 {
    cm_to_m(to_number(&panel.length_cm) * 2.0 + to_number(&panel.width_cm) * 2.0)
}

/// Perimeter used for edge finishing.
///
/// In custom mode the custom field is authoritative even when it is empty or
/// malformed; it never falls back to the outline perimeter.
pub fn perimeter_m(panel: &PanelSpec) -> f64 {
    if panel.use_custom_perimeter {
        to_number(&panel.custom_perimeter_m)
    } else {
        auto_perimeter_m(panel)
    }
}

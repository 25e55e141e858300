//! Viewport helpers for the 2D preview.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bounding box accumulator used while projecting corners.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    pub fn update(&mut self, p: DVec2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn extend<'a>(&mut self, points: impl IntoIterator<Item = &'a DVec2>) {
        for p in points {
            self.update(*p);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Grow the box by a fixed `padding` on every side.
    ///
    /// An empty or non-finite box yields a unit box around the origin.
    pub fn finalize_with_padding(self, padding: f64) -> ViewBox {
        if !self.is_valid() {
            return ViewBox {
                min_x: -padding,
                min_y: -padding,
                width: padding * 2.0,
                height: padding * 2.0,
            };
        }

        ViewBox {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            width: self.max_x - self.min_x + padding * 2.0,
            height: self.max_y - self.min_y + padding * 2.0,
        }
    }
}

/// Display rectangle in screen space, as used by an SVG `viewBox`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x() && p.y >= self.min_y && p.y <= self.max_y()
    }

    /// `viewBox` attribute value: `"min_x min_y width height"`
    pub fn to_svg_attr(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_is_added_on_every_side() {
        let mut bounds = Bounds::new();
        bounds.update(DVec2::new(-2.0, 1.0));
        bounds.update(DVec2::new(4.0, 3.0));
        let vb = bounds.finalize_with_padding(1.0);
        assert_eq!(vb.min_x, -3.0);
        assert_eq!(vb.min_y, 0.0);
        assert_eq!(vb.width, 8.0);
        assert_eq!(vb.height, 4.0);
        assert_eq!(vb.max_x(), 5.0);
        assert_eq!(vb.to_svg_attr(), "-3 0 8 4");
    }

    #[test]
    fn test_empty_bounds_fallback() {
        let vb = Bounds::new().finalize_with_padding(1.0);
        assert_eq!(vb.width, 2.0);
        assert!(vb.contains(DVec2::ZERO));
    }
}

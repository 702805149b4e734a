//! Shape generation for 2D primitives
//!
//! Backends without rounded rectangles or ellipse outlines build them from
//! rectangles, circles and line segments produced here.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::Rect;

/// A rounded rectangle split into plain pieces
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectParts {
    /// Full-width band and full-height band (x, y, w, h)
    pub bands: [[f32; 4]; 2],
    /// Corner circle centres, clockwise from top-left
    pub corners: [Vec2; 4],
    pub radius: f32,
}

/// Split a rounded rectangle into two overlapping bands and four corner
/// circles. The radius is clamped to half the shorter side.
pub fn rounded_rect_parts(rect: Rect, radius: f32) -> RoundedRectParts {
    let (x, y, w, h) = (rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32);
    let r = radius.clamp(0.0, w.min(h) / 2.0);

    RoundedRectParts {
        bands: [[x, y + r, w, h - 2.0 * r], [x + r, y, w - 2.0 * r, h]],
        corners: [
            Vec2::new(x + r, y + r),
            Vec2::new(x + w - r, y + r),
            Vec2::new(x + w - r, y + h - r),
            Vec2::new(x + r, y + h - r),
        ],
        radius: r,
    }
}

/// Points around the ellipse inscribed in `rect`. The first point is
/// repeated at the end so consecutive pairs form a closed outline.
pub fn ellipse_points(rect: Rect, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    let center = Vec2::new(
        rect.x as f32 + rect.w as f32 / 2.0,
        rect.y as f32 + rect.h as f32 / 2.0,
    );
    let rx = rect.w as f32 / 2.0;
    let ry = rect.h as f32 / 2.0;

    (0..=segments)
        .map(|i| {
            let theta = (i % segments) as f32 / segments as f32 * TAU;
            center + Vec2::new(rx * theta.cos(), ry * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_parts() {
        let parts = rounded_rect_parts(Rect::new(10, 20, 48, 64), 8.0);
        assert_eq!(parts.radius, 8.0);
        assert_eq!(parts.bands[0], [10.0, 28.0, 48.0, 48.0]);
        assert_eq!(parts.bands[1], [18.0, 20.0, 32.0, 64.0]);
        assert_eq!(parts.corners[0], Vec2::new(18.0, 28.0));
        assert_eq!(parts.corners[2], Vec2::new(50.0, 76.0));
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        let parts = rounded_rect_parts(Rect::new(0, 0, 10, 40), 30.0);
        assert_eq!(parts.radius, 5.0);

        let square = rounded_rect_parts(Rect::new(0, 0, 10, 10), 0.0);
        assert_eq!(square.bands[0], [0.0, 0.0, 10.0, 10.0]);
    }

    #[test]
    fn test_ellipse_points_closed_and_on_curve() {
        let rect = Rect::new(0, 0, 40, 20);
        let points = ellipse_points(rect, 32);
        assert_eq!(points.len(), 33);
        assert_eq!(points.first(), points.last());

        for p in &points {
            let nx = (p.x - 20.0) / 20.0;
            let ny = (p.y - 10.0) / 10.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-4);
        }
    }
}

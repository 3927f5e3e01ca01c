//! 2D-Punkt als reiner Werttyp.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt auf der Zeichenfläche (Canvas-Koordinaten, y nach unten).
///
/// Reiner Werttyp ohne Identität: Verschieben ersetzt den gespeicherten Wert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-Koordinate
    pub x: f64,
    /// Y-Koordinate
    pub y: f64,
}

impl Point {
    /// Ursprung (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Erstellt einen neuen Punkt.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lineare Interpolation `(1-t)·a + t·b`.
    ///
    /// `t = 0` liefert exakt `a`, `t = 1` exakt `b`.
    #[inline]
    pub fn lerp(a: Point, b: Point, t: f64) -> Point {
        let s = 1.0 - t;
        Point {
            x: s * a.x + t * b.x,
            y: s * a.y + t * b.y,
        }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Point::new(0.1, 0.7);
        let b = Point::new(13.3, -2.9);
        assert_eq!(Point::lerp(a, b, 0.0), a);
        assert_eq!(Point::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let p = Point::lerp(Point::new(0.0, 0.0), Point::new(10.0, 4.0), 0.5);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 2.0);
    }

    #[test]
    fn test_dvec2_roundtrip() {
        let p = Point::from(DVec2::new(3.0, 4.0));
        assert_eq!(p, Point::new(3.0, 4.0));
        assert_eq!(DVec2::from(p), DVec2::new(3.0, 4.0));
    }
}

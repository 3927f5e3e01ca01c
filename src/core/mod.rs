//! Core-Domänentypen: Punkte, Kontrollpunkt-Menge, Hit-Test, Bézier-Auswertung.

pub mod bezier;
pub mod control_points;
pub mod point;

pub use bezier::{evaluate_point, evaluate_point_recursive, evaluate_polyline, BezierError};
pub use control_points::{ControlPointError, ControlPointSet};
pub use hit_test::{find_nearest, HitBox};
pub use point::Point;

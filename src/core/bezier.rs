//! Bézier-Auswertung nach de Casteljau.
//!
//! Alle Funktionen sind rein: Sie bekommen die Kontrollpunkte als Slice und
//! lesen keinen weiteren Zustand. Damit kann nie gegen eine halb mutierte
//! Punktmenge ausgewertet werden.
//!
//! Rekursive Definition:
//! - `B(0, i, t) = P[i]`
//! - `B(r, i, t) = (1-t)·B(r-1, i, t) + t·B(r-1, i+1, t)`
//! - Kurvenpunkt = `B(N-1, 0, t)`
//!
//! Die naive Rekursion braucht `O(2^N)` Aufrufe pro `t`. Standardmäßig wird die
//! gleichwertige Dreieckstabelle (`O(N²)` pro `t`) verwendet; die Rekursion
//! bleibt als [`evaluate_point_recursive`] zum Gegenprüfen erhalten.

use super::Point;
use thiserror::Error;

/// Obergrenze für Stützstellen einer Polylinie (schützt vor winzigen Schrittweiten).
pub const MAX_POLYLINE_SAMPLES: usize = 1_000_000;

/// Ungültige Argumente für die Kurvenauswertung.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BezierError {
    /// Kurve ohne Kontrollpunkte ist nicht definiert
    #[error("Bézier-Auswertung ohne Kontrollpunkte")]
    NoControlPoints,
    /// Schrittweite muss endlich, > 0 und nicht zu klein sein
    #[error("ungültige Schrittweite {step} (erwartet: endlich, > 0, höchstens {MAX_POLYLINE_SAMPLES} Stützstellen)")]
    InvalidStep { step: f64 },
    /// Kurvenparameter außerhalb von [0, 1] oder NaN
    #[error("Kurvenparameter t = {t} außerhalb von [0, 1]")]
    ParameterOutOfRange { t: f64 },
}

fn check_parameter(t: f64) -> Result<(), BezierError> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(BezierError::ParameterOutOfRange { t })
    }
}

/// Wertet die Kurve bei `t` aus (Dreieckstabelle).
pub fn evaluate_point(points: &[Point], t: f64) -> Result<Point, BezierError> {
    if points.is_empty() {
        return Err(BezierError::NoControlPoints);
    }
    check_parameter(t)?;

    let mut scratch = Vec::with_capacity(points.len());
    Ok(evaluate_with_scratch(points, t, &mut scratch))
}

/// Wertet die Kurve bei `t` über die wörtliche Rekursion aus.
///
/// Exponentielle Laufzeit in der Anzahl der Kontrollpunkte; nur für kleine
/// Mengen, Tests und Benchmarks gedacht.
pub fn evaluate_point_recursive(points: &[Point], t: f64) -> Result<Point, BezierError> {
    if points.is_empty() {
        return Err(BezierError::NoControlPoints);
    }
    check_parameter(t)?;

    Ok(casteljau_recursive(points, points.len() - 1, 0, t))
}

fn casteljau_recursive(points: &[Point], r: usize, i: usize, t: f64) -> Point {
    if r == 0 {
        return points[i];
    }
    let p1 = casteljau_recursive(points, r - 1, i, t);
    let p2 = casteljau_recursive(points, r - 1, i + 1, t);
    Point::lerp(p1, p2, t)
}

/// Dreieckstabelle in einem wiederverwendbaren Puffer.
///
/// Nach Stufe `r` hält `scratch[i]` den Wert `B(r, i, t)`; die Reihenfolge der
/// Gleitkommaoperationen ist identisch zur Rekursion.
fn evaluate_with_scratch(points: &[Point], t: f64, scratch: &mut Vec<Point>) -> Point {
    scratch.clear();
    scratch.extend_from_slice(points);

    let n = scratch.len();
    for r in 1..n {
        for i in 0..n - r {
            scratch[i] = Point::lerp(scratch[i], scratch[i + 1], t);
        }
    }
    scratch[0]
}

/// Tastet die Kurve bei `t = 0, step, 2·step, …` (solange `t <= 1`) ab.
///
/// `t` wird pro Stützstelle als `k · step` berechnet, nicht aufsummiert. Liegt die
/// letzte Stützstelle nicht exakt auf `t = 1`, wird der Endpunkt explizit angehängt,
/// das letzte Element ist also immer `evaluate_point(points, 1.0)`.
pub fn evaluate_polyline(points: &[Point], step: f64) -> Result<Vec<Point>, BezierError> {
    if points.is_empty() {
        return Err(BezierError::NoControlPoints);
    }
    if !step.is_finite() || step <= 0.0 || 1.0 / step >= MAX_POLYLINE_SAMPLES as f64 {
        return Err(BezierError::InvalidStep { step });
    }

    let mut scratch = Vec::with_capacity(points.len());
    let mut polyline = Vec::with_capacity((1.0 / step) as usize + 2);
    let mut last_t = 0.0;

    let mut k: u32 = 0;
    loop {
        let t = f64::from(k) * step;
        if t > 1.0 {
            break;
        }
        polyline.push(evaluate_with_scratch(points, t, &mut scratch));
        last_t = t;
        k += 1;
    }

    if last_t < 1.0 {
        polyline.push(evaluate_with_scratch(points, 1.0, &mut scratch));
    }

    Ok(polyline)
}

//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::bezier::MAX_POLYLINE_SAMPLES;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Halbbreite der Hitbox um einen Kontrollpunkt (Canvas-Einheiten).
pub const HIT_TOLERANCE: f64 = 10.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Schrittweite im Parameterraum beim Abtasten der Kurve.
pub const CURVE_STEP: f64 = 0.005;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 2.0;
/// Farbe der Kurve (RGBA: IndianRed #CD5C5C).
pub const CURVE_COLOR: [f32; 4] = [0.804, 0.361, 0.361, 1.0];

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Scheiben.
pub const POINT_RADIUS: f32 = 4.0;
/// Umrandungsstärke der Kontrollpunkt-Scheiben.
pub const POINT_OUTLINE_WIDTH: f32 = 2.0;
/// Farbe der Kontrollpunkte (RGBA: Gelb).
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Kontrollpolygon ─────────────────────────────────────────────────

/// Linienstärke des Kontrollpolygons.
pub const CONTROL_POLYGON_WIDTH: f32 = 2.0;
/// Farbe des Kontrollpolygons (RGBA: MediumSeaGreen #3CB371).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.235, 0.702, 0.443, 1.0];

// ── Hintergrund ─────────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche.
pub const BACKGROUND_COLOR: [f32; 4] = [0.08, 0.08, 0.1, 1.0];

/// Zeichenreihenfolge von Kurve, Kontrollpolygon und Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveLayering {
    /// Punkte zuerst, Kurve und Polygon darüber
    #[default]
    PointsFirst,
    /// Kurve und Polygon zuerst, Punkte obenauf
    CurveFirst,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Hitbox-Halbbreite für Drag und Löschen
    pub hit_tolerance: f64,

    // ── Kurve ───────────────────────────────────────────────────
    /// Schrittweite im Parameterraum (0 < step)
    pub curve_step: f64,
    /// Linienstärke der Kurve
    pub curve_width: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],

    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Radius der Kontrollpunkt-Scheiben
    pub point_radius: f32,
    /// Umrandungsstärke der Kontrollpunkte
    pub point_outline_width: f32,
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],

    // ── Kontrollpolygon ─────────────────────────────────────────
    /// Linienstärke des Kontrollpolygons
    pub control_polygon_width: f32,
    /// Farbe des Kontrollpolygons
    pub control_polygon_color: [f32; 4],
    /// Kontrollpolygon beim Start sichtbar
    pub show_control_polygon_default: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Zeichenreihenfolge
    pub layering: CurveLayering,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,

            curve_step: CURVE_STEP,
            curve_width: CURVE_WIDTH,
            curve_color: CURVE_COLOR,

            point_radius: POINT_RADIUS,
            point_outline_width: POINT_OUTLINE_WIDTH,
            point_color: POINT_COLOR,

            control_polygon_width: CONTROL_POLYGON_WIDTH,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            show_control_polygon_default: true,

            background_color: BACKGROUND_COLOR,
            layering: CurveLayering::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Schrittweite muss endlich, > 0 und groß genug für höchstens
    /// `MAX_POLYLINE_SAMPLES` Stützstellen sein; Toleranz und Radius endlich und >= 0.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !is_usable_step(self.curve_step) {
            log::warn!(
                "Ungültige Schrittweite {} in Optionen, verwende {}",
                self.curve_step,
                defaults.curve_step
            );
            self.curve_step = defaults.curve_step;
        }
        if !(self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0) {
            log::warn!(
                "Ungültige Hit-Toleranz {} in Optionen, verwende {}",
                self.hit_tolerance,
                defaults.hit_tolerance
            );
            self.hit_tolerance = defaults.hit_tolerance;
        }
        if !(self.point_radius.is_finite() && self.point_radius >= 0.0) {
            log::warn!(
                "Ungültiger Punkt-Radius {} in Optionen, verwende {}",
                self.point_radius,
                defaults.point_radius
            );
            self.point_radius = defaults.point_radius;
        }

        self
    }
}

/// Gleiche Grenze wie `evaluate_polyline`.
fn is_usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0 && 1.0 / step < MAX_POLYLINE_SAMPLES as f64
}

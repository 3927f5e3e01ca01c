//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{evaluate_polyline, Point};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Kurvenreihenfolge (Arc für O(1)-Clone pro Listener)
    pub control_points: Arc<[Point]>,
    /// Kontrollpolygon zeichnen
    pub show_control_polygon: bool,
    /// Kurve wurde seit dem letzten Leeren mindestens einmal angefordert
    pub curve_requested: bool,
    /// Laufzeit-Optionen für Farben, Größen, Schrittweite
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Kontrollpunkte vorhanden sind.
    pub fn has_points(&self) -> bool {
        !self.control_points.is_empty()
    }

    /// Gibt zurück, ob die Kurve in diesem Frame gezeichnet werden soll.
    pub fn should_draw_curve(&self) -> bool {
        self.curve_requested && self.has_points()
    }

    /// Berechnet die Kurven-Polylinie bei Bedarf.
    ///
    /// `None` bedeutet "noch nichts zu zeichnen": keine Kurve angefordert, keine
    /// Punkte oder ungültige Schrittweite.
    pub fn curve_polyline(&self) -> Option<Vec<Point>> {
        if !self.curve_requested {
            return None;
        }
        match evaluate_polyline(&self.control_points, self.options.curve_step) {
            Ok(polyline) => Some(polyline),
            Err(e) => {
                log::debug!("Keine Kurve zu zeichnen: {}", e);
                None
            }
        }
    }
}

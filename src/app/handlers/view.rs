//! Handler für Darstellung: Kontrollpolygon, Kurvenanforderung, Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Blendet das Kontrollpolygon ein oder aus.
pub fn toggle_control_polygon(state: &mut AppState) {
    state.view.show_control_polygon = !state.view.show_control_polygon;
    state.view.request_redraw();
    log::info!(
        "Kontrollpolygon {}",
        if state.view.show_control_polygon {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}

/// Fordert die Kurvenanzeige an; bleibt bis zum nächsten Leeren aktiv.
pub fn request_curve(state: &mut AppState) {
    if state.control_points.is_empty() {
        log::debug!("Kurve angefordert, aber noch keine Kontrollpunkte vorhanden");
        return;
    }
    state.view.curve_requested = true;
    state.view.request_redraw();
}

/// Übernimmt neue Laufzeit-Optionen (ungültige Werte werden ersetzt).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options.sanitized();
    state.view.request_redraw();
    log::info!("Optionen übernommen");
}

//! Handler für Kontrollpunkt-Editing und Add-Modus.

use crate::app::state::DragState;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Hängt einen Kontrollpunkt an der Klickposition an.
pub fn add_control_point(state: &mut AppState, pos: Point) {
    use_cases::editing::add_control_point(state, pos);
}

/// Entfernt den Kontrollpunkt an `index`.
pub fn delete_control_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::editing::delete_control_point(state, index)
}

/// Löscht alle Kontrollpunkte.
pub fn clear_all(state: &mut AppState) {
    use_cases::editing::clear_all(state);
}

/// Schaltet den Add-Modus um. Add und Drag schließen sich aus: ein laufender
/// Drag endet beim Einschalten.
pub fn toggle_adding_mode(state: &mut AppState) {
    state.interaction.mode = state.interaction.mode.toggled();
    if state.interaction.is_adding_points() {
        state.interaction.drag = DragState::Idle;
    }
    log::info!("Eingabemodus: {:?}", state.interaction.mode);
}

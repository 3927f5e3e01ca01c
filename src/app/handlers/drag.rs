//! Handler für den Drag-Lifecycle von Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Startet einen Drag auf Kontrollpunkt `index`.
pub fn begin(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::drag::begin_drag(state, index)
}

/// Verschiebt den gezogenen Kontrollpunkt.
pub fn move_to(state: &mut AppState, pos: Point) -> anyhow::Result<()> {
    use_cases::drag::move_dragged_point(state, pos)
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

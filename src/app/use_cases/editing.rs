//! Use-Cases: Kontrollpunkte hinzufügen, löschen, alles leeren.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::Point;

/// Hängt einen neuen Kontrollpunkt an das Ende der Kurve an.
pub fn add_control_point(state: &mut AppState, pos: Point) {
    let index = state.control_points.add(pos);
    state.view.request_redraw();

    log::info!(
        "Kontrollpunkt {} an Position ({:.1}, {:.1}) hinzugefügt",
        index,
        pos.x,
        pos.y
    );
}

/// Entfernt den Kontrollpunkt an `index`; nachfolgende Punkte rücken auf.
///
/// Betrifft das Löschen den gerade gezogenen Punkt oder einen davor, wird der
/// Drag beendet, damit der festgehaltene Index nie auf einen anderen Punkt zeigt.
pub fn delete_control_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let removed = state.control_points.remove_at(index)?;

    if let DragState::Dragging { index: dragged } = state.interaction.drag {
        if index <= dragged {
            log::debug!("Drag auf Punkt {} durch Löschen beendet", dragged);
            state.interaction.drag = DragState::Idle;
        }
    }

    state.view.request_redraw();
    log::info!(
        "Kontrollpunkt {} ({:.1}, {:.1}) gelöscht, {} verbleibend",
        index,
        removed.x,
        removed.y,
        state.control_points.len()
    );
    Ok(())
}

/// Löscht alle Kontrollpunkte, beendet einen laufenden Drag und setzt die
/// Kurvenanforderung zurück.
pub fn clear_all(state: &mut AppState) {
    let count = state.control_points.len();
    state.control_points.clear();
    state.interaction.drag = DragState::Idle;
    state.view.curve_requested = false;
    state.view.request_redraw();

    log::info!("Zeichenfläche geleert ({} Kontrollpunkte entfernt)", count);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_points(n: usize) -> AppState {
        let mut state = AppState::new();
        for i in 0..n {
            state.control_points.add(Point::new(i as f64 * 10.0, 0.0));
        }
        state
    }

    #[test]
    fn test_add_requests_redraw() {
        let mut state = AppState::new();
        add_control_point(&mut state, Point::new(1.0, 2.0));
        assert_eq!(state.control_points.as_slice(), &[Point::new(1.0, 2.0)]);
        assert!(state.view.take_redraw());
    }

    #[test]
    fn test_delete_before_dragged_point_ends_drag() {
        let mut state = state_with_points(3);
        state.interaction.drag = DragState::Dragging { index: 2 };
        delete_control_point(&mut state, 0).expect("Index gültig");
        assert_eq!(state.interaction.drag, DragState::Idle);
    }

    #[test]
    fn test_delete_after_dragged_point_keeps_drag() {
        let mut state = state_with_points(3);
        state.interaction.drag = DragState::Dragging { index: 0 };
        delete_control_point(&mut state, 2).expect("Index gültig");
        assert_eq!(state.interaction.drag, DragState::Dragging { index: 0 });
    }

    #[test]
    fn test_delete_out_of_range_is_error_without_redraw() {
        let mut state = state_with_points(1);
        assert!(delete_control_point(&mut state, 5).is_err());
        assert!(!state.view.take_redraw());
        assert_eq!(state.control_points.len(), 1);
    }

    #[test]
    fn test_clear_all_resets_curve_and_drag() {
        let mut state = state_with_points(2);
        state.view.curve_requested = true;
        state.interaction.drag = DragState::Dragging { index: 1 };
        clear_all(&mut state);
        assert!(state.control_points.is_empty());
        assert!(!state.view.curve_requested);
        assert_eq!(state.interaction.drag, DragState::Idle);
        assert!(state.view.take_redraw());
    }
}

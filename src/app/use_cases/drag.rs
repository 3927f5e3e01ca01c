//! Use-Cases: Drag-Lifecycle eines Kontrollpunkts (Begin → Move → End).

use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::Point;

/// Beginnt einen Drag auf Kontrollpunkt `index`.
///
/// Der Index wird für den gesamten Drag festgehalten.
pub fn begin_drag(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    // Index gegen die aktuelle Menge prüfen, bevor er festgehalten wird
    state.control_points.at(index)?;
    state.interaction.drag = DragState::Dragging { index };
    log::debug!("Drag auf Kontrollpunkt {} gestartet", index);
    Ok(())
}

/// Setzt den gezogenen Kontrollpunkt auf `pos`. Ohne aktiven Drag: No-op.
pub fn move_dragged_point(state: &mut AppState, pos: Point) -> anyhow::Result<()> {
    let Some(index) = state.interaction.drag.index() else {
        return Ok(());
    };
    state.control_points.replace_at(index, pos)?;
    state.view.request_redraw();
    Ok(())
}

/// Beendet einen Drag. Ist auch ohne aktiven Drag erlaubt.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.interaction.drag.index() {
        log::debug!("Drag auf Kontrollpunkt {} beendet", index);
    }
    state.interaction.drag = DragState::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle_replaces_point() {
        let mut state = AppState::new();
        state.control_points.add(Point::new(0.0, 0.0));
        state.control_points.add(Point::new(10.0, 10.0));

        begin_drag(&mut state, 1).expect("Index gültig");
        assert!(!state.view.take_redraw());

        move_dragged_point(&mut state, Point::new(20.0, 30.0)).expect("Drag aktiv");
        assert_eq!(state.control_points.get(1), Some(Point::new(20.0, 30.0)));
        assert!(state.view.take_redraw());

        end_drag(&mut state);
        assert_eq!(state.interaction.drag, DragState::Idle);
    }

    #[test]
    fn test_begin_drag_rejects_invalid_index() {
        let mut state = AppState::new();
        assert!(begin_drag(&mut state, 0).is_err());
        assert_eq!(state.interaction.drag, DragState::Idle);
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut state = AppState::new();
        state.control_points.add(Point::new(0.0, 0.0));
        move_dragged_point(&mut state, Point::new(5.0, 5.0)).expect("No-op");
        assert_eq!(state.control_points.get(0), Some(Point::new(0.0, 0.0)));
        assert!(!state.view.take_redraw());
    }

    #[test]
    fn test_end_drag_when_idle_is_safe() {
        let mut state = AppState::new();
        end_drag(&mut state);
        end_drag(&mut state);
        assert_eq!(state.interaction.drag, DragState::Idle);
    }
}

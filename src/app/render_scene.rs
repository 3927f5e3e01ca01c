//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        control_points: Arc::from(state.control_points.as_slice()),
        show_control_polygon: state.view.show_control_polygon,
        curve_requested: state.view.curve_requested,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::Point;

    #[test]
    fn build_snapshots_points_and_flags() {
        let mut state = AppState::new();
        state.control_points.add(Point::new(1.0, 2.0));
        state.view.curve_requested = true;
        state.view.show_control_polygon = false;

        let scene = build(&state);
        assert_eq!(&*scene.control_points, &[Point::new(1.0, 2.0)]);
        assert!(scene.curve_requested);
        assert!(!scene.show_control_polygon);

        // Snapshot bleibt unverändert, wenn der State weiterläuft
        state.control_points.add(Point::new(3.0, 4.0));
        assert_eq!(scene.control_points.len(), 1);
    }
}

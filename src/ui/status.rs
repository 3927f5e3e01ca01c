//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Control points: {}", state.point_count()));

            ui.separator();

            let mode = if state.interaction.is_adding_points() {
                "Adding points"
            } else {
                "Editing"
            };
            ui.label(format!("Mode: {}", mode));

            ui.separator();

            match state.interaction.drag {
                DragState::Dragging { index } => {
                    let pos = state.control_points.get(index).unwrap_or_default();
                    ui.label(format!(
                        "Dragging #{} at ({:.1}, {:.1})",
                        index, pos.x, pos.y
                    ));
                }
                DragState::Idle => {
                    ui.label("Drag: -");
                }
            }

            ui.separator();

            ui.label(if state.view.curve_requested {
                "Curve: shown"
            } else {
                "Curve: -"
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Tolerance: {:.1} | Step: {}",
                    state.options.hit_tolerance, state.options.curve_step
                ));
            });
        });
    });
}

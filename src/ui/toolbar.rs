//! Toolbar mit den Editor-Aktionen.

use crate::app::{AppIntent, AppState};

/// Beschriftung des Add-Modus-Buttons passend zum aktuellen Zustand.
pub fn adding_mode_label(adding: bool) -> &'static str {
    if adding {
        "Disable adding points option"
    } else {
        "Enable adding points option"
    }
}

/// Beschriftung des Polygon-Buttons passend zum aktuellen Zustand.
pub fn control_polygon_label(visible: bool) -> &'static str {
    if visible {
        "Remove control polygon"
    } else {
        "Add control polygon"
    }
}

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// `options_open` steuert das Optionen-Fenster; es ist reiner UI-Zustand.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &AppState,
    options_open: &mut bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let adding = state.interaction.is_adding_points();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(adding_mode_label(adding)).selected(adding))
                .clicked()
            {
                events.push(AppIntent::ToggleAddingModeRequested);
            }

            let polygon_visible = state.view.show_control_polygon;
            if ui
                .button(control_polygon_label(polygon_visible))
                .clicked()
            {
                events.push(AppIntent::ToggleControlPolygonRequested);
            }

            ui.separator();

            if ui
                .add_enabled(!state.control_points.is_empty(), egui::Button::new("Draw curve"))
                .clicked()
            {
                events.push(AppIntent::DrawCurveRequested);
            }

            if ui.button("Clear").clicked() {
                events.push(AppIntent::ClearAllRequested);
            }

            ui.separator();

            if ui
                .add(egui::Button::new("Options").selected(*options_open))
                .clicked()
            {
                *options_open = !*options_open;
            }
        });
    });

    events
}

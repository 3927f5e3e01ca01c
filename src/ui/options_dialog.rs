//! Optionen-Fenster für Toleranz, Schrittweite, Farben und Breiten.

use crate::app::AppIntent;
use crate::shared::{CurveLayering, EditorOptions};

/// Ergebnis eines Frames des Optionen-Fensters.
#[derive(Debug, Default)]
pub struct OptionsDialogOutput {
    /// Erzeugte Events (Live-Übernahme geänderter Optionen)
    pub events: Vec<AppIntent>,
    /// Zu speichernde Optionen (Arbeitskopie inkl. Änderungen dieses Frames)
    pub save: Option<EditorOptions>,
}

impl OptionsDialogOutput {
    /// Baut das Frame-Ergebnis aus der bearbeiteten Arbeitskopie.
    pub fn from_working_copy(opts: EditorOptions, changed: bool, save_requested: bool) -> Self {
        let save = save_requested.then(|| opts.clone().sanitized());
        let mut events = Vec::new();
        // Änderungen sofort anwenden (Live-Preview)
        if changed {
            events.push(AppIntent::OptionsChanged {
                options: Box::new(opts),
            });
        }
        Self { events, save }
    }
}

/// Zeigt das Optionen-Fenster, solange `open` gesetzt ist.
pub fn show_options_dialog(
    ctx: &egui::Context,
    current: &EditorOptions,
    open: &mut bool,
) -> OptionsDialogOutput {
    if !*open {
        return OptionsDialogOutput::default();
    }

    // Arbeitskopie für Live-Bearbeitung
    let mut opts = current.clone();
    let mut changed = false;
    let mut save_requested = false;

    egui::Window::new("Options")
        .open(open)
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.collapsing("Interaction", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Hit tolerance (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.hit_tolerance)
                                .range(1.0..=50.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            ui.collapsing("Curve", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Sampling step:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_step)
                                .range(0.0005..=0.5)
                                .speed(0.0005),
                        )
                        .changed();
                });
                changed |= width_edit(ui, "Width:", &mut opts.curve_width);
                changed |= color_edit(ui, "Color:", &mut opts.curve_color);
                ui.horizontal(|ui| {
                    ui.label("Layering:");
                    changed |= ui
                        .radio_value(&mut opts.layering, CurveLayering::PointsFirst, "Points first")
                        .changed();
                    changed |= ui
                        .radio_value(&mut opts.layering, CurveLayering::CurveFirst, "Curve first")
                        .changed();
                });
            });

            ui.collapsing("Control points", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_radius)
                                .range(1.0..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= width_edit(ui, "Outline:", &mut opts.point_outline_width);
                changed |= color_edit(ui, "Color:", &mut opts.point_color);
            });

            ui.collapsing("Control polygon", |ui| {
                changed |= width_edit(ui, "Width:", &mut opts.control_polygon_width);
                changed |= color_edit(ui, "Color:", &mut opts.control_polygon_color);
                changed |= ui
                    .checkbox(&mut opts.show_control_polygon_default, "Visible on start")
                    .changed();
            });

            changed |= color_edit(ui, "Background:", &mut opts.background_color);

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    opts = EditorOptions::default();
                    changed = true;
                }
                if ui.button("Save").clicked() {
                    save_requested = true;
                }
            });
        });

    OptionsDialogOutput::from_working_copy(opts, changed, save_requested)
}

fn width_edit(ui: &mut egui::Ui, label: &str, width: &mut f32) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(width).range(0.5..=10.0).speed(0.1))
            .changed()
    })
    .inner
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = [
                c.r() as f32 / 255.0,
                c.g() as f32 / 255.0,
                c.b() as f32 / 255.0,
                c.a() as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}

//! Bezier Curve Editor.
//!
//! Interaktiver Editor für Bézier-Kurven: Kontrollpunkte setzen, ziehen und
//! löschen, Kurve per de-Casteljau-Auswertung zeichnen.

use eframe::egui;
use bezier_curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> eframe::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> eframe::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Bezier Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Curve Editor",
            options,
            Box::new(|cc| Ok(Box::new(EditorApp::new(&cc.egui_ctx)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    options_open: bool,
}

impl EditorApp {
    fn new(ctx: &egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut controller = AppController::new();
        let repaint_ctx = ctx.clone();
        controller.on_redraw_requested(move |scene| {
            log::trace!(
                "Redraw angefordert ({} Kontrollpunkte)",
                scene.control_points.len()
            );
            repaint_ctx.request_repaint();
        });

        Self {
            state: AppState::with_options(editor_options),
            controller,
            input: ui::InputState::new(),
            options_open: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (events, options_to_save) = self.collect_ui_events(ctx);
        self.process_events(events);

        // Speichern erst nach den Events dieses Frames
        if let Some(options) = options_to_save {
            save_options(&options);
        }
    }
}

impl EditorApp {
    fn collect_ui_events(
        &mut self,
        ctx: &egui::Context,
    ) -> (Vec<AppIntent>, Option<EditorOptions>) {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(
            ctx,
            &self.state,
            &mut self.options_open,
        ));

        let dialog = ui::show_options_dialog(ctx, &self.state.options, &mut self.options_open);
        events.extend(dialog.events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let scene = self.controller.build_render_scene(&self.state);
                let (response, rect) = ui::show_canvas(ui, &scene);

                events.extend(self.input.collect_canvas_events(ui, &response));

                if !scene.has_points() && !self.state.interaction.is_adding_points() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Enable adding points, then click to place control points",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        (events, dialog.save)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

fn save_options(options: &EditorOptions) {
    let path = EditorOptions::config_path();
    if let Err(e) = options.save_to_file(&path) {
        log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
    }
}

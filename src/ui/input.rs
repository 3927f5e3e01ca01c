//! Canvas-Input-Handling: Maus-Events → AppIntent.

use super::canvas::screen_to_canvas;
use crate::app::AppIntent;
use crate::core::Point;

/// Roh-Eingaben eines Frames in Canvas-Koordinaten.
///
/// Trennt das Auslesen von egui von der Reihenfolge der erzeugten Intents.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Primärtaste über dem Canvas gedrückt
    pub pressed_at: Option<Point>,
    /// Zeiger hat sich bewegt
    pub moved_to: Option<Point>,
    /// Primärtaste losgelassen (egal wo)
    pub released: bool,
    /// Primärer Klick auf dem Canvas
    pub clicked_at: Option<Point>,
    /// Sekundärer Klick auf dem Canvas
    pub secondary_clicked_at: Option<Point>,
}

impl PointerFrame {
    /// Erzeugt die Intents in fester Reihenfolge: Press, Move, Release, Klicks.
    pub fn into_intents(self) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some(pos) = self.pressed_at {
            events.push(AppIntent::PointerPressed { pos });
        }
        if let Some(pos) = self.moved_to {
            events.push(AppIntent::PointerMoved { pos });
        }
        if self.released {
            events.push(AppIntent::PointerReleased);
        }
        if let Some(pos) = self.clicked_at {
            events.push(AppIntent::Clicked { pos });
        }
        if let Some(pos) = self.secondary_clicked_at {
            events.push(AppIntent::SecondaryClicked { pos });
        }

        events
    }
}

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Default)]
pub struct InputState {
    last_pointer: Option<Point>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let origin = response.rect.min;
        let to_canvas = |pos: egui::Pos2| screen_to_canvas(origin, pos);

        let (primary_pressed, primary_released, press_origin, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        let mut frame = PointerFrame::default();

        // Nur Presses, die egui dem Canvas zuordnet; überlagernde Fenster schlucken sie
        if primary_pressed && response.is_pointer_button_down_on() {
            // press_origin: exakte Position vor der Drag-Schwelle
            frame.pressed_at = press_origin.map(to_canvas);
        }

        if let Some(pos) = latest_pos.map(to_canvas) {
            if self.last_pointer != Some(pos) {
                frame.moved_to = Some(pos);
                self.last_pointer = Some(pos);
            }
        }

        frame.released = primary_released;

        if response.clicked_by(egui::PointerButton::Primary) {
            frame.clicked_at = response.interact_pointer_pos().map(to_canvas);
        }
        if response.secondary_clicked() {
            frame.secondary_clicked_at = response.interact_pointer_pos().map(to_canvas);
        }

        frame.into_intents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::ui::show_canvas;

    const SCREEN: egui::Vec2 = egui::vec2(800.0, 600.0);

    fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
            events,
            ..Default::default()
        }
    }

    fn primary_press(pos: egui::Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Führt einen Frame mit Canvas (und optional überlagerndem Fenster) aus
    /// und liefert die Canvas-Intents dieses Frames.
    fn run_frame(
        ctx: &egui::Context,
        input: &mut InputState,
        with_overlay: bool,
        events: Vec<egui::Event>,
    ) -> Vec<AppIntent> {
        let scene = build_render_scene(&AppState::new());
        let mut intents = Vec::new();
        let _ = ctx.run(raw_input(events), |ctx| {
            if with_overlay {
                egui::Window::new("Overlay")
                    .fixed_pos([100.0, 100.0])
                    .fixed_size([300.0, 200.0])
                    .show(ctx, |ui| {
                        ui.label("über dem Canvas");
                    });
            }
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let (response, _) = show_canvas(ui, &scene);
                    intents.extend(input.collect_canvas_events(ui, &response));
                });
        });
        intents
    }

    /// Layout-Frames, Zeiger positionieren, dann Press; gibt die Intents des Press-Frames zurück.
    fn press_at(with_overlay: bool, pos: egui::Pos2) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut input = InputState::new();
        run_frame(&ctx, &mut input, with_overlay, vec![]);
        run_frame(&ctx, &mut input, with_overlay, vec![]);
        run_frame(
            &ctx,
            &mut input,
            with_overlay,
            vec![egui::Event::PointerMoved(pos)],
        );
        run_frame(&ctx, &mut input, with_overlay, vec![primary_press(pos)])
    }

    #[test]
    fn test_press_on_canvas_emits_pointer_pressed() {
        let intents = press_at(false, egui::pos2(250.0, 200.0));
        assert!(
            intents
                .iter()
                .any(|i| matches!(i, AppIntent::PointerPressed { .. })),
            "Press auf dem Canvas sollte PointerPressed erzeugen: {intents:?}"
        );
    }

    #[test]
    fn test_press_on_overlay_window_is_not_a_canvas_press() {
        let intents = press_at(true, egui::pos2(250.0, 200.0));
        assert!(
            !intents
                .iter()
                .any(|i| matches!(i, AppIntent::PointerPressed { .. })),
            "Press auf einem Fenster darf keinen Canvas-Press erzeugen: {intents:?}"
        );
    }

    #[test]
    fn test_empty_frame_has_no_intents() {
        assert!(PointerFrame::default().into_intents().is_empty());
    }

    #[test]
    fn test_click_frame_order() {
        let pos = Point::new(4.0, 8.0);
        let frame = PointerFrame {
            moved_to: Some(pos),
            released: true,
            clicked_at: Some(pos),
            ..PointerFrame::default()
        };
        assert_eq!(
            frame.into_intents(),
            vec![
                AppIntent::PointerMoved { pos },
                AppIntent::PointerReleased,
                AppIntent::Clicked { pos },
            ]
        );
    }

    #[test]
    fn test_press_comes_before_move() {
        let press = Point::new(1.0, 1.0);
        let moved = Point::new(2.0, 3.0);
        let frame = PointerFrame {
            pressed_at: Some(press),
            moved_to: Some(moved),
            ..PointerFrame::default()
        };
        assert_eq!(
            frame.into_intents(),
            vec![
                AppIntent::PointerPressed { pos: press },
                AppIntent::PointerMoved { pos: moved },
            ]
        );
    }
}

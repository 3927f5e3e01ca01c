//! Zeichenfläche: setzt den `RenderSink`-Vertrag mit `egui::Painter` um.

use crate::core::Point;
use crate::render::{self, RenderSink};
use crate::shared::RenderScene;
use glam::DVec2;

/// Wandelt eine sRGB-Farbe mit Alpha (Kanäle 0..1) in eine egui-Farbe.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn pos_to_dvec2(pos: egui::Pos2) -> DVec2 {
    DVec2::new(f64::from(pos.x), f64::from(pos.y))
}

/// Canvas-Koordinaten (Ursprung oben links im Canvas) → Bildschirmposition.
pub fn canvas_to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    let screen = pos_to_dvec2(origin) + DVec2::from(p);
    egui::pos2(screen.x as f32, screen.y as f32)
}

/// Bildschirmposition → Canvas-Koordinaten (Rechnung in f64).
pub fn screen_to_canvas(origin: egui::Pos2, pos: egui::Pos2) -> Point {
    Point::from(pos_to_dvec2(pos) - pos_to_dvec2(origin))
}

/// `RenderSink` über einem egui-Painter, begrenzt auf das Canvas-Rechteck.
pub struct PainterSink<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSink<'a> {
    /// Erstellt einen Sink für das gegebene Canvas-Rechteck.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }
}

impl RenderSink for PainterSink<'_> {
    fn clear(&mut self, background: [f32; 4]) {
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(background));
    }

    fn fill_disc(&mut self, center: Point, radius: f32, color: [f32; 4]) {
        self.painter.circle_filled(
            canvas_to_screen(self.rect.min, center),
            radius,
            to_color32(color),
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: [f32; 4]) {
        let screen: Vec<egui::Pos2> = points
            .iter()
            .map(|p| canvas_to_screen(self.rect.min, *p))
            .collect();
        self.painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(width, to_color32(color)),
        ));
    }
}

/// Reserviert die Zeichenfläche im übergebenen UI-Bereich und zeichnet die Szene.
///
/// Gibt die Response (für Input) und das Canvas-Rechteck zurück.
pub fn show_canvas(ui: &mut egui::Ui, scene: &RenderScene) -> (egui::Response, egui::Rect) {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;

    let painter = painter.with_clip_rect(rect);
    let mut sink = PainterSink::new(&painter, rect);
    render::draw_scene(scene, &mut sink);

    (response, rect)
}

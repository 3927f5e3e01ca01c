//! Render-Pipeline: Vertrag zwischen Render-Szene und einer Zeichenfläche.
//!
//! Der Kern kennt keine konkrete Grafik-API. `draw_scene` legt fest, *was* in
//! welcher Reihenfolge gezeichnet wird; ein `RenderSink` (z.B. der egui-Painter
//! im UI-Layer) setzt die Primitive um.

use crate::core::Point;
use crate::shared::{CurveLayering, RenderScene};

/// Zeichenfläche, auf die eine Render-Szene ausgegeben wird.
pub trait RenderSink {
    /// Leert die Fläche mit der Hintergrundfarbe.
    fn clear(&mut self, background: [f32; 4]);

    /// Zeichnet eine gefüllte Kreisscheibe.
    fn fill_disc(&mut self, center: Point, radius: f32, color: [f32; 4]);

    /// Zeichnet einen offenen Linienzug durch `points`.
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: [f32; 4]);
}

/// Zeichnet eine komplette Szene.
///
/// Reihenfolge:
/// 1. Fläche leeren
/// 2. je nach `CurveLayering` Punkte vor oder nach Kurve + Polygon
///
/// Die Kurve erscheint nur, wenn sie angefordert wurde und ausgewertet werden
/// kann. Das Polygon braucht mindestens zwei Punkte und muss eingeblendet sein;
/// es hängt nicht an der Kurvenanforderung und erscheint auch ohne gezeichnete
/// Kurve. Einblenden des Polygons fordert keine Kurve an.
pub fn draw_scene(scene: &RenderScene, sink: &mut dyn RenderSink) {
    sink.clear(scene.options.background_color);

    match scene.options.layering {
        CurveLayering::PointsFirst => {
            draw_control_points(scene, sink);
            draw_curve(scene, sink);
            draw_control_polygon(scene, sink);
        }
        CurveLayering::CurveFirst => {
            draw_curve(scene, sink);
            draw_control_polygon(scene, sink);
            draw_control_points(scene, sink);
        }
    }
}

fn draw_control_points(scene: &RenderScene, sink: &mut dyn RenderSink) {
    let opts = &scene.options;
    // Umrandung liegt je zur Hälfte außerhalb des Radius
    let radius = opts.point_radius + opts.point_outline_width * 0.5;
    for p in scene.control_points.iter() {
        sink.fill_disc(*p, radius, opts.point_color);
    }
}

fn draw_curve(scene: &RenderScene, sink: &mut dyn RenderSink) {
    if let Some(polyline) = scene.curve_polyline() {
        sink.stroke_polyline(&polyline, scene.options.curve_width, scene.options.curve_color);
    }
}

fn draw_control_polygon(scene: &RenderScene, sink: &mut dyn RenderSink) {
    if !scene.show_control_polygon || scene.control_points.len() < 2 {
        return;
    }
    sink.stroke_polyline(
        &scene.control_points,
        scene.options.control_polygon_width,
        scene.options.control_polygon_color,
    );
}

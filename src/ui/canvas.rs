//! Zeichnet die Render-Szene mit dem egui-Painter.

use crate::shared::{CursorStyle, PipeVisual, RenderScene};
use glam::Vec2;

/// Abstand der Formel-Annotation zur Hüllen-Oberkante in Pixeln.
const ANNOTATION_OFFSET: f32 = 18.0;

/// Übersetzt die Cursor-Affordanz in das egui-Pendant.
pub fn cursor_icon(cursor: CursorStyle) -> egui::CursorIcon {
    match cursor {
        CursorStyle::Default => egui::CursorIcon::Default,
        CursorStyle::Pointer => egui::CursorIcon::PointingHand,
        CursorStyle::Move => egui::CursorIcon::Move,
    }
}

/// Zeichnet die komplette Szene: Hintergrund, Hüllen, Kurven, Anker.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    let surface = egui::Rect::from_min_size(
        origin,
        egui::vec2(scene.surface_size[0], scene.surface_size[1]),
    );
    painter.rect_filled(
        surface,
        egui::CornerRadius::ZERO,
        color32(scene.options.background_color),
    );

    for pipe in &scene.pipes {
        paint_pipe(painter, origin, pipe, scene);
    }
}

fn paint_pipe(
    painter: &egui::Painter,
    origin: egui::Pos2,
    pipe: &PipeVisual,
    scene: &RenderScene,
) {
    let options = &scene.options;

    // Hüllen-Rahmen (visuelle Rahmung, Reihenfolge: unter der Kurve)
    let env = pipe.envelope;
    let env_rect = egui::Rect::from_min_size(
        to_pos2(origin, Vec2::new(env.x, env.y)),
        egui::vec2(env.width, env.height),
    );
    painter.rect_stroke(
        env_rect,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(options.envelope_stroke_width, color32(options.envelope_color)),
        egui::StrokeKind::Middle,
    );

    // Kurvenkörper
    let points: Vec<egui::Pos2> = pipe.polyline.iter().map(|&p| to_pos2(origin, p)).collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(options.curve_stroke_width, color32(options.curve_color)),
    ));

    // Anker mit aktueller Betonung
    for anchor in &pipe.anchors {
        let center = to_pos2(origin, anchor.position);
        painter.circle_filled(
            center,
            anchor.emphasis.radius,
            color32(options.anchor_fill_color),
        );
        painter.circle_stroke(
            center,
            anchor.emphasis.radius,
            egui::Stroke::new(
                anchor.emphasis.stroke_width,
                color32(options.anchor_stroke_color),
            ),
        );
    }

    // Formel-Annotation oberhalb der Hülle
    if let Some([x_formula, y_formula]) = &pipe.annotation {
        let base = to_pos2(origin, Vec2::new(env.x, env.y));
        painter.text(
            base - egui::vec2(0.0, 2.0 * ANNOTATION_OFFSET),
            egui::Align2::LEFT_TOP,
            x_formula,
            egui::FontId::monospace(12.0),
            color32(options.annotation_color),
        );
        painter.text(
            base - egui::vec2(0.0, ANNOTATION_OFFSET),
            egui::Align2::LEFT_TOP,
            y_formula,
            egui::FontId::monospace(12.0),
            color32(options.annotation_color),
        );
    }
}

/// Flächen-Koordinaten → absolute Fenster-Koordinaten.
fn to_pos2(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

/// RGBA-Float-Farbe → egui-Farbwert.
fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

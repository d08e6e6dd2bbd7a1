// surface.rs - Drawing target abstraction and the egui painter adapter

use egui::{Color32, Painter, Pos2, Stroke, Vec2};

pub const LINE_WIDTH: f32 = 1.0;

/// Minimal set of draw calls a frame needs.
pub trait Surface {
    fn clear(&mut self, color: Color32);
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32);
}

/// Draws onto an egui painter. Coordinates are window pixels, shifted by
/// `origin` so (0, 0) is the top left of the allocated area.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin: origin.to_vec2() }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter.line_segment(
            [from + self.origin, to + self.origin],
            Stroke::new(LINE_WIDTH, color),
        );
    }
}

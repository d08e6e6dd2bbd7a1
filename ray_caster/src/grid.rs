// grid.rs - Grid geometry derived from the window configuration

use egui::{Color32, Pos2, Rect, pos2};

use crate::config::Config;
use crate::surface::Surface;

/// Square cells laid out `cells x cells`, centered in the window.
/// All values are whole pixels, computed with integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cells: u32,
    pub cell_size: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl Grid {
    pub fn from_config(config: &Config) -> Self {
        let cells = config.grid_cells.max(1);
        let cell_size = config.window_width.min(config.window_height) / cells;
        let span = cell_size * cells;

        Self {
            cells,
            cell_size,
            offset_x: config.window_width.saturating_sub(span) / 2,
            offset_y: config.window_height.saturating_sub(span) / 2,
        }
    }

    /// Side length of the whole grid in pixels.
    pub fn span(&self) -> u32 {
        self.cells * self.cell_size
    }

    /// Bounding rectangle the ray is clipped against.
    pub fn bounds(&self) -> Rect {
        let min = pos2(self.offset_x as f32, self.offset_y as f32);
        let max = pos2(
            (self.offset_x + self.span()) as f32,
            (self.offset_y + self.span()) as f32,
        );
        Rect::from_min_max(min, max)
    }

    pub fn center(&self) -> Pos2 {
        let half = self.span() / 2;
        pos2((self.offset_x + half) as f32, (self.offset_y + half) as f32)
    }

    /// One line per column boundary, `cells + 1` in total.
    pub fn vertical_lines(&self) -> impl Iterator<Item = [Pos2; 2]> + '_ {
        let top = self.offset_y as f32;
        let bottom = (self.offset_y + self.span()) as f32;
        (0..=self.cells).map(move |x| {
            let x_pos = (self.offset_x + x * self.cell_size) as f32;
            [pos2(x_pos, top), pos2(x_pos, bottom)]
        })
    }

    /// One line per row boundary, `cells + 1` in total.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = [Pos2; 2]> + '_ {
        let left = self.offset_x as f32;
        let right = (self.offset_x + self.span()) as f32;
        (0..=self.cells).map(move |y| {
            let y_pos = (self.offset_y + y * self.cell_size) as f32;
            [pos2(left, y_pos), pos2(right, y_pos)]
        })
    }

    pub fn render(&self, surface: &mut impl Surface, color: Color32) {
        for [from, to] in self.vertical_lines().chain(self.horizontal_lines()) {
            surface.draw_line(from, to, color);
        }
    }
}

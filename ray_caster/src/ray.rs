// ray.rs - A line that sweeps from a fixed start point to the grid edge

use egui::{Color32, Pos2, Rect, Vec2};

use crate::error::RayError;
use crate::grid::Grid;
use crate::surface::Surface;

/// The demo ray always heads down and to the right.
pub const DIAGONAL: Vec2 = Vec2 { x: 1.0, y: 1.0 };

#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    start: Pos2,
    direction: Vec2,
    current_length: f32,
    max_length: f32,
    speed: f32,
}

impl Ray {
    pub fn new(start: Pos2, direction: Vec2, speed: f32, bounds: Rect) -> Result<Self, RayError> {
        if !direction_is_usable(direction.x) || !direction_is_usable(direction.y) {
            return Err(RayError::DegenerateDirection { dx: direction.x, dy: direction.y });
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(RayError::InvalidSpeed(speed));
        }
        if !bounds.contains(start) {
            return Err(RayError::StartOutsideBounds { x: start.x, y: start.y });
        }

        let max_length = max_length(start, direction, bounds);
        log::debug!("ray from {start:?} along {direction:?}: max length {max_length}");

        Ok(Self { start, direction, current_length: 0.0, max_length, speed })
    }

    /// Diagonal ray from the middle of the grid.
    pub fn centered(grid: &Grid, speed: f32) -> Result<Self, RayError> {
        Self::new(grid.center(), DIAGONAL, speed, grid.bounds())
    }

    /// Advance one tick. Reaching the edge restarts the sweep from zero.
    pub fn update(&mut self) {
        if self.current_length < self.max_length {
            self.current_length += self.speed;
            if self.current_length >= self.max_length {
                log::trace!("ray reached {}, restarting", self.current_length);
                self.current_length = 0.0;
            }
        }
    }

    pub fn tip(&self) -> Pos2 {
        self.start + self.direction * self.current_length
    }

    pub fn render(&self, surface: &mut impl Surface, color: Color32) {
        surface.draw_line(self.start, self.tip(), color);
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn current_length(&self) -> f32 {
        self.current_length
    }

    pub fn max_length(&self) -> f32 {
        self.max_length
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

fn direction_is_usable(component: f32) -> bool {
    component.is_finite() && component != 0.0
}

/// Distance along `direction` until the ray leaves `bounds`. Each axis gives
/// a candidate hit on its near or far edge; the ray exits at the closer one.
fn max_length(start: Pos2, direction: Vec2, bounds: Rect) -> f32 {
    let t_hor = if direction.y > 0.0 {
        (bounds.max.y - start.y) / direction.y
    } else {
        (bounds.min.y - start.y) / direction.y
    };
    let t_ver = if direction.x > 0.0 {
        (bounds.max.x - start.x) / direction.x
    } else {
        (bounds.min.x - start.x) / direction.x
    };
    t_hor.min(t_ver)
}

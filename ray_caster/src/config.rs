// config.rs - Window, grid and timing configuration

use egui::Color32;
use std::time::Duration;

use crate::error::ConfigError;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const GRID_CELLS: u32 = 20;
pub const FPS: u32 = 60;
pub const RAY_SPEED: f32 = 2.0;

/// Everything the frame loop needs to know up front. Built once in `main`
/// and handed down by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub grid_cells: u32,
    pub fps: u32,
    pub ray_speed: f32,
    pub background: Color32,
    pub grid_color: Color32,
    pub ray_color: Color32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Ray Caster".to_owned(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            grid_cells: GRID_CELLS,
            fps: FPS,
            ray_speed: RAY_SPEED,
            background: Color32::BLACK,
            grid_color: Color32::WHITE,
            ray_color: Color32::from_rgb(255, 255, 0), // Yellow ray
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.grid_cells == 0 {
            return Err(ConfigError::NoGridCells);
        }
        if self.window_width.min(self.window_height) < self.grid_cells {
            return Err(ConfigError::GridTooDense {
                cells: self.grid_cells,
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if !self.ray_speed.is_finite() || self.ray_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.ray_speed));
        }
        Ok(())
    }

    /// Whole milliseconds per frame, truncated like the classic `1000 / FPS`.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.fps.max(1)))
    }

    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width as f32, self.window_height as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.frame_budget(), Duration::from_millis(16));
        assert_eq!(config.window_size(), [800.0, 600.0]);
    }

    #[test]
    fn rejects_degenerate_values() {
        let base = Config::default();

        let config = Config { grid_cells: 0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NoGridCells));

        let config = Config { fps: 0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));

        let config = Config { window_height: 0, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyWindow { .. })));

        let config = Config { grid_cells: 601, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooDense { .. })));

        let config = Config { ray_speed: -1.0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(-1.0)));

        let config = Config { ray_speed: f32::NAN, ..base };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));
    }
}

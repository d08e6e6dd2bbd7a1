// error.rs - Error types for startup and ray construction

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window must have a non-zero size, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },

    #[error("grid needs at least one cell")]
    NoGridCells,

    #[error("{cells} grid cells do not fit in a {width}x{height} window")]
    GridTooDense { cells: u32, width: u32, height: u32 },

    #[error("frame rate must be non-zero")]
    ZeroFrameRate,

    #[error("ray speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),
}

#[derive(Debug, Error, PartialEq)]
pub enum RayError {
    /// A zero component would divide by zero in the boundary intersection.
    #[error("ray direction ({dx}, {dy}) must have non-zero finite components")]
    DegenerateDirection { dx: f32, dy: f32 },

    #[error("ray start ({x}, {y}) lies outside the grid bounds")]
    StartOutsideBounds { x: f32, y: f32 },

    #[error("ray speed must be a positive finite number, got {0}")]
    InvalidSpeed(f32),
}

/// Everything that can stop the program before the first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("ray couldn't be created, error: {0}")]
    Ray(#[from] RayError),

    #[error("window or renderer couldn't be created, error: {0}")]
    Graphics(#[from] eframe::Error),
}

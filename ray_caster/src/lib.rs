// lib.rs - Ray Caster: a diagonal ray sweeping across a grid

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod ray;
pub mod surface;
pub mod ui;

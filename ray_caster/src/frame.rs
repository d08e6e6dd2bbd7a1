// frame.rs - Fixed-rate frame loop: events, update, draw, pacing

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::StartupError;
use crate::grid::Grid;
use crate::ray::Ray;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window was asked to close.
    Quit,
    /// Any other input. Read and thrown away.
    Other,
}

/// Anything events can be drained from, one at a time.
pub trait EventSource {
    fn poll(&mut self) -> Option<Event>;
}

impl EventSource for VecDeque<Event> {
    fn poll(&mut self) -> Option<Event> {
        self.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Result of one iteration: whether to keep going, and how long to wait
/// before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub control: LoopControl,
    pub wait: Option<Duration>,
}

/// Fixed frame budget. A slow frame is not made up for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the budget after `elapsed`, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed).filter(|left| !left.is_zero())
    }
}

pub struct FrameLoop {
    config: Config,
    grid: Grid,
    ray: Ray,
    pacer: FramePacer,
    quit: bool,
    frames: u64,
    last_step: Option<Instant>,
}

impl FrameLoop {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        config.validate()?;

        let grid = Grid::from_config(&config);
        log::info!(
            "grid: {0}x{0} cells of {1}px, offset ({2}, {3})",
            grid.cells, grid.cell_size, grid.offset_x, grid.offset_y
        );

        let ray = Ray::centered(&grid, config.ray_speed)?;
        log::info!(
            "ray from {:?}, speed {}, max length {}",
            ray.start(), ray.speed(), ray.max_length()
        );

        let pacer = FramePacer::new(config.frame_budget());

        Ok(Self { config, grid, ray, pacer, quit: false, frames: 0, last_step: None })
    }

    pub fn tick(&mut self, events: &mut impl EventSource, surface: &mut impl Surface) -> Tick {
        self.tick_at(Instant::now(), events, surface)
    }

    /// Run one frame against `surface` as of `now`. The ray only advances
    /// once per frame budget; extra calls inside the budget redraw the
    /// current state. The frame that sees the quit event is still drawn;
    /// every call after that returns `Exit` straight away.
    pub fn tick_at(
        &mut self,
        now: Instant,
        events: &mut impl EventSource,
        surface: &mut impl Surface,
    ) -> Tick {
        if self.quit {
            return Tick { control: LoopControl::Exit, wait: None };
        }

        while let Some(event) = events.poll() {
            if event == Event::Quit {
                log::info!("quit requested after {} frames", self.frames);
                self.quit = true;
            }
        }

        let due = self
            .last_step
            .is_none_or(|last| now.saturating_duration_since(last) >= self.pacer.budget());
        if due {
            self.ray.update();
            self.last_step = Some(now);
        }

        surface.clear(self.config.background);
        self.grid.render(surface, self.config.grid_color);
        self.ray.render(surface, self.config.ray_color);
        self.frames += 1;

        let control = if self.quit { LoopControl::Exit } else { LoopControl::Continue };
        let since_step = Instant::now().saturating_duration_since(self.last_step.unwrap_or(now));
        Tick { control, wait: self.pacer.remaining(since_step) }
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }

}

/// Drive `frame_loop` until it sees a quit event, sleeping out the rest of
/// each frame budget. Returns the number of frames drawn.
pub fn run(
    frame_loop: &mut FrameLoop,
    events: &mut impl EventSource,
    surface: &mut impl Surface,
) -> u64 {
    loop {
        let tick = frame_loop.tick(events, surface);
        if tick.control == LoopControl::Exit {
            break;
        }
        if let Some(wait) = tick.wait {
            thread::sleep(wait);
        }
    }
    log::info!("frame loop finished after {} frames", frame_loop.frames());
    frame_loop.frames()
}

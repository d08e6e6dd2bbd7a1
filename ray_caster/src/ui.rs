// ui.rs - eframe host: one frame loop tick per repaint

use eframe::egui;
use std::collections::VecDeque;
use std::time::Instant;

use crate::frame::{Event, FrameLoop, LoopControl};
use crate::surface::PainterSurface;

pub struct RayCasterApp {
    frame_loop: FrameLoop,
    events: VecDeque<Event>,
}

impl RayCasterApp {
    pub fn new(frame_loop: FrameLoop) -> Self {
        Self { frame_loop, events: VecDeque::new() }
    }

    /// One pass of the egui frame. Repaints can arrive faster than the frame
    /// budget (mouse moves, focus changes); the frame loop only steps the
    /// ray once the budget has passed.
    fn show(&mut self, ctx: &egui::Context, now: Instant) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.frame_loop.has_quit() {
            // Hold the window open until the frame loop has seen the quit
            self.events.push_back(Event::Quit);
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        if self.frame_loop.has_quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let tick = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let mut surface = PainterSurface::new(&painter, response.rect.min);
                self.frame_loop.tick_at(now, &mut self.events, &mut surface)
            })
            .inner;

        match tick.control {
            LoopControl::Continue => {
                ctx.request_repaint_after(tick.wait.unwrap_or_default());
            }
            LoopControl::Exit => {
                let ray = self.frame_loop.ray();
                log::info!(
                    "closing window after {} frames, ray at {}/{}",
                    self.frame_loop.frames(),
                    ray.current_length(),
                    ray.max_length()
                );
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for RayCasterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx, Instant::now());
    }
}

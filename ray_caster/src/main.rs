// main.rs - Window setup and exit codes

use eframe::egui;
use std::process::ExitCode;

use ray_caster::config::Config;
use ray_caster::error::StartupError;
use ray_caster::frame::FrameLoop;
use ray_caster::ui::RayCasterApp;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StartupError> {
    let config = Config::default();
    log::info!(
        "starting {:?}: {}x{} window, {} fps",
        config.title, config.window_width, config.window_height, config.fps
    );

    let frame_loop = FrameLoop::new(config.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size())
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(RayCasterApp::new(frame_loop))),
    )?;

    log::info!("shut down cleanly");
    Ok(())
}

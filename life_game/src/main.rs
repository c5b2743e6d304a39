// main.rs - Conway's Game of Life in an eframe window

use eframe::egui;
use log::{info, warn};

mod config;
mod error;
mod layout;
mod overlay;
mod session;
mod ticker;
mod ui;

use config::GameConfig;
use error::GameError;
use layout::Layout;
use ui::GameOfLife;

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    config.validate()?;

    let layout = Layout::new(&config);
    let window = layout.window_size();
    info!(
        "{}x{} grid, {} px cells, {:?} per generation, window {}x{}",
        config.rows, config.columns, config.cell_size, config.tick_interval, window.x, window.y
    );
    if layout.is_clipped() {
        warn!("grid does not fit in the {}x{} window; cells past the edge cannot be reached", window.x, window.y);
    }

    // A single worker is enough: it only runs the ticker task.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("life-ticker")
        .enable_time()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(window)
            .with_resizable(false),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(GameOfLife::new(cc, config, runtime))),
    )?;
    Ok(())
}

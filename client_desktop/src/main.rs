//! Desktop Pong client
//!
//! Opens a fixed 640x480 window, feeds keyboard events into the simulation
//! and rasterises every tick into a `pixels` frame buffer.

mod app;
mod clock;
mod config;
mod input;
mod renderer;

use app::AppError;
use config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    app::run(config)
}

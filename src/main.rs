//! Square Dodge entry point
//!
//! Sets up logging, loads settings and runs the game loop.

use std::process::ExitCode;

use square_dodge::{Settings, app};

fn main() -> ExitCode {
    // RUST_LOG overrides the default level (wgpu logs included)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Square Dodge starting...");

    let result = Settings::load().and_then(app::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

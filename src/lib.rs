//! Square Dodge - steer a square past scrolling obstacle bars
//!
//! Core modules:
//! - `sim`: Simulation (movement, spawning, collisions, game state)
//! - `renderer`: Draw commands and the wgpu presentation pipeline
//! - `platform`: Keyboard snapshot and frame pacing
//! - `settings`: Window and gameplay configuration
//! - `tuning`: Data-driven game balance
//! - `app`: winit event loop glue

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::Error;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
///
/// The whole world lives in normalized device coordinates, [-1, 1] on both axes.
pub mod consts {
    /// Per-frame player displacement; doubles as the player's side length
    pub const PLAYER_SPEED: f32 = 0.01;
    /// Per-frame obstacle displacement toward the left edge
    pub const OBSTACLE_SPEED: f32 = 0.005;
    /// Seconds between obstacle spawns
    pub const OBSTACLE_SPAWN_INTERVAL: f32 = 4.0;

    /// Obstacles enter at the right edge
    pub const OBSTACLE_SPAWN_X: f32 = 1.0;
    /// Obstacles are dropped once they pass the left edge
    pub const OBSTACLE_DESPAWN_X: f32 = -1.0;
    /// Obstacles sit on the bottom edge
    pub const OBSTACLE_FLOOR_Y: f32 = -1.0;

    /// Frame rate the scheduler paces to
    pub const TARGET_FPS: u32 = 60;
    /// Longest frame delta fed to the simulation (stalls, debugger breaks)
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Simple Game";

    /// Background clear color
    pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

    /// Printed to stdout when the player is hit
    pub const GAME_OVER_MESSAGE: &str = "Game Over!";
}

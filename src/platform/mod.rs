//! Platform abstraction layer
//!
//! Handles the windowing side of a frame:
//! - Held-key tracking, sampled once per frame
//! - Frame pacing and delta time

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::KeyboardState;

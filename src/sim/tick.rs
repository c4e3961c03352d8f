//! Per-frame simulation step
//!
//! Movement and scrolling use fixed per-frame steps; only the spawn timer
//! consumes `dt`. Game speed therefore follows the display rate, which the
//! scheduler pins to 60 Hz.

use glam::Vec2;

use super::collision::find_collision;
use super::state::{GamePhase, GameState};

/// Directional keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Unit-per-axis direction; opposing keys cancel out
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(axis(self.left, self.right), axis(self.down, self.up))
    }
}

/// What the scheduler should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep running
    Continue,
    /// The player was hit; stop the loop
    GameOver,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::GameOver;
    }

    let tuning = state.tuning;
    state.frame += 1;

    // Move player
    state
        .player
        .step(input.direction() * tuning.player_speed, &tuning);

    // Scroll obstacles, dropping the ones past the left edge
    state.obstacles.retain_mut(|obstacle| {
        obstacle.x -= tuning.obstacle_speed;
        !obstacle.is_off_screen()
    });

    // Spawn on a timer
    state.spawn_timer += dt;
    if state.spawn_timer > tuning.spawn_interval {
        state.spawn_obstacle();
        state.spawn_timer = 0.0;
        log::debug!(
            "Obstacle spawned on frame {} ({} live)",
            state.frame,
            state.obstacles.len()
        );
    }

    if let Some(index) = find_collision(&state.player, &state.obstacles, &tuning) {
        log::info!(
            "Player at ({:.3}, {:.3}) hit obstacle at x={:.3} on frame {}",
            state.player.pos.x,
            state.player.pos.y,
            state.obstacles[index].x,
            state.frame
        );
        state.phase = GamePhase::GameOver;
        return TickOutcome::GameOver;
    }

    TickOutcome::Continue
}

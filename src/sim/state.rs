//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{OBSTACLE_DESPAWN_X, OBSTACLE_SPAWN_X};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was hit. Terminal: nothing moves after this.
    GameOver,
}

/// The player's square
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    /// Center of the square in normalized device coordinates
    pub pos: Vec2,
}

impl Player {
    /// Apply a per-frame step, then keep the square fully on screen
    pub fn step(&mut self, delta: Vec2, tuning: &Tuning) {
        let (lo, hi) = tuning.player_bounds();
        self.pos = (self.pos + delta).clamp(Vec2::splat(lo), Vec2::splat(hi));
    }
}

/// A scrolling bar resting on the bottom edge; only its x moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
}

impl Obstacle {
    /// A fresh obstacle at the right edge
    pub fn spawned() -> Self {
        Self { x: OBSTACLE_SPAWN_X }
    }

    /// True once the obstacle has scrolled past the left edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x < OBSTACLE_DESPAWN_X
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player square
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Seconds accumulated since the last spawn
    pub spawn_timer: f32,
    /// Frames simulated so far
    pub frame: u64,
    /// Balance values used by `tick`
    pub tuning: Tuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Player centered, no obstacles, default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            player: Player::default(),
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            frame: 0,
            tuning,
        }
    }

    /// Append an obstacle at the right edge
    pub fn spawn_obstacle(&mut self) {
        self.obstacles.push(Obstacle::spawned());
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::ZERO);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_timer, 0.0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_player_step_clamps_each_axis() {
        let tuning = Tuning::default();
        let mut player = Player {
            pos: Vec2::new(0.99, -0.3),
        };
        player.step(Vec2::new(0.05, 0.01), &tuning);
        assert!((player.pos.x - 0.995).abs() < 1e-6);
        assert!((player.pos.y - (-0.29)).abs() < 1e-6);
    }

    #[test]
    fn test_obstacle_off_screen() {
        assert!(!Obstacle::spawned().is_off_screen());
        assert!(!Obstacle { x: -1.0 }.is_off_screen());
        assert!(Obstacle { x: -1.0001 }.is_off_screen());
    }
}

//! Data-driven game balance
//!
//! Defaults reproduce the classic feel; a settings file can override them.

use serde::{Deserialize, Serialize};

use crate::consts::{OBSTACLE_SPAWN_INTERVAL, OBSTACLE_SPEED, PLAYER_SPEED};

/// Speeds and timers consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-frame player step, also the player's side length
    pub player_speed: f32,
    /// Per-frame obstacle step toward the left edge
    pub obstacle_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: OBSTACLE_SPAWN_INTERVAL,
        }
    }
}

impl Tuning {
    /// Half the player's side length (also the collision tolerance)
    #[inline]
    pub fn player_half_size(&self) -> f32 {
        self.player_speed / 2.0
    }

    /// Closed range the player's x and y are clamped to
    #[inline]
    pub fn player_bounds(&self) -> (f32, f32) {
        let margin = self.player_half_size();
        (-1.0 + margin, 1.0 - margin)
    }

    /// Replace non-finite or non-positive values with defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ignoring invalid tuning value {value}, using {fallback}");
                fallback
            }
        };
        Self {
            player_speed: pick(self.player_speed, defaults.player_speed),
            obstacle_speed: pick(self.obstacle_speed, defaults.obstacle_speed),
            spawn_interval: pick(self.spawn_interval, defaults.spawn_interval),
        }
    }
}

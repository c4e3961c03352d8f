//! Player/obstacle overlap test
//!
//! The x test compares centers against half the player's size. The y test
//! only looks at the player's distance from the horizontal midline, not at
//! the obstacle's row on the bottom edge, so a hit can only register while
//! the player hovers around y = 0.

use super::state::{Obstacle, Player};
use crate::tuning::Tuning;

/// Check a single obstacle against the player
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let tolerance = tuning.player_half_size();
    (obstacle.x - player.pos.x).abs() < tolerance && player.pos.y.abs() < tolerance
}

/// Index of the first obstacle touching the player, if any
pub fn find_collision(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| player_hits_obstacle(player, obstacle, tuning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Player {
        Player { pos: Vec2::new(x, y) }
    }

    #[test]
    fn test_hit_near_player_x() {
        let tuning = Tuning::default();
        assert!(player_hits_obstacle(&at(0.0, 0.0), &Obstacle { x: 0.002 }, &tuning));
    }

    #[test]
    fn test_miss_at_full_width() {
        let tuning = Tuning::default();
        assert!(!player_hits_obstacle(&at(0.0, 0.0), &Obstacle { x: 0.01 }, &tuning));
        // Tolerance is strict
        assert!(!player_hits_obstacle(&at(0.0, 0.0), &Obstacle { x: 0.005 }, &tuning));
    }

    #[test]
    fn test_y_checked_against_midline_only() {
        let tuning = Tuning::default();
        let obstacle = Obstacle { x: 0.5 };
        // Sitting right on top of the rendered obstacle does not count
        assert!(!player_hits_obstacle(&at(0.5, -0.99), &obstacle, &tuning));
        assert!(player_hits_obstacle(&at(0.5, 0.004), &obstacle, &tuning));
        assert!(!player_hits_obstacle(&at(0.5, 0.006), &obstacle, &tuning));
    }

    #[test]
    fn test_find_collision_returns_first() {
        let tuning = Tuning::default();
        let obstacles = [
            Obstacle { x: 0.8 },
            Obstacle { x: 0.001 },
            Obstacle { x: -0.001 },
        ];
        assert_eq!(find_collision(&at(0.0, 0.0), &obstacles, &tuning), Some(1));
        assert_eq!(find_collision(&at(0.3, 0.0), &obstacles, &tuning), None);
        assert_eq!(find_collision(&at(0.0, 0.0), &[], &tuning), None);
    }
}

//! Frame description built from game state
//!
//! Reading state into draw commands is kept apart from the GPU so it can be
//! checked headless.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::OBSTACLE_FLOOR_Y;
use crate::sim::GameState;

/// One draw call, in normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle spanning `min..max`
    Quad {
        min: Vec2,
        max: Vec2,
        color: [f32; 4],
    },
}

impl DrawCommand {
    /// Quad of the given half extents around `center`
    pub fn centered_quad(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> Self {
        DrawCommand::Quad {
            min: center - half_extents,
            max: center + half_extents,
            color,
        }
    }
}

/// Describe the current frame: the player first, then obstacles oldest first
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let size = state.tuning.player_speed;
    let half = state.tuning.player_half_size();

    let mut commands = Vec::with_capacity(1 + state.obstacles.len());
    commands.push(DrawCommand::centered_quad(
        state.player.pos,
        Vec2::splat(half),
        colors::PLAYER,
    ));

    commands.extend(state.obstacles.iter().map(|obstacle| DrawCommand::Quad {
        min: Vec2::new(obstacle.x - half, OBSTACLE_FLOOR_Y),
        max: Vec2::new(obstacle.x + half, OBSTACLE_FLOOR_Y + size),
        color: colors::OBSTACLE,
    }));

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    fn quad(command: &DrawCommand) -> (Vec2, Vec2, [f32; 4]) {
        match *command {
            DrawCommand::Quad { min, max, color } => (min, max, color),
        }
    }

    #[test]
    fn test_player_only() {
        let state = GameState::new();
        let commands = build_frame(&state);
        assert_eq!(commands.len(), 1);

        let (min, max, color) = quad(&commands[0]);
        assert!(min.abs_diff_eq(Vec2::splat(-0.005), 1e-6));
        assert!(max.abs_diff_eq(Vec2::splat(0.005), 1e-6));
        assert_eq!(color, colors::PLAYER);
    }

    #[test]
    fn test_obstacles_follow_player_in_list_order() {
        let mut state = GameState::new();
        state.player.pos = Vec2::new(0.25, -0.5);
        state.obstacles = vec![Obstacle { x: 0.2 }, Obstacle { x: 0.9 }];

        let commands = build_frame(&state);
        assert_eq!(commands.len(), 3);

        let (min, max, _) = quad(&commands[0]);
        assert!(min.abs_diff_eq(Vec2::new(0.245, -0.505), 1e-6));
        assert!(max.abs_diff_eq(Vec2::new(0.255, -0.495), 1e-6));

        let (min, max, color) = quad(&commands[1]);
        assert!(min.abs_diff_eq(Vec2::new(0.195, -1.0), 1e-6));
        assert!(max.abs_diff_eq(Vec2::new(0.205, -0.99), 1e-6));
        assert_eq!(color, colors::OBSTACLE);

        let (min, _, _) = quad(&commands[2]);
        assert!((min.x - 0.895).abs() < 1e-6);
    }

    #[test]
    fn test_build_frame_is_pure() {
        let mut state = GameState::new();
        state.obstacles = vec![Obstacle { x: 0.4 }, Obstacle { x: -0.3 }];
        let snapshot = state.clone();

        let first = build_frame(&state);
        let second = build_frame(&state);
        assert_eq!(first, second);
        assert_eq!(state, snapshot);
    }
}

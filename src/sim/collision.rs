//! Collision detection and response
//!
//! Everything here is axis-aligned: the ball and both paddles are boxes, the
//! arena is a rectangle with the origin at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Arena, Ball, Paddle, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap test. Boxes that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Horizontal arena boundary the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Reflect the ball off the top or bottom wall.
///
/// The vertical direction is forced away from the touched wall, which negates
/// it for a ball travelling into the wall and leaves a ball already heading
/// back untouched. Horizontal direction never changes here.
pub fn resolve_wall(ball: &mut Ball, arena: &Arena, clamp: bool) -> Option<Wall> {
    let half_h = ball.half_extents.y;
    let height = arena.height as f32;

    let wall = if ball.pos.y - half_h < 0.0 {
        ball.dir.y = ball.dir.y.abs();
        Wall::Top
    } else if ball.pos.y + half_h > height {
        ball.dir.y = -ball.dir.y.abs();
        Wall::Bottom
    } else {
        return None;
    };

    // A perfectly horizontal ball overlapping a wall has nothing to flip
    if ball.dir.y == 0.0 {
        ball.dir.y = match wall {
            Wall::Top => 1.0,
            Wall::Bottom => -1.0,
        };
    }

    if clamp {
        ball.pos.y = ball.pos.y.clamp(half_h, (height - half_h).max(half_h));
    }

    Some(wall)
}

/// Bounce the ball off any overlapping paddle.
///
/// Paddles are checked in order and each overlap forces the horizontal
/// direction away from that paddle, so the last overlapping paddle decides.
/// Returns the paddle that had the final say.
pub fn resolve_paddles(ball: &mut Ball, paddles: &[Paddle]) -> Option<Player> {
    let ball_box = ball.aabb();
    let mut last_hit = None;

    for paddle in paddles {
        if !ball_box.intersects(&paddle.aabb()) {
            continue;
        }
        // A purely vertical ball still has to leave the paddle
        let away = if ball.dir.x == 0.0 { 1.0 } else { ball.dir.x.abs() };
        ball.dir.x = match paddle.player {
            Player::One => away,
            Player::Two => -away,
        };
        last_hit = Some(paddle.player);
    }

    last_hit
}

/// Winner if the ball center has left through the left or right side
pub fn out_of_bounds(ball: &Ball, arena: &Arena) -> Option<Player> {
    if ball.pos.x < 0.0 {
        Some(Player::Two)
    } else if ball.pos.x > arena.width as f32 {
        Some(Player::One)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(5.0));
        let b = Aabb::from_center(Vec2::new(8.0, 0.0), Vec2::splat(5.0));
        let c = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(5.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c), "touching edges should not count");
    }

    #[test]
    fn test_top_wall_negates_vertical_only() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(300.0, 0.0);
        state.ball.dir = Vec2::new(0.7, -1.0);

        let wall = resolve_wall(&mut state.ball, &state.arena, false);
        assert_eq!(wall, Some(Wall::Top));
        assert_eq!(state.ball.dir, Vec2::new(0.7, 1.0));
        assert_eq!(state.ball.pos.y, 0.0, "no clamp requested");
    }

    #[test]
    fn test_bottom_wall_with_clamp() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(300.0, 478.0);
        state.ball.dir = Vec2::new(-1.0, 2.0);

        let wall = resolve_wall(&mut state.ball, &state.arena, true);
        assert_eq!(wall, Some(Wall::Bottom));
        assert_eq!(state.ball.dir, Vec2::new(-1.0, -2.0));
        assert_eq!(state.ball.pos.y, 480.0 - state.ball.half_extents.y);
    }

    #[test]
    fn test_wall_does_not_flip_back_a_departing_ball() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(300.0, 2.0);
        state.ball.dir = Vec2::new(1.0, 1.0);

        resolve_wall(&mut state.ball, &state.arena, false);
        assert_eq!(state.ball.dir, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_no_wall_contact_in_open_space() {
        let mut state = GameState::default();
        let before = state.ball.dir;
        assert_eq!(resolve_wall(&mut state.ball, &state.arena, true), None);
        assert_eq!(state.ball.dir, before);
    }

    #[test]
    fn test_paddle_one_forces_rightward() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(20.0, 240.0);

        for start_dx in [-2.0_f32, 3.0] {
            state.ball.dir = Vec2::new(start_dx, -1.0);
            let hit = resolve_paddles(&mut state.ball, &state.paddles);
            assert_eq!(hit, Some(Player::One));
            assert!(state.ball.dir.x > 0.0);
            assert_eq!(state.ball.dir.x, start_dx.abs());
        }
    }

    #[test]
    fn test_paddle_two_scenario() {
        // 800x480 arena, paddle 2 spans x in [780, 800] at y = 240
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(790.0, 240.0);
        state.ball.dir = Vec2::new(1.0, -1.0);

        let paddle_box = state.paddle(Player::Two).aabb();
        assert_eq!(paddle_box.min.x, 780.0);
        assert_eq!(paddle_box.max.x, 800.0);

        let hit = resolve_paddles(&mut state.ball, &state.paddles);
        assert_eq!(hit, Some(Player::Two));
        assert_eq!(state.ball.dir, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_double_overlap_last_paddle_wins() {
        // Narrow arena so both paddles overlap the ball at once
        let mut state = GameState::new(Arena::new(30, 480), Default::default());
        state.ball.pos = Vec2::new(15.0, 240.0);
        state.ball.dir = Vec2::new(1.0, 1.0);

        let hit = resolve_paddles(&mut state.ball, &state.paddles);
        assert_eq!(hit, Some(Player::Two));
        assert!(state.ball.dir.x < 0.0);
    }

    #[test]
    fn test_paddle_forces_sign_on_vertical_ball() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(20.0, 240.0);
        state.ball.dir = Vec2::new(0.0, 1.0);

        resolve_paddles(&mut state.ball, &state.paddles);
        assert_eq!(state.ball.dir, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(-5.0, 240.0);
        assert_eq!(out_of_bounds(&state.ball, &state.arena), Some(Player::Two));
        state.ball.pos = Vec2::new(805.0, 240.0);
        assert_eq!(out_of_bounds(&state.ball, &state.arena), Some(Player::One));
        state.ball.pos = Vec2::new(800.0, 240.0);
        assert_eq!(out_of_bounds(&state.ball, &state.arena), None);
    }
}

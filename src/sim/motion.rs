//! Ball integration by ratio decomposition
//!
//! The ball direction only stores the sign and the x:y ratio of travel. A
//! scalar path length is split into x/y displacements that keep that ratio,
//! so `dx² + dy² == distance²` no matter how long the direction vector is.

use glam::Vec2;

use super::state::Ball;
use crate::signum_or_zero;

/// Split `distance` along `dir`, preserving the component ratio.
///
/// Panics if `dir` is zero or non-finite; a ball must always be heading
/// somewhere.
pub fn decompose(dir: Vec2, distance: f32) -> Vec2 {
    assert!(
        dir != Vec2::ZERO && dir.is_finite(),
        "ball direction must be finite and non-zero, got {dir:?}"
    );

    if dir.y == 0.0 {
        return Vec2::new(distance * signum_or_zero(dir.x), 0.0);
    }

    let ratio = dir.x / dir.y;
    let scale = (1.0 + ratio * ratio).sqrt();
    if !scale.is_finite() {
        // Vertical component too small to matter
        return Vec2::new(distance * signum_or_zero(dir.x), 0.0);
    }

    let delta_y = distance / scale;
    let delta_x = ratio.abs() * delta_y;
    Vec2::new(
        delta_x * signum_or_zero(dir.x),
        delta_y * signum_or_zero(dir.y),
    )
}

/// Keep only whole units of `delta + remainder`, carrying the fraction.
/// Truncates toward zero so both directions round the same way.
pub fn snap(delta: Vec2, remainder: &mut Vec2) -> Vec2 {
    let total = delta + *remainder;
    let whole = total.trunc();
    *remainder = total - whole;
    whole
}

/// Move the ball `distance` along its direction, returning the displacement
pub fn advance(ball: &mut Ball, distance: f32, pixel_snap: bool) -> Vec2 {
    let mut delta = decompose(ball.dir, distance);
    if pixel_snap {
        delta = snap(delta, &mut ball.remainder);
    }
    ball.pos += delta;
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Ball};
    use proptest::prelude::*;

    fn assert_close(a: f32, b: f32) {
        let tol = 1e-4 * a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= tol, "{a} != {b}");
    }

    #[test]
    fn test_diagonal_unnormalized() {
        let delta = decompose(Vec2::new(1.0, -1.0), 10.0);
        let leg = 10.0 / 2.0_f32.sqrt();
        assert_close(delta.x, leg);
        assert_close(delta.y, -leg);
    }

    #[test]
    fn test_magnitude_is_irrelevant() {
        let a = decompose(Vec2::new(3.0, 4.0), 5.0);
        let b = decompose(Vec2::new(300.0, 400.0), 5.0);
        let c = decompose(Vec2::new(0.3, 0.4), 5.0);
        assert_close(a.x, 3.0);
        assert_close(a.y, 4.0);
        assert_close(a.x, b.x);
        assert_close(a.y, c.y);
    }

    #[test]
    fn test_pure_horizontal() {
        assert_eq!(decompose(Vec2::new(-2.0, 0.0), 7.0), Vec2::new(-7.0, 0.0));
        assert_eq!(decompose(Vec2::new(5.0, 0.0), 7.0), Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_pure_vertical() {
        let delta = decompose(Vec2::new(0.0, -3.0), 4.0);
        assert_eq!(delta.x, 0.0);
        assert_eq!(delta.y, -4.0);
    }

    #[test]
    fn test_tiny_vertical_component() {
        let delta = decompose(Vec2::new(1.0, 1e-30), 2.0);
        assert!(delta.is_finite());
        assert_close(delta.x, 2.0);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_direction_panics() {
        decompose(Vec2::ZERO, 1.0);
    }

    #[test]
    fn test_snap_carries_fraction() {
        let mut remainder = Vec2::ZERO;
        let step = Vec2::new(0.6, -0.6);

        assert_eq!(snap(step, &mut remainder), Vec2::ZERO);
        let moved = snap(step, &mut remainder);
        assert_eq!(moved, Vec2::new(1.0, -1.0));
        assert_close(remainder.x, 0.2);
        assert_close(remainder.y, -0.2);
    }

    #[test]
    fn test_advance_snapped_moves_whole_units() {
        let mut ball = Ball::serve(&Arena::default(), 200.0);
        let start = ball.pos;
        for _ in 0..10 {
            let delta = advance(&mut ball, 200.0 / 120.0, true);
            assert_eq!(delta, delta.trunc());
        }
        let travelled = (ball.pos - start).length();
        // Ten ticks cover ~16.7 units; at most one unit per axis is held back
        assert!(travelled > 16.7 - 2.0_f32.sqrt() && travelled <= 16.7);
    }

    proptest! {
        #[test]
        fn prop_path_length_preserved(
            dx in -100.0f32..100.0,
            dy in -100.0f32..100.0,
            distance in 0.0f32..50.0,
        ) {
            prop_assume!(dx.abs() > 1e-3 || dy.abs() > 1e-3);
            let delta = decompose(Vec2::new(dx, dy), distance);
            let len_sq = delta.x * delta.x + delta.y * delta.y;
            let want = distance * distance;
            prop_assert!((len_sq - want).abs() <= 1e-3 * want.max(1.0));
        }

        #[test]
        fn prop_signs_follow_direction(
            dx in -10.0f32..10.0,
            dy in -10.0f32..10.0,
        ) {
            prop_assume!(dx.abs() > 1e-3 && dy.abs() > 1e-3);
            let delta = decompose(Vec2::new(dx, dy), 3.0);
            prop_assert_eq!(delta.x.signum(), dx.signum());
            prop_assert_eq!(delta.y.signum(), dy.signum());
        }
    }
}

//! Read-only view of the game for renderers

use glam::Vec2;
use serde::Serialize;

use super::state::{Arena, GamePhase, GameState, Player};

/// Prompt shown under the outcome message once the game is over
pub const RESTART_PROMPT: &str = "Press restart to play again";

/// Where and how large a paddle is
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub player: Player,
    pub center: Vec2,
    pub size: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub ball_pos: Vec2,
    pub ball_half_extents: Vec2,
    pub paddles: [PaddleView; 2],
    pub phase: GamePhase,
    pub winner: Option<Player>,
    pub message: Option<&'static str>,
}

impl Snapshot {
    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Copy out the renderable state. Never mutates the game.
pub fn snapshot(state: &GameState) -> Snapshot {
    let view = |player: Player| {
        let paddle = state.paddle(player);
        PaddleView {
            player,
            center: paddle.pos,
            size: paddle.size,
        }
    };

    Snapshot {
        arena: state.arena,
        ball_pos: state.ball.pos,
        ball_half_extents: state.ball.half_extents,
        paddles: [view(Player::One), view(Player::Two)],
        phase: state.phase,
        winner: state.winner,
        message: state.outcome_message(),
    }
}

//! Rendering collaborator
//!
//! The simulation never draws. Hosts implement `Surface` for whatever they
//! render with and call `draw_frame` once per frame with a fresh snapshot.

pub mod shapes;
pub mod text;
pub mod vertex;

use glam::Vec2;

pub use shapes::frame_vertices;
pub use text::TextSurface;
pub use vertex::{Vertex, colors};

use crate::sim::{RESTART_PROMPT, Snapshot};

/// Vertical gap between the outcome message and the restart prompt
const MESSAGE_SPACING: f32 = 40.0;

/// Primitive drawing operations in arena coordinates
pub trait Surface {
    fn clear(&mut self, color: [f32; 4]);
    /// Draw the ball sprite centered on `center`
    fn draw_sprite_centered(&mut self, center: Vec2, half_extents: Vec2, color: [f32; 4]);
    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]);
    fn draw_text_centered(&mut self, center: Vec2, text: &str, color: [f32; 4]);
}

/// Draw one frame: background, ball, paddles, and the outcome once the game
/// is over.
pub fn draw_frame(snap: &Snapshot, surface: &mut impl Surface) {
    surface.clear(colors::BACKGROUND);
    surface.draw_sprite_centered(snap.ball_pos, snap.ball_half_extents, colors::BALL);
    for paddle in &snap.paddles {
        surface.fill_rect(paddle.center, paddle.size, colors::PADDLE);
    }

    if snap.is_over() {
        let center = snap.arena.center();
        if let Some(message) = snap.message {
            surface.draw_text_centered(
                center - Vec2::new(0.0, MESSAGE_SPACING / 2.0),
                message,
                colors::MESSAGE,
            );
        }
        surface.draw_text_centered(
            center + Vec2::new(0.0, MESSAGE_SPACING / 2.0),
            RESTART_PROMPT,
            colors::PROMPT,
        );
    }
}

/// A recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear([f32; 4]),
    Sprite {
        center: Vec2,
        half_extents: Vec2,
        color: [f32; 4],
    },
    Rect {
        center: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Text {
        center: Vec2,
        text: String,
        color: [f32; 4],
    },
}

/// Surface that records calls for replay or inspection
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay every recorded call onto another surface
    pub fn replay(&self, surface: &mut impl Surface) {
        for call in &self.calls {
            match call {
                DrawCall::Clear(color) => surface.clear(*color),
                DrawCall::Sprite {
                    center,
                    half_extents,
                    color,
                } => surface.draw_sprite_centered(*center, *half_extents, *color),
                DrawCall::Rect {
                    center,
                    size,
                    color,
                } => surface.fill_rect(*center, *size, *color),
                DrawCall::Text {
                    center,
                    text,
                    color,
                } => surface.draw_text_centered(*center, text, *color),
            }
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: [f32; 4]) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_sprite_centered(&mut self, center: Vec2, half_extents: Vec2, color: [f32; 4]) {
        self.calls.push(DrawCall::Sprite {
            center,
            half_extents,
            color,
        });
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]) {
        self.calls.push(DrawCall::Rect {
            center,
            size,
            color,
        });
    }

    fn draw_text_centered(&mut self, center: Vec2, text: &str, color: [f32; 4]) {
        self.calls.push(DrawCall::Text {
            center,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Player, snapshot};

    #[test]
    fn test_playing_frame() {
        let state = GameState::default();
        let mut list = DrawList::new();
        draw_frame(&snapshot(&state), &mut list);

        assert_eq!(list.calls.len(), 4);
        assert_eq!(list.calls[0], DrawCall::Clear(colors::BACKGROUND));
        assert!(
            matches!(list.calls[1], DrawCall::Sprite { center, .. } if center == state.ball.pos)
        );
        assert!(!list.calls.iter().any(|c| matches!(c, DrawCall::Text { .. })));
    }

    #[test]
    fn test_game_over_frame_shows_message_and_prompt() {
        let mut state = GameState::default();
        state.finish(Some(Player::One));
        let mut list = DrawList::new();
        draw_frame(&snapshot(&state), &mut list);

        let texts: Vec<&str> = list
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Player 1 Wins", RESTART_PROMPT]);
    }

    #[test]
    fn test_clear_restarts_recording() {
        let state = GameState::default();
        let mut list = DrawList::new();
        draw_frame(&snapshot(&state), &mut list);
        draw_frame(&snapshot(&state), &mut list);
        assert_eq!(list.calls.len(), 4);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy.calls, list.calls);
    }
}

//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here and is owned by `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::{ball_half_extents, paddle_size};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball left the arena; physics frozen until reset
    GameOver,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Outcome label shown when this player wins
    pub fn win_message(self) -> &'static str {
        match self {
            Player::One => "Player 1 Wins",
            Player::Two => "Player 2 Wins",
        }
    }
}

/// Tunable physics rules, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Ball speed after reset (units/s)
    pub ball_speed: f32,
    /// Paddle move speed (units/s)
    pub paddle_speed: f32,
    /// Push the ball back inside the arena on top/bottom wall contact.
    /// When off the ball may be drawn past the wall for a frame.
    pub clamp_on_wall: bool,
    /// Move the ball in whole units, carrying the fractional remainder
    pub pixel_snap: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ball_speed: BALL_START_SPEED,
            paddle_speed: PADDLE_SPEED,
            clamp_on_wall: true,
            pixel_snap: false,
        }
    }
}

/// Fixed-size playing field. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// X position of a player's paddle center
    pub fn paddle_x(&self, player: Player) -> f32 {
        match player {
            Player::One => PADDLE_X_OFFSET,
            Player::Two => self.width as f32 - PADDLE_X_OFFSET,
        }
    }

    /// Clamp a paddle center into `[h/2, height - h/2]`
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        let half = paddle_height / 2.0;
        // An arena shorter than the paddle pins it at its half height
        let max = (self.height as f32 - half).max(half);
        y.clamp(half, max)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Sign and ratio of travel. Magnitude carries no meaning and is never
    /// assumed to be 1; must never be zero.
    pub dir: Vec2,
    /// Path length per second
    pub speed: f32,
    pub half_extents: Vec2,
    /// Fractional movement carried between ticks when pixel snapping
    #[serde(default)]
    pub remainder: Vec2,
}

impl Ball {
    /// Ball at the serve position
    pub fn serve(arena: &Arena, speed: f32) -> Self {
        Self {
            pos: arena.center(),
            dir: Vec2::new(BALL_START_DIR.0, BALL_START_DIR.1),
            speed,
            half_extents: ball_half_extents(),
            remainder: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }
}

/// A player's bat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub player: Player,
    /// Center position; x never changes after reset
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    /// Paddle vertically centered at its player's side
    pub fn new(player: Player, arena: &Arena, speed: f32) -> Self {
        Self {
            player,
            pos: Vec2::new(arena.paddle_x(player), arena.height as f32 / 2.0),
            size: paddle_size(),
            speed,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size / 2.0)
    }

    /// Move by `dy` and clamp into the arena
    pub fn shift(&mut self, dy: f32, arena: &Arena) {
        self.pos.y = arena.clamp_paddle_y(self.pos.y + dy, self.size.y);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub rules: Rules,
    pub ball: Ball,
    /// Indexed by `Player::index`
    pub paddles: [Paddle; 2],
    pub phase: GamePhase,
    pub winner: Option<Player>,
    /// Simulation tick counter since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a game in its canonical starting state
    pub fn new(arena: Arena, rules: Rules) -> Self {
        Self {
            arena,
            rules,
            ball: Ball::serve(&arena, rules.ball_speed),
            paddles: [
                Paddle::new(Player::One, &arena, rules.paddle_speed),
                Paddle::new(Player::Two, &arena, rules.paddle_speed),
            ],
            phase: GamePhase::Playing,
            winner: None,
            time_ticks: 0,
        }
    }

    /// Restore the canonical start: ball centered serving (1, -1), paddles
    /// centered, phase Playing, no winner.
    pub fn reset(&mut self) {
        *self = Self::new(self.arena, self.rules);
        log::debug!(
            "Game reset: ball at ({}, {}), speed {}",
            self.ball.pos.x,
            self.ball.pos.y,
            self.ball.speed
        );
    }

    #[inline]
    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    #[inline]
    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enter GameOver with the given winner (no-op if already over)
    pub fn finish(&mut self, winner: Option<Player>) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.winner = winner;
        match winner {
            Some(player) => log::info!(
                "Game over after {} ticks: {}",
                self.time_ticks,
                player.win_message()
            ),
            None => log::info!("Game over after {} ticks", self.time_ticks),
        }
    }

    /// Outcome label for the renderer, if the game has ended with a winner
    pub fn outcome_message(&self) -> Option<&'static str> {
        self.winner.map(Player::win_message)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default(), Rules::default())
    }
}

//! Simulation tick
//!
//! Advances the game one step: resolve collisions at the current ball
//! position, move the ball, then move the paddles.

use super::collision::{Wall, out_of_bounds, resolve_paddles, resolve_wall};
use super::motion;
use super::state::{GameState, Player};
use crate::input::{Action, InputSource};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    /// Start a new game (only honoured after game over)
    pub restart: bool,
    /// Host should stop ticking; ignored by the simulation
    pub quit: bool,
}

impl TickInput {
    /// Sample every action from an input source once
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            p1_up: source.is_held(Action::Player1Up),
            p1_down: source.is_held(Action::Player1Down),
            p2_up: source.is_held(Action::Player2Up),
            p2_down: source.is_held(Action::Player2Down),
            restart: source.is_held(Action::Restart),
            quit: source.is_held(Action::Quit),
        }
    }

    /// (up, down) held state for a player
    pub fn vertical(&self, player: Player) -> (bool, bool) {
        match player {
            Player::One => (self.p1_up, self.p1_down),
            Player::Two => (self.p2_up, self.p2_down),
        }
    }
}

/// What the ball touched during collision resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: Option<Wall>,
    pub paddle: Option<Player>,
    /// Winner if the ball left the arena this tick
    pub scored: Option<Player>,
}

/// Move both paddles from held keys, then clamp them into the arena.
///
/// Up and down are applied independently, so holding both cancels out.
/// Paddles stay put once the game is over.
pub fn update_paddles(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    let arena = state.arena;
    for player in Player::ALL {
        let (up, down) = input.vertical(player);
        let paddle = state.paddle_mut(player);
        let step = paddle.speed * dt;
        let mut dy = 0.0;
        if up {
            dy -= step;
        }
        if down {
            dy += step;
        }
        paddle.shift(dy, &arena);
    }
}

/// Resolve wall and paddle contacts and check for the ball leaving the arena.
/// Runs against the ball's current position, before it moves.
pub fn check_collisions(state: &mut GameState) -> Contacts {
    let mut contacts = Contacts::default();
    if state.is_over() {
        return contacts;
    }

    contacts.wall = resolve_wall(&mut state.ball, &state.arena, state.rules.clamp_on_wall);
    contacts.paddle = resolve_paddles(&mut state.ball, &state.paddles);

    if let Some(wall) = contacts.wall {
        log::debug!("Ball hit {:?} wall at x={}", wall, state.ball.pos.x);
    }
    if let Some(player) = contacts.paddle {
        log::debug!("Ball hit paddle {:?} at y={}", player, state.ball.pos.y);
    }

    contacts.scored = out_of_bounds(&state.ball, &state.arena);
    if let Some(winner) = contacts.scored {
        state.finish(Some(winner));
    }

    contacts
}

/// Move the ball a path length of `distance` along its current direction
pub fn integrate_ball(state: &mut GameState, distance: f32) {
    if state.is_over() {
        return;
    }
    motion::advance(&mut state.ball, distance, state.rules.pixel_snap);
}

/// Advance the game state by `dt` seconds.
///
/// Collisions are resolved before the ball moves, so a ball covering more
/// than a paddle's width in one tick can pass straight through it. Keep `dt`
/// small (see `FixedStep`).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Contacts {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    if state.is_over() {
        if input.restart {
            log::info!("Restart requested");
            state.reset();
        }
        return Contacts::default();
    }

    state.time_ticks += 1;

    let contacts = check_collisions(state);
    let distance = state.ball.speed * dt;
    integrate_ball(state, distance);
    update_paddles(state, input, dt);

    log::trace!(
        "tick {}: ball ({:.2}, {:.2})",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y
    );

    contacts
}

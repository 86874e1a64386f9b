//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - The caller supplies elapsed time; no clocks are read here
//! - Stable evaluation order (paddle 1 before paddle 2)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Wall};
pub use snapshot::{PaddleView, RESTART_PROMPT, Snapshot, snapshot};
pub use state::{Arena, Ball, GamePhase, GameState, Paddle, Player, Rules};
pub use tick::{Contacts, TickInput, check_collisions, integrate_ball, tick, update_paddles};

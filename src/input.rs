//! Logical input actions
//!
//! Hosts translate their own key events into `Action`s; the simulation only
//! ever asks whether an action is currently held.

use serde::{Deserialize, Serialize};

/// Everything a player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Restart,
    Quit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Player1Up,
        Action::Player1Down,
        Action::Player2Up,
        Action::Player2Down,
        Action::Restart,
        Action::Quit,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Anything that can report which actions are held right now
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

/// Set of currently held actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.0 &= !action.bit();
    }

    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Apply a host key event through the bindings. Returns the action the key
    /// maps to, if any.
    pub fn apply_key(&mut self, bindings: &KeyBindings, key: &str, held: bool) -> Option<Action> {
        let action = bindings.action_for(key)?;
        self.set(action, held);
        Some(action)
    }
}

impl FromIterator<Action> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut keys = Self::new();
        for action in iter {
            keys.press(action);
        }
        keys
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }
}

/// Host key names bound to each action. Names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player1_up: String,
    pub player1_down: String,
    pub player2_up: String,
    pub player2_down: String,
    pub restart: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player1_up: "W".to_string(),
            player1_down: "S".to_string(),
            player2_up: "Up".to_string(),
            player2_down: "Down".to_string(),
            restart: "Space".to_string(),
            quit: "Escape".to_string(),
        }
    }
}

impl KeyBindings {
    /// Key name bound to an action
    pub fn key_for(&self, action: Action) -> &str {
        match action {
            Action::Player1Up => &self.player1_up,
            Action::Player1Down => &self.player1_down,
            Action::Player2Up => &self.player2_up,
            Action::Player2Down => &self.player2_down,
            Action::Restart => &self.restart,
            Action::Quit => &self.quit,
        }
    }

    /// Action bound to a key name, if any
    pub fn action_for(&self, key: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.key_for(action).eq_ignore_ascii_case(key))
    }

    /// Two actions sharing one key would make one of them unreachable
    pub fn conflicts(&self) -> Vec<(Action, Action)> {
        let mut found = Vec::new();
        for (i, &a) in Action::ALL.iter().enumerate() {
            for &b in &Action::ALL[i + 1..] {
                if self.key_for(a).eq_ignore_ascii_case(self.key_for(b)) {
                    found.push((a, b));
                }
            }
        }
        found
    }
}

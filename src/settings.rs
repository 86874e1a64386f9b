//! Game settings
//!
//! Read once at startup from a JSON file; the arena size and physics rules
//! are fixed for the rest of the session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_HALF_HEIGHT, PADDLE_HEIGHT, PADDLE_WIDTH, PADDLE_X_OFFSET};
use crate::input::KeyBindings;
use crate::sim::{Arena, Rules};

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playing field size
    pub arena: Arena,
    /// Ball and paddle speeds, wall and snapping behaviour
    pub physics: Rules,
    /// Host key names for each action
    pub bindings: KeyBindings,
}

impl Settings {
    /// Default settings file name, relative to the working directory
    pub const FILE_NAME: &'static str = "pong_settings.json";

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        // Both paddles and the ball must fit, or the paddle clamp cannot hold
        let min_width = 2.0 * PADDLE_X_OFFSET + PADDLE_WIDTH;
        let min_height = PADDLE_HEIGHT.max(2.0 * BALL_HALF_HEIGHT);
        let size = self.arena.size();
        if size.x < min_width || size.y < min_height {
            return Err(format!(
                "arena must be at least {min_width}x{min_height}, got {}x{}",
                self.arena.width, self.arena.height
            ));
        }
        let speeds = [
            ("ball_speed", self.physics.ball_speed),
            ("paddle_speed", self.physics.paddle_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if let Some((a, b)) = self.bindings.conflicts().first() {
            return Err(format!("{a:?} and {b:?} are bound to the same key"));
        }
        Ok(())
    }

    /// Load settings from a file, falling back to defaults when the file is
    /// missing, unreadable or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(reason) => {
                    log::warn!("Ignoring settings in {}: {reason}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not parse {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

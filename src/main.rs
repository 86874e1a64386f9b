//! Pong entry point
//!
//! Headless host: drives the simulation with a seeded input script through the
//! fixed-step clock and prints the last frame as text.
//!
//! Usage: `pong [settings.json] [seed] [games]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pong::renderer::{TextSurface, draw_frame};
use pong::sim::{GameState, TickInput, snapshot, tick};
use pong::{Action, FixedStep, HeldKeys, InputSource, Settings};

/// Host frame budget (10 minutes at 60 Hz)
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Seeded key-masher standing in for two players at a keyboard
struct ScriptedInput {
    rng: Pcg32,
    keys: HeldKeys,
    /// Frames left before each player picks new keys
    hold_frames: [u32; 2],
}

impl ScriptedInput {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keys: HeldKeys::new(),
            hold_frames: [0; 2],
        }
    }

    /// Update held keys for the coming frame
    fn next_frame(&mut self, game_over: bool, games_left: u32) {
        let pairs = [
            (Action::Player1Up, Action::Player1Down),
            (Action::Player2Up, Action::Player2Down),
        ];
        for (i, (up, down)) in pairs.into_iter().enumerate() {
            if self.hold_frames[i] > 0 {
                self.hold_frames[i] -= 1;
                continue;
            }
            self.keys.set(up, self.rng.random_bool(0.4));
            self.keys.set(down, self.rng.random_bool(0.4));
            self.hold_frames[i] = self.rng.random_range(5..40);
        }

        self.keys.set(Action::Restart, game_over && games_left > 0);
        self.keys.set(Action::Quit, game_over && games_left == 0);
    }

    /// Jittery frame time around 60 Hz
    fn frame_dt(&mut self) -> f32 {
        1.0 / 60.0 + self.rng.random_range(-0.004..0.004)
    }
}

impl InputSource for ScriptedInput {
    fn is_held(&self, action: Action) -> bool {
        self.keys.is_held(action)
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let settings_path = args.get(1).map(String::as_str).unwrap_or(Settings::FILE_NAME);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0x5eed);
    let games: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(3).max(1);

    let settings = Settings::load(settings_path);
    log::info!(
        "Pong (headless) starting: {}x{} arena, seed {seed}, {games} game(s)",
        settings.arena.width,
        settings.arena.height
    );

    let mut state = GameState::new(settings.arena, settings.physics);
    let mut clock = FixedStep::default();
    let mut script = ScriptedInput::new(seed);
    let mut wins = [0u32; 2];
    let mut games_left = games - 1;
    let mut frames = 0;

    while frames < MAX_FRAMES {
        frames += 1;
        script.next_frame(state.is_over(), games_left);
        let input = TickInput::from_source(&script);
        if input.quit {
            log::info!("Quit requested after {frames} frames");
            break;
        }

        let was_over = state.is_over();
        let steps = clock.advance(script.frame_dt());
        for _ in 0..steps {
            tick(&mut state, &input, clock.step());
        }

        if !was_over && state.is_over() {
            if let Some(winner) = state.winner {
                wins[winner.index()] += 1;
            }
        } else if was_over && !state.is_over() {
            games_left -= 1;
        }
    }

    let mut surface = TextSurface::new(&state.arena, 80, 24);
    draw_frame(&snapshot(&state), &mut surface);
    println!("{surface}");
    println!(
        "Player 1: {}  Player 2: {}  ({} frames)",
        wins[0], wins[1], frames
    );
}

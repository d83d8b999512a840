//! Engine-level knobs that are not part of the balance tables.

use std::time::Duration;

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_STARTING_LIVES: u32 = 20;
const DEFAULT_SEED: u64 = 0x5eed_e1e6_d3f3_0c7a;

/// What happens to an enemy that reaches the end of its path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathMode {
    /// The enemy costs lives and leaves the battlefield.
    #[default]
    Once,
    /// The enemy costs lives and re-enters at the first waypoint.
    Looping,
}

/// Configuration parameters required to construct the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    tick_interval: Duration,
    game_speed: f32,
    path_mode: PathMode,
    starting_lives: u32,
    visual_duration: Option<Duration>,
    rng_seed: u64,
}

impl EngineConfig {
    /// Creates a configuration with the provided tick interval and seed.
    ///
    /// A zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(tick_interval: Duration, rng_seed: u64) -> Self {
        Self {
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            game_speed: 1.0,
            path_mode: PathMode::Once,
            starting_lives: DEFAULT_STARTING_LIVES,
            visual_duration: None,
            rng_seed,
        }
    }

    /// Replaces the game-speed multiplier; non-positive values fall back to 1.
    #[must_use]
    pub fn with_game_speed(mut self, game_speed: f32) -> Self {
        self.game_speed = if game_speed.is_finite() && game_speed > 0.0 {
            game_speed
        } else {
            1.0
        };
        self
    }

    /// Replaces the path mode.
    #[must_use]
    pub const fn with_path_mode(mut self, path_mode: PathMode) -> Self {
        self.path_mode = path_mode;
        self
    }

    /// Replaces the number of lives the player starts with.
    #[must_use]
    pub const fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Overrides how long visual markers stay alive.
    #[must_use]
    pub const fn with_visual_duration(mut self, duration: Duration) -> Self {
        self.visual_duration = Some(duration);
        self
    }

    /// Simulated time one step advances.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Multiplier on movement, cooldowns and spawn cadence.
    #[must_use]
    pub const fn game_speed(&self) -> f32 {
        self.game_speed
    }

    /// Path mode in use.
    #[must_use]
    pub const fn path_mode(&self) -> PathMode {
        self.path_mode
    }

    /// Lives at engine creation.
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    /// Visual marker lifetime override, if any.
    #[must_use]
    pub const fn visual_duration(&self) -> Option<Duration> {
        self.visual_duration
    }

    /// Seed of the engine's random number generator.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_game_speed_falls_back_to_normal() {
        let config = EngineConfig::default().with_game_speed(-2.0);
        assert_eq!(config.game_speed(), 1.0);
        let config = EngineConfig::default().with_game_speed(f32::NAN);
        assert_eq!(config.game_speed(), 1.0);
    }

    #[test]
    fn zero_tick_interval_is_raised() {
        let config = EngineConfig::new(Duration::ZERO, 1);
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }
}

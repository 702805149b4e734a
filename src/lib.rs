//! Itrik Surfers - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `app`: Screen/mode controller driving the simulation from key presses
//! - `renderer`: Draw-primitive contract and scene drawing
//! - `platform`: macroquad window/input backend
//! - `persistence`: High score storage

pub mod app;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, Key, Screen};
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const GAME_NAME: &str = "itrik surfers";

    /// Logical screen size in pixels
    pub const WIDTH: i32 = 900;
    pub const HEIGHT: i32 = 500;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Top of the ground strip
    pub const GROUND_Y: i32 = HEIGHT - 90;
    /// Fixed horizontal position of the player's left edge
    pub const PLAYER_X: i32 = 120;

    /// Player body
    pub const PLAYER_WIDTH: i32 = 48;
    pub const PLAYER_HEIGHT: i32 = 64;
    pub const GRAVITY: f32 = 0.9;
    pub const JUMP_STRENGTH: f32 = -16.0;
    /// Fraction of the jump impulse used by the mid-air jump
    pub const DOUBLE_JUMP_FACTOR: f32 = 0.9;

    /// Scroll speed at the start of every run (pixels/tick)
    pub const START_SPEED: f32 = 6.0;
    /// Speed gained every tick while playing
    pub const DIFFICULTY_INCREMENT: f32 = 0.0005;

    /// Entities are dropped once they are this far left of the screen
    pub const OFFSCREEN_MARGIN: i32 = -50;

    pub const COIN_RADIUS: i32 = 10;
    pub const POWERUP_RADIUS: i32 = 14;

    /// Shield duration (3 seconds)
    pub const SHIELD_TICKS: u32 = TICK_RATE * 3;

    /// Score awards
    pub const OBSTACLE_PASS_SCORE: u64 = 5;
    pub const COIN_SCORE: u64 = 10;
    /// Continuous bonus is `speed / SPEED_BONUS_DIVISOR`, truncated
    pub const SPEED_BONUS_DIVISOR: f32 = 250.0;

    /// Spawn thresholds (ticks). The obstacle threshold shrinks with speed.
    pub const OBSTACLE_SPAWN_BASE: i32 = 70;
    pub const OBSTACLE_SPAWN_MIN: i32 = 18;
    pub const COIN_SPAWN_TICKS: u32 = 40;
    pub const POWERUP_SPAWN_TICKS: u32 = 900;
}

/// Round a per-tick scroll speed to a whole-pixel step
#[inline]
pub fn pixel_step(speed: f32) -> i32 {
    speed.round() as i32
}

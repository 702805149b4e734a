//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Insertion-order iteration of every entity collection
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod state;
pub mod tick;

pub use background::{Background, Layer};
pub use collision::Rect;
pub use state::{
    Coin, GameEvent, GamePhase, GameState, JumpKind, Obstacle, Player, PowerUp, PowerUpKind,
};
pub use tick::tick;

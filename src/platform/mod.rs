//! Platform abstraction layer
//!
//! Handles the native window through macroquad:
//! - Drawing the `Renderer` primitives
//! - Mapping keyboard and window-close events to `Key`s

pub mod input;
pub mod macroquad_renderer;

pub use input::poll_keys;
pub use macroquad_renderer::MacroquadRenderer;

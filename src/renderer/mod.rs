//! Rendering module
//!
//! The game only ever talks to the `Renderer` trait: a handful of filled
//! shapes plus text. `scene` draws every entity and screen through it,
//! `shapes` tessellates what a backend can't draw natively, and
//! `recording` captures draw calls without a window.

pub mod recording;
pub mod scene;
pub mod shapes;

pub use recording::{DrawCommand, RecordingRenderer};

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// The two text sizes the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Body,
    Title,
}

impl FontSize {
    /// Nominal size in pixels
    pub fn px(self) -> u16 {
        match self {
            FontSize::Body => 24,
            FontSize::Title => 48,
        }
    }
}

/// Draw primitives consumed by the scene
///
/// Positions are screen pixels, origin top-left, y down. Text is placed by
/// its top-left corner.
pub trait Renderer {
    fn clear(&mut self, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rounded_rect(rect, 0.0, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);

    /// Outline of the ellipse inscribed in `rect`
    fn ellipse_outline(&mut self, rect: Rect, thickness: f32, color: Color);

    fn text(&mut self, text: &str, pos: Vec2, size: FontSize, color: Color);

    /// Rendered width of `text`, for centring
    fn text_width(&self, text: &str, size: FontSize) -> f32;
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::rgb(135, 206, 250);
    pub const GROUND: Color = Color::rgb(40, 40, 40);
    pub const SKYLINE: Color = Color::rgb(120, 120, 140);
    pub const LAYERS: [Color; 3] = [
        Color::rgb(100, 180, 255),
        Color::rgb(85, 155, 220),
        Color::rgb(60, 120, 190),
    ];

    pub const PLAYER: Color = Color::rgb(20, 160, 100);
    pub const SHIELD: Color = Color::rgba(120, 200, 255, 80);
    pub const OBSTACLE: Color = Color::rgb(200, 50, 40);
    pub const COIN: Color = Color::rgb(255, 200, 0);
    pub const POWERUP_SHIELD: Color = Color::rgb(100, 200, 255);

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const HINT: Color = Color::rgb(220, 220, 220);
    pub const DIM: Color = Color::rgb(200, 200, 200);

    pub const START_BG: Color = Color::rgb(20, 20, 40);
    pub const TITLE: Color = Color::rgb(255, 200, 60);
    pub const GAME_OVER_BG: Color = Color::rgb(10, 10, 20);
    pub const GAME_OVER_TITLE: Color = Color::rgb(255, 90, 90);
}

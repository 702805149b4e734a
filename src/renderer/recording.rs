//! A renderer that records draw calls instead of drawing

use glam::Vec2;

use super::{Color, FontSize, Renderer};
use crate::sim::Rect;

/// Approximate advance of one glyph, as a fraction of the font size
const GLYPH_ADVANCE: f32 = 0.55;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    RoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Color,
    },
    EllipseOutline {
        rect: Rect,
        thickness: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: FontSize,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn ellipse_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::EllipseOutline {
            rect,
            thickness,
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: FontSize, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn text_width(&self, text: &str, size: FontSize) -> f32 {
        text.chars().count() as f32 * size.px() as f32 * GLYPH_ADVANCE
    }
}

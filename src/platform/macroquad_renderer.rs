//! `Renderer` backed by macroquad's immediate-mode drawing

use glam::Vec2;
use macroquad::color::Color as MqColor;
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use crate::renderer::shapes::{ellipse_points, rounded_rect_parts};
use crate::renderer::{Color, FontSize, Renderer};
use crate::sim::Rect;

/// Segments used for ellipse outlines
const ELLIPSE_SEGMENTS: u32 = 48;

fn mq_color(c: Color) -> MqColor {
    MqColor::from_rgba(c.r, c.g, c.b, c.a)
}

#[derive(Debug, Default)]
pub struct MacroquadRenderer;

impl MacroquadRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MacroquadRenderer {
    fn clear(&mut self, color: Color) {
        clear_background(mq_color(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let c = mq_color(color);
        if radius <= 0.0 {
            draw_rectangle(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, c);
            return;
        }

        let parts = rounded_rect_parts(rect, radius);
        for [x, y, w, h] in parts.bands {
            draw_rectangle(x, y, w, h, c);
        }
        for corner in parts.corners {
            draw_circle(corner.x, corner.y, parts.radius, c);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, mq_color(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        draw_line(from.x, from.y, to.x, to.y, thickness, mq_color(color));
    }

    fn ellipse_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        let c = mq_color(color);
        let points = ellipse_points(rect, ELLIPSE_SEGMENTS);
        for pair in points.windows(2) {
            draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, thickness, c);
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, size: FontSize, color: Color) {
        // macroquad places text by its baseline
        let dims = measure_text(text, None, size.px(), 1.0);
        draw_text(
            text,
            pos.x,
            pos.y + dims.offset_y,
            size.px() as f32,
            mq_color(color),
        );
    }

    fn text_width(&self, text: &str, size: FontSize) -> f32 {
        measure_text(text, None, size.px(), 1.0).width
    }
}

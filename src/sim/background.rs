//! Parallax background bands
//!
//! Three horizontal bands scroll at different fractions of the world speed.
//! Each band is one screen wide and is drawn twice so the seam never shows.

use crate::consts::{HEIGHT, WIDTH};
use crate::pixel_step;

/// Speed multipliers, far to near
pub const LAYER_SPEEDS: [f32; 3] = [0.6, 1.0, 1.4];

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Horizontal scroll offset, in (-WIDTH, 0]
    pub offset: i32,
    pub speed: f32,
    /// Top edge of the band
    pub y: i32,
    pub height: i32,
}

impl Layer {
    fn scroll(&mut self, base_speed: f32) {
        self.offset -= pixel_step(base_speed * self.speed);
        if self.offset <= -WIDTH {
            self.offset = 0;
        }
    }

    /// Left edges of the two copies to draw
    pub fn tile_positions(&self) -> [i32; 2] {
        [self.offset, self.offset + WIDTH]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub layers: [Layer; 3],
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

impl Background {
    pub fn new() -> Self {
        let layers = std::array::from_fn(|i| Layer {
            offset: 0,
            speed: LAYER_SPEEDS[i],
            y: i as i32 * (HEIGHT / 6),
            height: HEIGHT / 3,
        });
        Self { layers }
    }

    pub fn update(&mut self, base_speed: f32) {
        for layer in &mut self.layers {
            layer.scroll(base_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_scroll_at_own_speed() {
        let mut bg = Background::new();
        bg.update(6.0);
        // 3.6 -> 4, 6.0 -> 6, 8.4 -> 8
        let offsets: Vec<i32> = bg.layers.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![-4, -6, -8]);
    }

    #[test]
    fn test_layer_placement() {
        let bg = Background::new();
        let ys: Vec<i32> = bg.layers.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![0, 83, 166]);
        assert!(bg.layers.iter().all(|l| l.height == 166));
    }

    #[test]
    fn test_wraps_after_one_screen() {
        let mut bg = Background::new();
        // Middle layer moves exactly 6 px per tick: 150 ticks is one screen
        for _ in 0..149 {
            bg.update(6.0);
        }
        assert_eq!(bg.layers[1].offset, -894);
        bg.update(6.0);
        assert_eq!(bg.layers[1].offset, 0);

        for _ in 0..1000 {
            bg.update(6.0);
            for layer in &bg.layers {
                assert!(layer.offset > -WIDTH && layer.offset <= 0);
            }
        }
    }

    #[test]
    fn test_tile_positions_cover_screen() {
        let mut bg = Background::new();
        bg.update(6.0);
        assert_eq!(bg.layers[1].tile_positions(), [-6, WIDTH - 6]);
    }
}

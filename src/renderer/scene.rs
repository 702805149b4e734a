//! Scene drawing
//!
//! Every entity and screen is drawn here through the `Renderer` trait. Draw
//! order for the playing screen: sky, parallax bands, skyline, coins,
//! power-ups, obstacles, player, ground and HUD.

use glam::Vec2;

use super::{Color, FontSize, Renderer, colors};
use crate::consts::*;
use crate::sim::{
    Background, Coin, GameState, Obstacle, Player, PowerUp, PowerUpKind, Rect,
};

/// Options that change what the playing screen shows
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    pub high_score: u64,
    pub show_skyline: bool,
    /// Frames per second to print in the corner, if any
    pub fps: Option<u32>,
}

pub fn draw_player(r: &mut dyn Renderer, player: &Player) {
    let body = player.bounds();
    r.fill_rounded_rect(body, 8.0, colors::PLAYER);

    let center = body.center();
    let eye = Vec2::new((center.x + 10) as f32, (center.y - 6) as f32);
    r.fill_circle(eye, 6.0, colors::WHITE);
    r.fill_circle(eye, 2.0, colors::BLACK);

    if player.has_shield() {
        r.ellipse_outline(body.inflate(20, 18), 3.0, colors::SHIELD);
    }
}

pub fn draw_obstacle(r: &mut dyn Renderer, obstacle: &Obstacle) {
    let rect = obstacle.rect;
    r.fill_rounded_rect(rect, 6.0, colors::OBSTACLE);
    // Hazard stripe
    r.line(
        Vec2::new((rect.left() + 4) as f32, (rect.top() + 6) as f32),
        Vec2::new((rect.right() - 6) as f32, (rect.bottom() - 6) as f32),
        3.0,
        colors::BLACK,
    );
}

pub fn draw_coin(r: &mut dyn Renderer, coin: &Coin) {
    let center = coin.pos.as_vec2();
    r.fill_circle(center, coin.radius as f32, colors::COIN);
    r.fill_circle(center + Vec2::new(-2.0, -3.0), 4.0, colors::WHITE);
}

pub fn draw_powerup(r: &mut dyn Renderer, powerup: &PowerUp) {
    let center = powerup.pos.as_vec2();
    match powerup.kind {
        PowerUpKind::Shield => {
            r.fill_circle(center, powerup.radius as f32, colors::POWERUP_SHIELD);
            r.fill_circle(center + Vec2::new(-3.0, -4.0), 5.0, colors::WHITE);
        }
    }
}

pub fn draw_background(r: &mut dyn Renderer, background: &Background) {
    for (layer, color) in background.layers.iter().zip(colors::LAYERS) {
        for x in layer.tile_positions() {
            r.fill_rect(Rect::new(x, layer.y, WIDTH, layer.height), color);
        }
    }
}

/// Left edges of the distant buildings. They drift with wall-clock time
/// (one pixel per 20 ms of simulated play), not with the scroll speed.
pub fn skyline_positions(time_ticks: u64) -> [i32; 8] {
    let millis = time_ticks * 1000 / TICK_RATE as u64;
    let drift = ((millis / 20) % 120) as i32;
    std::array::from_fn(|i| (i as i32 * 120 + drift) % WIDTH)
}

fn draw_skyline(r: &mut dyn Renderer, time_ticks: u64) {
    for x in skyline_positions(time_ticks) {
        r.fill_rect(Rect::new(x, GROUND_Y - 220, 80, 160), colors::SKYLINE);
    }
}

fn draw_centered(r: &mut dyn Renderer, text: &str, y: f32, size: FontSize, color: Color) {
    let x = WIDTH as f32 / 2.0 - r.text_width(text, size) / 2.0;
    r.text(text, Vec2::new(x, y), size, color);
}

fn draw_hud(r: &mut dyn Renderer, state: &GameState, options: &SceneOptions) {
    r.fill_rect(
        Rect::new(0, GROUND_Y, WIDTH, HEIGHT - GROUND_Y),
        colors::GROUND,
    );

    let lines = [
        format!("Score: {}", state.score),
        format!("Distance: {} m", state.distance as u64),
        format!("Highscore: {}", options.high_score),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = 10.0 + 26.0 * i as f32;
        r.text(line, Vec2::new(10.0, y), FontSize::Body, colors::WHITE);
    }

    draw_centered(
        r,
        "SPACE to jump, P to pause. Collect coins and shield!",
        10.0,
        FontSize::Body,
        colors::HINT,
    );

    if let Some(fps) = options.fps {
        let text = format!("{} FPS", fps);
        let x = WIDTH as f32 - 10.0 - r.text_width(&text, FontSize::Body);
        r.text(&text, Vec2::new(x, HEIGHT as f32 - 34.0), FontSize::Body, colors::DIM);
    }
}

/// The playing screen
pub fn draw_game(r: &mut dyn Renderer, state: &GameState, options: &SceneOptions) {
    r.clear(colors::SKY);
    draw_background(r, &state.background);
    if options.show_skyline {
        draw_skyline(r, state.time_ticks);
    }

    for coin in &state.coins {
        draw_coin(r, coin);
    }
    for powerup in &state.powerups {
        draw_powerup(r, powerup);
    }
    for obstacle in &state.obstacles {
        draw_obstacle(r, obstacle);
    }
    draw_player(r, &state.player);

    draw_hud(r, state, options);
}

pub fn draw_start_screen(r: &mut dyn Renderer, high_score: u64) {
    let top = HEIGHT as f32 / 3.0;
    r.clear(colors::START_BG);
    draw_centered(
        r,
        &GAME_NAME.to_uppercase(),
        top,
        FontSize::Title,
        colors::TITLE,
    );
    draw_centered(
        r,
        "Press SPACE to start - Jump with SPACE - Press P to pause",
        top + 80.0,
        FontSize::Body,
        colors::WHITE,
    );
    draw_centered(
        r,
        &format!("Highscore: {}", high_score),
        top + 120.0,
        FontSize::Body,
        colors::WHITE,
    );
}

pub fn draw_pause_overlay(r: &mut dyn Renderer) {
    draw_centered(
        r,
        "PAUSED",
        HEIGHT as f32 / 2.0 - 30.0,
        FontSize::Title,
        colors::WHITE,
    );
}

pub fn draw_game_over(r: &mut dyn Renderer, score: u64, high_score: u64) {
    let top = HEIGHT as f32 / 3.0;
    r.clear(colors::GAME_OVER_BG);
    draw_centered(r, "GAME OVER", top, FontSize::Title, colors::GAME_OVER_TITLE);
    draw_centered(
        r,
        &format!("Score: {}", score),
        top + 80.0,
        FontSize::Body,
        colors::WHITE,
    );
    draw_centered(
        r,
        &format!("Highscore: {}", high_score),
        top + 110.0,
        FontSize::Body,
        colors::WHITE,
    );
    draw_centered(
        r,
        "Press R to Restart or Q to Quit",
        top + 160.0,
        FontSize::Body,
        colors::DIM,
    );
}

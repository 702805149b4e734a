//! Itrik Surfers entry point
//!
//! Opens the window and runs the fixed timestep loop: input, simulation
//! ticks, then one render per frame.

use itrik_surfers::consts::*;
use itrik_surfers::persistence::FileScoreStore;
use itrik_surfers::platform::{MacroquadRenderer, poll_keys};
use itrik_surfers::{App, Settings};
use macroquad::input::prevent_quit;
use macroquad::time::{get_fps, get_frame_time};
use macroquad::window::{Conf, next_frame};

fn window_conf() -> Conf {
    Conf {
        window_title: capitalize(GAME_NAME),
        window_width: WIDTH,
        window_height: HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Itrik Surfers starting...");

    let settings = Settings::load();
    let store = FileScoreStore::new(&settings.high_score_path);
    store.ensure_exists();

    let mut app = App::new(settings, Box::new(store));
    let mut renderer = MacroquadRenderer::new();
    let mut accumulator = 0.0f32;

    // Window close becomes a Key::Close event handled by the app
    prevent_quit();

    loop {
        for key in poll_keys() {
            app.handle_key(key);
        }
        if !app.is_running() {
            break;
        }

        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            app.update();
            accumulator -= SIM_DT;
            substeps += 1;
        }

        app.set_fps(get_fps().max(0) as u32);
        app.draw(&mut renderer);
        next_frame().await;
    }

    log::info!("Itrik Surfers exiting (high score {})", app.high_score());
}

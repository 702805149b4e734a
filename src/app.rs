//! Screen/mode controller
//!
//! Owns everything that used to be ambient: the session, the settings, the
//! high score and its store. The platform loop feeds it key presses, calls
//! `update` once per simulation tick and `draw` once per frame.

use crate::highscores::HighScore;
use crate::persistence::ScoreStore;
use crate::renderer::Renderer;
use crate::renderer::scene::{self, SceneOptions};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Start on the title screen, jump while playing
    Jump,
    Pause,
    /// Only meaningful on the game over screen
    Restart,
    /// Only meaningful on the game over screen
    Quit,
    /// Window close request, honoured everywhere
    Close,
}

/// What the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    GameOver,
}

impl From<GamePhase> for Screen {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Ready => Screen::Start,
            GamePhase::Playing => Screen::Playing,
            GamePhase::Paused => Screen::Paused,
            GamePhase::GameOver => Screen::GameOver,
        }
    }
}

pub struct App {
    pub state: GameState,
    pub settings: Settings,
    high_score: HighScore,
    store: Box<dyn ScoreStore>,
    running: bool,
    fps: Option<u32>,
}

impl App {
    pub fn new(settings: Settings, store: Box<dyn ScoreStore>) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let high_score = HighScore::load(&*store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            settings,
            high_score,
            store,
            running: true,
            fps: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.state.phase.into()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    /// Latest measured frame rate, shown when enabled in settings
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = Some(fps);
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Close {
            log::info!("Window closed");
            self.running = false;
            return;
        }

        match (self.screen(), key) {
            (Screen::Start, Key::Jump) => self.state.start(),
            (Screen::Playing, Key::Jump) => {
                if let Some(kind) = self.state.player.jump() {
                    log::trace!("{:?} jump", kind);
                }
            }
            (Screen::Playing, Key::Pause) | (Screen::Paused, Key::Pause) => {
                self.state.toggle_pause();
                log::debug!("Pause toggled: {:?}", self.state.phase);
            }
            (Screen::GameOver, Key::Restart) => self.state.restart(),
            (Screen::GameOver, Key::Quit) => {
                log::info!("Quit from game over screen");
                self.running = false;
            }
            _ => {}
        }
    }

    /// Run one simulation tick (no-op unless playing)
    pub fn update(&mut self) {
        for event in tick(&mut self.state) {
            match event {
                GameEvent::Crashed => self.on_game_over(),
                GameEvent::PowerUpCollected(kind) => log::debug!("Picked up {:?}", kind),
                GameEvent::ShieldAbsorbed => log::debug!("Shield absorbed a hit"),
                _ => log::trace!("{:?}", event),
            }
        }
    }

    fn on_game_over(&mut self) {
        log::info!(
            "Game over: score {}, distance {} m",
            self.state.score,
            self.state.distance as u64
        );
        self.high_score
            .submit(self.state.score, &mut *self.store);
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        let options = SceneOptions {
            high_score: self.high_score.best(),
            show_skyline: self.settings.show_skyline,
            fps: self.fps.filter(|_| self.settings.show_fps),
        };

        match self.screen() {
            Screen::Start => scene::draw_start_screen(r, options.high_score),
            Screen::Playing => scene::draw_game(r, &self.state, &options),
            Screen::Paused => {
                scene::draw_game(r, &self.state, &options);
                scene::draw_pause_overlay(r);
            }
            Screen::GameOver => {
                scene::draw_game_over(r, self.state.score, options.high_score)
            }
        }
    }
}

/// Seed from the system clock
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

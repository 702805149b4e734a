//! Game state and core simulation types
//!
//! The session owns every entity; nothing outside `sim` mutates them except
//! through `jump`, the phase transitions and `tick`.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::background::Background;
use super::collision::Rect;
use crate::consts::*;
use crate::pixel_step;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, waiting for the first jump key
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen frame, no simulation
    Paused,
    /// Run ended by an unshielded crash
    GameOver,
}

/// Which jump a `Player::jump` call performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Single,
    Double,
}

/// The runner
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub on_ground: bool,
    pub double_jump_allowed: bool,
    /// Ticks of shield remaining
    pub shield_ticks: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X as f32, (GROUND_Y - PLAYER_HEIGHT) as f32),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            vy: 0.0,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            on_ground: true,
            double_jump_allowed: true,
            shield_ticks: 0,
        }
    }

    /// Lowest allowed y for the top edge
    #[inline]
    pub fn ground_level(&self) -> f32 {
        (GROUND_Y - self.height) as f32
    }

    /// Jump from the ground, or double jump once while airborne
    pub fn jump(&mut self) -> Option<JumpKind> {
        if self.on_ground {
            self.vy = self.jump_strength;
            self.on_ground = false;
            self.double_jump_allowed = true;
            Some(JumpKind::Single)
        } else if self.double_jump_allowed {
            self.vy = self.jump_strength * DOUBLE_JUMP_FACTOR;
            self.double_jump_allowed = false;
            Some(JumpKind::Double)
        } else {
            None
        }
    }

    /// Apply gravity, land on the ground and run down the shield
    pub fn update(&mut self) {
        self.vy += self.gravity;
        self.pos.y += self.vy;

        let ground = self.ground_level();
        if self.pos.y >= ground {
            self.pos.y = ground;
            self.vy = 0.0;
            self.on_ground = true;
            self.double_jump_allowed = true;
        } else {
            self.on_ground = false;
        }

        self.shield_ticks = self.shield_ticks.saturating_sub(1);
    }

    #[inline]
    pub fn has_shield(&self) -> bool {
        self.shield_ticks > 0
    }

    /// Collision box at the truncated pixel position
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x as i32,
            self.pos.y as i32,
            self.width,
            self.height,
        )
    }
}

/// A ground hazard
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    pub speed: f32,
    /// Score for this obstacle has been awarded
    pub passed: bool,
}

impl Obstacle {
    /// Obstacle standing on the ground with its left edge at `x`
    pub fn new(x: i32, w: i32, h: i32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, GROUND_Y - h, w, h),
            speed,
            passed: false,
        }
    }

    pub fn update(&mut self) {
        self.rect.x -= pixel_step(self.speed);
    }

    pub fn is_offscreen(&self) -> bool {
        self.rect.right() < OFFSCREEN_MARGIN
    }
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: IVec2,
    pub radius: i32,
    pub speed: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: i32, y: i32, speed: f32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            radius: COIN_RADIUS,
            speed,
            collected: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.x -= pixel_step(self.speed);
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x < OFFSCREEN_MARGIN
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
}

impl PowerUpKind {
    /// Grant the effect to the player
    pub fn apply(self, player: &mut Player) {
        match self {
            PowerUpKind::Shield => player.shield_ticks = SHIELD_TICKS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: IVec2,
    pub radius: i32,
    pub speed: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: i32, y: i32, speed: f32, kind: PowerUpKind) -> Self {
        Self {
            pos: IVec2::new(x, y),
            radius: POWERUP_RADIUS,
            speed,
            kind,
        }
    }

    pub fn update(&mut self) {
        self.pos.x -= pixel_step(self.speed);
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x < OFFSCREEN_MARGIN
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleSpawned,
    CoinSpawned,
    PowerUpSpawned(PowerUpKind),
    ObstaclePassed,
    CoinCollected,
    PowerUpCollected(PowerUpKind),
    /// A shielded hit destroyed an obstacle
    ShieldAbsorbed,
    /// An unshielded hit ended the run
    Crashed,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub background: Background,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    pub score: u64,
    /// Distance travelled (metres shown in the HUD)
    pub distance: f32,
    /// Pixels per tick, shared by every scrolling entity
    pub scroll_speed: f32,
    pub obstacle_timer: u32,
    pub coin_timer: u32,
    pub powerup_timer: u32,
    /// Simulation ticks since the session was created
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session on the start screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            player: Player::new(),
            background: Background::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            score: 0,
            distance: 0.0,
            scroll_speed: START_SPEED,
            obstacle_timer: 0,
            coin_timer: 0,
            powerup_timer: 0,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Leave the start screen
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            log::info!("Run started (seed {})", self.seed);
        }
    }

    /// Enter or leave the pause overlay
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Clear the run back to its initial values. The RNG keeps its stream
    /// and the background keeps scrolling from where it was.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.obstacles.clear();
        self.coins.clear();
        self.powerups.clear();
        self.score = 0;
        self.distance = 0.0;
        self.scroll_speed = START_SPEED;
        self.obstacle_timer = 0;
        self.coin_timer = 0;
        self.powerup_timer = 0;
        if self.phase == GamePhase::GameOver {
            self.phase = GamePhase::Ready;
        }
    }

    /// Reset and immediately start a new run
    pub fn restart(&mut self) {
        self.reset();
        self.phase = GamePhase::Playing;
        log::info!("Run restarted");
    }

    /// Obstacle spawn interval for the current speed
    pub fn obstacle_spawn_threshold(&self) -> i32 {
        (OBSTACLE_SPAWN_BASE - (self.scroll_speed * 3.0) as i32).max(OBSTACLE_SPAWN_MIN)
    }

    pub fn spawn_obstacle(&mut self) {
        let w = self.rng.random_range(30..=70);
        let h = self.rng.random_range(40..=100);
        let x = WIDTH + self.rng.random_range(20..=120);
        log::debug!("Spawn obstacle {}x{} at x={}", w, h, x);
        self.obstacles
            .push(Obstacle::new(x, w, h, self.scroll_speed));
    }

    pub fn spawn_coin(&mut self) {
        let x = WIDTH + self.rng.random_range(30..=200);
        let y = self.rng.random_range(GROUND_Y - 180..=GROUND_Y - 40);
        self.coins.push(Coin::new(x, y, self.scroll_speed));
    }

    pub fn spawn_powerup(&mut self, kind: PowerUpKind) {
        let x = WIDTH + self.rng.random_range(200..=600);
        let y = self.rng.random_range(GROUND_Y - 180..=GROUND_Y - 60);
        log::debug!("Spawn {:?} power-up at ({}, {})", kind, x, y);
        self.powerups
            .push(PowerUp::new(x, y, self.scroll_speed, kind));
    }
}

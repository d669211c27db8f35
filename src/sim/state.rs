//! Game state and core simulation types
//!
//! Everything the tick mutates lives here: entities, score, lives, phase and
//! the seeded RNG that picks launch angles.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, ticks are processed
    Playing,
    /// Round ended; only a restart is acted upon
    RoundOver { won: bool },
}

/// Color identity of a drawable entity
///
/// The renderer decides how each identity actually looks; `rgb` gives the
/// classic palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Paddle,
    Ball,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Brick color for a grid row (cycles every 5 rows)
    pub fn for_row(row: u32) -> Self {
        match row % 5 {
            0 => Color::Red,
            1 => Color::Orange,
            2 => Color::Yellow,
            3 => Color::Green,
            _ => Color::Blue,
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Paddle => (150, 150, 255),
            Color::Ball => (255, 255, 255),
            Color::Red => (200, 80, 80),
            Color::Orange => (230, 150, 40),
            Color::Yellow => (200, 200, 60),
            Color::Green => (80, 200, 80),
            Color::Blue => (80, 80, 200),
        }
    }
}

/// The player's paddle
///
/// Horizontal velocity is an input model: set by key events, never decayed
/// by physics.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: u32,
    pub height: u32,
    pub dx: f32,
}

impl Paddle {
    /// Paddle centred horizontally near the bottom of the canvas
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                (config.canvas_width / 2 - config.paddle_width / 2) as f32,
                (config.canvas_height - config.paddle_bottom_offset) as f32,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            dx: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.width, self.height)
    }

    /// Apply velocity and keep the paddle inside `[0, canvas_width - width]`
    pub fn advance(&mut self, canvas_width: u32) {
        self.pos.x += self.dx;
        let max_x = canvas_width.saturating_sub(self.width) as f32;
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Diameter
    pub size: u32,
}

impl Ball {
    /// Ball at `pos` moving at `speed` along `angle`
    ///
    /// `angle` is measured from +x with positive angles pointing up the
    /// screen, so any angle in `(0, pi)` launches upward.
    pub fn with_angle(pos: Vec2, size: u32, speed: f32, angle: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(speed * angle.cos(), -speed * angle.sin()),
            size,
        }
    }

    /// Fresh ball at the canvas centre with a random upward launch
    pub fn launch<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let base = std::f32::consts::FRAC_PI_2 - config.launch_cone / 2.0;
        let angle = base + rng.random::<f32>() * config.launch_cone;
        Self::with_angle(
            Self::spawn_position(config),
            config.ball_size,
            config.ball_speed,
            angle,
        )
    }

    /// Top-left corner of a freshly spawned ball
    pub fn spawn_position(config: &GameConfig) -> Vec2 {
        Vec2::new(
            (config.canvas_width / 2 - config.ball_size / 2) as f32,
            (config.canvas_height / 2 - config.ball_size / 2) as f32,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.size, self.size)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Integrate one tick and bounce off the left, right and top walls
    ///
    /// The bottom edge is deliberately open: reaching the floor is a
    /// collision event, not a bounce.
    pub fn advance(&mut self, canvas_width: u32, _canvas_height: u32) {
        self.pos += self.vel;

        let size = self.size as f32;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        }
        if self.pos.x + size > canvas_width as f32 {
            self.pos.x = canvas_width as f32 - size;
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub points: u32,
    pub visible: bool,
    pub row: u32,
    pub column: u32,
}

/// Build a full grid in row-major order, top row first
///
/// The grid is centred horizontally; rows are separated by `brick_row_gap`.
pub fn build_grid(config: &GameConfig) -> Vec<Brick> {
    let grid_width = config.brick_columns * config.brick_width;
    let start_x = (config.canvas_width - grid_width) / 2;
    let mut bricks = Vec::with_capacity(config.brick_count());
    for row in 0..config.brick_rows {
        let color = Color::for_row(row);
        let points = config.points_for_row(row);
        let y = config.row_y(row);
        for column in 0..config.brick_columns {
            let x = start_x + column * config.brick_width;
            bricks.push(Brick {
                rect: Rect::new(x as f32, y as f32, config.brick_width, config.brick_height),
                color,
                points,
                visible: true,
                row,
                column,
            });
        }
    }
    bricks
}

/// Something notable that happened during the last tick or input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit,
    BrickDestroyed { index: usize, points: u32 },
    LifeLost { remaining: u32 },
    RoundWon,
    RoundLost,
    Restarted,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Ticks processed since the round started
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Bricks in grid creation order; this order is the collision scan order
    pub bricks: Vec<Brick>,
    /// Events from the most recent tick or input
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `config` and set up the first round
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(&config);
        let ball = Ball::launch(&config, &mut rng);
        let bricks = build_grid(&config);

        log::info!(
            "Round started: {} bricks, {} lives, seed {}",
            bricks.len(),
            config.starting_lives,
            seed
        );

        Ok(Self {
            lives: config.starting_lives,
            config,
            seed,
            rng,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle,
            ball,
            bricks,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True only once the round has ended in a win
    pub fn won(&self) -> bool {
        matches!(self.phase, GamePhase::RoundOver { won: true })
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Replace the ball with a freshly launched one
    pub fn spawn_ball(&mut self) {
        self.ball = Ball::launch(&self.config, &mut self.rng);
    }

    /// Floor contact: drop a life and either respawn or end the round
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });
        log::debug!("Life lost, {} remaining", self.lives);

        if self.lives == 0 {
            self.end_round(false);
        } else {
            self.spawn_ball();
        }
    }

    /// End the round as won once no brick is left standing
    pub fn check_cleared(&mut self) {
        if self.is_playing() && self.bricks.iter().all(|b| !b.visible) {
            self.end_round(true);
        }
    }

    /// Start a new round; only valid from `RoundOver`
    ///
    /// Returns false (and changes nothing) while still playing. The paddle
    /// keeps its position.
    pub fn restart(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }

        self.score = 0;
        self.lives = self.config.starting_lives;
        self.time_ticks = 0;
        self.bricks = build_grid(&self.config);
        self.spawn_ball();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Round restarted");
        true
    }

    fn end_round(&mut self, won: bool) {
        if !self.is_playing() {
            return;
        }
        self.phase = GamePhase::RoundOver { won };
        if won {
            self.events.push(GameEvent::RoundWon);
            log::info!("Round won with score {}", self.score);
        } else {
            self.events.push(GameEvent::RoundLost);
            log::info!("Game over with score {}", self.score);
        }
    }
}

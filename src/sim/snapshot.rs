//! Read-only view of the game for rendering
//!
//! A snapshot is an owned copy, so a renderer on another thread never
//! observes a tick half-applied.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Color, GameEvent, GamePhase, GameState};

/// A drawable paddle or ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    pub color: Color,
    pub points: u32,
    pub visible: bool,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle: EntityView,
    pub ball: EntityView,
    /// Bricks in grid creation order, including destroyed ones
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Only meaningful once `phase` is `RoundOver`
    pub won: bool,
    pub time_ticks: u64,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Events from the most recent tick or input
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            paddle: EntityView {
                rect: state.paddle.rect(),
                color: Color::Paddle,
            },
            ball: EntityView {
                rect: state.ball.rect(),
                color: Color::Ball,
            },
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    rect: b.rect,
                    color: b.color,
                    points: b.points,
                    visible: b.visible,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            phase: state.phase,
            won: state.won(),
            time_ticks: state.time_ticks,
            canvas_width: state.config.canvas_width,
            canvas_height: state.config.canvas_height,
            events: state.events.clone(),
        }
    }

    /// Bricks still standing, in grid order
    pub fn visible_bricks(&self) -> impl Iterator<Item = &BrickView> {
        self.bricks.iter().filter(|b| b.visible)
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, GamePhase::RoundOver { .. })
    }
}

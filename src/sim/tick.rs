//! Fixed-interval simulation tick
//!
//! Core game loop step that advances the simulation deterministically, plus
//! the handler for discrete input events.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionOutcome, resolve_collisions};
use super::state::GameState;

/// Discrete input from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Left arrow pressed (`true`) or released (`false`)
    PaddleLeft(bool),
    /// Right arrow pressed (`true`) or released (`false`)
    PaddleRight(bool),
    /// Start a new round (only acted upon once the round is over)
    Restart,
}

/// Apply one input event to the state immediately
///
/// Returns true if the event changed anything. Presses only steer while
/// playing; a release of either arrow always stops the paddle.
pub fn apply_input(state: &mut GameState, event: InputEvent) -> bool {
    state.events.clear();
    let speed = state.config.paddle_speed;

    match event {
        InputEvent::PaddleLeft(true) if state.is_playing() => {
            state.paddle.dx = -speed;
            true
        }
        InputEvent::PaddleRight(true) if state.is_playing() => {
            state.paddle.dx = speed;
            true
        }
        InputEvent::PaddleLeft(false) | InputEvent::PaddleRight(false) => {
            state.paddle.dx = 0.0;
            true
        }
        InputEvent::Restart => {
            let restarted = state.restart();
            if !restarted {
                log::debug!("Restart ignored while playing");
            }
            restarted
        }
        _ => {
            log::debug!("Ignoring {:?} in {:?}", event, state.phase);
            false
        }
    }
}

/// Advance the game state by one tick
///
/// Order while playing: paddle, ball, collisions, cleared check. Does
/// nothing once the round is over. Returns the collision outcome, or `None`
/// if the tick was skipped.
pub fn tick(state: &mut GameState) -> Option<CollisionOutcome> {
    if !state.is_playing() {
        return None;
    }

    state.events.clear();
    state.time_ticks += 1;

    let (width, height) = (state.config.canvas_width, state.config.canvas_height);
    state.paddle.advance(width);
    state.ball.advance(width, height);

    let outcome = resolve_collisions(state);
    state.check_cleared();

    log::trace!(
        "Tick {}: ball {:?} vel {:?}, score {}, lives {}",
        state.time_ticks,
        state.ball.pos,
        state.ball.vel,
        state.score,
        state.lives
    );

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Ball, GameEvent, GamePhase};
    use glam::Vec2;

    fn state(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_input_steers_paddle() {
        let mut s = state(1);
        assert!(apply_input(&mut s, InputEvent::PaddleLeft(true)));
        assert_eq!(s.paddle.dx, -8.0);
        tick(&mut s);
        assert_eq!(s.paddle.pos.x, 342.0);

        apply_input(&mut s, InputEvent::PaddleRight(true));
        assert_eq!(s.paddle.dx, 8.0);

        // Releasing either arrow stops the paddle
        apply_input(&mut s, InputEvent::PaddleLeft(false));
        assert_eq!(s.paddle.dx, 0.0);
        tick(&mut s);
        assert_eq!(s.paddle.pos.x, 342.0);
    }

    #[test]
    fn test_paddle_dx_does_not_decay() {
        let mut s = state(1);
        apply_input(&mut s, InputEvent::PaddleRight(true));
        for _ in 0..5 {
            tick(&mut s);
        }
        assert_eq!(s.paddle.dx, 8.0);
        assert_eq!(s.paddle.pos.x, 390.0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut s = state(1);
        s.score = 30;
        assert!(!apply_input(&mut s, InputEvent::Restart));
        assert_eq!(s.score, 30);
    }

    #[test]
    fn test_presses_ignored_after_round_over() {
        let mut s = state(1);
        s.lives = 1;
        s.lose_life();
        assert!(!apply_input(&mut s, InputEvent::PaddleLeft(true)));
        assert_eq!(s.paddle.dx, 0.0);
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut s = state(1);
        let start = s.ball.pos;
        let vel = s.ball.vel;
        tick(&mut s);
        assert_eq!(s.ball.pos, start + vel);
        assert_eq!(s.time_ticks, 1);
    }

    #[test]
    fn test_floor_tick_loses_life() {
        let mut s = state(1);
        s.ball = Ball {
            pos: Vec2::new(100.0, 580.0),
            vel: Vec2::new(0.0, 5.0),
            size: 16,
        };
        assert_eq!(tick(&mut s), Some(CollisionOutcome::Floor));
        assert_eq!(s.lives, 2);
        assert_eq!(s.events, vec![GameEvent::LifeLost { remaining: 2 }]);
        assert_eq!(s.ball.pos, Ball::spawn_position(&s.config));
    }

    #[test]
    fn test_clearing_last_brick_wins_same_tick() {
        let mut s = state(1);
        for brick in s.bricks.iter_mut().skip(1) {
            brick.visible = false;
        }
        let last = s.bricks[0].rect;
        // One tick below the brick, moving up into it
        s.ball = Ball {
            pos: Vec2::new(last.x + 30.0, last.max_y() + 2.0),
            vel: Vec2::new(0.0, -5.0),
            size: 16,
        };
        tick(&mut s);
        assert_eq!(s.phase, GamePhase::RoundOver { won: true });
        assert!(s.won());
        assert_eq!(s.score, 50);
        assert!(s.events.contains(&GameEvent::RoundWon));

        // Further ticks are no-ops
        let frozen = s.ball.clone();
        assert_eq!(tick(&mut s), None);
        assert_eq!(s.ball, frozen);
        assert_eq!(s.time_ticks, 1);
    }

    #[test]
    fn test_restart_after_win() {
        let mut s = state(1);
        for brick in &mut s.bricks {
            brick.visible = false;
        }
        tick(&mut s);
        assert!(s.won());

        assert!(apply_input(&mut s, InputEvent::Restart));
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0);
        assert_eq!(s.lives, 3);
        assert_eq!(s.bricks.len(), 45);
        assert_eq!(s.visible_bricks(), 45);
        assert_eq!(s.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut s1 = state(99999);
        let mut s2 = state(99999);

        let inputs = [
            Some(InputEvent::PaddleLeft(true)),
            None,
            Some(InputEvent::PaddleLeft(false)),
            Some(InputEvent::PaddleRight(true)),
            None,
        ];

        for _ in 0..200 {
            for input in &inputs {
                if let Some(event) = input {
                    apply_input(&mut s1, *event);
                    apply_input(&mut s2, *event);
                }
                tick(&mut s1);
                tick(&mut s2);
            }
        }

        assert_eq!(s1.time_ticks, s2.time_ticks);
        assert_eq!(s1.score, s2.score);
        assert_eq!(s1.lives, s2.lives);
        assert_eq!(s1.ball, s2.ball);
        assert_eq!(s1.paddle, s2.paddle);
        assert_eq!(s1.bricks, s2.bricks);
    }
}

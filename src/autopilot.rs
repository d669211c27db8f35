//! Demo-mode input source
//!
//! Plays the game from snapshots alone, the way a presentation layer would:
//! it only ever emits [`InputEvent`]s. The paddle tracks the ball with a
//! slowly oscillating offset so rallies don't settle into a perfect
//! vertical loop.

use crate::sim::{InputEvent, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Left,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Option<Held>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal point the paddle centre should chase
    pub fn target_x(snapshot: &Snapshot) -> f32 {
        let ball_center = snapshot.ball.rect.center().x;
        let half_paddle = snapshot.paddle.rect.width as f32 / 2.0;

        let time_factor = snapshot.time_ticks as f32 * 0.01;
        let offset = time_factor.sin() * 0.6 + (time_factor * 0.7).sin() * 0.3;
        ball_center + offset * half_paddle
    }

    /// Input events needed to steer toward the target, if the steering changed
    pub fn steer(&mut self, snapshot: &Snapshot) -> Vec<InputEvent> {
        if snapshot.is_round_over() {
            return self.release();
        }

        let paddle_center = snapshot.paddle.rect.center().x;
        let diff = Self::target_x(snapshot) - paddle_center;
        // Within a few units the paddle would only jitter
        let dead_zone = 6.0;

        let want = if diff > dead_zone {
            Some(Held::Right)
        } else if diff < -dead_zone {
            Some(Held::Left)
        } else {
            None
        };

        if want == self.held {
            return Vec::new();
        }
        match want {
            Some(Held::Left) => {
                self.held = want;
                vec![InputEvent::PaddleLeft(true)]
            }
            Some(Held::Right) => {
                self.held = want;
                vec![InputEvent::PaddleRight(true)]
            }
            None => self.release(),
        }
    }

    fn release(&mut self) -> Vec<InputEvent> {
        match self.held.take() {
            Some(Held::Left) => vec![InputEvent::PaddleLeft(false)],
            Some(Held::Right) => vec![InputEvent::PaddleRight(false)],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GamePhase, GameState};
    use glam::Vec2;

    fn snapshot_with_ball(x: f32) -> Snapshot {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.ball.pos = Vec2::new(x, 300.0);
        Snapshot::capture(&state)
    }

    #[test]
    fn test_chases_ball() {
        let mut pilot = Autopilot::new();
        assert_eq!(
            pilot.steer(&snapshot_with_ball(100.0)),
            vec![InputEvent::PaddleLeft(true)]
        );
        // Holding already; no repeat
        assert!(pilot.steer(&snapshot_with_ball(100.0)).is_empty());
        assert_eq!(
            pilot.steer(&snapshot_with_ball(700.0)),
            vec![InputEvent::PaddleRight(true)]
        );
    }

    #[test]
    fn test_releases_when_aligned() {
        let mut pilot = Autopilot::new();
        pilot.steer(&snapshot_with_ball(700.0));
        // Tick 0: no offset, ball centre 400 = paddle centre
        assert_eq!(
            pilot.steer(&snapshot_with_ball(392.0)),
            vec![InputEvent::PaddleRight(false)]
        );
        assert!(pilot.steer(&snapshot_with_ball(392.0)).is_empty());
    }

    #[test]
    fn test_lets_go_when_round_over() {
        let mut pilot = Autopilot::new();
        pilot.steer(&snapshot_with_ball(100.0));
        let mut snap = snapshot_with_ball(100.0);
        snap.phase = GamePhase::RoundOver { won: false };
        assert_eq!(pilot.steer(&snap), vec![InputEvent::PaddleLeft(false)]);
    }
}

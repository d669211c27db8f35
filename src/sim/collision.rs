//! Collision detection and response
//!
//! Runs once per tick after movement, in a fixed order: floor, paddle,
//! bricks. The order and the single-brick rule make every tick
//! deterministic even when the ball overlaps several objects at once.

use super::rect::Rect;
use super::state::{Ball, Brick, GameEvent, GameState, Paddle};

/// Which face of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    /// Left or right face; reflects horizontal velocity
    Horizontal,
    /// Top or bottom face; reflects vertical velocity
    Vertical,
}

/// First visible brick the ball overlaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    /// Index into the grid (creation order)
    pub index: usize,
    pub side: HitSide,
}

/// What the collision pass did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Ball reached the floor; a life was lost and nothing else was checked
    Floor,
    Contacts {
        paddle: bool,
        brick: Option<BrickHit>,
    },
}

/// Check if the ball's bottom edge has reached the floor
pub fn ball_hits_floor(ball: &Ball, canvas_height: u32) -> bool {
    ball.pos.y + ball.size as f32 >= canvas_height as f32
}

/// Deflection from vertical for a ball striking the paddle
///
/// Offsets are normalized by the paddle half-width and scaled by
/// `max_angle`. A ball centred outside the paddle span maps beyond
/// `max_angle`; that is not clamped.
pub fn bounce_angle(ball: &Rect, paddle: &Rect, max_angle: f32) -> f32 {
    let half_width = paddle.width as f32 / 2.0;
    let relative = paddle.center().x - ball.center().x;
    (relative / half_width) * max_angle
}

/// Reflect the ball off the paddle if they overlap
///
/// Speed is preserved and the ball always leaves upward. It is lifted to sit
/// on the paddle so the same overlap cannot trigger again next tick.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, max_angle: f32) -> bool {
    let ball_rect = ball.rect();
    let paddle_rect = paddle.rect();
    if !ball_rect.intersects(&paddle_rect) {
        return false;
    }

    let angle = bounce_angle(&ball_rect, &paddle_rect, max_angle);
    let speed = ball.speed();
    ball.vel.x = speed * angle.sin();
    ball.vel.y = -speed * angle.cos();
    ball.pos.y = paddle.pos.y - ball.size as f32;
    true
}

/// Decide which face was hit from the shallowest penetration
///
/// Ties go to the horizontal faces.
pub fn hit_side(ball: &Rect, brick: &Rect) -> HitSide {
    let overlaps = ball.overlaps(brick);
    if overlaps.horizontal() <= overlaps.vertical() {
        HitSide::Horizontal
    } else {
        HitSide::Vertical
    }
}

/// Scan bricks in creation order for the first visible one the ball overlaps
pub fn find_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<BrickHit> {
    let ball_rect = ball.rect();
    bricks
        .iter()
        .position(|b| b.visible && ball_rect.intersects(&b.rect))
        .map(|index| BrickHit {
            index,
            side: hit_side(&ball_rect, &bricks[index].rect),
        })
}

/// Run the full collision pass for one tick
pub fn resolve_collisions(state: &mut GameState) -> CollisionOutcome {
    if ball_hits_floor(&state.ball, state.config.canvas_height) {
        state.lose_life();
        return CollisionOutcome::Floor;
    }

    let paddle = paddle_bounce(
        &mut state.ball,
        &state.paddle,
        state.config.max_bounce_angle,
    );
    if paddle {
        state.events.push(GameEvent::PaddleHit);
        log::trace!("Paddle hit, ball vel {:?}", state.ball.vel);
    }

    // Only one brick per tick, even at grid seams
    let brick = find_brick_hit(&state.ball, &state.bricks);
    if let Some(hit) = brick {
        match hit.side {
            HitSide::Horizontal => state.ball.vel.x = -state.ball.vel.x,
            HitSide::Vertical => state.ball.vel.y = -state.ball.vel.y,
        }
        let target = &mut state.bricks[hit.index];
        target.visible = false;
        state.score = state.score.saturating_add(target.points);
        state.events.push(GameEvent::BrickDestroyed {
            index: hit.index,
            points: target.points,
        });
        log::debug!(
            "Brick {} (row {}, col {}) destroyed for {} points",
            hit.index,
            target.row,
            target.column,
            target.points
        );
    }

    CollisionOutcome::Contacts { paddle, brick }
}

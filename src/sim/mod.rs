//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (brick creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BrickHit, CollisionOutcome, HitSide, resolve_collisions};
pub use rect::{Overlaps, Rect};
pub use snapshot::{BrickView, EntityView, Snapshot};
pub use state::{Ball, Brick, Color, GameEvent, GamePhase, GameState, Paddle, build_grid};
pub use tick::{InputEvent, apply_input, tick};

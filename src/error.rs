//! Configuration errors
//!
//! The simulation itself cannot fail; only round setup can, when the
//! configuration violates the geometry the physics relies on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive")]
    NonPositive { field: &'static str },

    #[error("brick grid is empty ({rows} rows x {columns} columns)")]
    EmptyBrickGrid { rows: u32, columns: u32 },

    #[error("{what} ({size}) does not fit inside the canvas ({canvas})")]
    DoesNotFit {
        what: &'static str,
        size: u32,
        canvas: u32,
    },

    #[error("clearing the grid would score {0}, which overflows the score counter")]
    ScoreOverflow(u64),

    #[error("max bounce angle {0} must be within (0, pi/2)")]
    BounceAngle(f32),

    #[error("launch cone {0} must be within (0, pi)")]
    LaunchCone(f32),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

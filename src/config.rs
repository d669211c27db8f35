//! Game configuration
//!
//! Every tunable the simulation reads lives here so the core never hardcodes
//! playfield geometry. Loadable from JSON; missing fields fall back to the
//! defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub canvas_width: u32,
    pub canvas_height: u32,

    // === Paddle ===
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// Distance from the paddle's top edge to the canvas bottom
    pub paddle_bottom_offset: u32,
    /// Units per tick while an arrow is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_size: u32,
    /// Launch speed in units per tick (preserved by paddle bounces)
    pub ball_speed: f32,
    /// Width of the upward launch cone, radians
    pub launch_cone: f32,
    /// Paddle deflection limit either side of vertical, radians
    pub max_bounce_angle: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: u32,
    pub brick_height: u32,
    /// Vertical gap between rows
    pub brick_row_gap: u32,
    /// Y of the first row
    pub brick_top_offset: u32,
    /// Point step per row (top row worth the most)
    pub points_per_row: u32,

    // === Rules ===
    pub starting_lives: u32,

    // === Driver ===
    pub tick_interval_ms: u64,
    pub max_substeps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            launch_cone: LAUNCH_CONE,
            max_bounce_angle: MAX_BOUNCE_ANGLE,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_row_gap: BRICK_ROW_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,
            points_per_row: POINTS_PER_ROW,

            starting_lives: STARTING_LIVES,

            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the preconditions the physics and win check assume
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_ints = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("starting_lives", self.starting_lives),
            ("max_substeps", self.max_substeps),
            ("points_per_row", self.points_per_row),
        ];
        if let Some(&(field, _)) = positive_ints.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::NonPositive { field });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_interval_ms",
            });
        }
        // Written as !(x > 0) so NaN is rejected too
        if !(self.paddle_speed > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "paddle_speed",
            });
        }
        if !(self.ball_speed > 0.0) {
            return Err(ConfigError::NonPositive { field: "ball_speed" });
        }

        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::EmptyBrickGrid {
                rows: self.brick_rows,
                columns: self.brick_columns,
            });
        }

        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::DoesNotFit {
                what: "paddle width",
                size: self.paddle_width,
                canvas: self.canvas_width,
            });
        }
        if self.paddle_bottom_offset > self.canvas_height {
            return Err(ConfigError::DoesNotFit {
                what: "paddle bottom offset",
                size: self.paddle_bottom_offset,
                canvas: self.canvas_height,
            });
        }
        if self.ball_size >= self.canvas_width.min(self.canvas_height) {
            return Err(ConfigError::DoesNotFit {
                what: "ball size",
                size: self.ball_size,
                canvas: self.canvas_width.min(self.canvas_height),
            });
        }
        let grid_width = self.brick_columns.saturating_mul(self.brick_width);
        if grid_width > self.canvas_width {
            return Err(ConfigError::DoesNotFit {
                what: "brick grid width",
                size: grid_width,
                canvas: self.canvas_width,
            });
        }
        if self.grid_bottom() > self.canvas_height {
            return Err(ConfigError::DoesNotFit {
                what: "brick grid height",
                size: self.grid_bottom(),
                canvas: self.canvas_height,
            });
        }

        // Clearing every brick must not overflow the score
        let max_score = u64::from(self.brick_rows)
            .checked_mul(u64::from(self.points_per_row))
            .and_then(|top| top.checked_mul(self.brick_count() as u64));
        match max_score {
            Some(score) if score <= u64::from(u32::MAX) => {}
            _ => return Err(ConfigError::ScoreOverflow(max_score.unwrap_or(u64::MAX))),
        }

        let half_pi = std::f32::consts::FRAC_PI_2;
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < half_pi) {
            return Err(ConfigError::BounceAngle(self.max_bounce_angle));
        }
        if !(self.launch_cone > 0.0 && self.launch_cone < std::f32::consts::PI) {
            return Err(ConfigError::LaunchCone(self.launch_cone));
        }

        Ok(())
    }

    /// Total number of bricks in a fresh grid
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_columns as usize
    }

    /// Point value of a brick in `row` (0 = top row, worth the most)
    pub fn points_for_row(&self, row: u32) -> u32 {
        self.brick_rows
            .saturating_sub(row)
            .saturating_mul(self.points_per_row)
    }

    /// Fixed driver interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Y of the top edge of `row`
    pub fn row_y(&self, row: u32) -> u32 {
        let pitch = self.brick_height.saturating_add(self.brick_row_gap);
        self.brick_top_offset.saturating_add(row.saturating_mul(pitch))
    }

    /// Y coordinate just below the last brick row
    fn grid_bottom(&self) -> u32 {
        self.row_y(self.brick_rows.saturating_sub(1)).saturating_add(self.brick_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brick_count(), 45);
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_points_for_row() {
        let config = GameConfig::default();
        assert_eq!(config.points_for_row(0), 50);
        assert_eq!(config.points_for_row(4), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "brick_rows": 2, "starting_lives": 5 }"#).unwrap();
        assert_eq!(config.brick_rows, 2);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig {
            brick_columns: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBrickGrid { rows: 5, columns: 0 })
        ));
    }

    #[test]
    fn test_rejects_zero_canvas() {
        let config = GameConfig {
            canvas_height: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "canvas_height"
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let config = GameConfig {
            paddle_width: 900,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DoesNotFit { .. })
        ));
    }

    #[test]
    fn test_rejects_flat_bounce_angle() {
        let config = GameConfig {
            max_bounce_angle: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BounceAngle(_))));
    }

    #[test]
    fn test_rejects_nan_speed() {
        let config = GameConfig {
            ball_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_row_gap() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "brick_row_gap": 4294967295 }"#),
            Err(ConfigError::DoesNotFit {
                what: "brick grid height",
                ..
            })
        ));
    }

    #[test]
    fn test_single_row_ignores_row_gap() {
        let json = r#"{ "brick_rows": 1, "brick_row_gap": 4294967265 }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.row_y(0), 50);
        assert_eq!(config.points_for_row(0), 10);
    }

    #[test]
    fn test_rejects_score_overflow() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "points_per_row": 4294967295 }"#),
            Err(ConfigError::ScoreOverflow(_))
        ));
    }

    #[test]
    fn test_rejects_zero_points_per_row() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "points_per_row": 0 }"#),
            Err(ConfigError::NonPositive {
                field: "points_per_row"
            })
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}

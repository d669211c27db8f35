//! Axis-aligned rectangle geometry
//!
//! Every entity's spatial extent is a [`Rect`]: float position, integer size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

/// Penetration depths of one rect into another, one per side
///
/// Only meaningful when the rects intersect; otherwise some depths are negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlaps {
    /// `a.max_x - b.min_x`
    pub left: f32,
    /// `b.max_x - a.min_x`
    pub right: f32,
    /// `a.max_y - b.min_y`
    pub top: f32,
    /// `b.max_y - a.min_y`
    pub bottom: f32,
}

impl Overlaps {
    /// Smaller of the two horizontal depths
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left.min(self.right)
    }

    /// Smaller of the two vertical depths
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top.min(self.bottom)
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a position vector
    #[inline]
    pub fn at(pos: Vec2, width: u32, height: u32) -> Self {
        Self::new(pos.x, pos.y, width, height)
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width as f32
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height as f32
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.width as f32 / 2.0,
            self.y + self.height as f32 / 2.0,
        )
    }

    /// Strict overlap test: rects that merely share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Penetration depths of `self` into `other`
    ///
    /// Callers must check [`Rect::intersects`] first.
    pub fn overlaps(&self, other: &Rect) -> Overlaps {
        Overlaps {
            left: self.max_x() - other.min_x(),
            right: other.max_x() - self.min_x(),
            top: self.max_y() - other.min_y(),
            bottom: other.max_y() - self.min_y(),
        }
    }
}

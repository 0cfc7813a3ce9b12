// File: crates/hoverline-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, points).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    /// Create new insets in CSS order (non-negative by type).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(30, 20, 30, 40)
    }
}

/// Pixel dimensions of the drawable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Point in surface-local pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self { Self { x, y } }
}

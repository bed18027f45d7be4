//! Gesture geometry types.

use serde::{Deserialize, Serialize};

/// A pointer or touch position in card-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drag displacement from the gesture origin. Negative `dy` is upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn between(origin: Point, current: Point) -> Self {
        Self {
            dx: current.x - origin.x,
            dy: current.y - origin.y,
        }
    }

    /// Card tilt in degrees for the drag, as rendered by the front ends.
    pub fn rotation_degrees(&self, card_width: f64) -> f64 {
        if card_width <= 0.0 || !card_width.is_finite() {
            return 0.0;
        }
        (self.dx / card_width * 30.0).clamp(-30.0, 30.0)
    }
}

/// Release velocity in px/ms.
///
/// Pointer-based front ends do not measure velocity; they pass `None` and
/// the resolver treats both components as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }
}

/// Live drag state. Exists only between drag start and drag end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub origin: Point,
    pub current_offset: Offset,
    pub is_active: bool,
}

impl GestureState {
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            current_offset: Offset::ZERO,
            is_active: true,
        }
    }
}

/// A finished drag, ready for action resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedGesture {
    pub offset: Offset,
    pub velocity: Velocity,
}

//! Converts raw pointer/touch events into a drag offset.
//!
//! This is the only part of the interaction that differs per platform in
//! the front ends; everything after `end` goes through the shared resolver.

use log::debug;

use super::gesture_model::{CompletedGesture, GestureState, Offset, Point, Velocity};

#[derive(Debug, Default)]
pub struct GestureTracker {
    state: Option<GestureState>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the origin and marks the gesture active.
    ///
    /// A start while already active restarts from the new origin.
    pub fn start(&mut self, point: Point) {
        self.state = Some(GestureState::begin(point));
    }

    /// Updates the offset. Ignored when no gesture is active.
    pub fn move_to(&mut self, point: Point) -> Option<Offset> {
        let state = self.state.as_mut().filter(|s| s.is_active)?;
        state.current_offset = Offset::between(state.origin, point);
        Some(state.current_offset)
    }

    /// Ends the gesture and hands back the final offset and velocity.
    ///
    /// Returns `None` when no gesture was started.
    pub fn end(&mut self, point: Point, velocity: Option<Velocity>) -> Option<CompletedGesture> {
        let Some(state) = self.state.take() else {
            debug!("Drag end without drag start ignored");
            return None;
        };
        Some(CompletedGesture {
            offset: Offset::between(state.origin, point),
            velocity: velocity.unwrap_or(Velocity::ZERO),
        })
    }

    /// Drops the gesture without resolving it (pointer/touch cancel).
    pub fn cancel(&mut self) -> bool {
        self.state.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.state.map(|s| s.is_active).unwrap_or(false)
    }

    /// Current drag offset, `(0, 0)` when idle.
    pub fn offset(&self) -> Offset {
        self.state
            .map(|s| s.current_offset)
            .unwrap_or(Offset::ZERO)
    }
}

//! Gesture module - drag tracking for the card deck.

mod gesture_model;
mod gesture_tracker;

pub use gesture_model::{CompletedGesture, GestureState, Offset, Point, Velocity};
pub use gesture_tracker::GestureTracker;

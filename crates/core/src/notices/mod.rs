//! Notices module - toast-style messages emitted by the swipe engine.

mod notice;
mod sink;

pub use notice::*;
pub use sink::*;

//! Classifies a completed drag into a swipe action.
//!
//! Web (pointer deltas, no velocity) and mobile (pan responder with
//! velocity) share this function; only gesture capture differs.

use super::swipe_model::{SwipeAction, SwipeConfig};
use crate::gesture::{Offset, Velocity};
use crate::opportunities::Opportunity;

/// Resolves the action for a finished gesture.
///
/// Horizontal is checked before vertical, so a diagonal drag past both
/// thresholds commits sideways. Missing velocity counts as zero. NaN
/// components compare false everywhere and fall through to `Reset`.
/// Without a current opportunity the result is always `Reset`.
pub fn resolve_swipe(
    offset: Offset,
    velocity: Option<Velocity>,
    current: Option<&Opportunity>,
    config: &SwipeConfig,
) -> SwipeAction {
    if current.is_none() {
        return SwipeAction::Reset;
    }

    let Velocity { vx, vy } = velocity.unwrap_or(Velocity::ZERO);
    let Offset { dx, dy } = offset;
    let h = config.horizontal_threshold;
    let v = config.vertical_threshold;
    let flick = config.velocity_threshold;

    if dx > h || vx > flick {
        SwipeAction::CartAdd
    } else if dx < -h || vx < -flick {
        SwipeAction::Pass
    } else if dy < -v || vy < -flick {
        SwipeAction::InstantInvest
    } else {
        SwipeAction::Reset
    }
}

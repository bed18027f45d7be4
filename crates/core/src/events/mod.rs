//! Domain events module.
//!
//! Provides domain event types and the sink trait the swipe engine emits
//! through after confirmed investments and cart appends. Web and mobile
//! hosts implement the sink to invalidate their cached queries.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;

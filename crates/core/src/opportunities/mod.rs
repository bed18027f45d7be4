//! Opportunities module - fundable cards shown in the swipe deck.

mod opportunities_model;
mod opportunities_traits;

pub use opportunities_model::{Opportunity, OpportunityType, Urgency};
pub use opportunities_traits::OpportunitySourceTrait;

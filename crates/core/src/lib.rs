//! SwipeFund Core - swipe-to-invest interaction engine.
//!
//! This crate contains the deck, gesture and funding logic behind the
//! "swipe to invest" flow. It performs no I/O of its own: the cart store,
//! the invest endpoint, the wallet session and the notification surface are
//! injected as traits so web and mobile front ends share one tested engine.

pub mod cart;
pub mod constants;
pub mod errors;
pub mod events;
pub mod funding_tiers;
pub mod gesture;
pub mod notices;
pub mod opportunities;
pub mod preferences;
pub mod swipe;

pub use funding_tiers::{resolve_tier, FundingTier, TierPresets};
pub use opportunities::{Opportunity, OpportunityType, Urgency};
pub use preferences::InvestorPreferences;
pub use swipe::{
    resolve_swipe, CartAddMode, DeckCursor, SwipeAction, SwipeConfig, SwipeOutcome, SwipeService,
    SwipeServiceTrait,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

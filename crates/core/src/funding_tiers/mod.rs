//! Funding tiers - preset investment amounts per investor bracket.

mod tiers_model;
mod tiers_resolver;

pub use tiers_model::{FundingTier, TierPresets};
pub use tiers_resolver::{resolve_tier, resolve_tier_id};

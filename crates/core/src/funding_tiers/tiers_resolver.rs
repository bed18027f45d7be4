//! Maps investor preferences to a tier preset table.

use log::debug;

use super::tiers_model::{FundingTier, TierPresets};
use crate::preferences::InvestorPreferences;

/// Resolves a raw tier id, falling back to `individual_supporter`.
///
/// Total over all inputs: never fails and never yields an empty list.
pub fn resolve_tier_id(tier_id: Option<&str>) -> &'static TierPresets {
    match tier_id.and_then(FundingTier::from_id) {
        Some(tier) => tier.presets(),
        None => {
            debug!(
                "No resolvable funding tier ({:?}), using {}",
                tier_id,
                FundingTier::default().as_str()
            );
            FundingTier::default().presets()
        }
    }
}

/// Resolves the preset table for the investor, if preferences are loaded.
pub fn resolve_tier(preferences: Option<&InvestorPreferences>) -> &'static TierPresets {
    resolve_tier_id(preferences.map(|p| p.quick_fund_range.as_str()))
}

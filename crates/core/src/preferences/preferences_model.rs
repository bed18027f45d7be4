//! Investor preference models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DEFAULT_CURRENCY;
use crate::funding_tiers::TierPresets;

/// Funding preferences saved by the investor. Read-only to the swipe engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestorPreferences {
    #[serde(default)]
    pub preferred_currency: String,
    /// Tier id, e.g. `microvc`.
    #[serde(default)]
    pub quick_fund_range: String,
    #[serde(default)]
    pub preferred_amounts: Vec<String>,
    #[serde(default)]
    pub default_amount: Option<String>,
}

impl InvestorPreferences {
    /// Currency for cart items and investments, `USD` when unset.
    pub fn currency(&self) -> &str {
        let trimmed = self.preferred_currency.trim();
        if trimmed.is_empty() {
            DEFAULT_CURRENCY
        } else {
            trimmed
        }
    }

    /// Preferred amounts that parse as positive decimals, in their saved order.
    pub fn parsed_preferred_amounts(&self) -> Vec<Decimal> {
        self.preferred_amounts
            .iter()
            .filter_map(|raw| parse_amount(raw))
            .collect()
    }

    /// Amount used by quick-add and instant-invest.
    ///
    /// Order: `default_amount`, then the first usable preferred amount, then
    /// the tier's smallest preset.
    pub fn quick_amount(&self, presets: &TierPresets) -> Decimal {
        self.default_amount
            .as_deref()
            .and_then(parse_amount)
            .or_else(|| self.parsed_preferred_amounts().into_iter().next())
            .unwrap_or_else(|| presets.first())
    }
}

/// Parses a user-entered amount such as `"1,000"` or `"$250.50"`.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | ' '))
        .collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}

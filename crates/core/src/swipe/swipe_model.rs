//! Swipe interaction models: actions, configuration, outcomes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::swipe_errors::SwipeError;
use crate::cart::CartLineItem;
use crate::constants::{
    DEFAULT_HORIZONTAL_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD, DEFAULT_VERTICAL_THRESHOLD,
    HORIZONTAL_WIDTH_RATIO, VERTICAL_WIDTH_RATIO,
};
use crate::errors::{Error, Result};
use crate::opportunities::Opportunity;

/// Action a completed gesture resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwipeAction {
    /// Snap back, nothing changes.
    Reset,
    /// Left: skip this opportunity.
    Pass,
    /// Right: put an amount in the cart.
    CartAdd,
    /// Up: invest right away.
    InstantInvest,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Reset => "RESET",
            SwipeAction::Pass => "PASS",
            SwipeAction::CartAdd => "CART_ADD",
            SwipeAction::InstantInvest => "INSTANT_INVEST",
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which cart-add operation a right swipe triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CartAddMode {
    /// Open the amount picker with the tier presets.
    #[default]
    Select,
    /// Append the quick amount straight away.
    Quick,
}

impl std::str::FromStr for CartAddMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(CartAddMode::Select),
            "quick" => Ok(CartAddMode::Quick),
            other => Err(Error::InvalidConfigValue(format!(
                "Unknown cart add mode '{}', expected 'select' or 'quick'",
                other
            ))),
        }
    }
}

/// Gesture thresholds and right-swipe behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeConfig {
    /// |dx| in px beyond which a horizontal drag commits.
    pub horizontal_threshold: f64,
    /// Upward distance in px beyond which a vertical drag commits.
    pub vertical_threshold: f64,
    /// Release speed in px/ms beyond which a flick commits.
    pub velocity_threshold: f64,
    pub right_swipe: CartAddMode,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            horizontal_threshold: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical_threshold: DEFAULT_VERTICAL_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            right_swipe: CartAddMode::default(),
        }
    }
}

impl SwipeConfig {
    /// Thresholds proportional to the rendered card width
    /// (25% horizontal, 20% vertical).
    pub fn for_card_width(card_width: f64) -> Self {
        Self {
            horizontal_threshold: card_width * HORIZONTAL_WIDTH_RATIO,
            vertical_threshold: card_width * VERTICAL_WIDTH_RATIO,
            ..Self::default()
        }
    }

    pub fn with_right_swipe(mut self, mode: CartAddMode) -> Self {
        self.right_swipe = mode;
        self
    }

    /// All thresholds must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("horizontal_threshold", self.horizontal_threshold),
            ("vertical_threshold", self.vertical_threshold),
            ("velocity_threshold", self.velocity_threshold),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Opaque proof produced by the wallet-signing collaborator.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthProof(String);

impl AuthProof {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthProof(<redacted>)")
    }
}

/// An investment being submitted. Lives only while the request is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingInvestment {
    pub opportunity: Opportunity,
    pub amount: Decimal,
    pub currency: String,
}

/// Payload for the invest endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestRequest {
    pub target_type: String,
    pub target_id: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(skip)]
    pub auth_proof: AuthProof,
}

impl InvestRequest {
    pub fn new(pending: &PendingInvestment, auth_proof: AuthProof) -> Self {
        Self {
            target_type: pending.opportunity.opportunity_type.as_str().to_string(),
            target_id: pending.opportunity.id.clone(),
            amount: pending.amount,
            currency: pending.currency.clone(),
            auth_proof,
        }
    }
}

/// Confirmation returned by the invest endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestReceipt {
    pub id: String,
    #[serde(default)]
    pub status: String,
}

/// Result of an instant-invest attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum InvestOutcome {
    /// A request for this opportunity is already in flight; nothing was sent.
    Pending { opportunity_id: String },
    /// Confirmed. `advanced` is false when the user had already moved past the card.
    Success {
        opportunity_id: String,
        amount: Decimal,
        receipt: InvestReceipt,
        advanced: bool,
    },
    /// Network, timeout or signing failure. The card stays current.
    Failure {
        opportunity_id: String,
        reason: String,
    },
}

/// What a swipe or button press did.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    /// Card snapped back.
    Reset,
    Passed { opportunity_id: String },
    /// Amount picker is open; waiting for a selection or cancel.
    CartSelectionOpened {
        opportunity_id: String,
        presets: Vec<Decimal>,
    },
    CartSelectionCancelled { opportunity_id: String },
    /// Line item appended. `advanced` is false when the card was no longer current.
    AddedToCart { item: CartLineItem, advanced: bool },
    Invest(InvestOutcome),
    /// Refused before any side effect; the user was told why.
    Rejected(SwipeError),
    /// Nothing to act on (no gesture, exhausted deck, modal open).
    Ignored(SwipeError),
}

impl SwipeOutcome {
    /// True when the outcome moved the deck forward.
    pub fn advanced_deck(&self) -> bool {
        match self {
            SwipeOutcome::Passed { .. } => true,
            SwipeOutcome::AddedToCart { advanced, .. } => *advanced,
            SwipeOutcome::Invest(InvestOutcome::Success { advanced, .. }) => *advanced,
            _ => false,
        }
    }
}

/// Per-session counters, reset when the deck is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeSessionStats {
    pub passed: u32,
    pub added_to_cart: u32,
    pub invested: u32,
    pub failed_investments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SwipeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.horizontal_threshold, 100.0);
        assert_eq!(config.vertical_threshold, 80.0);
        assert_eq!(config.right_swipe, CartAddMode::Select);
    }

    #[test]
    fn test_card_width_thresholds() {
        let config = SwipeConfig::for_card_width(400.0);
        assert_eq!(config.horizontal_threshold, 100.0);
        assert_eq!(config.vertical_threshold, 80.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        assert!(SwipeConfig::for_card_width(0.0).validate().is_err());

        let config = SwipeConfig {
            velocity_threshold: f64::NAN,
            ..SwipeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_cart_add_mode_parsing() {
        assert_eq!("Quick".parse::<CartAddMode>().unwrap(), CartAddMode::Quick);
        assert_eq!(" select ".parse::<CartAddMode>().unwrap(), CartAddMode::Select);
        assert!("modal".parse::<CartAddMode>().is_err());
    }

    #[test]
    fn test_auth_proof_is_redacted_in_debug() {
        let proof = AuthProof::new("0xsecret-signature");
        assert_eq!(format!("{:?}", proof), "AuthProof(<redacted>)");
        assert_eq!(proof.as_str(), "0xsecret-signature");
    }
}

//! User-visible notice types.

use serde::{Deserialize, Serialize};

/// Visual weight of a notice (toast variant in the front ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A fire-and-forget message for the notification surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn passed(opportunity_title: &str) -> Self {
        Self::new(
            NoticeLevel::Info,
            "Passed",
            format!("Skipped {}", opportunity_title),
        )
    }

    pub fn added_to_cart(opportunity_title: &str, amount: &str, currency: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Added to cart",
            format!("{} {} for {}", amount, currency, opportunity_title),
        )
    }

    pub fn wallet_required() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "Connect your wallet",
            "Instant invest needs a connected wallet. You are browsing in demo mode.",
        )
    }

    pub fn investment_submitted(opportunity_title: &str, amount: &str, currency: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Investment submitted",
            format!("Invested {} {} in {}", amount, currency, opportunity_title),
        )
    }

    pub fn investment_failed(opportunity_title: &str, reason: &str) -> Self {
        Self::new(
            NoticeLevel::Error,
            "Investment failed",
            format!(
                "Could not invest in {}: {}. Swipe up to try again.",
                opportunity_title, reason
            ),
        )
    }

    pub fn cart_failed(opportunity_title: &str, reason: &str) -> Self {
        Self::new(
            NoticeLevel::Error,
            "Could not add to cart",
            format!("{}: {}", opportunity_title, reason),
        )
    }

    pub fn deck_exhausted() -> Self {
        Self::new(
            NoticeLevel::Info,
            "You're all caught up",
            "No more opportunities right now. Check back soon.",
        )
    }
}

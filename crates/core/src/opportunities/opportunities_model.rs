//! Opportunity domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::target_types;

/// Kind of fundable record shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Dao,
    Grant,
    Scholarship,
}

impl OpportunityType {
    /// Returns the target type string used by the invest endpoint and cart.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Dao => target_types::DAO,
            OpportunityType::Grant => target_types::GRANT,
            OpportunityType::Scholarship => target_types::SCHOLARSHIP,
        }
    }

    /// Returns a human-friendly label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityType::Dao => "Research DAO",
            OpportunityType::Grant => "Grant",
            OpportunityType::Scholarship => "Scholarship",
        }
    }
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How pressing the funding need is.
///
/// Ordered from lowest to highest: Low < Medium < High < Urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }
}

/// A fundable research DAO, grant or scholarship. One card in the deck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,
    pub title: String,
    pub description: String,
    pub funding_goal: Decimal,
    pub funding_raised: Decimal,
    pub category: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Opportunity {
    /// Percentage of the goal already raised, capped at 100.
    ///
    /// A zero or negative goal reports 0 rather than dividing by zero.
    pub fn funding_progress(&self) -> Decimal {
        if self.funding_goal <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let pct = (self.funding_raised / self.funding_goal) * Decimal::ONE_HUNDRED;
        pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// Amount still needed to reach the goal, never negative.
    pub fn remaining_funding(&self) -> Decimal {
        (self.funding_goal - self.funding_raised).max(Decimal::ZERO)
    }

    /// True when the deadline (if any) is before `today`.
    pub fn is_past_deadline(&self, today: NaiveDate) -> bool {
        self.deadline.map(|d| d < today).unwrap_or(false)
    }
}

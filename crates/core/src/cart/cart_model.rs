//! Cart line item models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::opportunities::Opportunity;

/// One pledged amount waiting in the funding cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: String,
    pub target_type: String,
    pub target_id: String,
    pub target_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Builds a line item pledging `amount` to `opportunity`.
    pub fn for_opportunity(opportunity: &Opportunity, amount: Decimal, currency: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            target_type: opportunity.opportunity_type.as_str().to_string(),
            target_id: opportunity.id.clone(),
            target_name: opportunity.title.clone(),
            amount,
            currency: currency.to_string(),
            description: format!(
                "{} funding for {}",
                opportunity.opportunity_type.label(),
                opportunity.title
            ),
            added_at: Utc::now(),
        }
    }
}

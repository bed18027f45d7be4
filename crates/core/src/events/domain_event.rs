//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by the swipe engine after successful mutations.
///
/// Hosts translate them into cache invalidation (investor profile,
/// investment history, cart badge) on their side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An investment was confirmed by the invest endpoint.
    /// Cached investor and investment data is stale.
    InvestmentsChanged {
        opportunity_ids: Vec<String>,
        investment_ids: Vec<String>,
    },

    /// Line items were appended to the cart.
    CartChanged { item_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates an InvestmentsChanged event.
    pub fn investments_changed(opportunity_ids: Vec<String>, investment_ids: Vec<String>) -> Self {
        Self::InvestmentsChanged {
            opportunity_ids,
            investment_ids,
        }
    }

    /// Creates a CartChanged event.
    pub fn cart_changed(item_ids: Vec<String>) -> Self {
        Self::CartChanged { item_ids }
    }
}

use crate::errors::Result;
use crate::opportunities::opportunities_model::Opportunity;
use async_trait::async_trait;

/// Source of the ordered opportunity listing that feeds the deck.
///
/// Implemented by the REST client; fetch and caching policy live there.
#[async_trait]
pub trait OpportunitySourceTrait: Send + Sync {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>>;
}

use crate::errors::Result;
use crate::preferences::preferences_model::InvestorPreferences;
use async_trait::async_trait;

/// Source of the investor's saved funding preferences.
#[async_trait]
pub trait PreferencesSourceTrait: Send + Sync {
    /// Returns `None` when the investor has not saved preferences yet.
    async fn get_preferences(&self, wallet_address: &str) -> Result<Option<InvestorPreferences>>;
}

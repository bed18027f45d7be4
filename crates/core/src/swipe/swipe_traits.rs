use async_trait::async_trait;
use rust_decimal::Decimal;

use super::deck::DeckCursor;
use super::swipe_model::{
    AuthProof, InvestReceipt, InvestRequest, PendingInvestment, SwipeOutcome, SwipeSessionStats,
};
use crate::errors::Result;
use crate::funding_tiers::TierPresets;
use crate::gesture::{Offset, Point, Velocity};
use crate::opportunities::Opportunity;
use crate::preferences::InvestorPreferences;

/// Remote invest endpoint.
#[async_trait]
pub trait InvestGatewayTrait: Send + Sync {
    /// Submits the investment. Timeouts and transport errors are `Err`.
    async fn invest(&self, request: InvestRequest) -> Result<InvestReceipt>;
}

/// Connected wallet session that authorises investments.
#[async_trait]
pub trait WalletSessionTrait: Send + Sync {
    fn is_connected(&self) -> bool;

    fn wallet_address(&self) -> Option<String>;

    /// Produces the opaque proof sent with the invest call.
    async fn sign_investment(&self, investment: &PendingInvestment) -> Result<AuthProof>;
}

/// Swipe interaction engine operations.
#[async_trait]
pub trait SwipeServiceTrait: Send + Sync {
    fn current_opportunity(&self) -> Option<Opportunity>;

    fn cursor(&self) -> DeckCursor;

    fn is_exhausted(&self) -> bool;

    /// Replaces the deck with a fresh listing and resets the session counters.
    fn refresh_deck(&self, opportunities: Vec<Opportunity>);

    fn set_preferences(&self, preferences: Option<InvestorPreferences>);

    /// Preset table for the investor's tier.
    fn tier_presets(&self) -> &'static TierPresets;

    /// Amount used by quick-add and instant-invest.
    fn quick_amount(&self) -> Decimal;

    /// Returns false when input is not accepted (exhausted deck, picker open).
    fn start_drag(&self, point: Point) -> bool;

    fn move_drag(&self, point: Point) -> Option<Offset>;

    fn cancel_drag(&self) -> bool;

    /// Resolves the gesture and runs the matching action.
    async fn end_drag(&self, point: Point, velocity: Option<Velocity>) -> Result<SwipeOutcome>;

    fn pass(&self) -> SwipeOutcome;

    /// Full cart flow, step one: open the amount picker.
    fn open_cart_selection(&self) -> SwipeOutcome;

    /// Full cart flow, step two: append the chosen amount and advance.
    fn select_cart_amount(&self, amount: Decimal) -> Result<SwipeOutcome>;

    fn select_cart_preset(&self, index: usize) -> Result<SwipeOutcome>;

    fn cancel_cart_selection(&self) -> SwipeOutcome;

    /// Appends the quick amount without opening the picker.
    fn quick_add_to_cart(&self) -> Result<SwipeOutcome>;

    async fn instant_invest(&self) -> Result<SwipeOutcome>;

    fn stats(&self) -> SwipeSessionStats;
}

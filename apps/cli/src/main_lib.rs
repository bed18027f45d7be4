use std::sync::Arc;

use swipefund_connect::PlatformApiClient;
use swipefund_core::cart::InMemoryCartStore;
use swipefund_core::opportunities::OpportunitySourceTrait;
use swipefund_core::preferences::PreferencesSourceTrait;
use swipefund_core::swipe::{SwipeService, SwipeServiceTrait, WalletSessionTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::notices::{LoggingDomainEventSink, TerminalNoticeSink};
use crate::session::{DemoSession, EnvWalletSession};

pub struct AppState {
    pub swipe_service: Arc<SwipeService>,
    pub cart: Arc<InMemoryCartStore>,
    pub api: Arc<PlatformApiClient>,
    pub wallet: Arc<dyn WalletSessionTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SWIPEFUND_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let api = Arc::new(PlatformApiClient::with_timeout(
        &config.api_url,
        config.api_token.as_deref(),
        config.request_timeout,
    )?);
    tracing::info!("Platform API: {}", api.base_url());

    let wallet: Arc<dyn WalletSessionTrait> = match &config.wallet_address {
        Some(address) => {
            tracing::info!("Wallet connected: {}", address);
            Arc::new(EnvWalletSession::new(
                address.clone(),
                config.auth_proof.clone(),
            ))
        }
        None => {
            tracing::warn!("No wallet configured; running in demo mode");
            Arc::new(DemoSession)
        }
    };

    let cart = Arc::new(InMemoryCartStore::new());
    let swipe_service = Arc::new(SwipeService::new(
        config.swipe,
        cart.clone(),
        api.clone(),
        wallet.clone(),
        Arc::new(TerminalNoticeSink),
        Arc::new(LoggingDomainEventSink),
    )?);

    Ok(AppState {
        swipe_service,
        cart,
        api,
        wallet,
    })
}

/// Fetches the listing (and preferences when a wallet is connected) into a fresh deck.
pub async fn load_deck(state: &AppState) -> anyhow::Result<usize> {
    let opportunities = state.api.list_opportunities().await?;
    let count = opportunities.len();

    let preferences = match state.wallet.wallet_address() {
        Some(address) => match state.api.get_preferences(&address).await {
            Ok(preferences) => preferences,
            Err(e) => {
                tracing::warn!("Failed to load investor preferences: {}", e);
                None
            }
        },
        None => None,
    };

    state.swipe_service.set_preferences(preferences);
    state.swipe_service.refresh_deck(opportunities);
    tracing::info!(
        "Deck loaded with {} opportunities (tier: {})",
        count,
        state.swipe_service.tier_presets().label
    );
    Ok(count)
}

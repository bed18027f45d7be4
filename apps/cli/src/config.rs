use std::time::Duration;

use anyhow::Context;
use swipefund_connect::DEFAULT_API_URL;
use swipefund_core::swipe::{CartAddMode, SwipeConfig};

pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    /// Connected wallet address; `None` runs in demo mode.
    pub wallet_address: Option<String>,
    /// Pre-issued proof from the wallet signer.
    pub auth_proof: Option<String>,
    pub request_timeout: Duration,
    pub swipe: SwipeConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty("SWIPEFUND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let timeout_ms: u64 = non_empty("SWIPEFUND_REQUEST_TIMEOUT_MS")
            .map(|v| v.parse())
            .transpose()
            .context("SWIPEFUND_REQUEST_TIMEOUT_MS must be a whole number of milliseconds")?
            .unwrap_or(30000);

        let mut swipe = match non_empty("SWIPEFUND_CARD_WIDTH") {
            Some(width) => {
                let width: f64 = width
                    .parse()
                    .context("SWIPEFUND_CARD_WIDTH must be a number of pixels")?;
                SwipeConfig::for_card_width(width)
            }
            None => SwipeConfig::default(),
        };
        if let Some(mode) = non_empty("SWIPEFUND_RIGHT_SWIPE") {
            swipe.right_swipe = mode.parse::<CartAddMode>()?;
        }
        swipe.validate()?;

        Ok(Self {
            api_url,
            api_token: non_empty("SWIPEFUND_API_TOKEN"),
            wallet_address: non_empty("SWIPEFUND_WALLET"),
            auth_proof: non_empty("SWIPEFUND_AUTH_PROOF"),
            request_timeout: Duration::from_millis(timeout_ms),
            swipe,
        })
    }
}

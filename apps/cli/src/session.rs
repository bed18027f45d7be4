//! Wallet sessions for the terminal host.

use async_trait::async_trait;
use swipefund_core::errors::{Error, Result};
use swipefund_core::swipe::{AuthProof, PendingInvestment, WalletSessionTrait};

/// Wallet configured through the environment.
///
/// The terminal has no signer of its own, so the proof is issued out of band
/// and handed over as `SWIPEFUND_AUTH_PROOF`.
pub struct EnvWalletSession {
    address: String,
    auth_proof: Option<String>,
}

impl EnvWalletSession {
    pub fn new(address: impl Into<String>, auth_proof: Option<String>) -> Self {
        Self {
            address: address.into(),
            auth_proof,
        }
    }
}

#[async_trait]
impl WalletSessionTrait for EnvWalletSession {
    fn is_connected(&self) -> bool {
        true
    }

    fn wallet_address(&self) -> Option<String> {
        Some(self.address.clone())
    }

    async fn sign_investment(&self, investment: &PendingInvestment) -> Result<AuthProof> {
        match &self.auth_proof {
            Some(proof) => {
                tracing::debug!(
                    "Using configured auth proof for {} {} -> {}",
                    investment.amount,
                    investment.currency,
                    investment.opportunity.id
                );
                Ok(AuthProof::new(proof.clone()))
            }
            None => Err(Error::Session(
                "No auth proof configured; set SWIPEFUND_AUTH_PROOF".to_string(),
            )),
        }
    }
}

/// Demo mode: browsing and the cart work, investing is refused.
pub struct DemoSession;

#[async_trait]
impl WalletSessionTrait for DemoSession {
    fn is_connected(&self) -> bool {
        false
    }

    fn wallet_address(&self) -> Option<String> {
        None
    }

    async fn sign_investment(&self, _investment: &PendingInvestment) -> Result<AuthProof> {
        Err(Error::Session("Demo mode has no wallet".to_string()))
    }
}

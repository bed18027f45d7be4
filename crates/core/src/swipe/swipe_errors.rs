//! Swipe interaction error types.

use thiserror::Error;

/// Reasons a swipe action was refused or ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwipeError {
    /// Drag end arrived without a drag start.
    #[error("No active gesture")]
    NoActiveGesture,

    /// Every card has been acted on; waiting for a deck refresh.
    #[error("Deck is exhausted")]
    DeckExhausted,

    /// The amount picker is open; other input waits for it.
    #[error("Cart amount selection is pending for '{0}'")]
    SelectionPending(String),

    /// An amount was chosen but no picker is open.
    #[error("No cart amount selection is open")]
    NoSelectionOpen,

    /// Instant invest needs a connected wallet session.
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No preset at index {0}")]
    UnknownPreset(usize),
}

impl SwipeError {
    /// State errors are silent no-ops; everything else is user-actionable.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            SwipeError::NoActiveGesture
                | SwipeError::DeckExhausted
                | SwipeError::SelectionPending(_)
                | SwipeError::NoSelectionOpen
        )
    }
}

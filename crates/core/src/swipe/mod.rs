//! Swipe module - gesture resolution, deck cursor and action executors.
//!
//! ```text
//! GestureTracker → resolve_swipe → SwipeAction
//!                                     ↓
//!        SwipeService (pass / cart-add / instant-invest) → Deck cursor
//!                                     ↓
//!              CartStore · InvestGateway · NoticeSink · DomainEventSink
//! ```

mod deck;
mod swipe_errors;
mod swipe_model;
mod swipe_resolver;
mod swipe_service;
mod swipe_traits;


pub use deck::{Deck, DeckCursor};
pub use swipe_errors::SwipeError;
pub use swipe_model::{
    AuthProof, CartAddMode, InvestOutcome, InvestReceipt, InvestRequest, PendingInvestment,
    SwipeAction, SwipeConfig, SwipeOutcome, SwipeSessionStats,
};
pub use swipe_resolver::resolve_swipe;
pub use swipe_service::SwipeService;
pub use swipe_traits::{InvestGatewayTrait, SwipeServiceTrait, WalletSessionTrait};

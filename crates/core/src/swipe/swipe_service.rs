//! Swipe service implementation.
//!
//! The SwipeService owns the deck, the live gesture and the pending-invest
//! guard, and runs the action executors against the injected cart, wallet,
//! invest endpoint and notification collaborators.

use async_trait::async_trait;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use super::deck::{Deck, DeckCursor};
use super::swipe_errors::SwipeError;
use super::swipe_model::{
    CartAddMode, InvestOutcome, InvestReceipt, InvestRequest, PendingInvestment, SwipeAction,
    SwipeConfig, SwipeOutcome, SwipeSessionStats,
};
use super::swipe_resolver::resolve_swipe;
use super::swipe_traits::{InvestGatewayTrait, SwipeServiceTrait, WalletSessionTrait};
use crate::cart::{CartLineItem, CartStoreTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::funding_tiers::{resolve_tier, TierPresets};
use crate::gesture::{GestureTracker, Offset, Point, Velocity};
use crate::notices::{Notice, NoticeSink};
use crate::opportunities::Opportunity;
use crate::preferences::InvestorPreferences;

/// The card a deferred action was started on.
#[derive(Debug, Clone)]
struct CardRef {
    generation: u64,
    index: usize,
    opportunity: Opportunity,
}

#[derive(Debug, Default)]
struct SwipeState {
    deck: Deck,
    gesture: GestureTracker,
    preferences: Option<InvestorPreferences>,
    /// Open amount picker, if any. Blocks all other input while set.
    cart_selection: Option<CardRef>,
    /// Opportunity ids with an invest request in flight.
    pending_investments: HashSet<String>,
    stats: SwipeSessionStats,
}

impl SwipeState {
    fn current_card(&self) -> Option<CardRef> {
        self.deck.current().map(|opportunity| CardRef {
            generation: self.deck.generation(),
            index: self.deck.cursor().current_index,
            opportunity: opportunity.clone(),
        })
    }

    fn blocking_selection(&self) -> Option<SwipeError> {
        self.cart_selection
            .as_ref()
            .map(|card| SwipeError::SelectionPending(card.opportunity.id.clone()))
    }

    fn selection_is_for(&self, card: &CardRef) -> bool {
        self.cart_selection.as_ref().is_some_and(|open| {
            open.generation == card.generation
                && open.index == card.index
                && open.opportunity.id == card.opportunity.id
        })
    }

    fn tier_presets(&self) -> &'static TierPresets {
        resolve_tier(self.preferences.as_ref())
    }

    fn quick_amount(&self) -> Decimal {
        let presets = self.tier_presets();
        self.preferences
            .as_ref()
            .map(|p| p.quick_amount(presets))
            .unwrap_or_else(|| presets.first())
    }

    fn currency(&self) -> String {
        self.preferences
            .as_ref()
            .map(|p| p.currency().to_string())
            .unwrap_or_else(|| crate::constants::DEFAULT_CURRENCY.to_string())
    }

    /// Advances past `card` if it is still current. Queues the
    /// end-of-deck notice when this was the last card.
    fn advance_from(&mut self, card: &CardRef, notices: &mut Vec<Notice>) -> bool {
        if !self
            .deck
            .is_current(card.generation, card.index, &card.opportunity.id)
        {
            return false;
        }
        let advanced = self.deck.advance();
        if advanced && self.deck.is_exhausted() {
            info!("Deck exhausted after {} cards", self.deck.len());
            notices.push(Notice::deck_exhausted());
        }
        advanced
    }
}

/// Swipe interaction engine.
pub struct SwipeService {
    config: SwipeConfig,
    state: Mutex<SwipeState>,
    cart: Arc<dyn CartStoreTrait>,
    invest_gateway: Arc<dyn InvestGatewayTrait>,
    wallet: Arc<dyn WalletSessionTrait>,
    notices: Arc<dyn NoticeSink>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SwipeService {
    /// Creates a new swipe service with an empty deck.
    ///
    /// Fails when the configured thresholds are not positive and finite.
    pub fn new(
        config: SwipeConfig,
        cart: Arc<dyn CartStoreTrait>,
        invest_gateway: Arc<dyn InvestGatewayTrait>,
        wallet: Arc<dyn WalletSessionTrait>,
        notices: Arc<dyn NoticeSink>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(SwipeState::default()),
            cart,
            invest_gateway,
            wallet,
            notices,
            event_sink,
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Lock the state mutex, recovering from poison if necessary.
    fn lock_state(&self) -> MutexGuard<'_, SwipeState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Swipe state mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Delivers queued notices and events. Called with the state lock released.
    fn publish(&self, notices: Vec<Notice>, events: Vec<DomainEvent>) {
        for notice in notices {
            self.notices.notify(notice);
        }
        if !events.is_empty() {
            self.event_sink.emit_batch(events);
        }
    }

    /// Appends `amount` for `card` to the cart and advances past it.
    ///
    /// The cart is called without holding the state lock. On failure the
    /// picker (if any) stays open and the cursor does not move.
    fn add_to_cart(&self, card: CardRef, amount: Decimal, currency: String) -> Result<SwipeOutcome> {
        let item = CartLineItem::for_opportunity(&card.opportunity, amount, &currency);

        if let Err(e) = self.cart.append(item.clone()) {
            warn!("Cart append failed for {}: {}", card.opportunity.id, e);
            self.publish(
                vec![Notice::cart_failed(&card.opportunity.title, &e.to_string())],
                vec![],
            );
            return Err(e);
        }

        let mut notices = vec![Notice::added_to_cart(
            &card.opportunity.title,
            &amount.to_string(),
            &currency,
        )];
        let advanced = {
            let mut state = self.lock_state();
            state.cart_selection = None;
            state.stats.added_to_cart += 1;
            state.advance_from(&card, &mut notices)
        };
        debug!("Added {} {} for {} to cart", amount, currency, card.opportunity.id);
        self.publish(notices, vec![DomainEvent::cart_changed(vec![item.id.clone()])]);
        Ok(SwipeOutcome::AddedToCart { item, advanced })
    }

    async fn submit_investment(&self, pending: &PendingInvestment) -> Result<InvestReceipt> {
        let auth_proof = self.wallet.sign_investment(pending).await?;
        let request = InvestRequest::new(pending, auth_proof);
        self.invest_gateway.invest(request).await
    }
}

#[async_trait]
impl SwipeServiceTrait for SwipeService {
    fn current_opportunity(&self) -> Option<Opportunity> {
        self.lock_state().deck.current().cloned()
    }

    fn cursor(&self) -> DeckCursor {
        self.lock_state().deck.cursor()
    }

    fn is_exhausted(&self) -> bool {
        self.lock_state().deck.is_exhausted()
    }

    fn refresh_deck(&self, opportunities: Vec<Opportunity>) {
        let mut state = self.lock_state();
        info!("Loading deck with {} opportunities", opportunities.len());
        state.deck.replace(opportunities);
        state.gesture.cancel();
        state.cart_selection = None;
        state.stats = SwipeSessionStats::default();
    }

    fn set_preferences(&self, preferences: Option<InvestorPreferences>) {
        let mut state = self.lock_state();
        state.preferences = preferences;
        debug!("Funding tier now {}", state.tier_presets().tier.as_str());
    }

    fn tier_presets(&self) -> &'static TierPresets {
        self.lock_state().tier_presets()
    }

    fn quick_amount(&self) -> Decimal {
        self.lock_state().quick_amount()
    }

    fn start_drag(&self, point: Point) -> bool {
        let mut state = self.lock_state();
        if state.deck.is_exhausted() || state.cart_selection.is_some() {
            debug!("Drag start ignored: no card accepting input");
            return false;
        }
        state.gesture.start(point);
        true
    }

    fn move_drag(&self, point: Point) -> Option<Offset> {
        self.lock_state().gesture.move_to(point)
    }

    fn cancel_drag(&self) -> bool {
        self.lock_state().gesture.cancel()
    }

    async fn end_drag(&self, point: Point, velocity: Option<Velocity>) -> Result<SwipeOutcome> {
        let action = {
            let mut state = self.lock_state();
            let Some(gesture) = state.gesture.end(point, velocity) else {
                return Ok(SwipeOutcome::Ignored(SwipeError::NoActiveGesture));
            };
            let action = resolve_swipe(
                gesture.offset,
                Some(gesture.velocity),
                state.deck.current(),
                &self.config,
            );
            debug!(
                "Gesture dx={:.1} dy={:.1} vx={:.2} vy={:.2} resolved to {}",
                gesture.offset.dx,
                gesture.offset.dy,
                gesture.velocity.vx,
                gesture.velocity.vy,
                action
            );
            action
        };

        match action {
            SwipeAction::Reset => Ok(SwipeOutcome::Reset),
            SwipeAction::Pass => Ok(self.pass()),
            SwipeAction::CartAdd => match self.config.right_swipe {
                CartAddMode::Select => Ok(self.open_cart_selection()),
                CartAddMode::Quick => self.quick_add_to_cart(),
            },
            SwipeAction::InstantInvest => self.instant_invest().await,
        }
    }

    fn pass(&self) -> SwipeOutcome {
        let mut notices = Vec::new();
        let outcome = {
            let mut state = self.lock_state();
            if let Some(blocked) = state.blocking_selection() {
                return SwipeOutcome::Ignored(blocked);
            }
            let Some(card) = state.current_card() else {
                return SwipeOutcome::Ignored(SwipeError::DeckExhausted);
            };
            notices.push(Notice::passed(&card.opportunity.title));
            state.stats.passed += 1;
            state.advance_from(&card, &mut notices);
            SwipeOutcome::Passed {
                opportunity_id: card.opportunity.id,
            }
        };
        self.publish(notices, vec![]);
        outcome
    }

    fn open_cart_selection(&self) -> SwipeOutcome {
        let mut state = self.lock_state();
        if let Some(blocked) = state.blocking_selection() {
            return SwipeOutcome::Ignored(blocked);
        }
        let Some(card) = state.current_card() else {
            return SwipeOutcome::Ignored(SwipeError::DeckExhausted);
        };
        let presets = state.tier_presets().amounts().to_vec();
        let opportunity_id = card.opportunity.id.clone();
        state.cart_selection = Some(card);
        SwipeOutcome::CartSelectionOpened {
            opportunity_id,
            presets,
        }
    }

    fn select_cart_amount(&self, amount: Decimal) -> Result<SwipeOutcome> {
        if amount <= Decimal::ZERO {
            return Err(SwipeError::InvalidAmount(amount.to_string()).into());
        }
        let (card, currency) = {
            let state = self.lock_state();
            let Some(card) = state.cart_selection.clone() else {
                return Ok(SwipeOutcome::Ignored(SwipeError::NoSelectionOpen));
            };
            (card, state.currency())
        };
        self.add_to_cart(card, amount, currency)
    }

    fn select_cart_preset(&self, index: usize) -> Result<SwipeOutcome> {
        let amount = self
            .tier_presets()
            .get(index)
            .ok_or(SwipeError::UnknownPreset(index))?;
        self.select_cart_amount(amount)
    }

    fn cancel_cart_selection(&self) -> SwipeOutcome {
        match self.lock_state().cart_selection.take() {
            Some(card) => SwipeOutcome::CartSelectionCancelled {
                opportunity_id: card.opportunity.id,
            },
            None => SwipeOutcome::Ignored(SwipeError::NoSelectionOpen),
        }
    }

    fn quick_add_to_cart(&self) -> Result<SwipeOutcome> {
        let (card, amount, currency) = {
            let state = self.lock_state();
            if let Some(blocked) = state.blocking_selection() {
                return Ok(SwipeOutcome::Ignored(blocked));
            }
            let Some(card) = state.current_card() else {
                return Ok(SwipeOutcome::Ignored(SwipeError::DeckExhausted));
            };
            (card, state.quick_amount(), state.currency())
        };
        self.add_to_cart(card, amount, currency)
    }

    async fn instant_invest(&self) -> Result<SwipeOutcome> {
        let (card, pending) = {
            let mut state = self.lock_state();
            if let Some(blocked) = state.blocking_selection() {
                return Ok(SwipeOutcome::Ignored(blocked));
            }
            let Some(card) = state.current_card() else {
                return Ok(SwipeOutcome::Ignored(SwipeError::DeckExhausted));
            };
            let opportunity_id = card.opportunity.id.clone();
            if state.pending_investments.contains(&opportunity_id) {
                debug!("Invest for {} already in flight", opportunity_id);
                return Ok(SwipeOutcome::Invest(InvestOutcome::Pending { opportunity_id }));
            }
            if !self.wallet.is_connected() {
                drop(state);
                info!("Instant invest rejected: no wallet session");
                self.publish(vec![Notice::wallet_required()], vec![]);
                return Ok(SwipeOutcome::Rejected(SwipeError::WalletNotConnected));
            }
            state.pending_investments.insert(opportunity_id);
            let pending = PendingInvestment {
                opportunity: card.opportunity.clone(),
                amount: state.quick_amount(),
                currency: state.currency(),
            };
            (card, pending)
        };

        info!(
            "Submitting investment of {} {} in {}",
            pending.amount, pending.currency, pending.opportunity.id
        );
        let result = self.submit_investment(&pending).await;

        let mut notices = Vec::new();
        let mut events = Vec::new();
        let outcome = {
            let mut state = self.lock_state();
            state.pending_investments.remove(&pending.opportunity.id);
            match result {
                Ok(receipt) => {
                    state.stats.invested += 1;
                    let advanced = state.advance_from(&card, &mut notices);
                    if advanced && state.selection_is_for(&card) {
                        debug!("Closing amount picker for invested card {}", card.opportunity.id);
                        state.cart_selection = None;
                    }
                    if !advanced {
                        debug!(
                            "Investment {} confirmed after the card was left; cursor unchanged",
                            receipt.id
                        );
                    }
                    notices.insert(
                        0,
                        Notice::investment_submitted(
                            &pending.opportunity.title,
                            &pending.amount.to_string(),
                            &pending.currency,
                        ),
                    );
                    events.push(DomainEvent::investments_changed(
                        vec![pending.opportunity.id.clone()],
                        vec![receipt.id.clone()],
                    ));
                    InvestOutcome::Success {
                        opportunity_id: pending.opportunity.id.clone(),
                        amount: pending.amount,
                        receipt,
                        advanced,
                    }
                }
                Err(e) => {
                    state.stats.failed_investments += 1;
                    warn!("Investment in {} failed: {}", pending.opportunity.id, e);
                    notices.push(Notice::investment_failed(
                        &pending.opportunity.title,
                        &e.to_string(),
                    ));
                    InvestOutcome::Failure {
                        opportunity_id: pending.opportunity.id.clone(),
                        reason: e.to_string(),
                    }
                }
            }
        };
        self.publish(notices, events);
        Ok(SwipeOutcome::Invest(outcome))
    }

    fn stats(&self) -> SwipeSessionStats {
        self.lock_state().stats
    }
}

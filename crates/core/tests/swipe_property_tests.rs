//! Property-based tests for the swipe interaction engine.
//!
//! These tests verify the gesture classification rules, the funding tier
//! table and the forward-only deck cursor across random inputs, using the
//! `proptest` crate for case generation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use swipefund_core::cart::InMemoryCartStore;
use swipefund_core::errors::{Error, Result};
use swipefund_core::events::NoOpDomainEventSink;
use swipefund_core::funding_tiers::{resolve_tier_id, FundingTier};
use swipefund_core::gesture::{Offset, Velocity};
use swipefund_core::notices::NoOpNoticeSink;
use swipefund_core::opportunities::{Opportunity, OpportunityType, Urgency};
use swipefund_core::swipe::{
    resolve_swipe, AuthProof, InvestGatewayTrait, InvestOutcome, InvestReceipt, InvestRequest,
    PendingInvestment, SwipeAction, SwipeConfig, SwipeOutcome, SwipeService, SwipeServiceTrait,
    WalletSessionTrait,
};

// =============================================================================
// Fixtures
// =============================================================================

fn opportunity(index: usize) -> Opportunity {
    Opportunity {
        id: format!("opp-{}", index),
        opportunity_type: OpportunityType::Grant,
        title: format!("Grant {}", index),
        description: String::new(),
        funding_goal: dec!(10000),
        funding_raised: dec!(0),
        category: "Chemistry".to_string(),
        urgency: Urgency::Medium,
        deadline: None,
        timeline: None,
        impact: None,
        member_count: None,
        location: None,
    }
}

/// Fails every other request.
#[derive(Default)]
struct AlternatingGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl InvestGatewayTrait for AlternatingGateway {
    async fn invest(&self, request: InvestRequest) -> Result<InvestReceipt> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n % 2 == 0 {
            Ok(InvestReceipt {
                id: format!("inv-{}-{}", request.target_id, n),
                status: "confirmed".to_string(),
            })
        } else {
            Err(Error::Api("connection reset".to_string()))
        }
    }
}

struct ConnectedWallet;

#[async_trait]
impl WalletSessionTrait for ConnectedWallet {
    fn is_connected(&self) -> bool {
        true
    }

    fn wallet_address(&self) -> Option<String> {
        Some("0xfeed".to_string())
    }

    async fn sign_investment(&self, investment: &PendingInvestment) -> Result<AuthProof> {
        Ok(AuthProof::new(investment.opportunity.id.clone()))
    }
}

fn config() -> SwipeConfig {
    SwipeConfig::default()
}

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Step {
    Pass,
    OpenSelection,
    SelectPreset(usize),
    CancelSelection,
    QuickAdd,
    Invest,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Pass),
        Just(Step::OpenSelection),
        (0usize..6).prop_map(Step::SelectPreset),
        Just(Step::CancelSelection),
        Just(Step::QuickAdd),
        Just(Step::Invest),
    ]
}

/// Velocities strictly inside the flick threshold.
fn arb_slow_velocity() -> impl Strategy<Value = Option<Velocity>> {
    let limit = config().velocity_threshold;
    proptest::option::of(
        (-limit + 1e-6..limit - 1e-6, -limit + 1e-6..limit - 1e-6)
            .prop_map(|(vx, vy)| Velocity::new(vx, vy)),
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Drags inside both thresholds snap back.
    #[test]
    fn prop_small_gestures_reset(
        dx in -100.0f64..=100.0,
        dy in -80.0f64..=2000.0,
        velocity in arb_slow_velocity(),
    ) {
        let opp = opportunity(0);
        let action = resolve_swipe(Offset::new(dx, dy), velocity, Some(&opp), &config());
        prop_assert_eq!(action, SwipeAction::Reset);
    }

    /// Far enough right is a cart add, whatever the vertical component.
    #[test]
    fn prop_right_drag_adds_to_cart(
        dx in 100.0001f64..5000.0,
        dy in -5000.0f64..5000.0,
        velocity in arb_slow_velocity(),
    ) {
        let opp = opportunity(0);
        let action = resolve_swipe(Offset::new(dx, dy), velocity, Some(&opp), &config());
        prop_assert_eq!(action, SwipeAction::CartAdd);
    }

    /// Far enough left is a pass, whatever the vertical component.
    #[test]
    fn prop_left_drag_passes(
        dx in -5000.0f64..-100.0001,
        dy in -5000.0f64..5000.0,
        velocity in arb_slow_velocity(),
    ) {
        let opp = opportunity(0);
        let action = resolve_swipe(Offset::new(dx, dy), velocity, Some(&opp), &config());
        prop_assert_eq!(action, SwipeAction::Pass);
    }

    /// Upward past the vertical threshold without horizontal commit invests.
    #[test]
    fn prop_up_drag_invests(
        dx in -100.0f64..=100.0,
        dy in -5000.0f64..-80.0001,
        velocity in arb_slow_velocity(),
    ) {
        let opp = opportunity(0);
        let action = resolve_swipe(Offset::new(dx, dy), velocity, Some(&opp), &config());
        prop_assert_eq!(action, SwipeAction::InstantInvest);
    }

    /// Without a current card nothing but a reset can come out.
    #[test]
    fn prop_no_card_always_resets(
        dx in proptest::num::f64::ANY,
        dy in proptest::num::f64::ANY,
        vx in proptest::num::f64::ANY,
        vy in proptest::num::f64::ANY,
    ) {
        let action = resolve_swipe(
            Offset::new(dx, dy),
            Some(Velocity::new(vx, vy)),
            None,
            &config(),
        );
        prop_assert_eq!(action, SwipeAction::Reset);
    }

    /// Any tier id resolves to four ascending positive presets; unknown ids
    /// resolve to the individual supporter table.
    #[test]
    fn prop_tier_resolution_is_total(id in "[a-z_]{0,24}") {
        let presets = resolve_tier_id(Some(id.as_str()));
        prop_assert_eq!(presets.amounts().len(), 4);
        prop_assert!(presets.amounts().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(presets.amounts().iter().all(|a| *a > Decimal::ZERO));
        if FundingTier::from_id(&id).is_none() {
            prop_assert_eq!(presets.tier, FundingTier::IndividualSupporter);
        }
    }

    /// The cursor never moves backwards and moves by exactly one for every
    /// outcome that reports an advance.
    #[test]
    fn prop_cursor_is_monotonic(
        deck_len in 0usize..8,
        steps in proptest::collection::vec(arb_step(), 0..40),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let cart = Arc::new(InMemoryCartStore::new());
        let service = SwipeService::new(
            config(),
            cart.clone(),
            Arc::new(AlternatingGateway::default()),
            Arc::new(ConnectedWallet),
            Arc::new(NoOpNoticeSink),
            Arc::new(NoOpDomainEventSink),
        )
        .unwrap();
        service.refresh_deck((0..deck_len).map(opportunity).collect());

        let mut expected_cart_len = 0;
        for step in steps {
            let before = service.cursor();
            let outcome = match step {
                Step::Pass => Ok(service.pass()),
                Step::OpenSelection => Ok(service.open_cart_selection()),
                Step::SelectPreset(i) => service.select_cart_preset(i),
                Step::CancelSelection => Ok(service.cancel_cart_selection()),
                Step::QuickAdd => service.quick_add_to_cart(),
                Step::Invest => runtime.block_on(service.instant_invest()),
            };
            let after = service.cursor();

            prop_assert!(after.current_index >= before.current_index);
            prop_assert!(after.current_index <= after.length);

            match outcome {
                Ok(outcome) => {
                    let step_size = after.current_index - before.current_index;
                    prop_assert_eq!(step_size, usize::from(outcome.advanced_deck()));
                    if let SwipeOutcome::AddedToCart { .. } = outcome {
                        expected_cart_len += 1;
                    }
                    if let SwipeOutcome::Invest(InvestOutcome::Failure { .. }) = outcome {
                        prop_assert_eq!(step_size, 0);
                    }
                }
                Err(_) => prop_assert_eq!(after, before),
            }
        }
        prop_assert_eq!(cart.len(), expected_cart_len);
    }
}

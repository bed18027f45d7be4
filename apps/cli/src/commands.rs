//! Line commands for driving the deck from a terminal.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use rust_decimal::Decimal;
use swipefund_core::gesture::{Point, Velocity};
use swipefund_core::swipe::{InvestOutcome, SwipeOutcome, SwipeServiceTrait};
use swipefund_core::Opportunity;

use crate::main_lib::{load_deck, AppState};

pub const HELP: &str = "\
commands:
  drag DX DY [VX VY]   swipe by offset (px), optional release velocity (px/ms)
  pass                 pass on the current card
  add                  open the amount picker for the current card
  pick N               choose preset N (1-4) from the open picker
  amount X             choose a custom amount from the open picker
  cancel               close the picker
  quick                add the quick amount to the cart
  invest               instant-invest the quick amount
  show | stats | cart | refresh | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Drag {
        dx: f64,
        dy: f64,
        velocity: Option<Velocity>,
    },
    Pass,
    Add,
    Pick(usize),
    Amount(Decimal),
    Cancel,
    Quick,
    Invest,
    Show,
    Stats,
    Cart,
    Refresh,
    Help,
    Quit,
}

fn parse_f64(token: Option<&str>, name: &str) -> anyhow::Result<f64> {
    let token = token.ok_or_else(|| anyhow!("missing {}", name))?;
    let value: f64 = token
        .parse()
        .with_context(|| format!("{} must be a number, got '{}'", name, token))?;
    if !value.is_finite() {
        bail!("{} must be finite", name);
    }
    Ok(value)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| anyhow!("empty command"))?;
        let command = match name.to_ascii_lowercase().as_str() {
            "drag" => {
                let dx = parse_f64(parts.next(), "DX")?;
                let dy = parse_f64(parts.next(), "DY")?;
                let velocity = match parts.next() {
                    Some(vx) => {
                        let vx = parse_f64(Some(vx), "VX")?;
                        let vy = parse_f64(parts.next(), "VY")?;
                        Some(Velocity::new(vx, vy))
                    }
                    None => None,
                };
                Command::Drag { dx, dy, velocity }
            }
            "pass" => Command::Pass,
            "add" => Command::Add,
            "pick" => {
                let token = parts.next().ok_or_else(|| anyhow!("missing preset number"))?;
                let n: usize = token
                    .parse()
                    .with_context(|| format!("preset must be 1-4, got '{}'", token))?;
                if n == 0 {
                    bail!("presets are numbered from 1");
                }
                Command::Pick(n - 1)
            }
            "amount" => {
                let token = parts.next().ok_or_else(|| anyhow!("missing amount"))?;
                let amount = Decimal::from_str(token.trim_start_matches('$'))
                    .with_context(|| format!("'{}' is not an amount", token))?;
                Command::Amount(amount)
            }
            "cancel" => Command::Cancel,
            "quick" => Command::Quick,
            "invest" => Command::Invest,
            "show" => Command::Show,
            "stats" => Command::Stats,
            "cart" => Command::Cart,
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{}'", other),
        };
        if parts.next().is_some() {
            bail!("too many arguments for '{}'", name);
        }
        Ok(command)
    }
}

/// Runs one command. Returns `false` when the session should end.
pub async fn execute(state: &AppState, command: Command) -> anyhow::Result<bool> {
    let service = &state.swipe_service;
    let outcome = match command {
        Command::Drag { dx, dy, velocity } => {
            let origin = Point::new(0.0, 0.0);
            if !service.start_drag(origin) {
                println!("Input is not accepted right now.");
                return Ok(true);
            }
            let release = Point::new(dx, dy);
            service.move_drag(release);
            service.end_drag(release, velocity).await?
        }
        Command::Pass => service.pass(),
        Command::Add => service.open_cart_selection(),
        Command::Pick(index) => service.select_cart_preset(index)?,
        Command::Amount(amount) => service.select_cart_amount(amount)?,
        Command::Cancel => service.cancel_cart_selection(),
        Command::Quick => service.quick_add_to_cart()?,
        Command::Invest => service.instant_invest().await?,
        Command::Show => {
            show_current(state);
            return Ok(true);
        }
        Command::Stats => {
            let stats = service.stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(true);
        }
        Command::Cart => {
            show_cart(state);
            return Ok(true);
        }
        Command::Refresh => {
            let count = load_deck(state).await?;
            println!("Loaded {} opportunities.", count);
            show_current(state);
            return Ok(true);
        }
        Command::Help => {
            println!("{}", HELP);
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    };

    println!("{}", describe_outcome(&outcome));
    if outcome.advanced_deck() {
        show_current(state);
    }
    Ok(true)
}

pub fn describe_outcome(outcome: &SwipeOutcome) -> String {
    match outcome {
        SwipeOutcome::Reset => "Card snapped back.".to_string(),
        SwipeOutcome::Passed { opportunity_id } => format!("Passed on {}.", opportunity_id),
        SwipeOutcome::CartSelectionOpened { presets, .. } => {
            let choices: Vec<String> = presets
                .iter()
                .enumerate()
                .map(|(i, amount)| format!("{}) {}", i + 1, amount))
                .collect();
            format!(
                "Choose an amount: {}  (pick N | amount X | cancel)",
                choices.join("  ")
            )
        }
        SwipeOutcome::CartSelectionCancelled { .. } => "Selection cancelled.".to_string(),
        SwipeOutcome::AddedToCart { item, .. } => format!(
            "Added {} {} for {} to the cart.",
            item.amount, item.currency, item.target_name
        ),
        SwipeOutcome::Invest(InvestOutcome::Pending { opportunity_id }) => {
            format!("An investment in {} is already in flight.", opportunity_id)
        }
        SwipeOutcome::Invest(InvestOutcome::Success {
            amount, receipt, ..
        }) => format!("Invested {} (receipt {}, {}).", amount, receipt.id, receipt.status),
        SwipeOutcome::Invest(InvestOutcome::Failure { reason, .. }) => {
            format!("Investment failed: {}", reason)
        }
        SwipeOutcome::Rejected(reason) => format!("Rejected: {}", reason),
        SwipeOutcome::Ignored(reason) => format!("Ignored: {}", reason),
    }
}

fn describe_card(opportunity: &Opportunity) -> String {
    let mut lines = vec![
        format!(
            "{} [{}] {}",
            opportunity.opportunity_type.label(),
            opportunity.category,
            opportunity.title
        ),
        format!(
            "  raised {} of {} ({:.0}%)",
            opportunity.funding_raised,
            opportunity.funding_goal,
            opportunity.funding_progress()
        ),
    ];
    if let Some(deadline) = opportunity.deadline {
        lines.push(format!("  deadline {}", deadline));
    }
    if !opportunity.description.is_empty() {
        lines.push(format!("  {}", opportunity.description));
    }
    lines.join("\n")
}

fn show_current(state: &AppState) {
    let service = &state.swipe_service;
    let cursor = service.cursor();
    match service.current_opportunity() {
        Some(opportunity) => println!(
            "Card {}/{}: {}\n  quick amount {}",
            cursor.current_index + 1,
            cursor.length,
            describe_card(&opportunity),
            service.quick_amount()
        ),
        None => println!("No more cards. Use 'refresh' to reload."),
    }
}

fn show_cart(state: &AppState) {
    if state.cart.is_empty() {
        println!("Cart is empty.");
        return;
    }
    for item in swipefund_core::cart::CartStoreTrait::items(state.cart.as_ref()) {
        println!("  {} {} -> {}", item.amount, item.currency, item.target_name);
    }
    for (currency, total) in state.cart.totals_by_currency() {
        println!("Total {}: {}", currency, total);
    }
}

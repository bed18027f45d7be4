//! Terminal notice surface and domain event logging.

use swipefund_core::events::{DomainEvent, DomainEventSink};
use swipefund_core::notices::{Notice, NoticeLevel, NoticeSink};

/// Prints notices to stdout, one line each.
pub struct TerminalNoticeSink;

impl NoticeSink for TerminalNoticeSink {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = ?notice.level, "notice: {}", notice.title);
        println!("{}", render_notice(&notice));
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "+",
        NoticeLevel::Warning => "!",
        NoticeLevel::Error => "x",
    };
    format!("[{}] {}: {}", marker, notice.title, notice.message)
}

/// Logs domain events. The terminal has no listeners to refresh.
pub struct LoggingDomainEventSink;

impl DomainEventSink for LoggingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::InvestmentsChanged {
                opportunity_ids,
                investment_ids,
            } => tracing::info!(
                "Investments changed: opportunities={:?} investments={:?}",
                opportunity_ids,
                investment_ids
            ),
            DomainEvent::CartChanged { item_ids } => {
                tracing::info!("Cart changed: items={:?}", item_ids)
            }
        }
    }
}

//! Notice sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::Notice;

/// Receives user-visible notices from the swipe engine.
///
/// `notify()` must be fast and non-blocking; rendering is the host's job.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Discards all notices.
#[derive(Clone, Default)]
pub struct NoOpNoticeSink;

impl NoticeSink for NoOpNoticeSink {
    fn notify(&self, _notice: Notice) {}
}

/// Mock sink for testing - collects notices.
#[derive(Clone, Default)]
pub struct MockNoticeSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MockNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Most recent notice, if any.
    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}

impl NoticeSink for MockNoticeSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::NoticeLevel;

    #[test]
    fn test_mock_sink_collects_notices() {
        let sink = MockNoticeSink::new();
        assert!(sink.is_empty());

        sink.notify(Notice::passed("Ocean DAO"));
        sink.notify(Notice::wallet_required());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last().unwrap().level, NoticeLevel::Warning);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failure_notice_mentions_retry() {
        let notice = Notice::investment_failed("Ocean DAO", "timeout");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("timeout"));
        assert!(notice.message.contains("try again"));
    }
}

//! Scroll targets and the scrollable list seam
//!
//! The sectioned list is virtualized: rows far from the viewport have only an
//! estimated size, so scrolling to them can fail until they are measured.
//! [`ScrollRetry`] owns the single delayed retry used to recover from that.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Position in the sectioned list
///
/// `item_index` 0 is the section header, `n >= 1` is the `(n - 1)`-th use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScrollTarget {
    /// Section index
    pub section_index: usize,
    /// Row within the section (0 = header)
    pub item_index: usize,
}

impl ScrollTarget {
    /// Create a target
    pub fn new(section_index: usize, item_index: usize) -> Self {
        Self {
            section_index,
            item_index,
        }
    }

    /// Target the header of a section
    pub fn section(section_index: usize) -> Self {
        Self::new(section_index, 0)
    }

    /// Build a target from signed indices, as produced by lookups that use -1 for "not found"
    pub fn from_signed(section_index: i64, item_index: i64) -> Option<Self> {
        Some(Self {
            section_index: usize::try_from(section_index).ok()?,
            item_index: usize::try_from(item_index).ok()?,
        })
    }

    /// Whether this targets a section header
    pub fn is_header(&self) -> bool {
        self.item_index == 0
    }
}

/// Report from the list when a scroll target has not been measured yet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollFailureInfo {
    /// Index the list tried to reach
    pub index: usize,
    /// Highest frame index with a measured layout
    pub highest_measured_frame_index: usize,
    /// Average measured row length
    pub average_item_length: f32,
}

/// Outcome of handling a scroll failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRecovery {
    /// Scrolled to the end and scheduled one retry
    RetryScheduled,
    /// The retry already ran and failed again; nothing more is attempted
    GaveUp,
}

/// Scrollable, sectioned list
#[cfg_attr(test, mockall::automock)]
pub trait ScrollableList: Send + Sync {
    /// Scroll to a location; failures are reported asynchronously
    fn scroll_to(&self, target: ScrollTarget, animated: bool);

    /// Scroll to the end of the currently measured content
    fn scroll_to_end(&self);
}

/// Pending scroll retry
///
/// Dropping the guard cancels the timer if it has not fired yet.
#[derive(Debug)]
pub struct ScrollRetry {
    target: ScrollTarget,
    fired: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl ScrollRetry {
    /// Schedule `list.scroll_to(target, true)` after `delay`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(list: Arc<dyn ScrollableList>, target: ScrollTarget, delay: Duration) -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let task_fired = Arc::clone(&fired);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task_fired.store(true, Ordering::SeqCst);
            tracing::debug!(
                section = target.section_index,
                item = target.item_index,
                "retrying scroll"
            );
            list.scroll_to(target, true);
        });

        Self {
            target,
            fired,
            handle,
        }
    }

    /// Target the retry scrolls to
    pub fn target(&self) -> ScrollTarget {
        self.target
    }

    /// Whether the retry scroll has been issued
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Cancel the retry if it is still pending
    pub fn cancel(self) {
        if !self.has_fired() {
            tracing::debug!(
                section = self.target.section_index,
                item = self.target.item_index,
                "scroll retry cancelled"
            );
        }
        self.handle.abort();
    }
}

impl Drop for ScrollRetry {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_from_signed_rejects_negative() {
        assert_eq!(ScrollTarget::from_signed(-1, 0), None);
        assert_eq!(ScrollTarget::from_signed(0, -1), None);
        assert_eq!(ScrollTarget::from_signed(2, 3), Some(ScrollTarget::new(2, 3)));
    }

    #[test]
    fn test_header_target() {
        assert!(ScrollTarget::section(4).is_header());
        assert!(!ScrollTarget::new(4, 1).is_header());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_fires_after_delay() {
        let mut list = MockScrollableList::new();
        list.expect_scroll_to()
            .with(eq(ScrollTarget::new(0, 5)), eq(true))
            .times(1)
            .return_const(());

        let retry = ScrollRetry::schedule(
            Arc::new(list),
            ScrollTarget::new(0, 5),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(49)).await;
        assert!(!retry.has_fired());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(retry.has_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_retry_never_fires() {
        let mut list = MockScrollableList::new();
        list.expect_scroll_to().never();

        let retry = ScrollRetry::schedule(
            Arc::new(list),
            ScrollTarget::new(0, 1),
            Duration::from_millis(50),
        );
        retry.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_retry_never_fires() {
        let mut list = MockScrollableList::new();
        list.expect_scroll_to().never();

        let retry = ScrollRetry::schedule(
            Arc::new(list),
            ScrollTarget::new(0, 1),
            Duration::from_millis(50),
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(retry);

        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}

//! Drawer menu controller
//!
//! Coordinates the sliding menu panel, the progress value that drives the
//! menu icon morph and overlay, and scroll-to-section navigation in the
//! showroom list.
//!
//! # State machine
//!
//! ```text
//!            toggle / drag            settle(true)
//!   Closed ─────────────────▶ Opening ─────────────▶ Open
//!     ▲                                               │
//!     │      settle(false)            toggle / drag   │
//!     └──────────────────── Closing ◀─────────────────┘
//! ```
//!
//! `open` flips immediately on [`toggle`](DrawerMenuController::toggle) and
//! is otherwise only changed by [`on_settle`](DrawerMenuController::on_settle).
//! Drag frames only move `progress`.

use crate::animation::{AnimationDriver, AnimationProgress, Transition};
use crate::catalog::SectionCatalog;
use crate::scroll::{ScrollFailureInfo, ScrollRecovery, ScrollRetry, ScrollTarget, ScrollableList};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default drawer open/close speed ("fast")
pub const DEFAULT_TRANSITION_SPEED: f32 = 2.0;

/// Default duration of the progress animation after a settle
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Default delay before retrying a failed scroll
pub const DEFAULT_SCROLL_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Drawer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawerError {
    /// Target is outside the catalog
    #[error("Invalid scroll target: section {section_index}, item {item_index}")]
    InvalidTarget {
        /// Requested section
        section_index: i64,
        /// Requested item
        item_index: i64,
    },

    /// Configuration value out of range
    #[error("Invalid drawer configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for drawer operations
pub type Result<T> = std::result::Result<T, DrawerError>;

/// Drawer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerState {
    /// Fully closed (stable)
    #[default]
    Closed,
    /// Moving toward open
    Opening,
    /// Fully open (stable)
    Open,
    /// Moving toward closed
    Closing,
}

impl DrawerState {
    /// Whether this is a resting state
    pub fn is_stable(&self) -> bool {
        matches!(self, DrawerState::Closed | DrawerState::Open)
    }
}

/// Drawer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Speed passed to the panel when opening or closing
    pub transition_speed: f32,
    /// Duration of the timed progress animation after a settle, in milliseconds
    pub settle_duration_ms: u64,
    /// Delay before the single scroll retry, in milliseconds
    pub scroll_retry_delay_ms: u64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            transition_speed: DEFAULT_TRANSITION_SPEED,
            settle_duration_ms: DEFAULT_SETTLE_DURATION.as_millis() as u64,
            scroll_retry_delay_ms: DEFAULT_SCROLL_RETRY_DELAY.as_millis() as u64,
        }
    }
}

impl DrawerConfig {
    /// Set the panel transition speed
    pub fn transition_speed(mut self, speed: f32) -> Self {
        self.transition_speed = speed;
        self
    }

    /// Set the settle animation duration
    pub fn settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the scroll retry delay
    pub fn scroll_retry_delay(mut self, delay: Duration) -> Self {
        self.scroll_retry_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Settle animation duration
    pub fn settle_duration_value(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Scroll retry delay
    pub fn scroll_retry_delay_value(&self) -> Duration {
        Duration::from_millis(self.scroll_retry_delay_ms)
    }

    /// Check values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.transition_speed.is_finite() || self.transition_speed <= 0.0 {
            return Err(DrawerError::InvalidConfig(format!(
                "transition_speed must be a positive number, got {}",
                self.transition_speed
            )));
        }
        Ok(())
    }
}

/// The sliding panel itself
#[cfg_attr(test, mockall::automock)]
pub trait DrawerPanel: Send + Sync {
    /// Begin sliding the panel open
    fn open_drawer(&self, speed: f32);

    /// Begin sliding the panel closed
    fn close_drawer(&self, speed: f32);
}

/// Controller for the showroom drawer menu
pub struct DrawerMenuController {
    open: bool,
    state: DrawerState,
    progress: AnimationProgress,
    catalog: SectionCatalog,
    config: DrawerConfig,
    panel: Arc<dyn DrawerPanel>,
    list: Arc<dyn ScrollableList>,
    driver: Arc<dyn AnimationDriver>,
    retry: Option<ScrollRetry>,
}

impl DrawerMenuController {
    /// Create a closed controller
    pub fn new(
        catalog: SectionCatalog,
        config: DrawerConfig,
        panel: Arc<dyn DrawerPanel>,
        list: Arc<dyn ScrollableList>,
        driver: Arc<dyn AnimationDriver>,
    ) -> Result<Self> {
        config.validate()?;
        driver.set_value(0.0);

        Ok(Self {
            open: false,
            state: DrawerState::Closed,
            progress: AnimationProgress::CLOSED,
            catalog,
            config,
            panel,
            list,
            driver,
            retry: None,
        })
    }

    /// Whether the drawer is (or is becoming) open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current lifecycle state
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Progress last committed by the controller
    ///
    /// Drag frames are reflected exactly; after a toggle or settle this is
    /// the animation's destination while the driver renders the frames.
    pub fn progress(&self) -> AnimationProgress {
        self.progress
    }

    /// Progress currently rendered by the animation driver
    pub fn rendered_progress(&self) -> AnimationProgress {
        AnimationProgress::new(self.driver.value())
    }

    /// Catalog the controller validates targets against
    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    /// Active configuration
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Whether a scroll retry is waiting to fire
    pub fn has_pending_retry(&self) -> bool {
        self.retry.as_ref().is_some_and(|retry| !retry.has_fired())
    }

    /// Flip the drawer open or closed
    pub fn toggle(&mut self) {
        if self.open {
            self.request_close();
        } else {
            self.request_open();
        }
    }

    fn request_open(&mut self) {
        tracing::debug!(from = ?self.state, "opening drawer");
        self.open = true;
        self.state = DrawerState::Opening;
        self.panel.open_drawer(self.config.transition_speed);
        self.animate_progress(AnimationProgress::OPEN, Transition::Spring);
    }

    /// Close the drawer; a no-op transition when already closed
    fn request_close(&mut self) {
        let was_open = self.open;
        self.open = false;
        if was_open || self.state == DrawerState::Opening {
            tracing::debug!(from = ?self.state, "closing drawer");
            self.state = DrawerState::Closing;
        }
        self.panel.close_drawer(self.config.transition_speed);
        if was_open {
            self.animate_progress(AnimationProgress::CLOSED, Transition::Spring);
        }
    }

    /// The panel reached a resting position
    pub fn on_settle(&mut self, will_show: bool) {
        self.open = will_show;
        self.state = if will_show {
            DrawerState::Open
        } else {
            DrawerState::Closed
        };
        tracing::debug!(state = ?self.state, "drawer settled");

        let duration = self.config.settle_duration_value();
        self.animate_progress(AnimationProgress::from_open(will_show), Transition::Timed(duration));
    }

    /// A drag frame: `raw_progress` is the distance travelled from the gesture's start edge
    pub fn on_drag_progress(&mut self, raw_progress: f32) {
        let raw = AnimationProgress::new(raw_progress);
        self.progress = if self.open { raw.inverted() } else { raw };

        if self.state.is_stable() {
            self.state = if self.open {
                DrawerState::Closing
            } else {
                DrawerState::Opening
            };
        }

        self.driver.set_value(self.progress.value());
    }

    /// Scroll the list to a section (and use case) then close the drawer
    pub fn scroll_to_section(&mut self, section_index: usize, item_index: usize) -> Result<()> {
        self.scroll_to(ScrollTarget::new(section_index, item_index))
    }

    /// Scroll the list to `target` then close the drawer
    pub fn scroll_to(&mut self, target: ScrollTarget) -> Result<()> {
        if !self.catalog.contains(target.section_index, target.item_index) {
            tracing::warn!(
                section = target.section_index,
                item = target.item_index,
                "rejected scroll target outside the catalog"
            );
            return Err(DrawerError::InvalidTarget {
                section_index: i64::try_from(target.section_index).unwrap_or(i64::MAX),
                item_index: i64::try_from(target.item_index).unwrap_or(i64::MAX),
            });
        }

        // A fresh request supersedes any retry still in flight.
        self.retry = None;
        self.list.scroll_to(target, true);
        self.request_close();
        Ok(())
    }

    /// Scroll using signed indices, rejecting negatives as invalid targets
    pub fn scroll_to_signed(&mut self, section_index: i64, item_index: i64) -> Result<()> {
        let target = ScrollTarget::from_signed(section_index, item_index).ok_or(
            DrawerError::InvalidTarget {
                section_index,
                item_index,
            },
        )?;
        self.scroll_to(target)
    }

    /// Recover from a scroll to a row that has not been measured yet
    ///
    /// Scrolls to the end to force measurement, then retries once after the
    /// configured delay. This is a heuristic: the delay is not confirmed to be
    /// long enough, and a second failure is not retried.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn handle_scroll_failure(&mut self, info: ScrollFailureInfo) -> ScrollRecovery {
        if self.retry.as_ref().is_some_and(ScrollRetry::has_fired) {
            tracing::warn!(
                index = info.index,
                highest_measured = info.highest_measured_frame_index,
                "scroll retry failed again, giving up"
            );
            self.retry = None;
            return ScrollRecovery::GaveUp;
        }

        tracing::debug!(
            index = info.index,
            highest_measured = info.highest_measured_frame_index,
            average_item_length = info.average_item_length,
            "scroll target not measured, scrolling to end"
        );
        self.list.scroll_to_end();
        self.retry = Some(ScrollRetry::schedule(
            Arc::clone(&self.list),
            ScrollTarget::new(0, info.index),
            self.config.scroll_retry_delay_value(),
        ));
        ScrollRecovery::RetryScheduled
    }

    /// Release resources held by the controller (cancels a pending retry)
    pub fn teardown(&mut self) {
        if let Some(retry) = self.retry.take() {
            if !retry.has_fired() {
                tracing::debug!("cancelling pending scroll retry");
            }
        }
    }

    fn animate_progress(&mut self, target: AnimationProgress, transition: Transition) {
        self.progress = target;
        self.driver.animate_to(target.value(), transition);
    }
}

impl Drop for DrawerMenuController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for DrawerMenuController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerMenuController")
            .field("open", &self.open)
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("sections", &self.catalog.len())
            .field("pending_retry", &self.has_pending_retry())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{MockAnimationDriver, SharedProgress};
    use crate::catalog::Section;
    use crate::scroll::MockScrollableList;
    use mockall::predicate::{always, eq};
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Open(f32),
        Close(f32),
        ScrollTo(ScrollTarget, bool),
        ScrollToEnd,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Call>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }
    }

    impl DrawerPanel for Recorder {
        fn open_drawer(&self, speed: f32) {
            self.calls.lock().push(Call::Open(speed));
        }

        fn close_drawer(&self, speed: f32) {
            self.calls.lock().push(Call::Close(speed));
        }
    }

    impl ScrollableList for Recorder {
        fn scroll_to(&self, target: ScrollTarget, animated: bool) {
            self.calls.lock().push(Call::ScrollTo(target, animated));
        }

        fn scroll_to_end(&self) {
            self.calls.lock().push(Call::ScrollToEnd);
        }
    }

    fn catalog() -> SectionCatalog {
        SectionCatalog::new([
            Section::new("A", "").with_use_case("a1").with_use_case("a2"),
            Section::new("B", "").with_use_case("b1"),
            Section::new("C", "")
                .with_use_case("c1")
                .with_use_case("c2")
                .with_use_case("c3"),
        ])
    }

    fn controller() -> (DrawerMenuController, Arc<Recorder>, Arc<SharedProgress>) {
        let recorder = Arc::new(Recorder::default());
        let driver = Arc::new(SharedProgress::new());
        let controller = DrawerMenuController::new(
            catalog(),
            DrawerConfig::default(),
            recorder.clone(),
            recorder.clone(),
            driver.clone(),
        )
        .unwrap();
        (controller, recorder, driver)
    }

    #[test]
    fn test_starts_closed() {
        let (controller, recorder, _) = controller();
        assert!(!controller.is_open());
        assert_eq!(controller.state(), DrawerState::Closed);
        assert_eq!(controller.progress(), AnimationProgress::CLOSED);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_toggle_open_then_closed_with_settles() {
        let (mut controller, recorder, _) = controller();

        controller.toggle();
        assert!(controller.is_open());
        assert_eq!(controller.state(), DrawerState::Opening);
        controller.on_settle(true);
        assert_eq!(controller.state(), DrawerState::Open);

        controller.toggle();
        assert!(!controller.is_open());
        assert_eq!(controller.state(), DrawerState::Closing);
        controller.on_settle(false);
        assert_eq!(controller.state(), DrawerState::Closed);

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Open(DEFAULT_TRANSITION_SPEED),
                Call::Close(DEFAULT_TRANSITION_SPEED)
            ]
        );
    }

    #[test]
    fn test_toggle_springs_progress() {
        let (mut controller, _, driver) = controller();
        controller.toggle();
        assert_eq!(driver.last_target(), Some((1.0, Transition::Spring)));
        assert_eq!(controller.progress(), AnimationProgress::OPEN);
    }

    #[test]
    fn test_settle_uses_timed_transition() {
        let mut driver = MockAnimationDriver::new();
        driver.expect_set_value().with(eq(0.0)).return_const(());
        driver
            .expect_animate_to()
            .with(eq(1.0), eq(Transition::Timed(Duration::from_millis(250))))
            .times(1)
            .return_const(());

        let recorder = Arc::new(Recorder::default());
        let mut controller = DrawerMenuController::new(
            catalog(),
            DrawerConfig::default(),
            recorder.clone(),
            recorder,
            Arc::new(driver),
        )
        .unwrap();

        controller.on_settle(true);
        assert!(controller.is_open());
        assert_eq!(controller.progress(), AnimationProgress::OPEN);
    }

    #[test]
    fn test_drag_progress_follows_open_state() {
        let (mut controller, _, driver) = controller();

        for x in [0.0, 0.1, 0.5, 0.9, 1.0] {
            controller.on_drag_progress(x);
            assert_eq!(controller.progress().value(), x);
            assert_eq!(driver.value(), x);
        }

        controller.on_settle(true);
        for x in [0.0, 0.25, 0.75, 1.0] {
            controller.on_drag_progress(x);
            assert_eq!(controller.progress().value(), 1.0 - x);
        }
    }

    #[test]
    fn test_drag_progress_stays_in_bounds() {
        let (mut controller, _, _) = controller();
        for x in [-3.0, 2.0, f32::NAN, f32::INFINITY] {
            controller.on_drag_progress(x);
            let p = controller.progress().value();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_drag_never_changes_open() {
        let (mut controller, _, _) = controller();
        controller.on_drag_progress(0.9);
        assert!(!controller.is_open());
        assert_eq!(controller.state(), DrawerState::Opening);

        controller.on_settle(true);
        controller.on_drag_progress(0.8);
        assert!(controller.is_open());
        assert_eq!(controller.state(), DrawerState::Closing);

        controller.on_settle(false);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_scroll_to_section_scrolls_then_closes() {
        let (mut controller, recorder, driver) = controller();
        controller.toggle();
        controller.on_settle(true);

        controller.scroll_to_section(1, 1).unwrap();

        assert!(!controller.is_open());
        assert_eq!(controller.state(), DrawerState::Closing);
        assert_eq!(controller.progress(), AnimationProgress::CLOSED);
        assert_eq!(driver.last_target(), Some((0.0, Transition::Spring)));
        assert_eq!(
            recorder.calls()[1..],
            [
                Call::ScrollTo(ScrollTarget::new(1, 1), true),
                Call::Close(DEFAULT_TRANSITION_SPEED)
            ]
        );
    }

    #[test]
    fn test_scroll_while_closed_is_noop_close() {
        let (mut controller, recorder, _) = controller();

        controller.scroll_to_section(2, 0).unwrap();

        assert!(!controller.is_open());
        assert_eq!(controller.state(), DrawerState::Closed);
        assert_eq!(controller.progress(), AnimationProgress::CLOSED);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::ScrollTo(ScrollTarget::new(2, 0), true),
                Call::Close(DEFAULT_TRANSITION_SPEED)
            ]
        );
    }

    #[test]
    fn test_invalid_target_has_no_effect() {
        let mut list = MockScrollableList::new();
        list.expect_scroll_to().never();
        list.expect_scroll_to_end().never();
        let mut panel = MockDrawerPanel::new();
        panel.expect_open_drawer().with(always()).times(1).return_const(());
        panel.expect_close_drawer().never();

        let driver = Arc::new(SharedProgress::new());
        let mut controller = DrawerMenuController::new(
            catalog(),
            DrawerConfig::default(),
            Arc::new(panel),
            Arc::new(list),
            driver,
        )
        .unwrap();
        controller.toggle();
        controller.on_drag_progress(0.3);
        let before = (controller.is_open(), controller.progress(), controller.state());

        assert_eq!(
            controller.scroll_to_signed(-1, 0),
            Err(DrawerError::InvalidTarget {
                section_index: -1,
                item_index: 0
            })
        );
        assert!(controller.scroll_to_section(3, 0).is_err());
        assert!(controller.scroll_to_section(1, 2).is_err());

        assert_eq!(
            (controller.is_open(), controller.progress(), controller.state()),
            before
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let recorder = Arc::new(Recorder::default());
        let result = DrawerMenuController::new(
            catalog(),
            DrawerConfig::default().transition_speed(0.0),
            recorder.clone(),
            recorder,
            Arc::new(SharedProgress::new()),
        );
        assert!(matches!(result, Err(DrawerError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: DrawerConfig = serde_json::from_str(r#"{"transition_speed": 1.5}"#).unwrap();
        assert_eq!(config.transition_speed, 1.5);
        assert_eq!(config.settle_duration_value(), DEFAULT_SETTLE_DURATION);
        assert_eq!(config.scroll_retry_delay_value(), DEFAULT_SCROLL_RETRY_DELAY);
    }

    fn failure(index: usize) -> ScrollFailureInfo {
        ScrollFailureInfo {
            index,
            highest_measured_frame_index: 2,
            average_item_length: 40.0,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_failure_retries_exactly_once() {
        let (mut controller, recorder, _) = controller();

        assert_eq!(
            controller.handle_scroll_failure(failure(5)),
            ScrollRecovery::RetryScheduled
        );
        assert_eq!(recorder.calls(), vec![Call::ScrollToEnd]);
        assert!(controller.has_pending_retry());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            recorder.calls(),
            vec![
                Call::ScrollToEnd,
                Call::ScrollTo(ScrollTarget::new(0, 5), true)
            ]
        );
        assert!(!controller.has_pending_retry());

        assert_eq!(
            controller.handle_scroll_failure(failure(5)),
            ScrollRecovery::GaveUp
        );
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(recorder.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_retry() {
        let (mut controller, recorder, _) = controller();
        controller.handle_scroll_failure(failure(3));
        drop(controller);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(recorder.calls(), vec![Call::ScrollToEnd]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_scroll_supersedes_pending_retry() {
        let (mut controller, recorder, _) = controller();
        controller.handle_scroll_failure(failure(4));
        controller.scroll_to_section(0, 1).unwrap();
        assert!(!controller.has_pending_retry());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!recorder
            .calls()
            .contains(&Call::ScrollTo(ScrollTarget::new(0, 4), true)));
    }
}

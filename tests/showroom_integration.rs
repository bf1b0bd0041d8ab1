//! End-to-end tests of the assembled showroom

use parking_lot::Mutex;
use showroom::{
    AppError, Collaborators, Demo, DemoTab, DrawerConfig, DrawerPanel, DrawerState, Route,
    ScrollFailureInfo, ScrollRecovery, ScrollTarget, ScrollableList, SharedProgress, ShowroomApp,
    ShowroomConfig, ShowroomError,
};
use app_ui::{DemoUseCase, MenuAction, Platform};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Open,
    Close,
    Scroll(ScrollTarget),
    ScrollToEnd,
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl DrawerPanel for Recorder {
    fn open_drawer(&self, _speed: f32) {
        self.calls.lock().push(Call::Open);
    }

    fn close_drawer(&self, _speed: f32) {
        self.calls.lock().push(Call::Close);
    }
}

impl ScrollableList for Recorder {
    fn scroll_to(&self, target: ScrollTarget, _animated: bool) {
        self.calls.lock().push(Call::Scroll(target));
    }

    fn scroll_to_end(&self) {
        self.calls.lock().push(Call::ScrollToEnd);
    }
}

fn demo(name: &str, use_cases: usize) -> Demo {
    Demo {
        name: name.to_string(),
        description: String::new(),
        use_cases: (1..=use_cases)
            .map(|i| DemoUseCase::new(format!("{name} case {i}"), ""))
            .collect(),
    }
}

fn app_with(config: ShowroomConfig, demos: Vec<Demo>) -> (ShowroomApp, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let app = ShowroomApp::with_demos(
        config,
        demos,
        Collaborators {
            panel: recorder.clone(),
            list: recorder.clone(),
            driver: Arc::new(SharedProgress::new()),
        },
    )
    .unwrap();
    (app, recorder)
}

fn abc() -> Vec<Demo> {
    vec![demo("A", 2), demo("B", 1), demo("C", 3)]
}

#[tokio::test]
async fn test_menu_pick_scrolls_then_closes() {
    let (mut app, recorder) = app_with(ShowroomConfig::default(), abc());

    app.screen_mut().press_menu_button();
    app.screen_mut().controller_mut().on_settle(true);
    assert!(app.screen().controller().is_open());
    recorder.take();

    app.screen_mut()
        .controller_mut()
        .scroll_to_section(1, 1)
        .unwrap();

    assert_eq!(
        recorder.take(),
        vec![Call::Scroll(ScrollTarget::new(1, 1)), Call::Close]
    );
    assert!(!app.screen().controller().is_open());
    assert_eq!(app.screen().controller().state(), DrawerState::Closing);
    assert_eq!(app.screen().controller().progress().value(), 0.0);

    app.screen_mut().controller_mut().on_settle(false);
    assert_eq!(app.screen().controller().state(), DrawerState::Closed);
}

#[tokio::test]
async fn test_out_of_range_pick_is_rejected() {
    let (mut app, recorder) = app_with(ShowroomConfig::default(), abc());

    assert!(app.screen_mut().controller_mut().scroll_to_section(1, 2).is_err());
    assert!(app.screen_mut().controller_mut().scroll_to_section(3, 0).is_err());
    assert!(app.screen_mut().controller_mut().scroll_to_signed(-1, 0).is_err());
    assert!(recorder.take().is_empty());
}

#[tokio::test]
async fn test_native_menu_covers_catalog() {
    let (app, _) = app_with(ShowroomConfig::default(), abc());
    let menu = app.screen().menu();

    let targets: Vec<ScrollTarget> = menu
        .iter()
        .flat_map(|section| std::iter::once(&section.header).chain(&section.items))
        .filter_map(|entry| match entry.action {
            MenuAction::ScrollTo(target) => Some(target),
            MenuAction::Link(_) => None,
        })
        .collect();

    assert_eq!(targets.len(), 9);
    assert!(targets
        .iter()
        .all(|t| app.screen().catalog().contains(t.section_index, t.item_index)));
}

#[tokio::test(start_paused = true)]
async fn test_scroll_failure_retries_once() {
    let (mut app, recorder) = app_with(ShowroomConfig::default(), abc());

    let recovery = app.screen_mut().on_scroll_failure(ScrollFailureInfo {
        index: 5,
        highest_measured_frame_index: 2,
        average_item_length: 80.0,
    });
    assert_eq!(recovery, ScrollRecovery::RetryScheduled);
    assert_eq!(recorder.take(), vec![Call::ScrollToEnd]);

    tokio::time::sleep(Duration::from_millis(49)).await;
    assert!(recorder.take().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(recorder.take(), vec![Call::Scroll(ScrollTarget::new(0, 5))]);

    let again = app.screen_mut().on_scroll_failure(ScrollFailureInfo {
        index: 5,
        highest_measured_frame_index: 2,
        average_item_length: 80.0,
    });
    assert_eq!(again, ScrollRecovery::GaveUp);
    assert!(recorder.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_app_cancels_retry() {
    let (mut app, recorder) = app_with(ShowroomConfig::default(), abc());
    app.screen_mut().on_scroll_failure(ScrollFailureInfo {
        index: 1,
        highest_measured_frame_index: 0,
        average_item_length: 80.0,
    });
    drop(app);
    recorder.take();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(recorder.take().is_empty());
}

#[tokio::test]
async fn test_deep_links() {
    let config = ShowroomConfig::default().platform(Platform::Web);
    let (mut app, recorder) = app_with(config, abc());
    app.switch_tab(DemoTab::Community);

    let route = app.open_url("/showroom/c/c-case-2").unwrap();
    assert_eq!(
        route,
        Route::Showroom {
            query_index: Some("c".to_string()),
            item_index: Some("c-case-2".to_string()),
        }
    );
    assert_eq!(app.tabs().active_tab, DemoTab::Showroom);
    assert_eq!(
        recorder.take(),
        vec![Call::Scroll(ScrollTarget::new(2, 2)), Call::Close]
    );

    app.open_url("/showroom/b/missing").unwrap();
    assert_eq!(
        recorder.take(),
        vec![Call::Scroll(ScrollTarget::new(1, 0)), Call::Close]
    );

    let err = app.open_url("/showroom/z").unwrap_err();
    assert!(matches!(
        err,
        AppError::Showroom(ShowroomError::UnknownSection(_))
    ));
    assert!(recorder.take().is_empty());
}

#[tokio::test]
async fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "platform": "android",
            "layout_direction": "rtl",
            "safe_area_bottom": 20,
            "drawer": {{ "transition_speed": 3.5 }},
            "log_filter": "showroom=debug"
        }}"#
    )
    .unwrap();

    let config = ShowroomConfig::load(file.path()).await.unwrap();
    assert_eq!(config.platform, Platform::Android);
    assert_eq!(config.drawer, DrawerConfig::default().transition_speed(3.5));
    assert_eq!(config.log_filter, "showroom=debug");

    let (app, _) = app_with(config, abc());
    assert_eq!(app.tab_bar().height, 90.0);
}

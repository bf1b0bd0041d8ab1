use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showroom::{
    Collaborators, DrawerPanel, ScrollFailureInfo, ScrollTarget, ScrollableList, SharedProgress,
    ShowroomApp, ShowroomConfig,
};

#[derive(Parser)]
#[command(name = "showroom")]
#[command(author, version, about = "Headless run of the component showroom")]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URLs to open after the scripted menu session
    urls: Vec<String>,
}

/// Panel that only reports what it was asked to do
struct LoggingPanel;

impl DrawerPanel for LoggingPanel {
    fn open_drawer(&self, speed: f32) {
        tracing::info!(speed, "panel: open");
    }

    fn close_drawer(&self, speed: f32) {
        tracing::info!(speed, "panel: close");
    }
}

/// List that only reports what it was asked to do
struct LoggingList;

impl ScrollableList for LoggingList {
    fn scroll_to(&self, target: ScrollTarget, animated: bool) {
        tracing::info!(
            section = target.section_index,
            item = target.item_index,
            animated,
            "list: scroll"
        );
    }

    fn scroll_to_end(&self) {
        tracing::info!("list: scroll to end");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShowroomConfig::load(path).await?,
        None => ShowroomConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let driver = Arc::new(SharedProgress::new());
    let retry_delay = config.drawer.scroll_retry_delay_value();
    let mut app = ShowroomApp::new(
        config,
        Collaborators {
            panel: Arc::new(LoggingPanel),
            list: Arc::new(LoggingList),
            driver: driver.clone(),
        },
    )?;

    // Walk every menu entry the way a user would: open, settle, pick
    for section in app.screen().menu() {
        for entry in std::iter::once(&section.header).chain(&section.items) {
            app.screen_mut().press_menu_button();
            app.screen_mut().controller_mut().on_settle(true);
            driver.finish();

            app.screen_mut().press_entry(entry)?;
            app.screen_mut().controller_mut().on_settle(false);
            driver.finish();
        }
    }

    // A row past the measured frames triggers the single delayed retry
    let recovery = app.screen_mut().on_scroll_failure(ScrollFailureInfo {
        index: 3,
        highest_measured_frame_index: 1,
        average_item_length: 120.0,
    });
    tracing::info!(?recovery, "scroll failure handled");
    tokio::time::sleep(retry_delay + Duration::from_millis(10)).await;

    for url in &cli.urls {
        match app.open_url(url) {
            Ok(route) => tracing::info!(url, ?route, "route"),
            Err(e) => tracing::warn!(url, error = %e, "could not open url"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&app.tab_bar())?);
    Ok(())
}

//! Showroom
//!
//! Demo app shell: a tab navigator hosting a component showroom whose drawer
//! menu lists every demo section and use case.
//!
//! - [`config`] - JSON configuration
//! - [`ShowroomApp`] - wires the navigator, router and showroom screen together
//!
//! The UI host supplies the drawer panel, the scrollable list and the
//! animation driver as [`Collaborators`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

pub use app_state::{
    AnimationDriver, DrawerConfig, DrawerPanel, DrawerState, ScrollFailureInfo, ScrollRecovery,
    ScrollTarget, ScrollableList, SharedProgress,
};
pub use app_ui::{
    Collaborators, Demo, DemoTab, Route, ShowroomError, ShowroomScreen, TabBarLayout,
};
pub use config::{ConfigError, ShowroomConfig};

use app_ui::{demos, Router, TabNavigator};
use thiserror::Error;

/// App errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Showroom screen rejected a request
    #[error(transparent)]
    Showroom(#[from] ShowroomError),
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;

/// The assembled app
pub struct ShowroomApp {
    config: ShowroomConfig,
    tabs: TabNavigator,
    router: Router,
    screen: ShowroomScreen,
}

impl ShowroomApp {
    /// Build the app with the bundled demos
    pub fn new(config: ShowroomConfig, collaborators: Collaborators) -> Result<Self> {
        Self::with_demos(config, demos::all(), collaborators)
    }

    /// Build the app with custom demos
    pub fn with_demos(
        config: ShowroomConfig,
        demos: Vec<Demo>,
        collaborators: Collaborators,
    ) -> Result<Self> {
        config.validate()?;
        let screen = ShowroomScreen::new(
            demos,
            config.screen_options(),
            config.drawer.clone(),
            collaborators,
        )?;

        Ok(Self {
            config,
            tabs: TabNavigator::new(),
            router: Router::new(),
            screen,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ShowroomConfig {
        &self.config
    }

    /// Tab navigator
    pub fn tabs(&self) -> &TabNavigator {
        &self.tabs
    }

    /// Showroom screen
    pub fn screen(&self) -> &ShowroomScreen {
        &self.screen
    }

    /// Showroom screen, for forwarding host events
    pub fn screen_mut(&mut self) -> &mut ShowroomScreen {
        &mut self.screen
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: DemoTab) {
        self.tabs.switch_tab(tab);
    }

    /// Tab bar for the current state
    pub fn tab_bar(&self) -> TabBarLayout {
        self.tabs.tab_bar(self.config.safe_area_bottom)
    }

    /// Open a URL: switch to its tab and hand showroom params to the screen
    ///
    /// Unknown paths resolve to [`Route::NotFound`], and rejected showroom
    /// params return an error; either way the tabs stay as they were.
    pub fn open_url(&mut self, url: &str) -> Result<Route> {
        let route = self.router.match_path(url);

        if route.tab().is_none() {
            tracing::warn!(url, "no screen for url");
            return Ok(route);
        }

        if matches!(route, Route::Showroom { .. }) {
            self.screen.handle_route(&route)?;
        }
        self.tabs.navigate(route.clone());

        tracing::info!(url, tab = ?self.tabs.active_tab, "opened url");
        Ok(route)
    }
}

impl std::fmt::Debug for ShowroomApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowroomApp")
            .field("config", &self.config)
            .field("tabs", &self.tabs)
            .field("screen", &self.screen)
            .finish()
    }
}

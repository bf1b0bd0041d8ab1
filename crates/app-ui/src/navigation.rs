//! Navigation for the demo tabs
//!
//! This module provides:
//! - Route definitions with deep linking support
//! - The bottom tab set and its tab bar layout
//! - A URL router for web links into the showroom
//! - Tab navigation state

use crate::tokens::{colors, tab_bar};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All routes reachable from the demo tabs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Component showroom, optionally deep linked to a section and use case
    Showroom {
        /// Lowercased section name
        #[serde(skip_serializing_if = "Option::is_none")]
        query_index: Option<String>,
        /// Slug of a use case within the section
        #[serde(skip_serializing_if = "Option::is_none")]
        item_index: Option<String>,
    },
    /// Community links
    Community,
    /// Podcast list
    PodcastList,
    /// Debug tools
    Debug,
    /// Unknown path
    NotFound,
}

impl Route {
    /// Showroom route without a deep link
    pub fn showroom() -> Self {
        Route::Showroom {
            query_index: None,
            item_index: None,
        }
    }

    /// Convert route to URL path
    pub fn to_path(&self) -> String {
        match self {
            Route::Showroom {
                query_index,
                item_index,
            } => {
                let mut path = "/showroom".to_string();
                if let Some(section) = query_index {
                    path.push('/');
                    path.push_str(&urlencoding::encode(section));
                    if let Some(item) = item_index {
                        path.push('/');
                        path.push_str(&urlencoding::encode(item));
                    }
                }
                path
            }
            Route::Community => "/community".to_string(),
            Route::PodcastList => "/podcasts".to_string(),
            Route::Debug => "/debug".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Showroom { .. } => "Components",
            Route::Community => "Community",
            Route::PodcastList => "Podcast",
            Route::Debug => "Debug",
            Route::NotFound => "Not Found",
        }
    }

    /// Tab that hosts this route
    pub fn tab(&self) -> Option<DemoTab> {
        match self {
            Route::Showroom { .. } => Some(DemoTab::Showroom),
            Route::Community => Some(DemoTab::Community),
            Route::PodcastList => Some(DemoTab::PodcastList),
            Route::Debug => Some(DemoTab::Debug),
            Route::NotFound => None,
        }
    }
}

// =============================================================================
// Demo Tabs
// =============================================================================

/// Bottom tabs of the demo navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DemoTab {
    /// Component showroom
    #[default]
    Showroom,
    /// Community
    Community,
    /// Podcast list
    PodcastList,
    /// Debug
    Debug,
}

impl DemoTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            DemoTab::Showroom => Route::showroom(),
            DemoTab::Community => Route::Community,
            DemoTab::PodcastList => Route::PodcastList,
            DemoTab::Debug => Route::Debug,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            DemoTab::Showroom => "components",
            DemoTab::Community => "community",
            DemoTab::PodcastList => "podcast",
            DemoTab::Debug => "debug",
        }
    }

    /// Translation key of the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            DemoTab::Showroom => "demoNavigator.componentsTab",
            DemoTab::Community => "demoNavigator.communityTab",
            DemoTab::PodcastList => "demoNavigator.podcastListTab",
            DemoTab::Debug => "demoNavigator.debugTab",
        }
    }

    /// English label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            DemoTab::Showroom => "Components",
            DemoTab::Community => "Community",
            DemoTab::PodcastList => "Podcast",
            DemoTab::Debug => "Debug",
        }
    }

    /// Whether the tab button carries an accessibility label of its own
    pub fn has_accessibility_label(&self) -> bool {
        matches!(self, DemoTab::PodcastList)
    }

    /// Get all tabs in order
    pub fn all() -> [DemoTab; 4] {
        [
            DemoTab::Showroom,
            DemoTab::Community,
            DemoTab::PodcastList,
            DemoTab::Debug,
        ]
    }
}

/// Visual description of one tab bar button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabButton {
    /// Tab
    pub tab: DemoTab,
    /// Icon name
    pub icon: &'static str,
    /// Label translation key
    pub label_key: &'static str,
    /// Icon tint
    pub icon_color: Option<&'static str>,
    /// Label color
    pub label_color: &'static str,
    /// Shadow opacity (raised when focused)
    pub shadow_opacity: f32,
}

/// Computed tab bar layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabBarLayout {
    /// Total bar height including the bottom inset
    pub height: f32,
    /// Buttons in display order
    pub buttons: Vec<TabButton>,
    /// Whether the bar hides while the keyboard is up
    pub hide_on_keyboard: bool,
}

impl TabBarLayout {
    /// Lay out the tab bar for the active tab and bottom safe-area inset
    pub fn new(active: DemoTab, safe_area_bottom: f32) -> Self {
        let buttons = DemoTab::all()
            .into_iter()
            .map(|tab| {
                let focused = tab == active;
                TabButton {
                    tab,
                    icon: tab.icon(),
                    label_key: tab.label_key(),
                    icon_color: focused.then_some(colors::TINT),
                    label_color: if focused { colors::TINT } else { colors::TEXT },
                    shadow_opacity: if focused {
                        tab_bar::FOCUSED_SHADOW_OPACITY
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Self {
            height: safe_area_bottom + tab_bar::BASE_HEIGHT,
            buttons,
            hide_on_keyboard: true,
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Tab navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabNavigator {
    /// Current active tab
    pub active_tab: DemoTab,
    /// Current route per tab
    routes: HashMap<DemoTab, Route>,
}

impl Default for TabNavigator {
    fn default() -> Self {
        let routes = DemoTab::all()
            .into_iter()
            .map(|tab| (tab, tab.root_route()))
            .collect();

        Self {
            active_tab: DemoTab::Showroom,
            routes,
        }
    }
}

impl TabNavigator {
    /// Create a navigator on the showroom tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Route shown by the active tab
    pub fn current_route(&self) -> Route {
        self.route_for(self.active_tab)
    }

    /// Route shown by a tab
    pub fn route_for(&self, tab: DemoTab) -> Route {
        self.routes
            .get(&tab)
            .cloned()
            .unwrap_or_else(|| tab.root_route())
    }

    /// Switch to a tab, keeping its last route
    pub fn switch_tab(&mut self, tab: DemoTab) {
        if self.active_tab != tab {
            tracing::debug!(?tab, "switching tab");
            self.active_tab = tab;
        }
    }

    /// Navigate to a route, activating the tab that hosts it
    ///
    /// Returns false for routes no tab can show.
    pub fn navigate(&mut self, route: Route) -> bool {
        let Some(tab) = route.tab() else {
            return false;
        };
        self.routes.insert(tab, route);
        self.switch_tab(tab);
        true
    }

    /// Tab bar layout for the current state
    pub fn tab_bar(&self, safe_area_bottom: f32) -> TabBarLayout {
        TabBarLayout::new(self.active_tab, safe_area_bottom)
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::showroom()));
        router.add_route("/showroom", |_| Some(Route::showroom()));
        router.add_route("/showroom/:queryIndex", |params| {
            Some(Route::Showroom {
                query_index: Some(params.get("queryIndex")?.clone()),
                item_index: None,
            })
        });
        router.add_route("/showroom/:queryIndex/:itemIndex", |params| {
            Some(Route::Showroom {
                query_index: Some(params.get("queryIndex")?.clone()),
                item_index: Some(params.get("itemIndex")?.clone()),
            })
        });
        router.add_route("/community", |_| Some(Route::Community));
        router.add_route("/podcasts", |_| Some(Route::PodcastList));
        router.add_route("/debug", |_| Some(Route::Debug));

        router
    }

    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        // Query strings carry nothing the demo routes use
        let pathname = path.split(['?', '#']).next().unwrap_or_default();
        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = Self::match_pattern(&pattern.segments, &path_segments) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    fn match_pattern(pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        Some(params)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Component showroom screen
//!
//! A sectioned list of demos with a drawer menu listing every section and
//! use case. Picking a menu entry scrolls the list and closes the drawer.
//! On web the menu entries are links, and the screen resolves the
//! `/showroom/:section/:item` deep link back into a scroll.

use crate::demos::{self, Demo};
use crate::drawer_icon::{DrawerIconButton, DrawerIconFrame};
use crate::navigation::{Route, Router};
use crate::tokens::{colors, drawer, LayoutDirection};
use app_state::{
    AnimationDriver, DrawerConfig, DrawerError, DrawerMenuController, DrawerPanel,
    ScrollFailureInfo, ScrollRecovery, ScrollTarget, ScrollableList, Section, SectionCatalog,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Showroom errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowroomError {
    /// No section matches the deep-linked name
    #[error("Unknown showroom section: {0}")]
    UnknownSection(String),

    /// Route does not belong to the showroom
    #[error("Route is not a showroom route: {0}")]
    NotShowroomRoute(String),

    /// Drawer controller rejected the request
    #[error(transparent)]
    Drawer(#[from] DrawerError),
}

/// Result type for showroom operations
pub type Result<T> = std::result::Result<T, ShowroomError>;

// =============================================================================
// Platform
// =============================================================================

/// Host platform the screen is laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS phone or tablet
    #[default]
    Ios,
    /// Android phone or tablet
    Android,
    /// Browser
    Web,
    /// Television
    Tv,
}

impl Platform {
    /// Whether menu entries should be links
    pub fn is_web(&self) -> bool {
        matches!(self, Platform::Web)
    }

    /// Whether the menu is shown beside the list instead of in a drawer
    pub fn is_tv(&self) -> bool {
        matches!(self, Platform::Tv)
    }
}

// =============================================================================
// Slugs
// =============================================================================

/// URL slug for a use case name
///
/// Lowercases and trims, drops anything that is not a word character,
/// whitespace or hyphen, then collapses separators into single hyphens.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_separator = false;
    for c in kept.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
    }
    slug
}

// =============================================================================
// Menu Rendering
// =============================================================================

/// What pressing a menu entry does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MenuAction {
    /// Scroll the list directly
    ScrollTo(ScrollTarget),
    /// Follow a showroom link
    Link(String),
}

/// One row of the drawer menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Row text
    pub label: String,
    /// Section header rows are bold
    pub bold: bool,
    /// Press action
    pub action: MenuAction,
    /// Trailing icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<&'static str>,
}

/// Menu rows for one section: the header followed by its use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    /// Header row
    pub header: MenuEntry,
    /// Use case rows
    pub items: Vec<MenuEntry>,
}

/// Strategy for turning catalog sections into menu rows
pub trait ListItemRenderer: Send + Sync {
    /// Render the menu rows for a section
    fn render(&self, section: &Section, section_index: usize) -> MenuSection;
}

/// Press-to-scroll rows for native platforms
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeListItem {
    direction: LayoutDirection,
}

impl NativeListItem {
    /// Create a renderer for the given reading direction
    pub fn new(direction: LayoutDirection) -> Self {
        Self { direction }
    }
}

impl ListItemRenderer for NativeListItem {
    fn render(&self, section: &Section, section_index: usize) -> MenuSection {
        let caret = if self.direction.is_rtl() {
            "caretLeft"
        } else {
            "caretRight"
        };

        MenuSection {
            header: MenuEntry {
                label: section.name.clone(),
                bold: true,
                action: MenuAction::ScrollTo(ScrollTarget::section(section_index)),
                trailing_icon: None,
            },
            items: section
                .use_cases
                .iter()
                .enumerate()
                .map(|(index, use_case)| MenuEntry {
                    label: use_case.clone(),
                    bold: false,
                    action: MenuAction::ScrollTo(ScrollTarget::new(section_index, index + 1)),
                    trailing_icon: Some(caret),
                })
                .collect(),
        }
    }
}

/// Link rows for web
#[derive(Debug, Clone, Copy, Default)]
pub struct WebListItem;

impl ListItemRenderer for WebListItem {
    fn render(&self, section: &Section, _section_index: usize) -> MenuSection {
        let section_slug = section.name.to_lowercase();
        let route = |item_index: Option<String>| Route::Showroom {
            query_index: Some(section_slug.clone()),
            item_index,
        };

        MenuSection {
            header: MenuEntry {
                label: section.name.clone(),
                bold: true,
                action: MenuAction::Link(route(None).to_path()),
                trailing_icon: None,
            },
            items: section
                .use_cases
                .iter()
                .map(|use_case| MenuEntry {
                    label: use_case.clone(),
                    bold: false,
                    action: MenuAction::Link(route(Some(slugify(use_case))).to_path()),
                    trailing_icon: None,
                })
                .collect(),
        }
    }
}

/// Pick the renderer for a platform
pub fn renderer_for(platform: Platform, direction: LayoutDirection) -> Box<dyn ListItemRenderer> {
    if platform.is_web() {
        Box::new(WebListItem)
    } else {
        Box::new(NativeListItem::new(direction))
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Edge the drawer slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerPosition {
    /// Left edge
    Left,
    /// Right edge
    Right,
}

/// How the menu and the demo list share the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShowroomLayout {
    /// Menu permanently beside the list
    SideBySide,
    /// Menu in a sliding drawer
    Drawer {
        /// Drawer width
        width: f32,
        /// Edge the drawer is attached to
        position: DrawerPosition,
    },
}

/// Screen options that come from the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenOptions {
    /// Host platform
    #[serde(default)]
    pub platform: Platform,
    /// Reading direction
    #[serde(default)]
    pub direction: LayoutDirection,
    /// Window width, used for the web drawer
    #[serde(default)]
    pub window_width: f32,
}

/// External systems the screen drives
#[derive(Clone)]
pub struct Collaborators {
    /// Sliding panel
    pub panel: Arc<dyn DrawerPanel>,
    /// Sectioned demo list
    pub list: Arc<dyn ScrollableList>,
    /// Progress animation
    pub driver: Arc<dyn AnimationDriver>,
}

// =============================================================================
// Screen
// =============================================================================

/// The showroom screen
pub struct ShowroomScreen {
    demos: Vec<Demo>,
    options: ScreenOptions,
    controller: DrawerMenuController,
    renderer: Box<dyn ListItemRenderer>,
    icon: DrawerIconButton,
    router: Router,
}

impl ShowroomScreen {
    /// Build the screen; the catalog is derived from `demos` once, here
    pub fn new(
        demos: Vec<Demo>,
        options: ScreenOptions,
        config: DrawerConfig,
        collaborators: Collaborators,
    ) -> Result<Self> {
        let catalog = demos::catalog(&demos);
        let controller = DrawerMenuController::new(
            catalog,
            config,
            collaborators.panel,
            collaborators.list,
            collaborators.driver,
        )?;

        tracing::info!(
            sections = controller.catalog().len(),
            platform = ?options.platform,
            "showroom ready"
        );

        Ok(Self {
            demos,
            options,
            controller,
            renderer: renderer_for(options.platform, options.direction),
            icon: DrawerIconButton::new(options.direction),
            router: Router::new(),
        })
    }

    /// Demos shown in the list
    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }

    /// Demos, for toggling their interactive elements
    pub fn demos_mut(&mut self) -> &mut [Demo] {
        &mut self.demos
    }

    /// Catalog behind the menu
    pub fn catalog(&self) -> &SectionCatalog {
        self.controller.catalog()
    }

    /// Drawer controller
    pub fn controller(&self) -> &DrawerMenuController {
        &self.controller
    }

    /// Drawer controller, for forwarding gesture and settle events
    pub fn controller_mut(&mut self) -> &mut DrawerMenuController {
        &mut self.controller
    }

    /// Screen options
    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    /// Menu rows for every section
    pub fn menu(&self) -> Vec<MenuSection> {
        self.catalog()
            .iter()
            .map(|(index, section)| self.renderer.render(section, index))
            .collect()
    }

    /// Menu icon pressed
    pub fn press_menu_button(&mut self) {
        self.controller.toggle();
    }

    /// A menu row was pressed
    pub fn press_entry(&mut self, entry: &MenuEntry) -> Result<()> {
        match &entry.action {
            MenuAction::ScrollTo(target) => Ok(self.controller.scroll_to(*target)?),
            MenuAction::Link(path) => {
                let route = self.router.match_path(path);
                self.handle_route(&route).map(|_| ())
            }
        }
    }

    /// Apply a showroom route's deep-link params
    pub fn handle_route(&mut self, route: &Route) -> Result<Option<ScrollTarget>> {
        match route {
            Route::Showroom {
                query_index,
                item_index,
            } => self.handle_route_params(query_index.as_deref(), item_index.as_deref()),
            other => Err(ShowroomError::NotShowroomRoute(other.to_path())),
        }
    }

    /// Scroll to the section named by `query_index` and the use case slugged `item_index`
    ///
    /// Without a section there is nothing to do. An unknown use case falls
    /// back to the section header.
    pub fn handle_route_params(
        &mut self,
        query_index: Option<&str>,
        item_index: Option<&str>,
    ) -> Result<Option<ScrollTarget>> {
        let Some(query_index) = query_index else {
            return Ok(None);
        };

        let target = self.resolve(query_index, item_index)?;
        self.controller.scroll_to(target)?;
        Ok(Some(target))
    }

    /// Resolve deep-link params to a scroll target
    pub fn resolve(&self, query_index: &str, item_index: Option<&str>) -> Result<ScrollTarget> {
        let (section_index, section) = self
            .catalog()
            .iter()
            .find(|(_, section)| section.name.to_lowercase() == query_index)
            .ok_or_else(|| {
                tracing::warn!(section = query_index, "deep link to unknown section");
                ShowroomError::UnknownSection(query_index.to_string())
            })?;

        let item = item_index
            .and_then(|slug| {
                section
                    .use_cases
                    .iter()
                    .position(|use_case| slugify(use_case) == slug)
            })
            .map_or(0, |position| position + 1);

        Ok(ScrollTarget::new(section_index, item))
    }

    /// The list could not reach a row yet
    pub fn on_scroll_failure(&mut self, info: ScrollFailureInfo) -> ScrollRecovery {
        self.controller.handle_scroll_failure(info)
    }

    /// How menu and list are arranged
    pub fn layout(&self) -> ShowroomLayout {
        if self.options.platform.is_tv() {
            return ShowroomLayout::SideBySide;
        }

        let width = if self.options.platform.is_web() {
            self.options.window_width * drawer::WEB_WIDTH_FRACTION
        } else {
            drawer::NATIVE_WIDTH
        };
        let position = if self.options.direction.is_rtl() {
            DrawerPosition::Right
        } else {
            DrawerPosition::Left
        };

        ShowroomLayout::Drawer { width, position }
    }

    /// Overlay color over the list
    pub fn overlay_color(&self) -> &'static str {
        if self.controller.is_open() {
            colors::OVERLAY_20
        } else {
            colors::TRANSPARENT
        }
    }

    /// Menu icon for the current rendered progress
    pub fn icon_frame(&self) -> DrawerIconFrame {
        self.icon.frame(self.controller.rendered_progress())
    }
}

impl std::fmt::Debug for ShowroomScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowroomScreen")
            .field("demos", &self.demos.len())
            .field("options", &self.options)
            .field("controller", &self.controller)
            .finish()
    }
}

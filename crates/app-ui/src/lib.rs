//! Screens and components for the showroom
//!
//! This crate provides the UI layer of the showroom: the demo tab
//! navigator, the component showroom screen with its drawer menu, and the
//! components it demonstrates.
//!
//! # Modules
//!
//! - [`tokens`] - Design tokens (spacing, colors, durations, sizes)
//! - [`components`] - Toggle and divider components
//! - [`demos`] - Demo content listed in the showroom
//! - [`drawer_icon`] - Hamburger icon that morphs with drawer progress
//! - [`showroom`] - The showroom screen
//! - [`navigation`] - Demo tabs and route matching
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{DemoTab, Route, Router, TabNavigator};
//!
//! let router = Router::new();
//! let route = router.match_path("/showroom/toggle/statuses");
//!
//! let mut tabs = TabNavigator::new();
//! assert!(tabs.navigate(route));
//! assert_eq!(tabs.active_tab, DemoTab::Showroom);
//! assert_eq!(router.match_path("/nowhere"), Route::NotFound);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod demos;
pub mod drawer_icon;
pub mod navigation;
pub mod showroom;
pub mod tokens;

// Re-export commonly used types
pub use components::{
    ControlledToggle, DemoDivider, DividerOrientation, LabelPosition, SwitchAccessibilityMode,
    Toggle, ToggleStatus, ToggleVariant,
};

pub use demos::{Demo, DemoElement, DemoUseCase, UseCaseLayout};

pub use drawer_icon::{DrawerIconButton, DrawerIconFrame};

pub use navigation::{DemoTab, Route, Router, TabBarLayout, TabButton, TabNavigator};

pub use showroom::{
    slugify, Collaborators, DrawerPosition, ListItemRenderer, MenuAction, MenuEntry, MenuSection,
    NativeListItem, Platform, ScreenOptions, ShowroomError, ShowroomLayout, ShowroomScreen,
    WebListItem,
};

pub use tokens::LayoutDirection;

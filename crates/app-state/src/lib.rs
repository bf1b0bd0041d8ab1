//! Screen state for the Showroom app
//!
//! This crate holds the state machines behind the showroom screen: the
//! drawer menu controller, the seams to the list and animation systems it
//! drives, and the section catalog the list is built from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod catalog;
pub mod drawer;
pub mod scroll;

pub use animation::{AnimationDriver, AnimationProgress, SharedProgress, Transition};
pub use catalog::{Section, SectionCatalog};
pub use drawer::{DrawerConfig, DrawerError, DrawerMenuController, DrawerPanel, DrawerState};
pub use scroll::{ScrollFailureInfo, ScrollRecovery, ScrollRetry, ScrollTarget, ScrollableList};

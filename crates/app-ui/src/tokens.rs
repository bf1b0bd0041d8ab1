//! Design tokens for the Showroom
//!
//! Spacing, colors and layout constants shared by the
//! components and screens.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// Global layout scale factor
    pub const SCALE: f32 = 1.0;

    /// 2px
    pub const XXXS: f32 = 2.0;
    /// 4px
    pub const XXS: f32 = 4.0;
    /// 8px
    pub const XS: f32 = 8.0;
    /// 12px
    pub const SM: f32 = 12.0;
    /// 16px
    pub const MD: f32 = 16.0;
    /// 24px
    pub const LG: f32 = 24.0;
    /// 32px
    pub const XL: f32 = 32.0;
    /// 48px
    pub const XXL: f32 = 48.0;
    /// 64px
    pub const XXXL: f32 = 64.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xxxs" => Some(XXXS),
            "xxs" => Some(XXS),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            "xxxl" => Some(XXXL),
            _ => None,
        }
    }
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Colors used by the showroom chrome
pub mod colors {
    /// Body text
    pub const TEXT: &str = "#191015";
    /// Brand tint (active tab, open menu icon)
    pub const TINT: &str = "#C76542";
    /// Hairlines and divider lines
    pub const BORDER: &str = "#D7CEC9";
    /// Error accents
    pub const ERROR: &str = "#C03403";
    /// 20% black overlay behind the open drawer
    pub const OVERLAY_20: &str = "rgba(25, 16, 21, 0.2)";
    /// Fully transparent
    pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
}

// =============================================================================
// Layout Tokens
// =============================================================================

/// Drawer panel dimensions
pub mod drawer {
    use super::spacing;

    /// Native drawer width
    pub const NATIVE_WIDTH: f32 = 326.0 * spacing::SCALE;
    /// Fraction of the window the drawer covers on web
    pub const WEB_WIDTH_FRACTION: f32 = 0.3;
}

/// Tab bar dimensions
pub mod tab_bar {
    /// Height added on top of the bottom safe-area inset
    pub const BASE_HEIGHT: f32 = 70.0;
    /// Shadow opacity of a focused tab button
    pub const FOCUSED_SHADOW_OPACITY: f32 = 0.2;
}

/// Reading direction of the active locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl LayoutDirection {
    /// Whether this is right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}

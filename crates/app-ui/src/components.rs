//! Form-control components shown in the showroom
//!
//! Components are plain structs with serializable props that a renderer
//! turns into views. Each one provides:
//!
//! - Type-safe props with builder patterns
//! - Interaction rules (what a press does, when it is ignored)
//!
//! # Available Components
//!
//! - [`Toggle`] - Controlled boolean input (checkbox, radio, switch)
//! - [`ControlledToggle`] - Toggle that owns its value, used by the demos
//! - [`DemoDivider`] - Spacer with an optional hairline

use crate::tokens::{colors, spacing};
use serde::{Deserialize, Serialize};

// =============================================================================
// Toggle Component
// =============================================================================

/// Visual variant of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleVariant {
    /// Square checkbox (default)
    #[default]
    Checkbox,
    /// Round radio button
    Radio,
    /// Sliding switch
    Switch,
}

/// Status modifier of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleStatus {
    /// No status
    #[default]
    None,
    /// Error accents
    Error,
    /// Muted and not editable
    Disabled,
}

/// Side of the input the label sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label before the input
    Left,
    /// Label after the input (default)
    #[default]
    Right,
}

/// How a switch announces its on/off state visually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchAccessibilityMode {
    /// Nothing extra
    #[default]
    None,
    /// On/off characters
    Text,
    /// On/off icons
    Icon,
}

/// Controlled boolean input
///
/// The caller owns `value`. A press never changes it; it only reports the
/// requested value through the callback passed to [`Toggle::press`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    /// Variant
    #[serde(default)]
    pub variant: ToggleVariant,
    /// Current value
    #[serde(default)]
    pub value: bool,
    /// Status modifier
    #[serde(default)]
    pub status: ToggleStatus,
    /// Whether the input accepts presses
    #[serde(default = "default_editable")]
    pub editable: bool,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Label translation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_tx: Option<String>,
    /// Helper text under the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    /// Helper translation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_tx: Option<String>,
    /// Label side
    #[serde(default)]
    pub label_position: LabelPosition,
    /// Switch on/off indicator
    #[serde(default)]
    pub switch_accessibility_mode: SwitchAccessibilityMode,
    /// Custom checkbox icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_icon: Option<String>,
}

fn default_editable() -> bool {
    true
}

impl Default for Toggle {
    fn default() -> Self {
        Self {
            variant: ToggleVariant::Checkbox,
            value: false,
            status: ToggleStatus::None,
            editable: true,
            label: None,
            label_tx: None,
            helper: None,
            helper_tx: None,
            label_position: LabelPosition::Right,
            switch_accessibility_mode: SwitchAccessibilityMode::None,
            checkbox_icon: None,
        }
    }
}

impl Toggle {
    /// Create a toggle of the given variant
    pub fn new(variant: ToggleVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Checkbox toggle
    pub fn checkbox() -> Self {
        Self::new(ToggleVariant::Checkbox)
    }

    /// Radio toggle
    pub fn radio() -> Self {
        Self::new(ToggleVariant::Radio)
    }

    /// Switch toggle
    pub fn switch() -> Self {
        Self::new(ToggleVariant::Switch)
    }

    /// Set value
    pub fn with_value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Set status
    pub fn with_status(mut self, status: ToggleStatus) -> Self {
        self.status = status;
        self
    }

    /// Set editable
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set label translation key
    pub fn with_label_tx(mut self, key: impl Into<String>) -> Self {
        self.label_tx = Some(key.into());
        self
    }

    /// Set helper
    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    /// Set helper translation key
    pub fn with_helper_tx(mut self, key: impl Into<String>) -> Self {
        self.helper_tx = Some(key.into());
        self
    }

    /// Set label position
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Set switch accessibility mode
    pub fn with_switch_accessibility_mode(mut self, mode: SwitchAccessibilityMode) -> Self {
        self.switch_accessibility_mode = mode;
        self
    }

    /// Set a custom checkbox icon
    pub fn with_checkbox_icon(mut self, icon: impl Into<String>) -> Self {
        self.checkbox_icon = Some(icon.into());
        self
    }

    /// Whether presses reach the callback
    pub fn is_interactive(&self) -> bool {
        self.editable && self.status != ToggleStatus::Disabled
    }

    /// Handle a press: reports `!value` to `on_toggle` unless the toggle is not interactive
    ///
    /// Returns whether the callback ran.
    pub fn press(&self, on_toggle: impl FnOnce(bool)) -> bool {
        if !self.is_interactive() {
            return false;
        }
        on_toggle(!self.value);
        true
    }

    /// Color of the helper text
    pub fn helper_color(&self) -> &'static str {
        match self.status {
            ToggleStatus::Error => colors::ERROR,
            _ => colors::TEXT,
        }
    }

    /// Opacity of the input
    pub fn opacity(&self) -> f32 {
        if self.status == ToggleStatus::Disabled {
            0.5
        } else {
            1.0
        }
    }
}

/// Toggle that keeps its own value and flips it on press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlledToggle {
    toggle: Toggle,
}

impl ControlledToggle {
    /// Wrap a toggle; its `value` becomes the initial local state
    pub fn new(toggle: Toggle) -> Self {
        Self { toggle }
    }

    /// Current value
    pub fn value(&self) -> bool {
        self.toggle.value
    }

    /// Props to render
    pub fn toggle(&self) -> &Toggle {
        &self.toggle
    }

    /// Press the toggle; returns the value after the press
    pub fn press(&mut self) -> bool {
        let mut next = self.toggle.value;
        self.toggle.press(|value| next = value);
        self.toggle.value = next;
        next
    }
}

impl From<Toggle> for ControlledToggle {
    fn from(toggle: Toggle) -> Self {
        Self::new(toggle)
    }
}

// =============================================================================
// Divider Component
// =============================================================================

/// Divider orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerOrientation {
    /// Horizontal gap (height = size)
    #[default]
    Horizontal,
    /// Vertical gap (width = size)
    Vertical,
}

/// Placement of the hairline drawn through a divider's center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineGeometry {
    /// Line width
    pub width: f32,
    /// Line height
    pub height: f32,
    /// Start margin (pulls the line back to center)
    pub margin_start: f32,
    /// Top margin
    pub margin_top: f32,
    /// Line color
    pub color: &'static str,
}

/// Spacer between demo elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoDivider {
    /// Orientation
    #[serde(default)]
    pub orientation: DividerOrientation,
    /// Gap size along the orientation axis
    #[serde(default = "default_divider_size")]
    pub size: f32,
    /// Draw a hairline through the center
    #[serde(default)]
    pub line: bool,
    /// Stretch across the full row
    #[serde(default)]
    pub full_width: bool,
}

fn default_divider_size() -> f32 {
    10.0 * spacing::SCALE
}

impl Default for DemoDivider {
    fn default() -> Self {
        Self {
            orientation: DividerOrientation::Horizontal,
            size: default_divider_size(),
            line: false,
            full_width: false,
        }
    }
}

impl DemoDivider {
    /// Horizontal divider of the default size
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Vertical divider of the default size
    pub fn vertical() -> Self {
        Self {
            orientation: DividerOrientation::Vertical,
            ..Default::default()
        }
    }

    /// Set size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Draw a center line
    pub fn with_line(mut self) -> Self {
        self.line = true;
        self
    }

    /// Stretch across the full row
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// (width, height) of the gap; `None` means unconstrained
    pub fn extent(&self) -> (Option<f32>, Option<f32>) {
        match self.orientation {
            DividerOrientation::Horizontal => (None, Some(self.size)),
            DividerOrientation::Vertical => (Some(self.size), None),
        }
    }

    /// Hairline geometry, if the divider draws one
    pub fn line_geometry(&self) -> Option<LineGeometry> {
        if !self.line {
            return None;
        }

        let s = spacing::SCALE;
        let geometry = match self.orientation {
            DividerOrientation::Horizontal => LineGeometry {
                width: 150.0 * s,
                height: 1.0 * s,
                margin_start: -75.0 * s,
                margin_top: -1.0 * s,
                color: colors::BORDER,
            },
            DividerOrientation::Vertical => LineGeometry {
                width: 1.0 * s,
                height: 50.0 * s,
                margin_start: -1.0 * s,
                margin_top: -25.0 * s * s * s,
                color: colors::BORDER,
            },
        };
        Some(geometry)
    }
}

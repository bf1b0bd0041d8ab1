//! Menu icon that morphs from a hamburger into a back arrow
//!
//! The three bars are driven by the drawer progress (0 = closed, 1 = open).

use crate::tokens::{colors, spacing, LayoutDirection};
use app_state::AnimationProgress;
use serde::Serialize;

/// Horizontal shift of the whole icon when fully open
pub const OPEN_TRANSLATE_X: f32 = 60.0;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Mix toward `other` by `t` in `[0, 1]`
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Style of one bar at a given progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarStyle {
    /// Bar color
    pub color: Rgb,
    /// Bar width
    pub width: f32,
    /// Start margin
    pub margin_start: f32,
    /// Top margin
    pub margin_top: f32,
    /// Bottom margin
    pub margin_bottom: f32,
    /// Rotation in degrees
    pub rotate_deg: f32,
}

/// Full icon style at a given progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerIconFrame {
    /// Horizontal shift of the container
    pub translate_x: f32,
    /// Top bar
    pub top: BarStyle,
    /// Middle bar
    pub middle: BarStyle,
    /// Bottom bar
    pub bottom: BarStyle,
}

/// Menu button shown in the showroom header
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerIconButton {
    direction: LayoutDirection,
    closed_color: Rgb,
    open_color: Rgb,
}

impl DrawerIconButton {
    /// Create a button for the given reading direction
    pub fn new(direction: LayoutDirection) -> Self {
        Self {
            direction,
            closed_color: Rgb::from_hex(colors::TEXT).unwrap_or(Rgb { r: 0, g: 0, b: 0 }),
            open_color: Rgb::from_hex(colors::TINT).unwrap_or(Rgb { r: 0, g: 0, b: 0 }),
        }
    }

    /// Icon style for `progress`
    pub fn frame(&self, progress: AnimationProgress) -> DrawerIconFrame {
        let t = progress.value();
        // Rotations and the container shift mirror in RTL
        let sign = if self.direction.is_rtl() { -1.0 } else { 1.0 };
        let color = self.closed_color.mix(self.open_color, t);

        DrawerIconFrame {
            translate_x: lerp(0.0, -sign * OPEN_TRANSLATE_X, t),
            top: BarStyle {
                color,
                width: lerp(18.0, 12.0, t),
                margin_start: lerp(0.0, -11.5, t),
                margin_top: 0.0,
                margin_bottom: lerp(0.0, -2.0, t),
                rotate_deg: lerp(0.0, -sign * 45.0, t),
            },
            middle: BarStyle {
                color,
                width: lerp(18.0, 16.0, t),
                margin_start: 0.0,
                margin_top: spacing::XXS,
                margin_bottom: 0.0,
                rotate_deg: 0.0,
            },
            bottom: BarStyle {
                color,
                width: lerp(18.0, 12.0, t),
                margin_start: lerp(0.0, -12.0, t),
                margin_top: lerp(4.0, 2.0, t),
                margin_bottom: 0.0,
                rotate_deg: lerp(0.0, sign * 45.0, t),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_and_mix() {
        let black = Rgb::from_hex("#000000").unwrap();
        let white = Rgb::from_hex("#FFFFFF").unwrap();
        assert_eq!(black.mix(white, 0.5).to_hex(), "#808080");
        assert_eq!(black.mix(white, 2.0), white);
        assert!(Rgb::from_hex("fff").is_none());
    }

    #[test]
    fn test_closed_frame_is_hamburger() {
        let frame = DrawerIconButton::new(LayoutDirection::Ltr).frame(AnimationProgress::CLOSED);
        assert_eq!(frame.translate_x, 0.0);
        assert_eq!(frame.top.width, 18.0);
        assert_eq!(frame.top.rotate_deg, 0.0);
        assert_eq!(frame.bottom.margin_top, 4.0);
        assert_eq!(frame.top.color.to_hex(), colors::TEXT);
    }

    #[test]
    fn test_open_frame_is_arrow() {
        let frame = DrawerIconButton::new(LayoutDirection::Ltr).frame(AnimationProgress::OPEN);
        assert_eq!(frame.translate_x, -60.0);
        assert_eq!(frame.top.rotate_deg, -45.0);
        assert_eq!(frame.bottom.rotate_deg, 45.0);
        assert_eq!(frame.middle.width, 16.0);
        assert_eq!(frame.top.color.to_hex(), colors::TINT);
    }

    #[test]
    fn test_rtl_mirrors_rotation() {
        let frame = DrawerIconButton::new(LayoutDirection::Rtl).frame(AnimationProgress::OPEN);
        assert_eq!(frame.translate_x, 60.0);
        assert_eq!(frame.top.rotate_deg, 45.0);
        assert_eq!(frame.bottom.rotate_deg, -45.0);
    }
}

//! Showroom configuration
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use app_state::DrawerConfig;
use app_ui::{LayoutDirection, Platform, ScreenOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Window width used when none is configured
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Showroom configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    /// Host platform
    pub platform: Platform,
    /// Reading direction
    pub layout_direction: LayoutDirection,
    /// Window width, used for the web drawer
    pub window_width: f32,
    /// Bottom safe-area inset added to the tab bar
    pub safe_area_bottom: f32,
    /// Drawer tuning
    pub drawer: DrawerConfig,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            layout_direction: LayoutDirection::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            safe_area_bottom: 0.0,
            drawer: DrawerConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShowroomConfig {
    /// Set platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set reading direction
    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Set window width
    pub fn window_width(mut self, width: f32) -> Self {
        self.window_width = width;
        self
    }

    /// Set bottom safe-area inset
    pub fn safe_area_bottom(mut self, inset: f32) -> Self {
        self.safe_area_bottom = inset;
        self
    }

    /// Set drawer tuning
    pub fn drawer(mut self, drawer: DrawerConfig) -> Self {
        self.drawer = drawer;
        self
    }

    /// Set tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), platform = ?config.platform, "loaded config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.window_width.is_finite() || self.window_width < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "window_width must be a non-negative number, got {}",
                self.window_width
            )));
        }
        if !self.safe_area_bottom.is_finite() || self.safe_area_bottom < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "safe_area_bottom must be a non-negative number, got {}",
                self.safe_area_bottom
            )));
        }
        self.drawer
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Screen options derived from this config
    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            platform: self.platform,
            direction: self.layout_direction,
            window_width: self.window_width,
        }
    }
}

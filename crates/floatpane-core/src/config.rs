//! Surface configuration.
//!
//! Configuration can be built in code, or loaded from YAML, TOML or JSON.
//! Every field is optional in serialized form and falls back to the
//! defaults below.
//!
//! ```yaml
//! initial_size: { width: 600, height: 400 }
//! min_size: { width: 400, height: 300 }
//! small_screen_breakpoint: 1024
//! ```

use crate::error::ConfigError;
use crate::geometry::Size;
use crate::viewport::DEFAULT_BREAKPOINT;
use serde::{Deserialize, Serialize};

/// Fallback initial size.
pub const DEFAULT_INITIAL_SIZE: Size = Size::new(800.0, 600.0);

/// Fallback minimum size.
pub const DEFAULT_MIN_SIZE: Size = Size::new(400.0, 300.0);

/// Construction-time settings for a floating surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Size the surface starts with
    pub initial_size: Size,
    /// Smallest size a resize may produce
    pub min_size: Size,
    /// Viewport widths below this are treated as small screens
    pub small_screen_breakpoint: f32,
    /// Re-clamp the position when the viewport changes size
    pub reclamp_on_viewport_resize: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            small_screen_breakpoint: DEFAULT_BREAKPOINT,
            reclamp_on_viewport_resize: false,
        }
    }
}

impl SurfaceConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial size.
    #[must_use]
    pub const fn with_initial_size(mut self, size: Size) -> Self {
        self.initial_size = size;
        self
    }

    /// Set the minimum size.
    #[must_use]
    pub const fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Set the small-screen breakpoint.
    #[must_use]
    pub const fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.small_screen_breakpoint = breakpoint;
        self
    }

    /// Enable or disable re-clamping on viewport resize.
    #[must_use]
    pub const fn with_reclamp_on_viewport_resize(mut self, enabled: bool) -> Self {
        self.reclamp_on_viewport_resize = enabled;
        self
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are usable and consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, size) in [("initial_size", self.initial_size), ("min_size", self.min_size)] {
            if !size.is_positive() {
                return Err(ConfigError::InvalidSize {
                    field,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        let breakpoint = self.small_screen_breakpoint;
        if !breakpoint.is_finite() || breakpoint <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(breakpoint));
        }

        if !self.initial_size.contains(&self.min_size) {
            return Err(ConfigError::InitialBelowMinimum {
                initial: (self.initial_size.width, self.initial_size.height),
                min: (self.min_size.width, self.min_size.height),
            });
        }

        Ok(())
    }
}

//! Error types for surface configuration.

use thiserror::Error;

/// Errors produced while loading or validating a [`SurfaceConfig`](crate::SurfaceConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A size field is not finite and positive.
    #[error("Invalid value for '{field}': {width}x{height} must be finite and positive")]
    InvalidSize {
        /// Field name
        field: &'static str,
        /// Offending width
        width: f32,
        /// Offending height
        height: f32,
    },

    /// The small-screen breakpoint is not finite and positive.
    #[error("Invalid small-screen breakpoint: {0}")]
    InvalidBreakpoint(f32),

    /// The initial size is smaller than the minimum size on some axis.
    #[error("initial_size {initial:?} is smaller than min_size {min:?}")]
    InitialBelowMinimum {
        /// Configured initial size (width, height)
        initial: (f32, f32),
        /// Configured minimum size (width, height)
        min: (f32, f32),
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSize {
            field: "min_size",
            width: -1.0,
            height: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'min_size': -1x10 must be finite and positive"
        );

        let err = ConfigError::InvalidBreakpoint(f32::NAN);
        assert!(err.to_string().starts_with("Invalid small-screen breakpoint"));
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}

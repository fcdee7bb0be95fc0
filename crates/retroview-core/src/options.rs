//! Display configuration options.

use serde::{Deserialize, Serialize};

/// How texel lookups between sample points resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FilterMode {
    /// Nearest-texel sampling; crisp pixels.
    #[default]
    Nearest,
    /// Bilinear filtering; smoothed pixels.
    Linear,
}

/// Options for presenting the framebuffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Floor upscale factors to whole numbers for pixel-perfect output.
    pub integer_scaling: bool,

    /// Sampler filtering for the display texture.
    pub filter: FilterMode,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            integer_scaling: true,
            filter: FilterMode::Nearest,
        }
    }
}

impl DisplayOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filtering mode.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Enables or disables integer scaling.
    pub fn with_integer_scaling(mut self, enabled: bool) -> Self {
        self.integer_scaling = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = DisplayOptions::default();
        assert!(options.integer_scaling);
        assert_eq!(options.filter, FilterMode::Nearest);
    }

    #[test]
    fn test_options_builder() {
        let options = DisplayOptions::new()
            .with_filter(FilterMode::Linear)
            .with_integer_scaling(false);
        assert_eq!(options.filter, FilterMode::Linear);
        assert!(!options.integer_scaling);
    }

    #[test]
    fn test_options_serde_roundtrip() {
        let options = DisplayOptions::new().with_filter(FilterMode::Linear);
        let json = serde_json::to_string(&options).unwrap();
        let back: DisplayOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.filter, FilterMode::Linear);
        assert!(back.integer_scaling);
    }
}

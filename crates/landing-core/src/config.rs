//! Site Configuration
//!
//! Tunables for the carousel, layout breakpoints, reveal animations and
//! logging. Every field has a default, so a partial JSON document only
//! overrides what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};
use crate::reveal::RevealOptions;

/// Testimonials carousel settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Delay between automatic advances
    pub autoplay_interval_ms: u64,

    /// Cards per page below the desktop breakpoint
    pub mobile_page_size: usize,

    /// Cards per page at or above the desktop breakpoint
    pub desktop_page_size: usize,

    /// Minimum horizontal travel for a swipe
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            mobile_page_size: 1,
            desktop_page_size: 3,
            swipe_threshold_px: 10.0,
        }
    }
}

/// Viewport and header settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width at which the desktop layout kicks in
    pub desktop_breakpoint_px: f64,

    /// Scroll offset past which the header switches to its compact style
    pub scrolled_offset_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: 768.0,
            scrolled_offset_px: 10.0,
        }
    }
}

/// Complete site configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub layout: LayoutConfig,

    /// Defaults for scroll-reveal wrappers
    pub reveal: RevealOptions,

    /// `tracing` filter directive (e.g. "info,landing_web=debug")
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            layout: LayoutConfig::default(),
            reveal: RevealOptions::default(),
            log_filter: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the state machines cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.carousel.mobile_page_size == 0 || self.carousel.desktop_page_size == 0 {
            return Err(LandingError::Config("page sizes must be at least 1".into()));
        }
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(LandingError::Config("autoplay interval must be positive".into()));
        }
        if self.carousel.swipe_threshold_px < 0.0 {
            return Err(LandingError::Config("swipe threshold must not be negative".into()));
        }
        if self.layout.desktop_breakpoint_px <= 0.0 {
            return Err(LandingError::Config("desktop breakpoint must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(LandingError::Config(format!(
                "reveal threshold {} outside 0.0..=1.0",
                self.reveal.threshold
            )));
        }
        Ok(())
    }

    pub const fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.autoplay_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(config.carousel.desktop_page_size, 3);
        assert_eq!(config.carousel.mobile_page_size, 1);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "carousel": { "autoplay_interval_ms": 8000 }, "log_filter": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 8000);
        assert_eq!(config.carousel.desktop_page_size, 3);
        assert!((config.layout.desktop_breakpoint_px - 768.0).abs() < f64::EPSILON);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = SiteConfig::from_json(r#"{ "carousel": { "desktop_page_size": 0 } }"#).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = SiteConfig::from_json(r#"{ "carousel": { "autoplay_interval_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = SiteConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{ carousel").unwrap_err();
        assert!(matches!(err, LandingError::Json(_)));
    }
}

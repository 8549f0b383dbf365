//! Tunables for the page behavior controller.
//!
//! # Design
//! - Every field has a default matching the shipped site, so an absent or
//!   partial configuration block is always usable.
//! - Pages may override values through an embedded JSON block; invalid input is
//!   rejected as a whole and the caller falls back to [`BehaviorConfig::default`].

use serde::Deserialize;

use crate::core::nav::NavModePolicy;
use crate::error::ConfigError;

/// Element id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "campus-ui-config";
/// Local storage key holding the selected theme identifier.
pub const DEFAULT_STORAGE_KEY: &str = "selectedTheme";
/// Widths at or below this value use the mobile navigation mode.
pub const DEFAULT_BREAKPOINT_PX: u32 = 767;
/// Header (90px) plus navigation bar (45px).
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 135.0;
/// Scroll offset above which the header shadow deepens.
pub const DEFAULT_SHADOW_THRESHOLD_PX: f64 = 100.0;
/// Fraction of a card that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the reveal trigger region by 50px at the bottom.
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Cascade step between consecutive cards, in tenths of a second.
pub const DEFAULT_REVEAL_STEP_TENTHS: u32 = 1;

/// Top-level behavior configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Mobile/desktop breakpoint in CSS pixels.
    pub breakpoint_px: u32,
    /// Distance kept between the viewport top and a scrolled-to anchor.
    pub header_offset_px: f64,
    /// Scroll offset above which the scrolled shadow is applied.
    pub shadow_threshold_px: f64,
    /// Storage key for the selected theme.
    pub storage_key: String,
    /// How dropdown parents pick between hover and click activation.
    pub nav_mode: NavModePolicy,
    /// Scroll reveal settings.
    pub reveal: RevealConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            shadow_threshold_px: DEFAULT_SHADOW_THRESHOLD_PX,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            nav_mode: NavModePolicy::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Intersection observer settings for the reveal animation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction that triggers a reveal, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied to the observer root.
    pub root_margin: String,
    /// Delay added per card index, in tenths of a second.
    pub step_tenths: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            step_tenths: DEFAULT_REVEAL_STEP_TENTHS,
        }
    }
}

impl BehaviorConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
            detail: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_px == 0 {
            return Err(invalid("breakpoint_px", "must_be_positive"));
        }
        if !self.header_offset_px.is_finite() {
            return Err(invalid("header_offset_px", "not_finite"));
        }
        if !self.shadow_threshold_px.is_finite() || self.shadow_threshold_px < 0.0 {
            return Err(invalid("shadow_threshold_px", "out_of_range"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "empty"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold", "out_of_range"));
        }
        if self.reveal.root_margin.trim().is_empty() {
            return Err(invalid("reveal.root_margin", "empty"));
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField { field, reason }
}

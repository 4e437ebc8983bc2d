//! Sheet configuration
//!
//! One component serves every variant of the sheet; the switches here pick
//! validation strictness, toolbar flavour, limits and timings.

use crate::error::ConfigError;
use listing_validation::{BumpPolicy, CompletenessEvaluator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Hard cap on concurrent order bumps
pub const MAX_ORDER_BUMPS: usize = 3;

/// Sheet configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Require prices on order bumps before they count as complete
    pub strict_order_bump_validation: bool,
    /// Use the built-in plain-text toolbar instead of a host engine
    pub show_legacy_toolbar: bool,
    /// Maximum order bumps (never above [`MAX_ORDER_BUMPS`])
    pub max_order_bumps: usize,
    /// Order bump name limit in characters
    pub product_name_max_len: usize,
    /// Order bump description limit in characters
    pub product_description_max_len: usize,
    /// Largest accepted product file
    pub max_product_file_bytes: u64,
    /// Delay between mounting the sheet and starting the slide-in
    pub enter_delay_ms: u64,
    /// Delay between starting the slide-out and unmounting
    pub exit_delay_ms: u64,
}

impl SheetConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strict or loose order bump validation
    #[inline]
    #[must_use]
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_order_bump_validation = strict;
        self
    }

    /// With the legacy plain-text toolbar
    #[inline]
    #[must_use]
    pub fn with_legacy_toolbar(mut self, legacy: bool) -> Self {
        self.show_legacy_toolbar = legacy;
        self
    }

    /// With max order bumps
    #[inline]
    #[must_use]
    pub fn with_max_order_bumps(mut self, max: usize) -> Self {
        self.max_order_bumps = max;
        self
    }

    /// Effective bump limit, clamped to `1..=MAX_ORDER_BUMPS`
    #[inline]
    #[must_use]
    pub fn order_bump_limit(&self) -> usize {
        self.max_order_bumps.clamp(1, MAX_ORDER_BUMPS)
    }

    /// Bump completeness policy
    #[inline]
    #[must_use]
    pub fn bump_policy(&self) -> BumpPolicy {
        BumpPolicy::from_strict(self.strict_order_bump_validation)
    }

    /// Evaluator for the configured policy
    #[inline]
    #[must_use]
    pub fn evaluator(&self) -> CompletenessEvaluator {
        CompletenessEvaluator::new(self.bump_policy())
    }

    /// Slide-in delay
    #[inline]
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    /// Unmount delay
    #[inline]
    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Parse configuration from TOML; missing keys keep their defaults
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed TOML or mistyped values
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            strict_order_bump_validation: true,
            show_legacy_toolbar: false,
            max_order_bumps: MAX_ORDER_BUMPS,
            product_name_max_len: 30,
            product_description_max_len: 160,
            max_product_file_bytes: 50 * 1024 * 1024,
            enter_delay_ms: 10,
            exit_delay_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = SheetConfig::default();
        assert!(config.strict_order_bump_validation);
        assert!(!config.show_legacy_toolbar);
        assert_eq!(config.order_bump_limit(), 3);
        assert_eq!(config.product_name_max_len, 30);
        assert_eq!(config.product_description_max_len, 160);
        assert_eq!(config.enter_delay(), Duration::from_millis(10));
        assert_eq!(config.exit_delay(), Duration::from_millis(300));
        assert_eq!(config.bump_policy(), BumpPolicy::Strict);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(SheetConfig::new().with_max_order_bumps(10).order_bump_limit(), 3);
        assert_eq!(SheetConfig::new().with_max_order_bumps(0).order_bump_limit(), 1);
        assert_eq!(SheetConfig::new().with_max_order_bumps(2).order_bump_limit(), 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SheetConfig::from_toml_str(
            "strict_order_bump_validation = false\nshow_legacy_toolbar = true\n",
        )
        .unwrap();
        assert_eq!(config.bump_policy(), BumpPolicy::Loose);
        assert!(config.show_legacy_toolbar);
        assert_eq!(config.exit_delay_ms, 300);
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = SheetConfig::from_toml_str("max_order_bumps = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_order_bumps = 2").unwrap();
        let config = SheetConfig::load(file.path()).unwrap();
        assert_eq!(config.order_bump_limit(), 2);

        let missing = SheetConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}

use std::collections::HashMap;
use std::time::Duration;

use crate::constants::*;
use crate::error::ConfigError;

/// Timing and geometry settings for one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub animation_speed: Duration,
    pub interval_delay: Duration,
    pub slide_width: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            animation_speed: ANIMATION_SPEED,
            interval_delay: INTERVAL_DELAY,
            slide_width: SLIDE_WIDTH,
        }
    }
}

impl CarouselConfig {
    /// Reads `data-animation-speed` and `data-interval-delay` from the
    /// attributes of the host element. Missing keys keep their defaults.
    pub fn from_dataset(dataset: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = dataset.get(ANIMATION_SPEED_ATTR) {
            let ms = parse_leading_int(ANIMATION_SPEED_ATTR, value)?;
            config.animation_speed = Duration::from_millis(ms);
        }
        if let Some(value) = dataset.get(INTERVAL_DELAY_ATTR) {
            let ms = parse_leading_int(INTERVAL_DELAY_ATTR, value)?;
            config.interval_delay = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_delay.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

// Lenient like `parseInt`: surrounding whitespace is skipped and anything
// after the leading digits ("500ms") is ignored.
fn parse_leading_int(key: &str, value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    digits.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

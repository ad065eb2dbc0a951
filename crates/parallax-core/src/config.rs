//! Static configuration for the card field.
//!
//! Defaults match the stock background. A page can override any subset of the
//! fields with a JSON object using camelCase keys (`cardCount`, `maxSpeed`, ...).

use crate::constants::*;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cardCount must be at most {max}, got {0}", max = MAX_CARD_COUNT)]
    CardCount(usize),
    #[error("images list is empty")]
    NoImages,
    #[error("scrollSmoothness must be inside (0, 1), got {0}")]
    Smoothness(f64),
    #[error("spaceScale must be a positive number, got {0}")]
    SpaceScale(f64),
    #[error("{name} must be a finite, non-negative number, got {value}")]
    Speed { name: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub card_count: usize,
    pub max_speed: f64,
    pub rotation_speed: f64,
    pub space_scale: f64,
    pub scroll_smoothness: f64,
    pub images: Vec<String>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            max_speed: DEFAULT_MAX_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            space_scale: DEFAULT_SPACE_SCALE,
            scroll_smoothness: DEFAULT_SCROLL_SMOOTHNESS,
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParallaxConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count > MAX_CARD_COUNT {
            return Err(ConfigError::CardCount(self.card_count));
        }
        if self.images.is_empty() {
            return Err(ConfigError::NoImages);
        }
        let s = self.scroll_smoothness;
        if !(s > 0.0 && s < 1.0) {
            return Err(ConfigError::Smoothness(s));
        }
        if !(self.space_scale.is_finite() && self.space_scale > 0.0) {
            return Err(ConfigError::SpaceScale(self.space_scale));
        }
        for (name, value) in [
            ("maxSpeed", self.max_speed),
            ("rotationSpeed", self.rotation_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Speed { name, value });
            }
        }
        Ok(())
    }

    /// Image for the card at `index`, cycling through the list.
    pub fn image_for(&self, index: usize) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        Some(self.images[index % self.images.len()].as_str())
    }
}

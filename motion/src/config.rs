//! Runtime-tunable settings for the landing page.
//!
//! Every section deserializes with `#[serde(default)]`, so a host can override
//! a single value (e.g. `{"carousel": {"lock_ms": 500}}`) and inherit the rest
//! from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gesture::GestureProfile;

/// Error returned by [`LandingConfig::from_json`] and [`LandingConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for this schema.
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its usable range.
    #[error("invalid landing config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub particles: ParticleConfig,
    pub carousel: CarouselConfig,
    pub gestures: GestureConfig,
    pub reveal: RevealConfig,
    pub modal: ModalConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub link_distance: f64,
    pub link_base_alpha: f64,
    pub link_alpha_falloff: f64,
    pub fill_alpha: f64,
    pub rgb: [u8; 3],
    pub link_width: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            link_distance: LINK_DISTANCE,
            link_base_alpha: LINK_BASE_ALPHA,
            link_alpha_falloff: LINK_ALPHA_FALLOFF,
            fill_alpha: PARTICLE_FILL_ALPHA,
            rgb: PARTICLE_RGB,
            link_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slide_count: usize,
    pub lock_ms: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { slide_count: 5, lock_ms: CAROUSEL_LOCK_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub touch: GestureProfile,
    pub drag: GestureProfile,
    pub touch_scroll_lock_px: f64,
    pub wheel_min_delta_px: f64,
    pub wheel_cooldown_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch: GestureProfile::touch(),
            drag: GestureProfile::drag(),
            touch_scroll_lock_px: TOUCH_SCROLL_LOCK_PX,
            wheel_min_delta_px: WHEEL_MIN_DELTA_PX,
            wheel_cooldown_ms: WHEEL_COOLDOWN_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub grid_stagger_ms: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, grid_stagger_ms: GRID_OBSERVE_STAGGER_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub submit_delay_ms: f64,
    pub pending_label: String,
    pub pending_color: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: REGISTER_DELAY_MS,
            pending_label: REGISTER_PENDING_LABEL.to_owned(),
            pending_color: REGISTER_PENDING_COLOR.to_owned(),
        }
    }
}

impl LandingConfig {
    /// Parse a JSON config block and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::Invalid`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if p.count == 0 {
            return Err(invalid("particles.count", "must be at least 1"));
        }
        if p.max_speed < 0.0 {
            return Err(invalid("particles.max_speed", "must not be negative"));
        }
        if p.min_radius <= 0.0 || p.max_radius < p.min_radius {
            return Err(invalid("particles.radius", "requires 0 < min_radius <= max_radius"));
        }
        if p.link_distance <= 0.0 {
            return Err(invalid("particles.link_distance", "must be positive"));
        }
        if p.link_alpha_falloff <= 0.0 {
            return Err(invalid("particles.link_alpha_falloff", "must be positive"));
        }
        if self.carousel.slide_count == 0 {
            return Err(invalid("carousel.slide_count", "must be at least 1"));
        }
        if self.carousel.lock_ms < 0.0 {
            return Err(invalid("carousel.lock_ms", "must not be negative"));
        }
        for (field, profile) in [("gestures.touch", &self.gestures.touch), ("gestures.drag", &self.gestures.drag)] {
            if profile.fast_threshold < 0.0 || profile.slow_threshold < profile.fast_threshold {
                return Err(invalid(field, "requires 0 <= fast_threshold <= slow_threshold"));
            }
        }
        if self.gestures.wheel_cooldown_ms < 0.0 {
            return Err(invalid("gestures.wheel_cooldown_ms", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold", "must be within [0, 1]"));
        }
        if self.modal.submit_delay_ms < 0.0 {
            return Err(invalid("modal.submit_delay_ms", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

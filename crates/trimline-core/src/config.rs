//! Tunables for the trim timeline.
//!
//! Every section defaults independently, so a JSON document only needs the
//! keys it overrides.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, TrimlineError};
use crate::range::DEFAULT_MINIMUM_TRIM_LENGTH;

/// Selection constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Minimum distance between the handles, in domain units.
    pub minimum_trim_length: f32,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            minimum_trim_length: DEFAULT_MINIMUM_TRIM_LENGTH,
        }
    }
}

/// Handle and boundary decoration sizes, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    pub width: f32,
    pub height: f32,
    /// Thickness of the top/bottom selection boundary.
    pub boundary_thickness: f32,
    /// Extra hit-test margin around each handle.
    pub hit_slop: f32,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 80.0,
            boundary_thickness: 4.0,
            hit_slop: 8.0,
        }
    }
}

/// Virtualized item row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub item_width: f32,
    pub item_height: f32,
    pub initial_items: usize,
    pub min_items: usize,
    pub max_items: usize,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            item_width: 40.0,
            item_height: 80.0,
            initial_items: 5,
            min_items: 2,
            max_items: 40,
        }
    }
}

/// Pinch-to-zoom throttling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Accumulated scale change needed before one item is inserted/removed.
    pub scale_threshold: f32,
    /// Minimum time between two structural commits.
    pub debounce_ms: u64,
    pub min_overlay_scale: f32,
    pub max_overlay_scale: f32,
}

impl ZoomConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_threshold: 0.2,
            debounce_ms: 200,
            min_overlay_scale: 1.0,
            max_overlay_scale: 1.5,
        }
    }
}

/// Scroll offset animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Convergence speed of animated offset changes (higher = faster).
    pub animation_speed: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_speed: 18.0,
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimlineConfig {
    pub trim: TrimConfig,
    pub handles: HandleConfig,
    pub track: TrackConfig,
    pub zoom: ZoomConfig,
    pub scroll: ScrollConfig,
}

impl TrimlineConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)
            .map_err(|e| TrimlineError::Serialization(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TrimlineError::Serialization(format!("Failed to serialize config: {}", e)))
    }

    /// Reject combinations the models cannot honor.
    pub fn validate(&self) -> Result<()> {
        let min_len = self.trim.minimum_trim_length;
        if !(min_len > 0.0 && min_len < 1.0) {
            return Err(invalid(format!(
                "minimum_trim_length must be in (0, 1), got {}",
                min_len
            )));
        }
        if !positive(self.handles.width) || !positive(self.handles.height) {
            return Err(invalid("handle width and height must be positive"));
        }
        if !(self.handles.boundary_thickness >= 0.0 && self.handles.hit_slop >= 0.0) {
            return Err(invalid("boundary_thickness and hit_slop must not be negative"));
        }

        let track = &self.track;
        if !positive(track.item_width) || !positive(track.item_height) {
            return Err(invalid("item width and height must be positive"));
        }
        if track.min_items == 0 || track.min_items > track.max_items {
            return Err(invalid(format!(
                "item bounds must satisfy 0 < min_items <= max_items, got {}..{}",
                track.min_items, track.max_items
            )));
        }
        if !(track.min_items..=track.max_items).contains(&track.initial_items) {
            return Err(invalid(format!(
                "initial_items {} outside {}..={}",
                track.initial_items, track.min_items, track.max_items
            )));
        }

        let zoom = &self.zoom;
        if !positive(zoom.scale_threshold) {
            return Err(invalid("scale_threshold must be positive"));
        }
        if !positive(zoom.min_overlay_scale) || zoom.min_overlay_scale > zoom.max_overlay_scale {
            return Err(invalid("overlay scale bounds must satisfy 0 < min <= max"));
        }
        if !positive(self.scroll.animation_speed) {
            return Err(invalid("scroll animation_speed must be positive"));
        }
        Ok(())
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn invalid(msg: impl Into<String>) -> TrimlineError {
    TrimlineError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrimlineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.track.initial_items, 5);
        assert_eq!(config.zoom.debounce(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TrimlineConfig::from_json(r#"{ "track": { "item_width": 32.0 } }"#).unwrap();
        assert_eq!(config.track.item_width, 32.0);
        assert_eq!(config.track.max_items, 40);
        assert_eq!(config.trim.minimum_trim_length, 0.2);
    }

    #[test]
    fn test_round_trip_json() {
        let mut config = TrimlineConfig::default();
        config.zoom.debounce_ms = 350;
        let json = config.to_json().unwrap();
        assert_eq!(TrimlineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_item_bounds() {
        let err = TrimlineConfig::from_json(r#"{ "track": { "min_items": 10, "max_items": 4 } }"#)
            .unwrap_err();
        assert!(matches!(err, TrimlineError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_initial_items_out_of_bounds() {
        let mut config = TrimlineConfig::default();
        config.track.initial_items = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_trim_length() {
        let mut config = TrimlineConfig::default();
        config.trim.minimum_trim_length = 1.0;
        assert!(config.validate().is_err());
        config.trim.minimum_trim_length = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = TrimlineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TrimlineError::Serialization(_)));
    }
}

//! Tunable studio settings.

use crate::color::{DEFAULT_COLOR, Rgb};
use crate::error::{StudioError, StudioResult};
use crate::history::DEFAULT_HISTORY_LEN;
use crate::view::{MAX_ZOOM, MIN_ZOOM};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Studio settings. Every field has a default, so a partial JSON object is
/// a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Colors kept in the history.
    pub history_len: usize,
    /// Color selected before the first pick.
    pub initial_color: Rgb,
    /// Disarm the picker after each successful pick.
    pub deactivate_after_pick: bool,
    /// Fullscreen zoom bounds.
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Factor applied per zoom-in step (zoom-out uses its inverse).
    pub zoom_step: f64,
    /// Gap kept around the image when fitting it fullscreen.
    pub fullscreen_padding: f64,
    /// The container only accepts sizes strictly larger than this.
    pub min_container_size: Size,
    /// How long a copied value is reported as "copied".
    pub copy_feedback_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_len: DEFAULT_HISTORY_LEN,
            initial_color: DEFAULT_COLOR,
            deactivate_after_pick: false,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: 1.25,
            fullscreen_padding: 32.0,
            min_container_size: Size::new(400.0, 300.0),
            copy_feedback_ms: 2000,
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> StudioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> StudioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.history_len == 0 {
            return Err(StudioError::InvalidConfig("history_len must be at least 1".into()));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(StudioError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min <= max, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_step > 1.0 && self.zoom_step.is_finite()) {
            return Err(StudioError::InvalidConfig(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        if !(self.fullscreen_padding >= 0.0) {
            return Err(StudioError::InvalidConfig("fullscreen_padding must not be negative".into()));
        }
        Ok(())
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.history_len, 10);
        assert_eq!(config.initial_color.to_hex(), "#6366f1");
        assert_eq!(config.copy_feedback(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = StudioConfig::from_json_str(r#"{ "history_len": 5, "deactivate_after_pick": true }"#)
            .unwrap();
        assert_eq!(config.history_len, 5);
        assert!(config.deactivate_after_pick);
        assert!((config.max_zoom - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = StudioConfig {
            initial_color: Rgb::new(1, 2, 3),
            ..StudioConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(StudioConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StudioConfig::from_json_str("{ history_len: }"),
            Err(StudioError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        for json in [
            r#"{ "history_len": 0 }"#,
            r#"{ "min_zoom": 0.0 }"#,
            r#"{ "min_zoom": 6.0 }"#,
            r#"{ "zoom_step": 0.5 }"#,
            r#"{ "fullscreen_padding": -1.0 }"#,
        ] {
            assert!(
                matches!(StudioConfig::from_json_str(json), Err(StudioError::InvalidConfig(_))),
                "{json}"
            );
        }
    }
}

//! Detector configuration
//!
//! Defaults are the values the counter shipped with. The host may override
//! any subset from a JS object; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::detection::{Exercise, Thresholds};
use crate::error::DetectorError;
use crate::metrics::DEFAULT_WINDOW;

/// Configuration for rep and gesture detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Number of metric values in the moving average.
    pub smoothing_window: usize,
    /// Minimum time between counted reps in milliseconds.
    pub rep_cooldown_ms: f64,
    /// Minimum time between set-advance gestures in milliseconds.
    pub gesture_cooldown_ms: f64,
    pub squat: Thresholds,
    pub bench: Thresholds,
    pub deadlift: Thresholds,
    /// How long the skeleton flashes after a rep.
    pub rep_highlight_ms: f64,
    /// Fewer body keypoints than this shows the step-back hint.
    pub full_body_min_keypoints: usize,
    /// Keypoints with a reported visibility below this are treated as missing.
    pub min_visibility: Option<f32>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_WINDOW,
            rep_cooldown_ms: 1000.0,
            gesture_cooldown_ms: 2000.0,
            squat: Thresholds::SQUAT,
            bench: Thresholds::BENCH,
            deadlift: Thresholds::DEADLIFT,
            rep_highlight_ms: 500.0,
            full_body_min_keypoints: 20,
            min_visibility: None,
        }
    }
}

impl DetectorConfig {
    pub fn thresholds(&self, exercise: Exercise) -> Thresholds {
        match exercise {
            Exercise::Squat => self.squat,
            Exercise::Bench => self.bench,
            Exercise::Deadlift => self.deadlift,
        }
    }

    pub fn validate(&self) -> Result<(), DetectorError> {
        if self.smoothing_window == 0 {
            return Err(DetectorError::InvalidConfig("smoothing window must be at least 1".into()));
        }

        let durations = [
            ("rep cooldown", self.rep_cooldown_ms),
            ("gesture cooldown", self.gesture_cooldown_ms),
            ("rep highlight", self.rep_highlight_ms),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(DetectorError::InvalidConfig(format!("{} must be a non-negative duration, got {}", name, value)));
            }
        }

        for exercise in crate::detection::EXERCISES {
            let t = self.thresholds(exercise);
            if !t.has_band(exercise.direction()) {
                return Err(DetectorError::InvalidConfig(format!(
                    "{} thresholds down={} up={} leave no hysteresis band",
                    exercise.id(), t.down, t.up
                )));
            }
        }

        if let Some(v) = self.min_visibility {
            if !(0.0..=1.0).contains(&v) {
                return Err(DetectorError::InvalidConfig(format!("min visibility {} outside [0, 1]", v)));
            }
        }

        Ok(())
    }
}

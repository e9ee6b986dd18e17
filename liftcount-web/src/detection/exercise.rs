//! Exercise selection and per-exercise thresholds

use serde::{Deserialize, Serialize};

use crate::error::DetectorError;

/// Exercises the counter understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Squat,
    Bench,
    Deadlift,
}

/// All exercises in button order
pub const EXERCISES: [Exercise; 3] = [Exercise::Squat, Exercise::Bench, Exercise::Deadlift];

/// Which way the metric moves when the lifter goes down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Smaller metric = more flexed = down (joint angles)
    Decreasing,
    /// Larger metric = wrists lower = down (deadlift displacement)
    Increasing,
}

impl Exercise {
    /// Parse a host-side exercise id
    pub fn from_id(id: &str) -> Result<Self, DetectorError> {
        match id.trim().to_lowercase().as_str() {
            "squat" => Ok(Exercise::Squat),
            "bench" | "benchpress" | "bench_press" => Ok(Exercise::Bench),
            "deadlift" => Ok(Exercise::Deadlift),
            _ => Err(DetectorError::UnknownExercise(id.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Bench => "bench",
            Exercise::Deadlift => "deadlift",
        }
    }

    /// Key under which achievements are stored per user
    pub fn storage_key(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Bench => "benchpress",
            Exercise::Deadlift => "deadlift",
        }
    }

    /// Label shown above the counter
    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Squat => "SQUAT",
            Exercise::Bench => "BENCH PRESS",
            Exercise::Deadlift => "DEADLIFT",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Exercise::Squat | Exercise::Bench => Direction::Decreasing,
            Exercise::Deadlift => Direction::Increasing,
        }
    }

    /// Value shown in the debug overlay: degrees for angles,
    /// percent of frame height for the deadlift displacement
    pub fn display_value(&self, metric: f32) -> f32 {
        match self {
            Exercise::Deadlift => metric * 100.0,
            _ => metric,
        }
    }
}

/// DOWN and UP crossing points for one exercise
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub down: f32,
    pub up: f32,
}

impl Thresholds {
    pub const SQUAT: Thresholds = Thresholds { down: 95.0, up: 160.0 };
    pub const BENCH: Thresholds = Thresholds { down: 65.0, up: 155.0 };
    pub const DEADLIFT: Thresholds = Thresholds { down: 0.15, up: 0.05 };

    /// Metric is past the DOWN threshold
    pub fn is_down(&self, direction: Direction, metric: f32) -> bool {
        match direction {
            Direction::Decreasing => metric < self.down,
            Direction::Increasing => metric > self.down,
        }
    }

    /// Metric is past the UP threshold
    pub fn is_up(&self, direction: Direction, metric: f32) -> bool {
        match direction {
            Direction::Decreasing => metric > self.up,
            Direction::Increasing => metric < self.up,
        }
    }

    /// DOWN and UP are separated by a non-empty band in the right direction
    pub fn has_band(&self, direction: Direction) -> bool {
        if !self.down.is_finite() || !self.up.is_finite() {
            return false;
        }
        match direction {
            Direction::Decreasing => self.down < self.up,
            Direction::Increasing => self.down > self.up,
        }
    }
}

//! UP/DOWN rep state machine with hysteresis and cooldown
//!
//! A rep is only counted on DOWN → UP. Between the two thresholds nothing
//! happens, and for `cooldown_ms` after a rep every update is a no-op.

use serde::{Deserialize, Serialize};

use super::exercise::{Direction, Exercise, Thresholds};

/// Where the lifter is in the movement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    #[default]
    Up,
    Down,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Up => "UP",
            Phase::Down => "DOWN",
        }
    }
}

/// Result of feeding one smoothed metric
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepTransition {
    /// No threshold crossed, or still cooling down
    None,
    /// UP → DOWN
    WentDown,
    /// DOWN → UP, one repetition finished
    RepCompleted,
}

/// Rep state for the currently selected exercise
#[derive(Clone, Debug)]
pub struct ExerciseStateMachine {
    thresholds: Thresholds,
    direction: Direction,
    /// Minimum time between counted reps
    cooldown_ms: f64,
    phase: Phase,
    /// Timestamp of the last counted rep, None before the first
    last_rep_ms: Option<f64>,
}

impl ExerciseStateMachine {
    pub fn new(exercise: Exercise, thresholds: Thresholds, cooldown_ms: f64) -> Self {
        Self {
            thresholds,
            direction: exercise.direction(),
            cooldown_ms,
            phase: Phase::Up,
            last_rep_ms: None,
        }
    }

    /// True while a rep was counted less than `cooldown_ms` ago
    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        match self.last_rep_ms {
            Some(last) => now_ms - last < self.cooldown_ms,
            None => false,
        }
    }

    /// Feed one smoothed metric value
    pub fn update(&mut self, metric: f32, now_ms: f64) -> RepTransition {
        if self.is_cooling_down(now_ms) {
            return RepTransition::None;
        }

        match self.phase {
            Phase::Up if self.thresholds.is_down(self.direction, metric) => {
                self.phase = Phase::Down;
                log::debug!("phase UP -> DOWN at metric {:.3}", metric);
                RepTransition::WentDown
            }
            Phase::Down if self.thresholds.is_up(self.direction, metric) => {
                self.phase = Phase::Up;
                self.last_rep_ms = Some(now_ms);
                log::debug!("phase DOWN -> UP at metric {:.3}", metric);
                RepTransition::RepCompleted
            }
            _ => RepTransition::None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_rep_ms(&self) -> Option<f64> {
        self.last_rep_ms
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Back to UP with no cooldown pending
    pub fn reset(&mut self) {
        self.phase = Phase::Up;
        self.last_rep_ms = None;
    }
}

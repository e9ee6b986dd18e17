//! DetectorSession - owns all mutable counting state
//!
//! Host commands: select an exercise, reset, feed frames with an explicit
//! timestamp. Nothing here reads the clock or touches the page.

use crate::config::DetectorConfig;
use crate::detection::{Exercise, ExerciseStateMachine, GestureDebouncer, Phase, RepTransition};
use crate::error::{DetectorError, RecordError};
use crate::metrics::{compute_metric, MetricUnavailable, SmoothingWindow};
use crate::pose::{BodyFrame, HandFrame, Keypoint, PoseDetection};
use crate::records::{AchievementRecord, SetRecord};

use super::events::{FrameEvents, RepEvent, SessionStatus, SetAdvanceEvent};

pub struct DetectorSession {
    config: DetectorConfig,
    exercise: Exercise,
    machine: ExerciseStateMachine,
    window: SmoothingWindow,
    gesture: GestureDebouncer,

    /// Reps in the current set
    rep_count: u32,
    /// 1-based number of the current set
    set_number: u32,
    /// Finished sets with at least one rep
    completed: Vec<SetRecord>,

    last_metric: Option<f32>,
    /// Drives the rep highlight. Survives exercise switches, unlike the
    /// machine's own cooldown clock; cleared only by reset.
    last_rep_at: Option<f64>,
    needs_full_body: bool,
}

impl DetectorSession {
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: DetectorConfig) -> Self {
        let exercise = Exercise::Squat;
        Self {
            machine: ExerciseStateMachine::new(exercise, config.thresholds(exercise), config.rep_cooldown_ms),
            window: SmoothingWindow::with_capacity(config.smoothing_window),
            gesture: GestureDebouncer::new(config.gesture_cooldown_ms),
            exercise,
            rep_count: 0,
            set_number: 1,
            completed: Vec::new(),
            last_metric: None,
            last_rep_at: None,
            needs_full_body: false,
            config,
        }
    }

    // ========================================================================
    // HOST COMMANDS
    // ========================================================================

    /// Switch exercise. Phase, smoothing window and rep cooldown start over;
    /// the rep count and set ledger carry on.
    pub fn select_exercise(&mut self, exercise: Exercise) {
        self.exercise = exercise;
        self.machine = ExerciseStateMachine::new(
            exercise,
            self.config.thresholds(exercise),
            self.config.rep_cooldown_ms,
        );
        self.window.clear();
        self.last_metric = None;
        log::info!("exercise selected: {}", exercise.id());
    }

    pub fn select_exercise_id(&mut self, id: &str) -> Result<(), DetectorError> {
        let exercise = Exercise::from_id(id)?;
        self.select_exercise(exercise);
        Ok(())
    }

    /// Back to set 1, zero reps, UP, empty window, no cooldowns
    pub fn reset(&mut self) {
        self.machine.reset();
        self.window.clear();
        self.gesture.reset();
        self.rep_count = 0;
        self.set_number = 1;
        self.completed.clear();
        self.last_metric = None;
        self.last_rep_at = None;
        self.needs_full_body = false;
        log::info!("session reset");
    }

    /// Body and hands of one detector pass, body first
    pub fn feed_frame(&mut self, detection: &PoseDetection, now_ms: f64) -> FrameEvents {
        let rep = self.feed_body(&detection.body_keypoints, now_ms);
        let set_advance = self.feed_hands(&detection.hands_keypoints, now_ms);
        FrameEvents { rep, set_advance }
    }

    /// Feed one body frame. Unmeasurable frames are no-ops.
    pub fn feed_body(&mut self, keypoints: &[Keypoint], now_ms: f64) -> Option<RepEvent> {
        let frame = BodyFrame::new(keypoints);
        if frame.is_empty() {
            return None;
        }
        self.needs_full_body = frame.len() < self.config.full_body_min_keypoints;

        if self.machine.is_cooling_down(now_ms) {
            return None;
        }

        let metric = match compute_metric(self.exercise, &frame, self.config.min_visibility) {
            Ok(metric) => metric,
            Err(err @ MetricUnavailable::IncompleteFrame(_)) => {
                log::warn!("skipping body frame: {}", err);
                return None;
            }
            Err(err) => {
                log::trace!("skipping body frame: {}", err);
                return None;
            }
        };

        let smoothed = self.window.smooth(metric);
        self.last_metric = Some(smoothed);

        match self.machine.update(smoothed, now_ms) {
            RepTransition::RepCompleted => {
                self.rep_count += 1;
                self.last_rep_at = Some(now_ms);
                log::info!("{} rep {} (set {})", self.exercise.id(), self.rep_count, self.set_number);
                Some(RepEvent {
                    exercise: self.exercise,
                    count: self.rep_count,
                    smoothed_metric: smoothed,
                    display_value: self.exercise.display_value(smoothed),
                    state: self.machine.phase(),
                })
            }
            RepTransition::WentDown | RepTransition::None => None,
        }
    }

    /// Feed every hand of one frame
    pub fn feed_hands<H: AsRef<[Keypoint]>>(&mut self, hands: &[H], now_ms: f64) -> Option<SetAdvanceEvent> {
        if hands.is_empty() {
            return None;
        }
        let frames: Vec<HandFrame<'_>> = hands.iter().map(|h| HandFrame::new(h.as_ref())).collect();

        if self.gesture.update(&frames, now_ms) {
            Some(self.advance_set())
        } else {
            None
        }
    }

    fn advance_set(&mut self) -> SetAdvanceEvent {
        let completed_reps = self.rep_count;
        if completed_reps > 0 {
            self.completed.push(SetRecord { set_number: self.set_number, reps: completed_reps });
        }
        self.set_number += 1;
        self.rep_count = 0;
        self.window.clear();
        self.last_metric = None;
        log::info!("palm raised: set {} started ({} reps in previous set)", self.set_number, completed_reps);
        SetAdvanceEvent { set_number: self.set_number, completed_reps }
    }

    // ========================================================================
    // READ SIDE
    // ========================================================================

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn set_number(&self) -> u32 {
        self.set_number
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn smoothed_metric(&self) -> Option<f32> {
        self.last_metric
    }

    pub fn window(&self) -> &SmoothingWindow {
        &self.window
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Finished sets plus the current one when it has reps
    pub fn completed_sets(&self) -> Vec<SetRecord> {
        let mut sets = self.completed.clone();
        if self.rep_count > 0 {
            sets.push(SetRecord { set_number: self.set_number, reps: self.rep_count });
        }
        sets
    }

    /// Build the achievement record for storage. The session is left as is.
    pub fn finish(&self, weight: f64, timestamp_ms: f64) -> Result<AchievementRecord, RecordError> {
        AchievementRecord::from_sets(weight, self.completed_sets(), timestamp_ms)
    }

    pub fn status(&self, now_ms: f64) -> SessionStatus {
        let rep_highlight = match self.last_rep_at {
            Some(at) => now_ms - at <= self.config.rep_highlight_ms,
            None => false,
        };
        SessionStatus {
            exercise: self.exercise,
            label: self.exercise.label().to_string(),
            rep_count: self.rep_count,
            set_number: self.set_number,
            state: self.machine.phase(),
            smoothed_metric: self.last_metric,
            display_value: self.last_metric.map(|m| self.exercise.display_value(m)),
            rep_highlight,
            needs_full_body: self.needs_full_body,
            palm_open: self.gesture.is_palm_open(),
        }
    }
}

impl Default for DetectorSession {
    fn default() -> Self {
        Self::with_valid_config(DetectorConfig::default())
    }
}

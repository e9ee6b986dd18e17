//! Events and status handed to the rendering layer

use serde::{Deserialize, Serialize};

use crate::detection::{Exercise, Phase};

/// A repetition was counted
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepEvent {
    pub exercise: Exercise,
    /// Reps in the current set, including this one
    pub count: u32,
    pub smoothed_metric: f32,
    pub display_value: f32,
    pub state: Phase,
}

/// The raised-palm gesture started a new set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAdvanceEvent {
    /// Number of the set that just started
    pub set_number: u32,
    /// Reps of the set that just finished
    pub completed_reps: u32,
}

/// Everything one detector pass produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEvents {
    pub rep: Option<RepEvent>,
    pub set_advance: Option<SetAdvanceEvent>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        self.rep.is_none() && self.set_advance.is_none()
    }
}

/// Snapshot for the counter display and debug overlay
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub exercise: Exercise,
    pub label: String,
    pub rep_count: u32,
    pub set_number: u32,
    pub state: Phase,
    /// Latest smoothed metric, None until a measurable frame arrives
    pub smoothed_metric: Option<f32>,
    pub display_value: Option<f32>,
    /// Skeleton should flash: a rep was counted moments ago
    pub rep_highlight: bool,
    /// Last body frame was too partial ("step back")
    pub needs_full_body: bool,
    pub palm_open: bool,
}

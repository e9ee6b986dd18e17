//! Keypoint and frame shapes produced by the landmark detector
//!
//! Coordinates are normalized to [0,1] with the origin at the top-left,
//! so `y` grows downward.

use serde::{Deserialize, Serialize};

/// Keypoints in a complete MediaPipe Pose frame
pub const BODY_KEYPOINTS: usize = 33;

/// Keypoints in a complete MediaPipe Hands frame
pub const HAND_KEYPOINTS: usize = 21;

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    /// Detector confidence, when the detector reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Whether this point can be used for measurement.
    ///
    /// Non-finite coordinates never count. A known visibility below
    /// `min_visibility` counts as undetected.
    pub fn is_detected(&self, min_visibility: Option<f32>) -> bool {
        if !self.x.is_finite() || !self.y.is_finite() {
            return false;
        }
        match (min_visibility, self.visibility) {
            (Some(min), Some(v)) => v >= min,
            _ => true,
        }
    }

    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One body detection pass. Borrowed by the detector, never retained.
#[derive(Clone, Copy, Debug)]
pub struct BodyFrame<'a> {
    keypoints: &'a [Keypoint],
}

impl<'a> BodyFrame<'a> {
    pub fn new(keypoints: &'a [Keypoint]) -> Self {
        Self { keypoints }
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Full MediaPipe Pose frame (33 points or more)
    pub fn is_complete(&self) -> bool {
        self.keypoints.len() >= BODY_KEYPOINTS
    }

    /// Detected keypoint at `index`, or None for short frames and
    /// undetected points
    pub fn get(&self, index: usize, min_visibility: Option<f32>) -> Option<Keypoint> {
        self.keypoints
            .get(index)
            .copied()
            .filter(|k| k.is_detected(min_visibility))
    }
}

/// One hand from a hand detection pass
#[derive(Clone, Copy, Debug)]
pub struct HandFrame<'a> {
    keypoints: &'a [Keypoint],
}

impl<'a> HandFrame<'a> {
    pub fn new(keypoints: &'a [Keypoint]) -> Self {
        Self { keypoints }
    }

    pub fn is_complete(&self) -> bool {
        self.keypoints.len() >= HAND_KEYPOINTS
    }

    pub fn get(&self, index: usize) -> Option<Keypoint> {
        self.keypoints
            .get(index)
            .copied()
            .filter(|k| k.is_detected(None))
    }
}

/// Output of one landmark-detector pass: at most one body, any number of hands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoseDetection {
    pub body_keypoints: Vec<Keypoint>,
    pub hands_keypoints: Vec<Vec<Keypoint>>,
}

impl PoseDetection {
    pub fn body(&self) -> BodyFrame<'_> {
        BodyFrame::new(&self.body_keypoints)
    }

    pub fn hands(&self) -> Vec<HandFrame<'_>> {
        self.hands_keypoints.iter().map(|h| HandFrame::new(h)).collect()
    }
}

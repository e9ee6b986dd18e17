//! Pose module - keypoint data shapes and MediaPipe landmark indices
//!
//! Re-exports only. All logic in submodules.

mod keypoint;
mod indices;

pub use keypoint::{Keypoint, BodyFrame, HandFrame, PoseDetection, BODY_KEYPOINTS, HAND_KEYPOINTS};
pub use indices::{
    // Body (MediaPipe Pose - 33 total)
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    // Hand (MediaPipe Hands - 21 total)
    WRIST, THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP,
    FINGERTIPS,
};

//! Per-exercise scalar metric from one body frame
//!
//! - squat: mean knee angle (hip-knee-ankle), degrees
//! - bench: mean elbow angle (shoulder-elbow-wrist), degrees
//! - deadlift: mean wrist y minus mean hip y (positive = wrists below hips)

use thiserror::Error;

use super::angles::calculate_joint_angle;
use crate::detection::Exercise;
use crate::pose::{
    BodyFrame,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};

/// The frame cannot be measured for the selected exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MetricUnavailable {
    #[error("frame has {0} keypoints, expected 33")]
    IncompleteFrame(usize),
    #[error("keypoint {0} not detected")]
    MissingKeypoint(usize),
}

/// Compute the metric that drives the rep state machine
pub fn compute_metric(
    exercise: Exercise,
    frame: &BodyFrame<'_>,
    min_visibility: Option<f32>,
) -> Result<f32, MetricUnavailable> {
    if !frame.is_complete() {
        return Err(MetricUnavailable::IncompleteFrame(frame.len()));
    }

    let point = |index: usize| {
        frame
            .get(index, min_visibility)
            .map(|k| k.xy())
            .ok_or(MetricUnavailable::MissingKeypoint(index))
    };

    match exercise {
        Exercise::Squat => {
            let left = calculate_joint_angle(point(LEFT_HIP)?, point(LEFT_KNEE)?, point(LEFT_ANKLE)?);
            let right = calculate_joint_angle(point(RIGHT_HIP)?, point(RIGHT_KNEE)?, point(RIGHT_ANKLE)?);
            Ok((left + right) / 2.0)
        }
        Exercise::Bench => {
            let left = calculate_joint_angle(point(LEFT_SHOULDER)?, point(LEFT_ELBOW)?, point(LEFT_WRIST)?);
            let right = calculate_joint_angle(point(RIGHT_SHOULDER)?, point(RIGHT_ELBOW)?, point(RIGHT_WRIST)?);
            Ok((left + right) / 2.0)
        }
        Exercise::Deadlift => {
            let wrist_y = (point(LEFT_WRIST)?.1 + point(RIGHT_WRIST)?.1) / 2.0;
            let hip_y = (point(LEFT_HIP)?.1 + point(RIGHT_HIP)?.1) / 2.0;
            Ok(wrist_y - hip_y)
        }
    }
}

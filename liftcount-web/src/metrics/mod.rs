//! Metrics module - per-frame joint angles, displacement and smoothing
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod metric;
mod smoothing;

pub use angles::calculate_joint_angle;
pub use metric::{compute_metric, MetricUnavailable};
pub use smoothing::{SmoothingWindow, DEFAULT_WINDOW};

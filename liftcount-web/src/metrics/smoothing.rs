//! Moving-average smoothing over the last few metric values
//!
//! FIFO window: the oldest value is evicted once capacity is exceeded.

use std::collections::VecDeque;

/// Number of values averaged by default
pub const DEFAULT_WINDOW: usize = 5;

/// Bounded history of recent metric values
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingWindow {
    values: VecDeque<f32>,
    capacity: usize,
}

impl SmoothingWindow {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a new value, returns the mean of the retained values
    pub fn smooth(&mut self, value: f32) -> f32 {
        self.values.push_back(value);

        if self.values.len() > self.capacity {
            self.values.pop_front();
        }

        self.mean().unwrap_or(value)
    }

    /// Mean of the retained values, None when empty
    pub fn mean(&self) -> Option<f32> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f32 = self.values.iter().sum();
        Some(sum / self.values.len() as f32)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained values, oldest first
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// Clear history (exercise switch, set advance, reset)
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self::new()
    }
}

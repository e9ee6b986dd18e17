//! Achievement record written by the storage layer when a session ends
//!
//! totalVolume = weight × totalReps. A record is a new personal best when
//! there is no previous one or its volume is strictly greater.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Reps completed in one set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub set_number: u32,
    pub reps: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub weight: f64,
    pub sets: Vec<SetRecord>,
    pub total_reps: u32,
    pub total_volume: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

impl AchievementRecord {
    pub fn from_sets(weight: f64, sets: Vec<SetRecord>, timestamp: f64) -> Result<Self, RecordError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RecordError::InvalidWeight(weight));
        }
        if sets.is_empty() {
            return Err(RecordError::NoSets);
        }

        let total_reps: u32 = sets.iter().map(|s| s.reps).sum();
        Ok(Self {
            weight,
            sets,
            total_reps,
            total_volume: weight * total_reps as f64,
            timestamp,
        })
    }

    /// Personal-best rule
    pub fn beats(&self, previous: Option<&AchievementRecord>) -> bool {
        match previous {
            Some(prev) => self.total_volume > prev.total_volume,
            None => true,
        }
    }
}

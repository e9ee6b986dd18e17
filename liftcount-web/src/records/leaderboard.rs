//! Leaderboard rows from stored user documents
//!
//! Stored data is read leniently: a null, missing or non-finite weight
//! counts as 0, a set without reps counts as 0 reps. Older documents stored
//! `sets` as a bare count instead of a list; those still rank, using the
//! stored totalReps when present.

use serde::{Deserialize, Deserializer, Serialize};

use crate::detection::{Exercise, EXERCISES};

/// null reads as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// null and non-finite read as 0
fn finite_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// One stored set; either field may be absent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredSet {
    #[serde(deserialize_with = "null_as_default")]
    pub set_number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub reps: u32,
}

/// `sets` as found in storage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredSets {
    List(Vec<StoredSet>),
    Count(u32),
}

impl Default for StoredSets {
    fn default() -> Self {
        StoredSets::List(Vec::new())
    }
}

/// An achievement as read back from storage (fields may be missing)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredAchievement {
    #[serde(deserialize_with = "finite_or_zero")]
    pub weight: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sets: StoredSets,
    #[serde(deserialize_with = "null_as_default")]
    pub total_reps: u32,
}

impl StoredAchievement {
    /// Weight used for ranking; non-finite counts as 0
    pub fn weight(&self) -> f64 {
        if self.weight.is_finite() { self.weight } else { 0.0 }
    }

    pub fn reps(&self) -> u32 {
        match &self.sets {
            StoredSets::List(sets) => sets.iter().map(|s| s.reps).sum(),
            StoredSets::Count(n) => {
                if self.total_reps > 0 { self.total_reps } else { *n }
            }
        }
    }

    pub fn set_count(&self) -> u32 {
        match &self.sets {
            StoredSets::List(sets) => sets.len() as u32,
            StoredSets::Count(n) => *n,
        }
    }

    pub fn volume(&self) -> f64 {
        self.weight() * self.reps() as f64
    }
}

/// Per-exercise records, keyed by storage key
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseAchievements {
    pub squat: Option<StoredAchievement>,
    pub benchpress: Option<StoredAchievement>,
    pub deadlift: Option<StoredAchievement>,
}

/// One user document: `{displayName, email, achievements: {squat?, ...}}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAchievements {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: ExerciseAchievements,
}

impl UserAchievements {
    pub fn get(&self, exercise: Exercise) -> Option<&StoredAchievement> {
        match exercise {
            Exercise::Squat => self.achievements.squat.as_ref(),
            Exercise::Bench => self.achievements.benchpress.as_ref(),
            Exercise::Deadlift => self.achievements.deadlift.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub weight: f64,
    pub total_reps: u32,
    pub total_volume: f64,
}

/// Leaderboard tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardView {
    Overall,
    Exercise(Exercise),
}

impl LeaderboardView {
    pub fn from_id(id: &str) -> Option<Self> {
        if id.eq_ignore_ascii_case("overall") {
            return Some(LeaderboardView::Overall);
        }
        Exercise::from_id(id).ok().map(LeaderboardView::Exercise)
    }
}

fn ranked(mut rows: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    rows.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i as u32 + 1;
    }
    rows
}

/// One row per user holding a record for `exercise`
pub fn rank_exercise(users: &[UserAchievements], exercise: Exercise) -> Vec<LeaderboardEntry> {
    let rows = users
        .iter()
        .filter_map(|user| {
            user.get(exercise).map(|ach| LeaderboardEntry {
                rank: 0,
                name: user.display_name.clone(),
                weight: ach.weight(),
                total_reps: ach.reps(),
                total_volume: ach.volume(),
            })
        })
        .collect();
    ranked(rows)
}

/// Summed reps and volume across all exercises, heaviest weight shown.
/// Users with no volume are left out.
pub fn rank_overall(users: &[UserAchievements]) -> Vec<LeaderboardEntry> {
    let rows = users
        .iter()
        .filter_map(|user| {
            let mut row = LeaderboardEntry {
                rank: 0,
                name: user.display_name.clone(),
                weight: 0.0,
                total_reps: 0,
                total_volume: 0.0,
            };
            for ach in EXERCISES.iter().filter_map(|e| user.get(*e)) {
                row.total_reps += ach.reps();
                row.total_volume += ach.volume();
                row.weight = row.weight.max(ach.weight());
            }
            (row.total_volume > 0.0).then_some(row)
        })
        .collect();
    ranked(rows)
}

pub fn rank(users: &[UserAchievements], view: LeaderboardView) -> Vec<LeaderboardEntry> {
    match view {
        LeaderboardView::Overall => rank_overall(users),
        LeaderboardView::Exercise(exercise) => rank_exercise(users, exercise),
    }
}

/// Dashboard total for one user
pub fn user_total_volume(user: &UserAchievements) -> f64 {
    EXERCISES.iter().filter_map(|e| user.get(*e)).map(|a| a.volume()).sum()
}

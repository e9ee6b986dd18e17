//! Records module - achievement shape handed to storage, leaderboard rows
//!
//! Re-exports only. All logic in submodules.

mod achievement;
mod leaderboard;

pub use achievement::{SetRecord, AchievementRecord};
pub use leaderboard::{
    StoredSet, StoredSets, StoredAchievement, ExerciseAchievements, UserAchievements, LeaderboardEntry, LeaderboardView,
    rank_exercise, rank_overall, rank, user_total_volume,
};

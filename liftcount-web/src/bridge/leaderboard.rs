//! Leaderboard ranking for the Firestore listener callback

use wasm_bindgen::prelude::*;

use crate::error::DetectorError;
use crate::records::{rank, LeaderboardView, UserAchievements};

/// Rank user documents for one leaderboard tab.
///
/// @param {Array} users - `[{displayName, squat?, benchpress?, deadlift?}]`
/// @param {string} view - "overall", "squat", "benchpress" or "deadlift"
#[wasm_bindgen(js_name = rankLeaderboard)]
pub fn rank_leaderboard(users: JsValue, view: &str) -> Result<JsValue, JsValue> {
    let view = LeaderboardView::from_id(view)
        .ok_or_else(|| DetectorError::UnknownExercise(view.to_string()))?;
    let users: Vec<UserAchievements> = serde_wasm_bindgen::from_value(users)
        .map_err(|e| DetectorError::MalformedInput(format!("users: {}", e)))?;
    Ok(serde_wasm_bindgen::to_value(&rank(&users, view))?)
}

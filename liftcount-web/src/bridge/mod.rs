//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod counter;
mod leaderboard;

pub use landmarks::{parse_body, parse_hands};
pub use counter::RepCounter;
pub use leaderboard::rank_leaderboard;

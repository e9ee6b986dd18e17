//! Liftcount Web - webcam rep counter
//!
//! Counts squats, bench presses and deadlifts from MediaPipe pose landmarks
//! and starts a new set when the lifter raises an open palm. Landmark
//! detection runs in JavaScript; this crate turns landmark frames into
//! rep and set events.
//!
//! - `pose`: keypoint shapes and landmark indices
//! - `metrics`: joint angles, wrist/hip displacement, smoothing
//! - `detection`: UP/DOWN state machine, palm gesture
//! - `session`: per-user session owning all counting state
//! - `records`: achievement record and leaderboard rows
//! - `bridge`: wasm_bindgen entry points

pub mod config;
pub mod error;
pub mod pose;
pub mod metrics;
pub mod detection;
pub mod session;
pub mod records;
mod bridge;

#[cfg(test)]
mod scenario_tests;

use wasm_bindgen::prelude::*;

pub use bridge::{RepCounter, rank_leaderboard, parse_body, parse_hands};
pub use config::DetectorConfig;
pub use detection::{Exercise, Phase};
pub use error::{DetectorError, RecordError};
pub use session::{DetectorSession, RepEvent, SetAdvanceEvent, FrameEvents, SessionStatus};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// @param {string} level - "trace", "debug", "info", "warn" or "error"
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("liftcount-web {} ready (log level {})", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Wall-clock milliseconds, for hosts without their own frame clock
#[wasm_bindgen(js_name = nowMs)]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

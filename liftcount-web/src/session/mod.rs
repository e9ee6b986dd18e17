//! Session module - one user's counting session and the events it emits
//!
//! Re-exports only. All logic in submodules.

mod events;
mod detector;

pub use events::{RepEvent, SetAdvanceEvent, FrameEvents, SessionStatus};
pub use detector::DetectorSession;

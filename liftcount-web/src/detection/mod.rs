//! Detection module - rep state machine and set-advance gesture
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod rep_state;
mod gesture;

pub use exercise::{Exercise, Direction, Thresholds, EXERCISES};
pub use rep_state::{ExerciseStateMachine, Phase, RepTransition};
pub use gesture::{GestureDebouncer, is_palm_open};

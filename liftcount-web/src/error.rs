//! Error types for the counter and achievement records

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by host commands. Bad frames are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectorError {
    #[error("unknown exercise '{0}' (expected squat, bench or deadlift)")]
    UnknownExercise(String),
    #[error("invalid detector config: {0}")]
    InvalidConfig(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Errors building an achievement record from a finished session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("weight must be a positive number, got {0}")]
    InvalidWeight(f64),
    #[error("no sets logged yet")]
    NoSets,
}

impl From<DetectorError> for JsValue {
    fn from(err: DetectorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<RecordError> for JsValue {
    fn from(err: RecordError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

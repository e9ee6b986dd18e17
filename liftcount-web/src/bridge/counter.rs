//! RepCounter - the JS-facing handle to one DetectorSession
//!
//! ```javascript
//! const counter = new RepCounter();
//! counter.selectExercise('squat');
//! const rep = counter.feedPose(flatPose, performance.now());
//! if (rep) showCount(rep.count);
//! const set = counter.feedHands(flatHands, numHands, performance.now());
//! ```

use wasm_bindgen::prelude::*;

use super::landmarks::{parse_body, parse_hands};
use crate::config::DetectorConfig;
use crate::error::DetectorError;
use crate::pose::{Keypoint, PoseDetection};
use crate::session::DetectorSession;

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::error!("failed to serialize {}: {}", std::any::type_name::<T>(), e);
        JsValue::UNDEFINED
    })
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, DetectorError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| DetectorError::MalformedInput(format!("{}: {}", what, e)))
}

#[wasm_bindgen]
pub struct RepCounter {
    session: DetectorSession,
}

#[wasm_bindgen]
impl RepCounter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RepCounter {
        RepCounter { session: DetectorSession::default() }
    }

    /// Counter with a partial config object; missing fields keep defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<RepCounter, JsValue> {
        let config: DetectorConfig = from_js(config, "config")?;
        Ok(RepCounter { session: DetectorSession::new(config)? })
    }

    /// @param {string} id - "squat", "bench" or "deadlift"
    #[wasm_bindgen(js_name = selectExercise)]
    pub fn select_exercise(&mut self, id: &str) -> Result<(), JsValue> {
        self.session.select_exercise_id(id)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Flat Float32Array of x, y, z triples (99 values for a full pose).
    /// Returns the RepEvent, or undefined.
    #[wasm_bindgen(js_name = feedPose)]
    pub fn feed_pose(&mut self, data: &[f32], now_ms: f64) -> JsValue {
        let body = match parse_body(data) {
            Ok(body) => body,
            Err(msg) => {
                web_sys::console::warn_1(&msg.into());
                return JsValue::UNDEFINED;
            }
        };
        to_js(&self.session.feed_body(&body, now_ms))
    }

    /// `poseResults.landmarks[0]` as returned by MediaPipe
    #[wasm_bindgen(js_name = feedPoseLandmarks)]
    pub fn feed_pose_landmarks(&mut self, landmarks: JsValue, now_ms: f64) -> Result<JsValue, JsValue> {
        let body: Vec<Keypoint> = from_js(landmarks, "pose landmarks")?;
        Ok(to_js(&self.session.feed_body(&body, now_ms)))
    }

    /// Flat Float32Array of `num_hands` × 21 triples.
    /// Returns the SetAdvanceEvent, or undefined.
    #[wasm_bindgen(js_name = feedHands)]
    pub fn feed_hands(&mut self, data: &[f32], num_hands: usize, now_ms: f64) -> JsValue {
        let hands = parse_hands(data, num_hands);
        if hands.len() < num_hands {
            web_sys::console::warn_1(
                &format!("Hand data holds {} of {} hands", hands.len(), num_hands).into()
            );
        }
        to_js(&self.session.feed_hands(&hands, now_ms))
    }

    /// `handResults.landmarks` as returned by MediaPipe
    #[wasm_bindgen(js_name = feedHandLandmarks)]
    pub fn feed_hand_landmarks(&mut self, hands: JsValue, now_ms: f64) -> Result<JsValue, JsValue> {
        let hands: Vec<Vec<Keypoint>> = from_js(hands, "hand landmarks")?;
        Ok(to_js(&self.session.feed_hands(&hands, now_ms)))
    }

    /// `{bodyKeypoints, handsKeypoints}` in one call; returns `{rep, setAdvance}`
    #[wasm_bindgen(js_name = feedFrame)]
    pub fn feed_frame(&mut self, detection: JsValue, now_ms: f64) -> Result<JsValue, JsValue> {
        let detection: PoseDetection = from_js(detection, "detection")?;
        Ok(to_js(&self.session.feed_frame(&detection, now_ms)))
    }

    pub fn status(&self, now_ms: f64) -> JsValue {
        to_js(&self.session.status(now_ms))
    }

    /// `[{setNumber, reps}]` for every set with reps, current set included
    #[wasm_bindgen(js_name = completedSets)]
    pub fn completed_sets(&self) -> JsValue {
        to_js(&self.session.completed_sets())
    }

    /// Achievement record for the storage layer. Throws on a non-positive
    /// weight or when no reps were counted.
    pub fn finish(&self, weight: f64, timestamp_ms: f64) -> Result<JsValue, JsValue> {
        let record = self.session.finish(weight, timestamp_ms)?;
        Ok(serde_wasm_bindgen::to_value(&record)?)
    }

    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.session.rep_count()
    }

    #[wasm_bindgen(getter, js_name = setNumber)]
    pub fn set_number(&self) -> u32 {
        self.session.set_number()
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.session.exercise().id().to_string()
    }

    /// Key the achievement is stored under ("benchpress" for bench)
    #[wasm_bindgen(getter, js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.session.exercise().storage_key().to_string()
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new()
    }
}

//! Flat landmark buffers from JavaScript
//!
//! MediaPipe results are flattened on the JS side into Float32Arrays of
//! x, y, z triples: 33 triples for a body, 21 per hand, hands back to back.

use crate::pose::{Keypoint, HAND_KEYPOINTS};

/// x, y, z
pub const COORDS_PER_KEYPOINT: usize = 3;

fn keypoints(data: &[f32]) -> Vec<Keypoint> {
    data.chunks_exact(COORDS_PER_KEYPOINT)
        .map(|c| Keypoint { x: c[0], y: c[1], z: c[2], visibility: None })
        .collect()
}

/// Body keypoints from a flat buffer. A length that is not a whole
/// number of triples is rejected.
pub fn parse_body(data: &[f32]) -> Result<Vec<Keypoint>, String> {
    if data.len() % COORDS_PER_KEYPOINT != 0 {
        return Err(format!(
            "Invalid landmark data length: {} (not a multiple of {})",
            data.len(), COORDS_PER_KEYPOINT
        ));
    }
    Ok(keypoints(data))
}

/// Hands from a flat buffer holding `num_hands` hands of 21 triples.
/// Hands that run past the end of the buffer are dropped.
pub fn parse_hands(data: &[f32], num_hands: usize) -> Vec<Vec<Keypoint>> {
    let stride = HAND_KEYPOINTS * COORDS_PER_KEYPOINT;
    data.chunks_exact(stride)
        .take(num_hands)
        .map(keypoints)
        .collect()
}

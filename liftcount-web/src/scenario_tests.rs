//! End-to-end scenarios: landmark frames in, rep and set events out.

use crate::config::DetectorConfig;
use crate::detection::{Exercise, Phase};
use crate::error::RecordError;
use crate::pose::*;
use crate::records::SetRecord;
use crate::session::{DetectorSession, RepEvent};

const FRAME_MS: f64 = 100.0;

/// Point `len` away from `joint` such that the angle toward→joint→point
/// is `angle` degrees
fn bend(joint: (f32, f32), toward: (f32, f32), angle: f32, len: f32) -> Keypoint {
    let dir = (toward.1 - joint.1).atan2(toward.0 - joint.0) + angle.to_radians();
    Keypoint::new(joint.0 + dir.cos() * len, joint.1 + dir.sin() * len)
}

/// Full body with both knees at `knee_angle` and both elbows at `elbow_angle`
fn body(knee_angle: f32, elbow_angle: f32) -> Vec<Keypoint> {
    let mut points = vec![Keypoint::new(0.5, 0.5); BODY_KEYPOINTS];
    for (hip, knee, ankle, x) in [(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, 0.45), (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, 0.55)] {
        points[hip] = Keypoint::new(x, 0.5);
        points[knee] = Keypoint::new(x, 0.7);
        points[ankle] = bend((x, 0.7), (x, 0.5), knee_angle, 0.2);
    }
    for (shoulder, elbow, wrist, x) in [(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, 0.42), (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, 0.58)] {
        points[shoulder] = Keypoint::new(x, 0.25);
        points[elbow] = Keypoint::new(x, 0.35);
        points[wrist] = bend((x, 0.35), (x, 0.25), elbow_angle, 0.1);
    }
    points
}

fn squat_body(knee_angle: f32) -> Vec<Keypoint> {
    body(knee_angle, 180.0)
}

/// Standing body with wrists `drop` below the hips (hips at y = 0.5)
fn deadlift_body(drop: f32) -> Vec<Keypoint> {
    let mut points = body(175.0, 180.0);
    points[LEFT_WRIST].y = 0.5 + drop;
    points[RIGHT_WRIST].y = 0.5 + drop;
    points
}

fn hand(open: bool) -> Vec<Keypoint> {
    let mut points = vec![Keypoint::new(0.5, 0.6); HAND_KEYPOINTS];
    points[WRIST] = Keypoint::new(0.5, 0.8);
    for tip in FINGERTIPS {
        points[tip] = Keypoint::new(0.5, if open { 0.4 } else { 0.9 });
    }
    points
}

/// Feed `frames` body frames of one angle, advancing the clock
fn hold(session: &mut DetectorSession, angle: f32, frames: usize, clock: &mut f64) -> Vec<RepEvent> {
    let points = squat_body(angle);
    let mut events = Vec::new();
    for _ in 0..frames {
        *clock += FRAME_MS;
        if let Some(event) = session.feed_body(&points, *clock) {
            events.push(event);
        }
    }
    events
}

/// Stand (long enough to clear any rep cooldown), squat, stand: one full rep
fn one_squat(session: &mut DetectorSession, clock: &mut f64) -> Vec<RepEvent> {
    let mut events = hold(session, 170.0, 12, clock);
    events.extend(hold(session, 60.0, 5, clock));
    events.extend(hold(session, 175.0, 5, clock));
    events
}

#[test]
fn test_body_helper_angles() {
    use crate::metrics::compute_metric;
    let points = body(90.0, 120.0);
    let knee = compute_metric(Exercise::Squat, &BodyFrame::new(&points), None).unwrap();
    let elbow = compute_metric(Exercise::Bench, &BodyFrame::new(&points), None).unwrap();
    assert!((knee - 90.0).abs() < 0.01, "knee {}", knee);
    assert!((elbow - 120.0).abs() < 0.01, "elbow {}", elbow);
}

#[test]
fn test_single_squat_counts_once() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    let events = one_squat(&mut session, &mut clock);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].count, 1);
    assert_eq!(events[0].state, Phase::Up);
    assert!(events[0].smoothed_metric > 160.0);
    assert_eq!(session.rep_count(), 1);
}

#[test]
fn test_shallow_squats_never_count() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    for _ in 0..20 {
        assert!(hold(&mut session, 150.0, 3, &mut clock).is_empty());
        assert!(hold(&mut session, 170.0, 3, &mut clock).is_empty());
        assert_eq!(session.phase(), Phase::Up);
    }
    assert_eq!(session.rep_count(), 0);
}

#[test]
fn test_cooldown_skips_frames_entirely() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    let window_before: Vec<f32> = session.window().values().collect();

    // Deep squat within 1000ms of the rep: nothing is measured
    let deep = squat_body(60.0);
    for i in 1..=9 {
        assert!(session.feed_body(&deep, clock + i as f64 * FRAME_MS).is_none());
    }
    assert_eq!(session.window().values().collect::<Vec<_>>(), window_before);
    assert_eq!(session.phase(), Phase::Up);
}

#[test]
fn test_quick_double_rep_counts_once() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    let first = one_squat(&mut session, &mut clock);
    assert_eq!(first.len(), 1);

    // Second cycle packed into 900ms: every frame falls inside the cooldown
    let deep = squat_body(60.0);
    let tall = squat_body(175.0);
    let rep_at = clock;
    let mut second = Vec::new();
    for i in 0..9 {
        let points = if i < 4 { &deep } else { &tall };
        if let Some(e) = session.feed_body(points, rep_at + 10.0 + i as f64 * 100.0) {
            second.push(e);
        }
    }
    assert!(second.is_empty());
    assert_eq!(session.rep_count(), 1);
}

#[test]
fn test_reps_accumulate_after_cooldown() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    for expected in 1..=3 {
        let events = one_squat(&mut session, &mut clock);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].count, expected);
    }
}

#[test]
fn test_missing_keypoints_leave_state_alone() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    hold(&mut session, 60.0, 5, &mut clock);
    assert_eq!(session.phase(), Phase::Down);
    let window_before: Vec<f32> = session.window().values().collect();

    let mut occluded = squat_body(175.0);
    occluded[LEFT_ANKLE] = Keypoint::new(f32::NAN, f32::NAN);
    for _ in 0..10 {
        clock += FRAME_MS;
        assert!(session.feed_body(&occluded, clock).is_none());
    }
    assert_eq!(session.phase(), Phase::Down);
    assert_eq!(session.window().values().collect::<Vec<_>>(), window_before);
}

#[test]
fn test_partial_body_shows_step_back_hint() {
    let mut session = DetectorSession::default();
    let partial = vec![Keypoint::new(0.5, 0.5); 15];
    assert!(session.feed_body(&partial, 0.0).is_none());
    assert!(session.status(0.0).needs_full_body);
    assert!(session.window().is_empty());

    session.feed_body(&squat_body(170.0), 100.0);
    assert!(!session.status(100.0).needs_full_body);
}

#[test]
fn test_window_keeps_last_five_metrics() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    for angle in [170.0, 168.0, 166.0, 164.0, 162.0, 150.0, 140.0, 130.0] {
        hold(&mut session, angle, 1, &mut clock);
    }
    let kept: Vec<f32> = session.window().values().collect();
    assert_eq!(kept.len(), 5);
    let mean = kept.iter().sum::<f32>() / 5.0;
    assert!((mean - 149.2).abs() < 0.05);
    assert!((session.smoothed_metric().unwrap() - mean).abs() < 1e-4);
}

#[test]
fn test_exercise_switch_starts_clean() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    clock += 1000.0;
    hold(&mut session, 60.0, 5, &mut clock);
    assert_eq!(session.phase(), Phase::Down);

    session.select_exercise(Exercise::Deadlift);
    assert_eq!(session.phase(), Phase::Up);
    assert!(session.window().is_empty());
    assert_eq!(session.smoothed_metric(), None);
    // Count carries over
    assert_eq!(session.rep_count(), 1);

    // Cooldown is cleared: the next frame is measured straight away
    let standing = deadlift_body(-0.05);
    assert!(session.feed_body(&standing, clock + 1.0).is_none());
    assert_eq!(session.window().len(), 1);
    assert!((session.smoothed_metric().unwrap() + 0.05).abs() < 1e-4);
}

#[test]
fn test_unknown_exercise_id() {
    let mut session = DetectorSession::default();
    assert!(session.select_exercise_id("curl").is_err());
    assert_eq!(session.exercise(), Exercise::Squat);
    session.select_exercise_id("bench").unwrap();
    assert_eq!(session.exercise(), Exercise::Bench);
}

#[test]
fn test_deadlift_rep() {
    let mut session = DetectorSession::default();
    session.select_exercise(Exercise::Deadlift);
    let standing = deadlift_body(-0.05);
    let bottom = deadlift_body(0.3);
    let mut clock = 0.0;
    let mut events = Vec::new();
    for (points, frames) in [(&standing, 5), (&bottom, 6), (&standing, 8)] {
        for _ in 0..frames {
            clock += FRAME_MS;
            events.extend(session.feed_body(points, clock));
        }
    }
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].exercise, Exercise::Deadlift);
    assert!((events[0].display_value - events[0].smoothed_metric * 100.0).abs() < 1e-3);
}

#[test]
fn test_bench_rep() {
    let mut session = DetectorSession::default();
    session.select_exercise(Exercise::Bench);
    let locked_out = body(175.0, 175.0);
    let chest = body(175.0, 40.0);
    let mut clock = 0.0;
    let mut events = Vec::new();
    for (points, frames) in [(&locked_out, 5), (&chest, 6), (&locked_out, 8)] {
        for _ in 0..frames {
            clock += FRAME_MS;
            events.extend(session.feed_body(points, clock));
        }
    }
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].count, 1);
}

#[test]
fn test_palm_starts_new_set() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    hold(&mut session, 170.0, 3, &mut clock);

    let event = session.feed_hands(&[hand(true)], clock).unwrap();
    assert_eq!(event.set_number, 2);
    assert_eq!(event.completed_reps, 1);
    assert_eq!(session.rep_count(), 0);
    assert_eq!(session.set_number(), 2);
    assert!(session.window().is_empty());
    assert_eq!(session.completed_sets(), vec![SetRecord { set_number: 1, reps: 1 }]);
}

#[test]
fn test_palm_debounce() {
    let mut session = DetectorSession::default();
    assert!(session.feed_hands(&[hand(true)], 0.0).is_some());
    assert!(session.feed_hands(&[hand(false)], 400.0).is_none());
    assert!(session.feed_hands(&[hand(true)], 1200.0).is_none());
    assert_eq!(session.set_number(), 2);

    assert!(session.feed_hands(&[hand(false)], 2100.0).is_none());
    assert!(session.feed_hands(&[hand(true)], 2200.0).is_some());
    assert_eq!(session.set_number(), 3);
}

#[test]
fn test_two_raised_hands_one_set() {
    let mut session = DetectorSession::default();
    let event = session.feed_hands(&[hand(true), hand(true)], 0.0);
    assert_eq!(event.map(|e| e.set_number), Some(2));
    assert_eq!(session.set_number(), 2);
}

#[test]
fn test_feed_frame_body_then_hands() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    hold(&mut session, 170.0, 5, &mut clock);
    hold(&mut session, 60.0, 5, &mut clock);
    hold(&mut session, 175.0, 4, &mut clock);

    let detection = PoseDetection {
        body_keypoints: squat_body(175.0),
        hands_keypoints: vec![hand(true)],
    };
    let events = session.feed_frame(&detection, clock + FRAME_MS);
    assert_eq!(events.rep.map(|r| r.count), Some(1));
    assert_eq!(events.set_advance.map(|s| s.completed_reps), Some(1));
    assert_eq!(session.rep_count(), 0);

    let empty = session.feed_frame(&PoseDetection::default(), clock + 2.0 * FRAME_MS);
    assert!(empty.is_empty());
}

#[test]
fn test_finish_builds_record() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    one_squat(&mut session, &mut clock);
    clock += 3000.0;
    session.feed_hands(&[hand(true)], clock);
    one_squat(&mut session, &mut clock);

    let record = session.finish(135.0, 1_700_000_000_000.0).unwrap();
    assert_eq!(
        record.sets,
        vec![SetRecord { set_number: 1, reps: 2 }, SetRecord { set_number: 2, reps: 1 }]
    );
    assert_eq!(record.total_reps, 3);
    assert_eq!(record.total_volume, 405.0);

    assert_eq!(session.finish(0.0, 0.0), Err(RecordError::InvalidWeight(0.0)));
}

#[test]
fn test_empty_sets_are_not_recorded() {
    let mut session = DetectorSession::default();
    session.feed_hands(&[hand(true)], 0.0);
    assert!(session.completed_sets().is_empty());
    assert_eq!(session.finish(100.0, 0.0), Err(RecordError::NoSets));
}

#[test]
fn test_reset_is_idempotent() {
    let fresh = DetectorSession::default();

    let mut used = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut used, &mut clock);
    used.feed_hands(&[hand(true)], clock);
    hold(&mut used, 60.0, 5, &mut clock);
    used.reset();
    used.reset();

    assert_eq!(used.status(clock), fresh.status(clock));
    assert!(used.window().is_empty());
    assert!(used.completed_sets().is_empty());
    // No cooldown survives a reset
    assert!(used.feed_hands(&[hand(true)], clock).is_some());
}

#[test]
fn test_rep_highlight_window() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    assert!(session.status(clock).rep_highlight);
    assert!(session.status(clock + 500.0).rep_highlight);
    assert!(!session.status(clock + 501.0).rep_highlight);
}

#[test]
fn test_rep_highlight_survives_exercise_switch() {
    let mut session = DetectorSession::default();
    let mut clock = 0.0;
    one_squat(&mut session, &mut clock);
    session.select_exercise(Exercise::Bench);
    assert!(session.status(clock).rep_highlight);
    assert!(!session.status(clock + 501.0).rep_highlight);

    session.reset();
    assert!(!session.status(clock).rep_highlight);
}

#[test]
fn test_visibility_threshold_from_config() {
    let config = DetectorConfig { min_visibility: Some(0.5), ..DetectorConfig::default() };
    let mut session = DetectorSession::new(config).unwrap();
    let mut points = squat_body(170.0);
    points[RIGHT_KNEE] = points[RIGHT_KNEE].with_visibility(0.3);
    assert!(session.feed_body(&points, 0.0).is_none());
    assert!(session.window().is_empty());
}

#[test]
fn test_invalid_config_rejected() {
    let config = DetectorConfig { smoothing_window: 0, ..DetectorConfig::default() };
    assert!(DetectorSession::new(config).is_err());
}

// Checks on the tuning constants and their documented relationships.

use glow_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn bounds_leave_a_symmetric_margin() {
    assert!(POS_MIN_PCT < POS_MAX_PCT);
    assert_eq!(POS_MIN_PCT, 100.0 - POS_MAX_PCT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_ranges_match_the_data_model() {
    assert_eq!(SIZE_BASE_PCT + SIZE_SPAN_PCT, 102.0);
    assert!((ALPHA_BASE + ALPHA_SPAN - 0.20).abs() < 1e-12);
    assert!((ALPHA_MID_BASE + ALPHA_MID_SPAN - 0.12).abs() < 1e-12);
    assert!((ALPHA_EDGE_BASE + ALPHA_EDGE_SPAN - 0.04).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn oscillators_use_distinct_slow_frequencies() {
    assert!(DRIFT_X_FREQ > 0.0 && DRIFT_Y_FREQ > 0.0 && PULSE_FREQ > 0.0);
    // Different per-axis frequencies so the wander never looks circular.
    assert!(DRIFT_X_FREQ != DRIFT_Y_FREQ);
    // Drift is much slower than the breathing pulse.
    assert!(DRIFT_X_FREQ < PULSE_FREQ && DRIFT_Y_FREQ < PULSE_FREQ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follow_factor_is_a_valid_smoothing_coefficient() {
    assert!(FOLLOW_LERP > 0.0 && FOLLOW_LERP < 1.0);
}

#[test]
fn gradient_stops_are_ascending_and_span_the_radius() {
    assert_eq!(STOP_OFFSETS_PCT[0], 0.0);
    assert_eq!(STOP_OFFSETS_PCT[3], 100.0);
    for pair in STOP_OFFSETS_PCT.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

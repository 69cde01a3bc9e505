//! The per-frame motion model.
//!
//! `step` is a pure function of `(previous state, target, timestamp)`. Drift
//! and pulse depend on the absolute timestamp, so irregular frame intervals
//! change apparent speed smoothly instead of causing discontinuities. The
//! only accumulating state is the smoothed position, which makes the long-run
//! trajectory path-dependent on the full tick history.

use glam::DVec2;

use crate::constants::{
    ALPHA_BASE, ALPHA_EDGE_BASE, ALPHA_EDGE_SPAN, ALPHA_MID_BASE, ALPHA_MID_SPAN, ALPHA_SPAN,
    DRIFT_X_AMPLITUDE_PCT, DRIFT_X_FREQ, DRIFT_Y_AMPLITUDE_PCT, DRIFT_Y_FREQ, FOLLOW_LERP,
    PULSE_FREQ, SIZE_BASE_PCT, SIZE_SPAN_PCT,
};
use crate::state::{TargetPosition, VisualState};

#[inline]
pub fn lerp(a: f64, b: f64, k: f64) -> f64 {
    a + (b - a) * k
}

/// Deterministic sinusoidal wander added to the target so the glow never sits
/// perfectly still, even with a motionless pointer.
#[inline]
pub fn drift(t_ms: f64) -> DVec2 {
    DVec2::new(
        (t_ms * DRIFT_X_FREQ).sin() * DRIFT_X_AMPLITUDE_PCT,
        (t_ms * DRIFT_Y_FREQ).cos() * DRIFT_Y_AMPLITUDE_PCT,
    )
}

/// Shared breathing phase in `[0, 1]`.
#[inline]
pub fn pulse(t_ms: f64) -> f64 {
    ((t_ms * PULSE_FREQ).sin() + 1.0) / 2.0
}

/// Advance the visual state by one tick at timestamp `t_ms`.
pub fn step(prev: &VisualState, target: &TargetPosition, t_ms: f64) -> VisualState {
    let pulse = pulse(t_ms);
    let pos = DVec2::new(prev.x, prev.y).lerp(target.as_dvec2() + drift(t_ms), FOLLOW_LERP);
    VisualState {
        x: pos.x,
        y: pos.y,
        size: SIZE_BASE_PCT + pulse * SIZE_SPAN_PCT,
        alpha: ALPHA_BASE + pulse * ALPHA_SPAN,
        alpha_mid: ALPHA_MID_BASE + pulse * ALPHA_MID_SPAN,
        alpha_edge: ALPHA_EDGE_BASE + pulse * ALPHA_EDGE_SPAN,
    }
}

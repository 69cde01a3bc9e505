//! Pointer sampling: raw device coordinates to a clamped target position.

use crate::constants::{POS_MAX_PCT, POS_MIN_PCT};
use crate::state::TargetPosition;

/// Clamp one axis into the safe percentage range.
#[inline]
pub fn clamp_pct(v: f64) -> f64 {
    POS_MAX_PCT.min(POS_MIN_PCT.max(v))
}

/// Convert a raw pointer position to percent-of-viewport and clamp each axis.
///
/// Returns `None` when a viewport dimension is reported as zero or negative;
/// that sample is skipped rather than letting NaN/Infinity reach the visual
/// state, where it would never wash out of the smoothing.
pub fn sample_pointer(
    client_x: f64,
    client_y: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Option<TargetPosition> {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return None;
    }
    Some(TargetPosition {
        x: clamp_pct(client_x / viewport_w * 100.0),
        y: clamp_pct(client_y / viewport_h * 100.0),
    })
}

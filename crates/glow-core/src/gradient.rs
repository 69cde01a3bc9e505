//! Gradient description for the rendering collaborator.
//!
//! The contract is a radial gradient centered at `(x%, y%)` with extents
//! `(size%, size%)` and four stops: inner glow, mid fade, soft edge, black.
//! [`css`] reproduces the exact CSS string the web layer paints with;
//! [`sample`] resolves a single color for hosts that rasterize themselves.

use crate::constants::{GLOW_RGB, STOP_OFFSETS_PCT};
use crate::motion::lerp;
use crate::state::VisualState;

/// One color stop: offset in percent of the gradient radius, color channels
/// and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset_pct: f64,
    pub rgb: [u8; 3],
    pub alpha: f64,
}

/// The four stops for one resolved frame.
pub fn stops(vs: &VisualState) -> [GradientStop; 4] {
    let alphas = [vs.alpha, vs.alpha_mid, vs.alpha_edge];
    let mut out = [GradientStop {
        offset_pct: STOP_OFFSETS_PCT[3],
        rgb: [0, 0, 0],
        alpha: 1.0,
    }; 4];
    for i in 0..3 {
        out[i] = GradientStop {
            offset_pct: STOP_OFFSETS_PCT[i],
            rgb: GLOW_RGB,
            alpha: alphas[i],
        };
    }
    out
}

/// Render the frame as a CSS `radial-gradient(..)` value.
pub fn css(vs: &VisualState) -> String {
    let stop_list = stops(vs)
        .iter()
        .map(|s| {
            format!(
                "rgba({},{},{},{}) {}%",
                s.rgb[0], s.rgb[1], s.rgb[2], s.alpha, s.offset_pct
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "radial-gradient({size}% {size}% at {x}% {y}%, {stops})",
        size = vs.size,
        x = vs.x,
        y = vs.y,
        stops = stop_list
    )
}

/// Resolve the gradient color at `dist_pct` percent of viewport from the glow
/// center, composited over the opaque black background.
///
/// Stops are interpolated piecewise-linearly in composited space; distances at
/// or beyond the gradient extent resolve to black.
pub fn sample(vs: &VisualState, dist_pct: f64) -> [u8; 3] {
    // Stop offsets are relative to the gradient radius, itself `size` percent
    // of the viewport.
    let u = if vs.size > 0.0 {
        dist_pct / vs.size * 100.0
    } else {
        100.0
    };
    let stops = stops(vs);
    let composited =
        |s: &GradientStop| -> [f64; 3] { s.rgb.map(|c| f64::from(c) * s.alpha) };
    if u <= stops[0].offset_pct {
        return composited(&stops[0]).map(|c| c.round() as u8);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if u <= b.offset_pct {
            let k = (u - a.offset_pct) / (b.offset_pct - a.offset_pct);
            let (ca, cb) = (composited(a), composited(b));
            return [
                lerp(ca[0], cb[0], k).round() as u8,
                lerp(ca[1], cb[1], k).round() as u8,
                lerp(ca[2], cb[2], k).round() as u8,
            ];
        }
    }
    [0, 0, 0]
}

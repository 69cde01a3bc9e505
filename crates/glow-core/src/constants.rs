// Shared visual tuning constants used by both the web and native frontends.
// Timestamps are milliseconds; positions and sizes are percent of viewport.

// Glow center bounds; keeps the gradient from truncating at the viewport edge
pub const POS_MIN_PCT: f64 = 5.0;
pub const POS_MAX_PCT: f64 = 95.0;

// Idle drift: slow sinusoids with different frequencies per axis so the
// wander never looks circular
pub const DRIFT_X_FREQ: f64 = 0.00006; // radians per ms
pub const DRIFT_Y_FREQ: f64 = 0.00005;
pub const DRIFT_X_AMPLITUDE_PCT: f64 = 8.0;
pub const DRIFT_Y_AMPLITUDE_PCT: f64 = 6.0;

// Breathing: one shared oscillator phase drives size and all three opacity
// levels so they stay in lockstep
pub const PULSE_FREQ: f64 = 0.0002; // radians per ms
pub const SIZE_BASE_PCT: f64 = 90.0;
pub const SIZE_SPAN_PCT: f64 = 12.0;
pub const ALPHA_BASE: f64 = 0.12;
pub const ALPHA_SPAN: f64 = 0.08;
pub const ALPHA_MID_BASE: f64 = 0.07;
pub const ALPHA_MID_SPAN: f64 = 0.05;
pub const ALPHA_EDGE_BASE: f64 = 0.02;
pub const ALPHA_EDGE_SPAN: f64 = 0.02;

// Exponential smoothing factor for the follow motion; time constant is
// roughly 1/0.08 = 12 ticks, so the glow trails the pointer instead of
// snapping to it
pub const FOLLOW_LERP: f64 = 0.08;

// Glow color channel and gradient stop offsets, part of the rendering
// contract (0% inner, 35% mid fade, 60% soft edge, 100% black)
pub const GLOW_RGB: [u8; 3] = [0, 255, 157];
pub const STOP_OFFSETS_PCT: [f64; 4] = [0.0, 35.0, 60.0, 100.0];

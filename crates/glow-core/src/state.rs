//! Engine-facing state types shared with both frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. Coordinates and sizes are
//! percent-of-viewport, opacities are fractions.

use glam::DVec2;

use crate::constants::{
    ALPHA_BASE, ALPHA_EDGE_BASE, ALPHA_MID_BASE, SIZE_BASE_PCT,
};

/// Last known desired glow center, set by the latest pointer sample.
///
/// Always holds the latest sample only; there is no queue and no history.
/// Exactly one exists per engine instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for TargetPosition {
    /// Centered glow before the first pointer sample arrives.
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl TargetPosition {
    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// One fully resolved animation frame: glow center, gradient extent and the
/// three opacity levels of the gradient stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    pub alpha_mid: f64,
    pub alpha_edge: f64,
}

impl Default for VisualState {
    /// State published before the first tick: centered, minimum extent and
    /// opacity.
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            size: SIZE_BASE_PCT,
            alpha: ALPHA_BASE,
            alpha_mid: ALPHA_MID_BASE,
            alpha_edge: ALPHA_EDGE_BASE,
        }
    }
}

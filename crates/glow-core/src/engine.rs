//! The engine object a host drives: it owns the target cell and the current
//! visual state and gates both behind the lifecycle phase.
//!
//! Hosts deliver pointer samples via [`GlowEngine::pointer_moved`] (any rate)
//! and frame timestamps via [`GlowEngine::tick`] (one per frame-ready signal).
//! A pointer sample never triggers a publication by itself; it only moves the
//! target the next tick smooths toward.

use crate::motion;
use crate::sampler;
use crate::state::{TargetPosition, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    /// Terminal. A remount gets a fresh engine instance.
    Stopped,
}

#[derive(Debug)]
pub struct GlowEngine {
    target: TargetPosition,
    current: VisualState,
    phase: Phase,
}

impl Default for GlowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GlowEngine {
    pub fn new() -> Self {
        Self {
            target: TargetPosition::default(),
            current: VisualState::default(),
            phase: Phase::Idle,
        }
    }

    /// Begin accepting pointer samples and ticks. Only valid from `Idle`;
    /// calling it after `stop` is inert.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            log::debug!("glow engine started");
        }
    }

    /// Stop the engine. Idempotent and terminal: afterwards neither the
    /// target nor the visual state can change.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            log::debug!("glow engine stopped");
        }
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Record a pointer sample. Zero-sized viewports are skipped.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        if self.phase != Phase::Running {
            return;
        }
        if let Some(target) = sampler::sample_pointer(client_x, client_y, viewport_w, viewport_h) {
            self.target = target;
        }
    }

    /// Advance one frame at timestamp `t_ms` and return the published state.
    /// Outside `Running` the state is returned unchanged.
    pub fn tick(&mut self, t_ms: f64) -> VisualState {
        if self.phase == Phase::Running {
            self.current = motion::step(&self.current, &self.target, t_ms);
        }
        self.current
    }

    pub fn visual(&self) -> VisualState {
        self.current
    }

    pub fn target(&self) -> TargetPosition {
        self.target
    }
}

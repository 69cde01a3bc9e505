pub mod constants;
pub mod engine;
pub mod gradient;
pub mod motion;
pub mod sampler;
pub mod state;

pub use constants::*;
pub use engine::GlowEngine;
pub use gradient::GradientStop;
pub use state::{TargetPosition, VisualState};

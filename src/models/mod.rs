//! Data models for particle effects (parameter records, tagged payloads)

mod effect;
mod wisp;

// Re-export all public types
pub use effect::{ParticleEffect, ParticleKind};
pub use wisp::WispParams;

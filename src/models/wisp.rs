//! Wisp particle parameters.

use serde::{Deserialize, Serialize};

/// Parameters for a wisp particle: quad size, color, lifetime scale, and two
/// render toggles.
///
/// All values are unconstrained - color channels are not clamped. A record
/// never changes once built; the `with_*` methods return derived copies. The
/// schema form carries every field under its camelCase name (`size`, `r`,
/// `g`, `b`, `maxAgeMul`, `depthTest`, `noClip`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WispParams {
    /// Render quad size
    pub size: f32,
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Multiplier applied to the renderer's default particle lifetime
    pub max_age_mul: f32,
    /// Whether the particle is depth-tested against the scene
    pub depth_test: bool,
    /// Whether the particle ignores world collision
    pub no_clip: bool,
}

impl WispParams {
    /// Lifetime multiplier used when none is given.
    pub const DEFAULT_MAX_AGE_MUL: f32 = 1.0;

    /// Create a record with the default lifetime multiplier, depth testing
    /// on, and collision clipping on.
    pub fn new(size: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            size,
            r,
            g,
            b,
            max_age_mul: Self::DEFAULT_MAX_AGE_MUL,
            depth_test: true,
            no_clip: false,
        }
    }

    /// Derive a record with a different lifetime multiplier.
    pub fn with_max_age_mul(self, max_age_mul: f32) -> Self {
        Self { max_age_mul, ..self }
    }

    /// Derive a record with depth testing toggled.
    pub fn with_depth_test(self, depth_test: bool) -> Self {
        Self { depth_test, ..self }
    }

    /// Derive a record with collision clipping toggled.
    ///
    /// Returns the record unchanged when the flag already matches.
    pub fn with_no_clip(self, no_clip: bool) -> Self {
        if self.no_clip == no_clip {
            self
        } else {
            Self { no_clip, ..self }
        }
    }
}

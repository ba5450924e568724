//! Top-level particle effect types.

use serde::{Deserialize, Serialize};

use super::wisp::WispParams;

/// A particle effect payload, tagged by its type key.
///
/// This is the form the data-driven layer works with: the `type` field of a
/// schema object selects the variant, and each variant carries the concrete
/// payload shape of one registered particle kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParticleEffect {
    #[serde(rename = "wispfx:wisp")]
    Wisp(WispParams),
}

/// Discriminant for an effect's kind, independent of the key it was
/// registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Wisp,
}

impl ParticleEffect {
    pub fn kind(&self) -> ParticleKind {
        match self {
            ParticleEffect::Wisp(_) => ParticleKind::Wisp,
        }
    }
}

impl From<WispParams> for ParticleEffect {
    fn from(params: WispParams) -> Self {
        ParticleEffect::Wisp(params)
    }
}

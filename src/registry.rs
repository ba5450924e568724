//! Particle type registry for resolving type keys
//!
//! The registry stores the particle types known to a client session and
//! dispatches command parsing and wire decoding by type key. It replaces the
//! engine's old global type table: any code that needs a name lookup takes
//! the registry as an explicit, read-only parameter.

use std::collections::HashMap;

use bytes::Buf;
use thiserror::Error;

use crate::command::{self, StringReader, SyntaxError};
use crate::key::{KeyError, ParticleKey};
use crate::models::{ParticleEffect, ParticleKind, WispParams};
use crate::wire::WireDecode;

/// Error when a registry lookup cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Key is not registered
    #[error("unknown particle type '{0}'")]
    UnknownType(ParticleKey),
    /// The effect's kind was never registered under any key
    #[error("particle kind {0:?} is not registered")]
    UnregisteredKind(ParticleKind),
}

/// Error from parsing a full `<key> <payload…>` command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

type ParseCommandFn = fn(&mut StringReader<'_>) -> Result<ParticleEffect, SyntaxError>;
type DecodeWireFn = fn(&mut dyn Buf) -> ParticleEffect;

/// A registered particle type: its key, kind, and payload codecs.
#[derive(Debug, Clone)]
pub struct ParticleType {
    key: ParticleKey,
    kind: ParticleKind,
    parse_command: ParseCommandFn,
    decode_wire: DecodeWireFn,
}

impl ParticleType {
    pub fn new(
        key: ParticleKey,
        kind: ParticleKind,
        parse_command: ParseCommandFn,
        decode_wire: DecodeWireFn,
    ) -> Self {
        Self { key, kind, parse_command, decode_wire }
    }

    /// The wisp type under its default key.
    pub fn wisp() -> Self {
        Self::new(
            ParticleKey::wisp(),
            ParticleKind::Wisp,
            |reader| command::parse_wisp_payload(reader).map(ParticleEffect::Wisp),
            |buf| ParticleEffect::Wisp(WispParams::decode_wire(buf)),
        )
    }

    pub fn key(&self) -> &ParticleKey {
        &self.key
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }
}

/// Registry of particle types.
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    types: HashMap<ParticleKey, ParticleType>,
    keys: HashMap<ParticleKind, ParticleKey>,
}

impl ParticleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { types: HashMap::new(), keys: HashMap::new() }
    }

    /// Registry pre-populated with the built-in types.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ParticleType::wisp());
        registry
    }

    /// Register a particle type.
    ///
    /// A type with the same key is replaced; the kind's command-formatting
    /// key follows the latest registration.
    pub fn register(&mut self, ty: ParticleType) {
        self.keys.insert(ty.kind, ty.key.clone());
        self.types.insert(ty.key.clone(), ty);
    }

    /// Get a type by key.
    pub fn get(&self, key: &ParticleKey) -> Option<&ParticleType> {
        self.types.get(key)
    }

    /// Check if a type with the given key exists.
    pub fn contains(&self, key: &ParticleKey) -> bool {
        self.types.contains_key(key)
    }

    /// Key the given kind is registered under.
    pub fn key_of(&self, kind: ParticleKind) -> Option<&ParticleKey> {
        self.keys.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Parse a full command line: a type key followed by its payload.
    pub fn parse_command(&self, input: &str) -> Result<ParticleEffect, CommandError> {
        let mut reader = StringReader::new(input);
        let key: ParticleKey = reader.read_unquoted().parse()?;
        let ty = self
            .get(&key)
            .ok_or_else(|| RegistryError::UnknownType(key.clone()))?;
        Ok((ty.parse_command)(&mut reader)?)
    }

    /// Decode a wire payload for the given type key.
    pub fn decode_wire(
        &self,
        key: &ParticleKey,
        buf: &mut dyn Buf,
    ) -> Result<ParticleEffect, RegistryError> {
        let ty = self
            .get(key)
            .ok_or_else(|| RegistryError::UnknownType(key.clone()))?;
        Ok((ty.decode_wire)(buf))
    }

    /// Format an effect as a command line, resolving its registered key.
    pub fn format_command(&self, effect: &ParticleEffect) -> Result<String, RegistryError> {
        let key = self
            .key_of(effect.kind())
            .ok_or(RegistryError::UnregisteredKind(effect.kind()))?;
        Ok(command::write_command(effect, key))
    }
}

//! Namespaced particle type keys
//!
//! A key names a registered particle type as `namespace:path`, for example
//! `wispfx:wisp`. Namespaces use `[a-z0-9_.-]`; paths additionally allow
//! `/`. A key written without a namespace takes [`DEFAULT_NAMESPACE`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Namespace assumed for keys written without one.
pub const DEFAULT_NAMESPACE: &str = "wispfx";

/// Error type for key parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Input string was empty
    #[error("empty particle key")]
    Empty,
    /// Nothing after the `:` separator
    #[error("key '{0}' has an empty path")]
    EmptyPath(String),
    /// Namespace contains a character outside `[a-z0-9_.-]`
    #[error("invalid character '{1}' in namespace of key '{0}'")]
    InvalidNamespaceChar(String, char),
    /// Path contains a character outside `[a-z0-9/_.-]`
    #[error("invalid character '{1}' in path of key '{0}'")]
    InvalidPathChar(String, char),
}

/// Identifier of a registered particle type.
///
/// Keys are plain data: equality and hashing follow the `namespace:path`
/// pair, and [`fmt::Display`] prints the canonical `namespace:path` form
/// used by the command format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticleKey {
    namespace: String,
    path: String,
}

impl ParticleKey {
    /// Build a key from explicit parts, validating both.
    pub fn new(namespace: &str, path: &str) -> Result<Self, KeyError> {
        format!("{namespace}:{path}").parse()
    }

    /// Key of the built-in wisp type.
    pub fn wisp() -> Self {
        Self { namespace: DEFAULT_NAMESPACE.to_string(), path: "wisp".to_string() }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ParticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ParticleKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }

        let (namespace, path) = match s.split_once(':') {
            Some(("", path)) => (DEFAULT_NAMESPACE, path),
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, s),
        };

        if path.is_empty() {
            return Err(KeyError::EmptyPath(s.to_string()));
        }

        for c in namespace.chars() {
            if !is_namespace_char(c) {
                return Err(KeyError::InvalidNamespaceChar(s.to_string(), c));
            }
        }
        for c in path.chars() {
            if !is_path_char(c) {
                return Err(KeyError::InvalidPathChar(s.to_string(), c));
            }
        }

        Ok(Self { namespace: namespace.to_string(), path: path.to_string() })
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.' || c == '-'
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_key() {
        let key: ParticleKey = "wispfx:wisp".parse().unwrap();
        assert_eq!(key.namespace(), "wispfx");
        assert_eq!(key.path(), "wisp");
        assert_eq!(key, ParticleKey::wisp());
    }

    #[test]
    fn test_bare_path_takes_default_namespace() {
        let key: ParticleKey = "wisp".parse().unwrap();
        assert_eq!(key.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(key, ParticleKey::wisp());
    }

    #[test]
    fn test_leading_separator_takes_default_namespace() {
        let key: ParticleKey = ":wisp".parse().unwrap();
        assert_eq!(key.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_display_is_canonical() {
        let key = ParticleKey::new("fx", "sparks/ember").unwrap();
        assert_eq!(key.to_string(), "fx:sparks/ember");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!("".parse::<ParticleKey>(), Err(KeyError::Empty));
    }

    #[test]
    fn test_empty_path() {
        let err = "wispfx:".parse::<ParticleKey>().unwrap_err();
        assert_eq!(err, KeyError::EmptyPath("wispfx:".to_string()));
    }

    #[test]
    fn test_invalid_namespace_char() {
        let err = "Wispfx:wisp".parse::<ParticleKey>().unwrap_err();
        assert_eq!(err, KeyError::InvalidNamespaceChar("Wispfx:wisp".to_string(), 'W'));
    }

    #[test]
    fn test_slash_only_allowed_in_path() {
        assert!("a/b:wisp".parse::<ParticleKey>().is_err());
        assert!("fx:a/b".parse::<ParticleKey>().is_ok());
    }

    #[test]
    fn test_roundtrip_through_display() {
        let key = ParticleKey::new("fx", "glow").unwrap();
        let reparsed: ParticleKey = key.to_string().parse().unwrap();
        assert_eq!(key, reparsed);
    }
}

//! YAML engine backends, selection, and the manager facade.
//!
//! Two interchangeable backends can be compiled in: the primary `psych`
//! engine (`yaml-rust2`) and the legacy `syck` engine (`yaml-rust`).
//! Selection walks an ordered candidate list once at initialization;
//! see [`crate::Yaml::init`].

mod builder;
mod manager;
mod select;

#[cfg(feature = "psych")]
pub mod psych;

#[cfg(feature = "syck")]
pub mod syck;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, YamlError};
use crate::value::Value;

pub use manager::EngineManager;
pub use select::default_candidates;
pub(crate) use select::select;

/// Identity of an engine backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// The primary engine, backed by `yaml-rust2`.
    Psych,

    /// The legacy engine, backed by `yaml-rust`.
    Syck,
}

impl EngineKind {
    /// Compatibility name: `"psych"` or `"syck"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Psych => "psych",
            Self::Syck => "syck",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = YamlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "psych" => Ok(Self::Psych),
            "syck" => Ok(Self::Syck),
            other => Err(YamlError::InvalidEngine {
                name: other.to_string(),
            }),
        }
    }
}

/// Contract every engine backend implements.
///
/// Backends parse whole streams; the facade decides whether the caller
/// wanted the first document or all of them. Emission is shared across
/// backends (see the round-trip guarantees on [`crate::Yaml::dump`]) and
/// is deliberately not part of this seam.
pub trait Engine: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> EngineKind;

    /// Parses every document in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is not well-formed YAML.
    /// Never returns partially-built documents.
    fn load_str(&self, source: &str) -> Result<Vec<Value>, ParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure the trait is object-safe
    fn _assert_engine_object_safe(_: &dyn Engine) {}

    #[test]
    fn test_engine_kind_names() {
        assert_eq!(EngineKind::Psych.name(), "psych");
        assert_eq!(EngineKind::Syck.name(), "syck");
        assert_eq!(format!("{}", EngineKind::Psych), "psych");
    }

    #[test]
    fn test_engine_kind_from_str() {
        assert_eq!("psych".parse::<EngineKind>().unwrap(), EngineKind::Psych);
        assert_eq!("syck".parse::<EngineKind>().unwrap(), EngineKind::Syck);
    }

    #[test]
    fn test_engine_kind_rejects_unknown_names() {
        let err = "Psych".parse::<EngineKind>().unwrap_err();
        match err {
            YamlError::InvalidEngine { name } => assert_eq!(name, "Psych"),
            other => panic!("expected InvalidEngine, got {other:?}"),
        }
    }
}

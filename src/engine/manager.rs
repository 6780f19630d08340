//! The deprecated engine-manager facade.

use crate::error::YamlResult;

use super::EngineKind;

/// Reports, and nominally mutates, which engine is active.
///
/// Kept for compatibility with callers that introspect the engine by
/// name. The deprecated setter records intent only: it changes the
/// reported label without re-binding the engine that actually backs the
/// facade it came from. Not safe for concurrent mutation; mutating
/// requires exclusive access to the handle that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineManager {
    current: EngineKind,
}

impl EngineManager {
    pub(crate) const fn new(current: EngineKind) -> Self {
        Self { current }
    }

    /// Name of the active engine: `"psych"` or `"syck"`.
    #[must_use]
    pub const fn current_engine(&self) -> &'static str {
        self.current.name()
    }

    /// The active engine as a typed value.
    #[must_use]
    pub const fn kind(&self) -> EngineKind {
        self.current
    }

    /// Returns true when the legacy engine is active.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self.current, EngineKind::Syck)
    }

    /// Records `name` as the active engine and returns it.
    ///
    /// Accepts exactly `"psych"` and `"syck"`. This updates the reported
    /// label only; the engine selected at initialization keeps backing
    /// the facade.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError::InvalidEngine`] for any other name, leaving
    /// the recorded label untouched.
    #[deprecated(note = "engine selection happens at initialization; this records a label only")]
    pub fn set_engine(&mut self, name: &str) -> YamlResult<&'static str> {
        let kind: EngineKind = name.parse()?;
        self.current = kind;
        Ok(kind.name())
    }
}

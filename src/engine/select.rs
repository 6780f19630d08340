//! Engine selection.
//!
//! Selection walks an explicit ordered list of candidate engines once,
//! short-circuiting on the first one this build carries. Exhausting the
//! list is fatal: two warning lines go to stderr explaining the missing
//! engine and the remedy, and a composite error carrying every
//! candidate's unavailability reason is returned.

use crate::error::{EngineAttempt, YamlError};

use super::{Engine, EngineKind};

/// The default candidate order: primary first, legacy as fallback.
#[must_use]
pub fn default_candidates() -> &'static [EngineKind] {
    &[EngineKind::Psych, EngineKind::Syck]
}

/// Selects the first available engine from `candidates`.
///
/// # Errors
///
/// Returns [`YamlError::EngineUnavailable`] when no candidate is
/// available, after emitting the startup warnings to stderr.
pub(crate) fn select(candidates: &[EngineKind]) -> Result<Box<dyn Engine>, YamlError> {
    let mut attempts = Vec::new();
    for &kind in candidates {
        match instantiate(kind) {
            Ok(engine) => return Ok(engine),
            Err(reason) => attempts.push(EngineAttempt { kind, reason }),
        }
    }
    warn_unavailable();
    Err(YamlError::EngineUnavailable { attempts })
}

fn instantiate(kind: EngineKind) -> Result<Box<dyn Engine>, String> {
    match kind {
        EngineKind::Psych => instantiate_psych(),
        EngineKind::Syck => instantiate_syck(),
    }
}

#[cfg(feature = "psych")]
fn instantiate_psych() -> Result<Box<dyn Engine>, String> {
    Ok(Box::new(super::psych::PsychEngine::new()))
}

#[cfg(not(feature = "psych"))]
fn instantiate_psych() -> Result<Box<dyn Engine>, String> {
    Err("not compiled into this build; enable the `psych` feature and rebuild".to_string())
}

#[cfg(feature = "syck")]
fn instantiate_syck() -> Result<Box<dyn Engine>, String> {
    Ok(Box::new(super::syck::SyckEngine::new()))
}

#[cfg(not(feature = "syck"))]
fn instantiate_syck() -> Result<Box<dyn Engine>, String> {
    Err("not compiled into this build; enable the `syck` feature and rebuild".to_string())
}

fn warn_unavailable() {
    eprintln!("It seems this build of yamlcompat is missing a YAML engine (for YAML support).");
    eprintln!(
        "To eliminate this warning, enable the `psych` feature (or the legacy `syck` feature) and rebuild."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_put_primary_first() {
        assert_eq!(
            default_candidates(),
            &[EngineKind::Psych, EngineKind::Syck][..]
        );
    }

    #[test]
    fn test_empty_candidate_list_is_unavailable() {
        match select(&[]) {
            Err(YamlError::EngineUnavailable { attempts }) => assert!(attempts.is_empty()),
            Err(other) => panic!("expected EngineUnavailable, got {other:?}"),
            Ok(engine) => panic!("expected no engine, got {:?}", engine.kind()),
        }
    }

    #[cfg(feature = "psych")]
    #[test]
    fn test_selects_primary_when_available() {
        let engine = select(default_candidates()).unwrap();
        assert_eq!(engine.kind(), EngineKind::Psych);
    }

    #[cfg(feature = "syck")]
    #[test]
    fn test_selects_legacy_when_listed_alone() {
        let engine = select(&[EngineKind::Syck]).unwrap();
        assert_eq!(engine.kind(), EngineKind::Syck);
    }
}

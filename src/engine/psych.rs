//! Primary engine backed by `yaml-rust2`.
//!
//! This is the default backend: the maintained, fully-conformant
//! implementation. Documents are built from the parser's marked event
//! stream so scalar style (plain vs. quoted) is known to the resolver.

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use super::builder::{DocumentBuilder, EngineEvent, ScalarTag};
use super::{Engine, EngineKind};
use crate::error::ParseError;
use crate::value::Value;

/// The `yaml-rust2` backend.
#[derive(Debug, Default)]
pub struct PsychEngine;

impl PsychEngine {
    /// Creates the backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct Collector {
    builder: DocumentBuilder,
}

impl MarkedEventReceiver for Collector {
    fn on_event(&mut self, ev: Event, _mark: Marker) {
        let translated = match ev {
            Event::Nothing | Event::StreamStart | Event::StreamEnd => return,
            Event::DocumentStart => EngineEvent::DocumentStart,
            Event::DocumentEnd => EngineEvent::DocumentEnd,
            Event::Alias(anchor) => EngineEvent::Alias { anchor },
            Event::Scalar(text, style, anchor, tag) => EngineEvent::Scalar {
                text,
                plain: matches!(style, TScalarStyle::Plain),
                anchor,
                tag: tag.map(|tag| ScalarTag {
                    handle: tag.handle,
                    suffix: tag.suffix,
                }),
            },
            Event::SequenceStart(anchor, _) => EngineEvent::SequenceStart { anchor },
            Event::SequenceEnd => EngineEvent::SequenceEnd,
            Event::MappingStart(anchor, _) => EngineEvent::MappingStart { anchor },
            Event::MappingEnd => EngineEvent::MappingEnd,
        };
        self.builder.on_event(translated);
    }
}

impl Engine for PsychEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Psych
    }

    fn load_str(&self, source: &str) -> Result<Vec<Value>, ParseError> {
        let mut collector = Collector::default();
        let mut parser = Parser::new_from_str(source);
        parser
            .load(&mut collector, true)
            .map_err(|err| ParseError::new(err.to_string()))?;
        Ok(collector.builder.into_documents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_plain_scalar() {
        let engine = PsychEngine::new();
        let docs = engine.load_str("--- foo").unwrap();
        assert_eq!(docs, vec![Value::from("foo")]);
    }

    #[test]
    fn test_loads_multiple_documents() {
        let engine = PsychEngine::new();
        let docs = engine.load_str("--- a\n--- b\n").unwrap();
        assert_eq!(docs, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_reports_syntax_errors() {
        let engine = PsychEngine::new();
        let err = engine.load_str("key1: value\ninvalid_key").unwrap_err();
        assert!(format!("{err}").contains("invalid YAML"));
    }

    #[test]
    fn test_resolves_anchors() {
        let engine = PsychEngine::new();
        let docs = engine.load_str("- &a one\n- *a\n").unwrap();
        assert_eq!(docs, vec![Value::from(vec!["one", "one"])]);
    }
}

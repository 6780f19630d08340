//! Legacy engine backed by `yaml-rust`.
//!
//! The original pure implementation, kept as a fallback for builds that
//! opt out of the primary engine. Same contract as the primary backend;
//! parse failures are normalized to [`ParseError`] like everywhere else.

use yaml_rust::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust::scanner::{Marker, TScalarStyle, TokenType};

use super::builder::{DocumentBuilder, EngineEvent, ScalarTag};
use super::{Engine, EngineKind};
use crate::error::ParseError;
use crate::value::Value;

/// The `yaml-rust` backend.
#[derive(Debug, Default)]
pub struct SyckEngine;

impl SyckEngine {
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
                tag: tag.and_then(|token| match token {
                    TokenType::Tag(handle, suffix) => Some(ScalarTag { handle, suffix }),
                    _ => None,
                }),
            },
            Event::SequenceStart(anchor) => EngineEvent::SequenceStart { anchor },
            Event::SequenceEnd => EngineEvent::SequenceEnd,
            Event::MappingStart(anchor) => EngineEvent::MappingStart { anchor },
            Event::MappingEnd => EngineEvent::MappingEnd,
        };
        self.builder.on_event(translated);
    }
}

impl Engine for SyckEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Syck
    }

    fn load_str(&self, source: &str) -> Result<Vec<Value>, ParseError> {
        let mut collector = Collector::default();
        let mut parser = Parser::new(source.chars());
        parser
            .load(&mut collector, true)
            .map_err(|err| ParseError::new(err.to_string()))?;
        Ok(collector.builder.into_documents())
    }
}

//! Backend-agnostic document construction.
//!
//! Engine backends translate their parser's event stream into
//! [`EngineEvent`]s and feed them here. The builder tracks open
//! collections, pending mapping keys, and anchored nodes, and produces
//! one [`Value`] per document.

use std::collections::HashMap;

use crate::scalar::resolve_plain;
use crate::value::{Mapping, Value};

/// A scalar tag as reported by a backend parser.
#[derive(Debug, Clone)]
pub(crate) struct ScalarTag {
    pub handle: String,
    pub suffix: String,
}

impl ScalarTag {
    /// Returns the core-schema suffix (`str`, `int`, ...) when this is a
    /// `tag:yaml.org,2002` tag, however the backend spelled it.
    fn core_suffix(&self) -> Option<&str> {
        const CORE_PREFIX: &str = "tag:yaml.org,2002:";
        if self.handle == "!!" || self.handle == CORE_PREFIX {
            return Some(self.suffix.as_str());
        }
        self.suffix.strip_prefix(CORE_PREFIX)
    }
}

/// Parser events common to both backends.
#[derive(Debug)]
pub(crate) enum EngineEvent {
    DocumentStart,
    DocumentEnd,
    Scalar {
        text: String,
        plain: bool,
        anchor: usize,
        tag: Option<ScalarTag>,
    },
    SequenceStart {
        anchor: usize,
    },
    SequenceEnd,
    MappingStart {
        anchor: usize,
    },
    MappingEnd,
    Alias {
        anchor: usize,
    },
}

enum Node {
    Seq(Vec<Value>),
    Map(Mapping, Option<Value>),
}

struct OpenNode {
    node: Node,
    anchor: usize,
}

/// Builds `Value` documents from an event stream.
#[derive(Default)]
pub(crate) struct DocumentBuilder {
    documents: Vec<Value>,
    stack: Vec<OpenNode>,
    root: Option<Value>,
    anchors: HashMap<usize, Value>,
}

impl DocumentBuilder {
    pub(crate) fn on_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::DocumentStart => {
                self.root = None;
            }
            EngineEvent::DocumentEnd => {
                let root = self.root.take().unwrap_or(Value::Null);
                self.documents.push(root);
            }
            EngineEvent::Scalar {
                text,
                plain,
                anchor,
                tag,
            } => {
                let value = scalar_value(text, plain, tag.as_ref());
                self.complete(value, anchor);
            }
            EngineEvent::SequenceStart { anchor } => self.stack.push(OpenNode {
                node: Node::Seq(Vec::new()),
                anchor,
            }),
            EngineEvent::MappingStart { anchor } => self.stack.push(OpenNode {
                node: Node::Map(Mapping::new(), None),
                anchor,
            }),
            EngineEvent::SequenceEnd | EngineEvent::MappingEnd => {
                if let Some(open) = self.stack.pop() {
                    let value = match open.node {
                        Node::Seq(items) => Value::Seq(items),
                        Node::Map(map, _) => Value::Map(map),
                    };
                    self.complete(value, open.anchor);
                }
            }
            EngineEvent::Alias { anchor } => {
                // An alias to an unknown anchor degrades to null; the
                // parser has already rejected genuinely malformed input.
                let value = self.anchors.get(&anchor).cloned().unwrap_or(Value::Null);
                self.complete(value, 0);
            }
        }
    }

    fn complete(&mut self, value: Value, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, value.clone());
        }
        match self.stack.last_mut() {
            Some(OpenNode {
                node: Node::Seq(items),
                ..
            }) => items.push(value),
            Some(OpenNode {
                node: Node::Map(map, pending),
                ..
            }) => {
                if let Some(key) = pending.take() {
                    map.insert(key, value);
                } else {
                    *pending = Some(value);
                }
            }
            None => self.root = Some(value),
        }
    }

    pub(crate) fn into_documents(self) -> Vec<Value> {
        self.documents
    }
}

fn scalar_value(text: String, plain: bool, tag: Option<&ScalarTag>) -> Value {
    if let Some(suffix) = tag.and_then(ScalarTag::core_suffix) {
        match suffix {
            "str" => return Value::String(text),
            "null" => return Value::Null,
            "bool" => {
                return match text.as_str() {
                    "true" | "True" | "TRUE" => Value::Bool(true),
                    "false" | "False" | "FALSE" => Value::Bool(false),
                    _ => Value::String(text),
                }
            }
            "int" => {
                return text
                    .parse::<i64>()
                    .map_or_else(|_| Value::String(text), Value::Int)
            }
            "float" => {
                return text
                    .parse::<f64>()
                    .map_or_else(|_| Value::String(text), Value::Float)
            }
            _ => {}
        }
    }
    if plain {
        resolve_plain(&text)
    } else {
        Value::String(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> EngineEvent {
        EngineEvent::Scalar {
            text: text.to_string(),
            plain: true,
            anchor: 0,
            tag: None,
        }
    }

    #[test]
    fn test_builds_scalar_document() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(plain("47"));
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(builder.into_documents(), vec![Value::Int(47)]);
    }

    #[test]
    fn test_builds_nested_sequence() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::SequenceStart { anchor: 0 });
        builder.on_event(EngineEvent::SequenceStart { anchor: 0 });
        builder.on_event(plain("one"));
        builder.on_event(plain("two"));
        builder.on_event(EngineEvent::SequenceEnd);
        builder.on_event(EngineEvent::SequenceEnd);
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(
            builder.into_documents(),
            vec![Value::from(vec![Value::from(vec!["one", "two"])])]
        );
    }

    #[test]
    fn test_builds_mapping_with_pending_key() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::MappingStart { anchor: 0 });
        builder.on_event(plain(":a"));
        builder.on_event(plain("b"));
        builder.on_event(EngineEvent::MappingEnd);
        builder.on_event(EngineEvent::DocumentEnd);

        let mut expected = Mapping::new();
        expected.insert(Value::symbol("a"), Value::from("b"));
        assert_eq!(builder.into_documents(), vec![Value::Map(expected)]);
    }

    #[test]
    fn test_resolves_aliases_to_anchored_nodes() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::SequenceStart { anchor: 0 });
        builder.on_event(EngineEvent::Scalar {
            text: "shared".to_string(),
            plain: true,
            anchor: 1,
            tag: None,
        });
        builder.on_event(EngineEvent::Alias { anchor: 1 });
        builder.on_event(EngineEvent::SequenceEnd);
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(
            builder.into_documents(),
            vec![Value::from(vec!["shared", "shared"])]
        );
    }

    #[test]
    fn test_empty_document_is_null() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(builder.into_documents(), vec![Value::Null]);
    }

    #[test]
    fn test_str_tag_suppresses_resolution() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::Scalar {
            text: "47".to_string(),
            plain: true,
            anchor: 0,
            tag: Some(ScalarTag {
                handle: "!!".to_string(),
                suffix: "str".to_string(),
            }),
        });
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(
            builder.into_documents(),
            vec![Value::String("47".to_string())]
        );
    }

    #[test]
    fn test_quoted_scalar_stays_string() {
        let mut builder = DocumentBuilder::default();
        builder.on_event(EngineEvent::DocumentStart);
        builder.on_event(EngineEvent::Scalar {
            text: ":locked".to_string(),
            plain: false,
            anchor: 0,
            tag: None,
        });
        builder.on_event(EngineEvent::DocumentEnd);
        assert_eq!(
            builder.into_documents(),
            vec![Value::String(":locked".to_string())]
        );
    }
}

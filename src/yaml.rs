//! Reads the first YAML document into a tree that keeps scalars as written.
//!
//! Input values end up in a Markdown table, so `1.10`, `0x1F` and `007` must
//! survive exactly as the author typed them. A typed loader would resolve
//! them to numbers first. Here every scalar stays text, except plain nulls.

use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};
use yaml_rust2::ScanError;

/// Parse the first document of `content`.
///
/// Returns `None` for an empty stream. Later documents are left unread.
pub fn first_document(content: &str) -> Result<Option<Value>, ScanError> {
    let mut builder = TreeBuilder::default();
    Parser::new_from_str(content).load(&mut builder, false)?;
    Ok(builder.root)
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Value>,
    },
    Mapping {
        anchor: usize,
        entries: Mapping,
        key: Option<Value>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Value>,
    root: Option<Value>,
}

impl TreeBuilder {
    fn complete(&mut self, anchor: usize, value: Value) {
        if anchor != 0 {
            self.anchors.insert(anchor, value.clone());
        }
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Sequence { items, .. }) => items.push(value),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(k) => {
                    entries.insert(k, value);
                }
                None => *key = Some(value),
            },
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        match ev {
            Event::Scalar(text, style, anchor, _tag) => {
                self.complete(anchor, scalar(text, style));
            }
            Event::SequenceStart(anchor, _tag) => self.stack.push(Frame::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, _tag) => self.stack.push(Frame::Mapping {
                anchor,
                entries: Mapping::new(),
                key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.complete(anchor, Value::Sequence(items));
                }
                Some(Frame::Mapping { anchor, entries, .. }) => {
                    self.complete(anchor, Value::Mapping(entries));
                }
                None => {}
            },
            Event::Alias(anchor) => {
                let value = self.anchors.get(&anchor).cloned().unwrap_or(Value::Null);
                self.complete(0, value);
            }
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}
        }
    }
}

/// Plain `~`, `null` and empty scalars are null; everything else is text.
fn scalar(text: String, style: TScalarStyle) -> Value {
    let is_null = style == TScalarStyle::Plain
        && matches!(text.as_str(), "" | "~" | "null" | "Null" | "NULL");
    if is_null {
        Value::Null
    } else {
        Value::String(text)
    }
}

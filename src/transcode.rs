//! Serializes a [`DocumentValue`] as JSON.
//!
//! JSON object keys must be strings, so scalar YAML keys are rendered as
//! text (`~` becomes `"null"`, `true` becomes `"true"`, `1` becomes `"1"`).
//! Sequence and mapping keys have no JSON form and fail serialization.
//! Tags are dropped.
//!
//! Output is a single line with `", "` between items and `": "` after keys,
//! e.g. `{"key": 1, "list": ["a", "b"]}`.

use crate::decode::DocumentValue;
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::Formatter;
use serde_yaml::Value;
use std::{
    borrow::Cow,
    io::{self, Write},
};

/// Writes `value` as single-line JSON.
pub fn to_writer<W: Write>(writer: W, value: &DocumentValue) -> serde_json::Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    JsonView(value).serialize(&mut serializer)
}

/// Compact layout with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

struct JsonView<'a>(&'a Value);

impl Serialize for JsonView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&JsonView(item))?;
                }
                seq.end()
            }
            Value::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (k, v) in mapping {
                    let key = key_text(k).map_err(S::Error::custom)?;
                    map.serialize_entry(key.as_ref(), &JsonView(v))?;
                }
                map.end()
            }
            Value::Tagged(tagged) => JsonView(&tagged.value).serialize(serializer),
        }
    }
}

fn key_text(key: &Value) -> Result<Cow<'_, str>, String> {
    match key {
        Value::String(s) => Ok(Cow::Borrowed(s)),
        Value::Null => Ok(Cow::Borrowed("null")),
        Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) => Err("key must be a scalar, found a sequence".to_string()),
        Value::Mapping(_) => Err("key must be a scalar, found a mapping".to_string()),
    }
}

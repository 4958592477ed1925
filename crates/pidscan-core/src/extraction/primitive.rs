use lopdf::{Document, Object};
use serde_json::Value;

/// Dereference chains deeper than this are treated as opaque.
const MAX_DEPTH: usize = 16;

/// Convert a PDF object to a JSON-primitive value.
///
/// Total over every object shape: primitives map directly, containers
/// recurse, references are dereferenced, and anything else (streams,
/// broken references, non-finite reals) falls back to a string rendering.
/// Never fails.
pub fn to_primitive(doc: &Document, obj: &Object) -> Value {
    to_primitive_depth(doc, obj, 0)
}

fn to_primitive_depth(doc: &Document, obj: &Object, depth: usize) -> Value {
    if depth > MAX_DEPTH {
        return Value::String(format!("{obj:?}"));
    }

    match obj {
        Object::Null => Value::Null,
        Object::Boolean(b) => Value::Bool(*b),
        Object::Integer(i) => Value::from(*i),
        Object::Real(r) => serde_json::Number::from_f64(*r as f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(r.to_string())),
        Object::Name(bytes) => Value::String(format!("/{}", String::from_utf8_lossy(bytes))),
        Object::String(bytes, _) => Value::String(decode_bytes(bytes)),
        Object::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| to_primitive_depth(doc, item, depth + 1))
                .collect(),
        ),
        Object::Dictionary(dict) => Value::Object(
            dict.iter()
                .map(|(k, v)| {
                    (
                        String::from_utf8_lossy(k).to_string(),
                        to_primitive_depth(doc, v, depth + 1),
                    )
                })
                .collect(),
        ),
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(target) => to_primitive_depth(doc, target, depth + 1),
            Err(_) => Value::String(format!("{} {} R", id.0, id.1)),
        },
        // Streams and anything future: string rendering as a last resort.
        other => Value::String(format!("{other:?}")),
    }
}

/// Decode a PDF string object to text: UTF-16BE when BOM-prefixed,
/// Latin-1 otherwise.
pub fn decode_bytes(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }
    bytes.iter().map(|&b| b as char).collect()
}

/// Dereference an object if it is a reference, returning the target (or
/// the object itself).
pub fn deref<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        other => other,
    }
}

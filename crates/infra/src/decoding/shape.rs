//! Translation of `serde` failures into [`DecodeError::InvalidShape`].

use covsum_domain::EntityId;
use covsum_shared_kernel::DecodeError;
use serde_json::Value;
use serde_path_to_error::{Error, Segment};

pub(super) const ROOT: &str = "$";
const MISSING: &str = "<missing>";
const PREVIEW_LIMIT: usize = 60;

pub(super) fn translate(document: &Value, err: &Error<serde_json::Error>) -> DecodeError {
    let message = err.inner().to_string();
    let mut field_path = String::from(ROOT);
    let mut cursor = Some(document);
    for segment in err.path().iter() {
        match segment {
            Segment::Map { key } => {
                field_path.push('.');
                field_path.push_str(key);
                cursor = cursor.and_then(|v| v.get(key.as_str()));
            }
            Segment::Seq { index } => {
                field_path.push_str(&format!("[{index}]"));
                cursor = cursor.and_then(|v| v.get(*index));
            }
            Segment::Enum { variant } => {
                field_path.push('.');
                field_path.push_str(variant);
            }
            Segment::Unknown => field_path.push_str(".?"),
        }
    }

    if let Some(field) = missing_field(&message) {
        field_path.push('.');
        field_path.push_str(field);
        return DecodeError::invalid_shape(field_path, "required field", MISSING);
    }

    let expected_kind = expected_kind(&message);
    if expected_kind == "integer id" {
        // key errors usually stop at the enclosing map; name the offending key
        if let Some(key) = cursor.and_then(first_non_numeric_key) {
            field_path.push('.');
            field_path.push_str(key);
            return DecodeError::invalid_shape(field_path, expected_kind, format!("\"{key}\""));
        }
        if let Some(Segment::Map { key }) = err.path().iter().last() {
            return DecodeError::invalid_shape(field_path, expected_kind, format!("\"{key}\""));
        }
    }

    let actual = cursor.map_or_else(|| MISSING.to_string(), preview);
    DecodeError::invalid_shape(field_path, expected_kind, actual)
}

fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `").and_then(|rest| rest.split('`').next())
}

fn expected_kind(message: &str) -> String {
    let Some((_, expected)) = message.rsplit_once(", expected ") else {
        return message.to_string();
    };
    match expected {
        "u8" | "u16" | "u32" | "u64" | "i8" | "i16" | "i32" | "i64" => "integer".to_string(),
        "a boolean" => "boolean".to_string(),
        "a string" => "string".to_string(),
        "a sequence" => "array".to_string(),
        "a map" => "object".to_string(),
        other if other.starts_with("struct ") => "object".to_string(),
        other if other == EntityId::EXPECTED => "integer id".to_string(),
        other => other.to_string(),
    }
}

fn first_non_numeric_key(value: &Value) -> Option<&str> {
    value.as_object()?.keys().map(String::as_str).find(|key| EntityId::parse(key).is_none())
}

/// First place where `document` holds an array but the decoded model is an object.
///
/// Derived struct deserialisers also accept a sequence of field values, so
/// the decoded report is serialised back and compared node by node.
pub(super) fn array_in_place_of_object(document: &Value, decoded: &Value) -> Option<DecodeError> {
    find_array_for_object(document, decoded, ROOT)
}

fn find_array_for_object(document: &Value, decoded: &Value, path: &str) -> Option<DecodeError> {
    match (document, decoded) {
        (Value::Array(_), Value::Object(_)) => Some(DecodeError::invalid_shape(path, "object", preview(document))),
        (Value::Object(fields), Value::Object(model)) => fields.iter().find_map(|(key, value)| {
            // ids such as "007" come back in canonical form
            let counterpart =
                model.get(key).or_else(|| EntityId::parse(key).and_then(|id| model.get(&id.to_string())))?;
            find_array_for_object(value, counterpart, &format!("{path}.{key}"))
        }),
        (Value::Array(items), Value::Array(model)) => {
            items.iter().zip(model).enumerate().find_map(|(index, (value, counterpart))| {
                find_array_for_object(value, counterpart, &format!("{path}[{index}]"))
            })
        }
        _ => None,
    }
}

/// Compact JSON of `value`, cut to a readable length.
pub(super) fn preview(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= PREVIEW_LIMIT {
        return text;
    }
    let mut cut: String = text.chars().take(PREVIEW_LIMIT).collect();
    cut.push('…');
    cut
}

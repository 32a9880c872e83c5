use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional value that the server may send either as a JSON
/// string or as a number, keeping it as a string
///
/// `null` and a missing field both map to `None`.
pub fn string_or_number_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

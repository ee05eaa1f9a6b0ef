use std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ErrorInfo, FourierError};

fn serde_error(code: &str, err: impl ToString) -> FourierError {
    FourierError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Rebuilds objects with recursively sorted keys so reports hash identically
/// regardless of field order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(key, val)| (key, sort_keys(val))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        leaf => leaf,
    }
}

/// Encodes `value` as compact JSON with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FourierError> {
    let tree = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&sort_keys(tree)).map_err(|err| serde_error("json-write", err))
}

/// Decodes a JSON document such as a stored sweep report.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, FourierError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Decodes a YAML document such as a run configuration.
pub fn from_yaml_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, FourierError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml-read", err))
}

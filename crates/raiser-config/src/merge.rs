//! Defaults-over-overrides merging.
//!
//! Components are built from a typed defaults struct plus a partial override
//! document. Both sides are brought to [`serde_json::Value`], merged once, and
//! deserialized back into the typed struct.
//!
//! Merge rules:
//! - objects merge recursively, key by key
//! - sequences concatenate, except numeric tuples (vectors, colours) which
//!   are atomic and replace the default
//! - everything else replaces the default

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigError;

/// Merge `overrides` into `base` in place.
pub fn deep_merge(base: &mut Value, overrides: Value) {
    match overrides {
        Value::Object(override_map) => {
            if let Value::Object(base_map) = base {
                for (key, value) in override_map {
                    match base_map.get_mut(&key) {
                        Some(existing) => deep_merge(existing, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            } else {
                *base = Value::Object(override_map);
            }
        }
        Value::Array(override_items) if !is_numeric_tuple(&override_items) => match base {
            Value::Array(base_items) if !is_numeric_tuple(base_items.as_slice()) => {
                base_items.extend(override_items);
            }
            _ => *base = Value::Array(override_items),
        },
        other => *base = other,
    }
}

/// Resolve a typed configuration from `defaults` and a partial override document.
pub fn merge_with_defaults<T>(defaults: &T, overrides: Value) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(defaults).map_err(ConfigError::MergeError)?;
    deep_merge(&mut merged, overrides);
    serde_json::from_value(merged).map_err(ConfigError::MergeError)
}

fn is_numeric_tuple(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_number)
}

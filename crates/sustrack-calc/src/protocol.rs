//! Calculation service response decoding
//!
//! The service answers with a loosely shaped JSON object. Decoding is
//! defensive: a body that is not a JSON object is an error, but any missing
//! key falls back to its empty default and individual bad entries are
//! skipped with a warning.

use serde_json::{Map, Value};
use sustrack_core::prelude::*;
use sustrack_core::{CategoryEmission, CategoryRecommendation, EmissionsResult};

/// Response keys, in the order the results panel renders them
pub const EMISSIONS_KEY: &str = "emissions";
pub const TOTAL_KEY: &str = "total_carbon";
pub const RECOMMENDATIONS_KEY: &str = "recommendations";
pub const OVERALL_KEY: &str = "overall_recommendations";

/// Decode a raw response body
pub fn decode_response(body: &str) -> Result<EmissionsResult> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed_response(format!("invalid JSON: {}", e)))?;
    decode_value(value)
}

/// Decode an already-parsed JSON value
pub fn decode_value(value: Value) -> Result<EmissionsResult> {
    let mut obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(Error::malformed_response(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )))
        }
    };

    let emissions = take_object(&mut obj, EMISSIONS_KEY)
        .into_iter()
        .filter_map(|(category, value)| match value.as_f64() {
            Some(kg_co2) => Some(CategoryEmission { category, kg_co2 }),
            None => {
                warn!(
                    "Skipping emission '{}': expected a number, got {}",
                    category,
                    kind_of(&value)
                );
                None
            }
        })
        .collect();

    let total_carbon = match obj.remove(TOTAL_KEY) {
        Some(value) => value.as_f64().unwrap_or_else(|| {
            warn!("'{}' is {}, using 0", TOTAL_KEY, kind_of(&value));
            0.0
        }),
        None => {
            warn!("Response has no '{}', using 0", TOTAL_KEY);
            0.0
        }
    };

    let recommendations = take_object(&mut obj, RECOMMENDATIONS_KEY)
        .into_iter()
        .filter_map(|(category, value)| match value {
            Value::String(text) => Some(CategoryRecommendation { category, text }),
            other => {
                warn!(
                    "Skipping recommendation '{}': expected a string, got {}",
                    category,
                    kind_of(&other)
                );
                None
            }
        })
        .collect();

    let overall_recommendations = match obj.remove(OVERALL_KEY) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                other => {
                    warn!("Skipping overall recommendation: got {}", kind_of(&other));
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => {
            debug!("Response has no '{}'", OVERALL_KEY);
            Vec::new()
        }
        Some(other) => {
            warn!("'{}' is {}, ignoring", OVERALL_KEY, kind_of(&other));
            Vec::new()
        }
    };

    Ok(EmissionsResult {
        emissions,
        total_carbon,
        recommendations,
        overall_recommendations,
    })
}

/// Remove `key` from the response and return it as an object, or empty
fn take_object(obj: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match obj.remove(key) {
        Some(Value::Object(map)) => map,
        Some(Value::Null) | None => {
            debug!("Response has no '{}'", key);
            Map::new()
        }
        Some(other) => {
            warn!("'{}' is {}, ignoring", key, kind_of(&other));
            Map::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Tolerant numeric decoding for client and backend JSON.
//!
//! Numbers arrive as JSON numbers, numeric strings, `null`, or not at all.
//! Everything that is not a usable number decodes as zero. Other fields may
//! arrive as explicit `null`, which decodes as the field's default.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Reads a number out of a JSON value, accepting numeric strings.
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Reads a numeric field from a JSON object, `None` when absent or unusable.
pub fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(number_from_value)
}

/// serde `deserialize_with` for `f64` fields: missing, null or garbage is 0.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).unwrap_or(0.0))
}

/// serde `deserialize_with` for whole-number scores.
pub fn score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = number(deserializer)?;
    Ok(n.round().max(0.0) as u32)
}

/// serde `deserialize_with` that treats an explicit `null` like a missing key.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "number")]
        value: f64,
        #[serde(default, deserialize_with = "score")]
        score: u32,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
    }

    fn sample(v: Value) -> Sample {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(sample(json!({"value": 12.5})).value, 12.5);
        assert_eq!(sample(json!({"value": " 40 "})).value, 40.0);
    }

    #[test]
    fn missing_null_and_garbage_are_zero() {
        assert_eq!(sample(json!({})).value, 0.0);
        assert_eq!(sample(json!({"value": null})).value, 0.0);
        assert_eq!(sample(json!({"value": "lots"})).value, 0.0);
        assert_eq!(sample(json!({"value": [1]})).value, 0.0);
    }

    #[test]
    fn scores_round_and_floor_at_zero() {
        assert_eq!(sample(json!({"score": 74.6})).score, 75);
        assert_eq!(sample(json!({"score": -3})).score, 0);
        assert_eq!(sample(json!({"score": "88"})).score, 88);
    }

    #[test]
    fn null_lists_decode_empty() {
        assert!(sample(json!({"tags": null})).tags.is_empty());
        assert_eq!(sample(json!({"tags": ["a"]})).tags, vec!["a".to_string()]);
    }

    #[test]
    fn number_field_distinguishes_absent() {
        let map = json!({"cac": "250", "ltv": null}).as_object().cloned().unwrap();
        assert_eq!(number_field(&map, "cac"), Some(250.0));
        assert_eq!(number_field(&map, "ltv"), None);
        assert_eq!(number_field(&map, "revenue"), None);
    }
}

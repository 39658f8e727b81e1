use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata attached to an entry. Opaque to the core: stored and returned,
/// never inspected. `BTreeMap` keeps serialization order deterministic.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A metadata value: string, number, flag, or nested map.
///
/// Untagged so `{"source": "chat", "tone": 0.4}` round-trips naturally
/// through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Map(BTreeMap<String, MetadataValue>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_preserves_variants() {
        let mut meta = Metadata::new();
        meta.insert("source".into(), "chat".into());
        meta.insert("tone".into(), 0.4.into());
        meta.insert("pinned".into(), true.into());
        let mut nested = BTreeMap::new();
        nested.insert("lang".into(), MetadataValue::Text("en".into()));
        meta.insert("extra".into(), MetadataValue::Map(nested));

        let json = serde_json::to_string(&meta).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }

    #[test]
    fn serialization_order_is_deterministic() {
        let mut meta = Metadata::new();
        meta.insert("z".into(), 1.0.into());
        meta.insert("a".into(), 2.0.into());
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"a":2.0,"z":1.0}"#);
    }
}

use std::collections::BTreeMap;

/// A structured value built from bracketed field names: a scalar string, an
/// ordered sequence, or a string-keyed mapping.
///
/// Sequences are index-keyed rather than densely stored, so a huge fixed
/// index like `a[2000000000]` costs one entry instead of an allocation
/// proportional to the index value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(String),
    Sequence(BTreeMap<usize, Value>),
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    pub fn scalar(s: impl Into<String>) -> Self {
        Value::Scalar(s.into())
    }

    pub fn empty_mapping() -> Self {
        Value::Mapping(BTreeMap::new())
    }

    /// A single-entry mapping `{key: value}`.
    pub fn mapping_of(key: &str, value: Value) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.to_string(), value);
        Value::Mapping(map)
    }

    /// A sequence holding `value` at `index` and nothing else.
    pub fn sequence_at(index: usize, value: Value) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(index, value);
        Value::Sequence(slots)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&BTreeMap<usize, Value>> {
        match self {
            Value::Sequence(slots) => Some(slots),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Coerce to a list of scalar strings: a scalar becomes a one-element
    /// list, a sequence yields its scalar entries in index order, a mapping
    /// nothing.
    pub fn scalar_items(&self) -> Vec<String> {
        match self {
            Value::Scalar(s) => vec![s.clone()],
            Value::Sequence(slots) => slots
                .values()
                .filter_map(|v| v.as_scalar().map(str::to_string))
                .collect(),
            Value::Mapping(_) => Vec::new(),
        }
    }

    /// First scalar reachable from this value, if any.
    pub fn first_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Sequence(slots) => slots.values().find_map(|v| v.first_scalar()),
            Value::Mapping(_) => None,
        }
    }

    /// Render as JSON. Dense sequences become arrays; sequences with holes
    /// become objects keyed by decimal index, so sparse merges stay visible.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(slots) => {
                if is_dense(slots) {
                    serde_json::Value::Array(slots.values().map(|v| v.to_json()).collect())
                } else {
                    let mut map = serde_json::Map::new();
                    for (index, v) in slots {
                        map.insert(index.to_string(), v.to_json());
                    }
                    serde_json::Value::Object(map)
                }
            }
            Value::Mapping(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k.clone(), v.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }

    /// Build from arbitrary JSON, stringifying scalar leaves.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Scalar(String::new()),
            serde_json::Value::Bool(b) => Value::Scalar(b.to_string()),
            serde_json::Value::Number(n) => Value::Scalar(n.to_string()),
            serde_json::Value::String(s) => Value::Scalar(s.clone()),
            serde_json::Value::Array(items) => Value::Sequence(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, v)| (index, Value::from_json(v)))
                    .collect(),
            ),
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

/// Whether a sequence occupies indices `0..len` with no holes.
pub fn is_dense(slots: &BTreeMap<usize, Value>) -> bool {
    slots
        .last_key_value()
        .is_none_or(|(last, _)| last + 1 == slots.len())
}

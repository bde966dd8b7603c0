use crate::value::value_model::Value;

/// Deep-merge `incoming` into `existing`.
///
/// Mappings combine keys recursively. Sequences combine by index: incoming
/// entries land at their index, existing entries at other indices are
/// preserved (non-destructive sparse merge). Any other pairing replaces the
/// existing value, which is what gives repeated same-name fields their
/// overwrite semantics.
pub fn merge(existing: &mut Value, incoming: Value) {
    match (&mut *existing, incoming) {
        (Value::Mapping(dst), Value::Mapping(src)) => {
            for (key, value) in src {
                match dst.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        dst.insert(key, value);
                    }
                }
            }
        }
        (Value::Sequence(dst), Value::Sequence(src)) => {
            for (index, value) in src {
                match dst.get_mut(&index) {
                    Some(current) => merge(current, value),
                    None => {
                        dst.insert(index, value);
                    }
                }
            }
        }
        (dst, src) => *dst = src,
    }
}

use std::collections::BTreeMap;

use crate::value::value_model::{Value, is_dense};

/// Flatten a nested mapping back into literal bracketed element names.
///
/// The inverse walk of the name parser: mapping keys become `name[key]` and
/// sparse sequence slots become `name[index]`. A dense all-scalar sequence
/// is kept whole and registered under both `name` and `name[]`, since a
/// multi-select carries the plain name while a checkbox group carries the
/// push form.
pub fn flatten(value: &Value) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    if let Value::Mapping(entries) = value {
        for (key, v) in entries {
            flatten_into(key.clone(), v, &mut out);
        }
    }
    out
}

fn flatten_into(name: String, value: &Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Scalar(_) => {
            out.insert(name, value.clone());
        }
        Value::Mapping(entries) => {
            for (key, v) in entries {
                flatten_into(format!("{}[{}]", name, key), v, out);
            }
        }
        Value::Sequence(slots) => {
            let dense_scalars =
                is_dense(slots) && slots.values().all(|v| matches!(v, Value::Scalar(_)));
            if dense_scalars {
                out.insert(format!("{}[]", name), Value::Sequence(slots.clone()));
                out.insert(name, Value::Sequence(slots.clone()));
            } else {
                for (index, v) in slots {
                    flatten_into(format!("{}[{}]", name, index), v, out);
                }
            }
        }
    }
}

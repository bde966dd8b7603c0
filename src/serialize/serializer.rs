use std::collections::HashMap;

use crate::dom::element::FieldEntry;
use crate::serialize::name_parser::{NameParser, Segment};
use crate::value::merge::merge;
use crate::value::value_model::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions {
    /// Drop entries whose value is empty before parsing their name.
    pub skip_empty: bool,
}

/// What a serialization pass produced: the nested mapping plus how many
/// entries were merged and how many were dropped (empty values under
/// `skip_empty`, or names failing the bracket grammar).
#[derive(Debug)]
pub struct SerializeReport {
    pub value: Value,
    pub merged: usize,
    pub skipped: usize,
}

/// Serialize captured field entries into one nested mapping.
pub fn serialize(entries: &[FieldEntry], options: &SerializeOptions) -> Value {
    serialize_entries(entries, options).value
}

/// Serialize with per-entry accounting.
///
/// Each entry's name is tokenized, a single-path fragment is built from the
/// innermost segment outward, and the fragment is deep-merged into the
/// accumulating top-level mapping. Names failing the bracket grammar are
/// skipped, never an error. Push counters are scoped per reverse key and
/// live only for this call.
pub fn serialize_entries(entries: &[FieldEntry], options: &SerializeOptions) -> SerializeReport {
    let parser = NameParser::new();
    let mut root = Value::empty_mapping();
    let mut push_counters: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0;

    for entry in entries {
        if options.skip_empty && entry.value.is_empty() {
            skipped += 1;
            continue;
        }
        let Some(path) = parser.parse(&entry.name) else {
            skipped += 1;
            continue;
        };

        // Wrap the scalar from the last (innermost) segment to the first.
        let mut merged = Value::scalar(entry.value.clone());
        for parsed in path.segments.iter().rev() {
            merged = match &parsed.segment {
                Segment::Push => {
                    let counter = push_counters.entry(parsed.reverse_key.clone()).or_insert(0);
                    let index = *counter;
                    *counter += 1;
                    Value::sequence_at(index, merged)
                }
                Segment::Index(index) => Value::sequence_at(*index, merged),
                Segment::Key(key) => Value::mapping_of(key, merged),
            };
        }

        let fragment = Value::mapping_of(&path.base, merged);
        merge(&mut root, fragment);
    }

    let merged = entries.len() - skipped;
    SerializeReport {
        value: root,
        merged,
        skipped,
    }
}

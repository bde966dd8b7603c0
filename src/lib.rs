use crate::{
    apply::assign::apply_structured,
    dom::document::FormDocument,
    serialize::serializer::{SerializeOptions, serialize},
    value::value_model::Value,
};

pub mod apply;
pub mod cli;
pub mod datepicker;
pub mod dom;
pub mod error;
pub mod listeners;
pub mod request;
pub mod serialize;
pub mod trace;
pub mod value;

// ── Core API ───────────────────────────────────────────────────────

/// Serialize a form's successful controls into one nested mapping, merging
/// bracketed names like `a[b][]` into sequence/mapping structure.
pub fn serialize_document(doc: &FormDocument, options: &SerializeOptions) -> Value {
    serialize(&doc.field_entries(), options)
}

/// Flatten structured data back onto a form's element states. Elements
/// whose name has no corresponding value are left unchanged.
pub fn apply_document(doc: &mut FormDocument, data: &Value) {
    apply_structured(doc, data);
}

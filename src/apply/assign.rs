use std::collections::BTreeMap;

use crate::dom::document::FormDocument;
use crate::dom::element::ElementType;
use crate::serialize::flatten::flatten;
use crate::value::value_model::Value;

/// Assign element presentation state from a flat `name -> value` map, where
/// names are the literal bracketed strings elements carry in the DOM.
///
/// Elements whose name has no entry are left unchanged. Per element type:
/// buttons are never assigned, selects re-select options whose value matches
/// any target entry, checkboxes and radios check themselves iff their own
/// value is in the target list, text-like elements take the value directly
/// (sequences coerce to their first element).
pub fn apply(doc: &mut FormDocument, data: &BTreeMap<String, Value>) {
    for el in &mut doc.elements {
        let Some(target) = data.get(&el.name) else {
            continue;
        };

        match el.element_type() {
            ElementType::NonDataBearing => {}
            ElementType::SelectSingle | ElementType::SelectMultiple => {
                let wanted = target.scalar_items();
                for option in &mut el.options {
                    option.selected = wanted.iter().any(|w| w == &option.value);
                }
                el.value = el
                    .options
                    .iter()
                    .find(|o| o.selected)
                    .map(|o| o.value.clone())
                    .unwrap_or_default();
            }
            ElementType::Checkbox | ElementType::Radio => {
                let wanted = target.scalar_items();
                el.checked = wanted.iter().any(|w| w == &el.value);
            }
            ElementType::TextLike => {
                if let Some(value) = target.first_scalar() {
                    el.value = value.to_string();
                }
            }
        }
    }
}

/// Flatten a nested mapping to literal element names, then assign.
pub fn apply_structured(doc: &mut FormDocument, value: &Value) {
    let flat = flatten(value);
    apply(doc, &flat);
}

use serde::{Deserialize, Serialize};

use crate::dom::element::{ElementType, FieldEntry, FormElement};
use crate::error::FormError;

/// A form container and its controls, captured from the browser side.
///
/// Construction checks the root tag up front: handing anything but a form
/// container over is a structural error, not a recoverable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDocument {
    pub tag: String,
    pub id: Option<String>,
    pub elements: Vec<FormElement>,
}

impl FormDocument {
    pub fn new(
        tag: &str,
        id: Option<String>,
        elements: Vec<FormElement>,
    ) -> Result<Self, FormError> {
        if tag != "form" {
            return Err(FormError::NotAForm {
                tag: tag.to_string(),
            });
        }
        Ok(FormDocument {
            tag: tag.to_string(),
            id,
            elements,
        })
    }

    /// Build from an extraction payload: `{"tag": "form", "id": ...,
    /// "elements": [...]}`.
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, FormError> {
        let tag = payload["tag"].as_str().unwrap_or("");
        let id = payload["id"].as_str().map(str::to_string);
        let elements: Vec<FormElement> =
            serde_json::from_value(payload["elements"].clone()).map_err(|source| {
                FormError::Json {
                    context: "form elements".to_string(),
                    source,
                }
            })?;
        FormDocument::new(tag, id, elements)
    }

    pub fn element(&self, name: &str) -> Result<&FormElement, FormError> {
        self.elements
            .iter()
            .find(|el| el.name == name)
            .ok_or_else(|| FormError::UnknownElement {
                name: name.to_string(),
            })
    }

    pub fn element_mut(&mut self, name: &str) -> Result<&mut FormElement, FormError> {
        self.elements
            .iter_mut()
            .find(|el| el.name == name)
            .ok_or_else(|| FormError::UnknownElement {
                name: name.to_string(),
            })
    }

    /// Capture successful controls in document order: disabled and
    /// non-data-bearing elements are skipped, checkboxes and radios count
    /// only when checked, multi-selects yield one entry per selected option.
    pub fn field_entries(&self) -> Vec<FieldEntry> {
        let mut entries = Vec::new();

        for el in &self.elements {
            if el.disabled || el.name.is_empty() {
                continue;
            }
            let element_type = el.element_type();
            match element_type {
                ElementType::NonDataBearing => {}
                ElementType::Checkbox | ElementType::Radio => {
                    if el.checked {
                        entries.push(FieldEntry::new(&el.name, &el.value, element_type));
                    }
                }
                ElementType::SelectMultiple => {
                    for value in el.selected_values() {
                        entries.push(FieldEntry::new(&el.name, &value, element_type));
                    }
                }
                ElementType::SelectSingle => {
                    let value = el
                        .selected_values()
                        .into_iter()
                        .next()
                        .unwrap_or_else(|| el.value.clone());
                    entries.push(FieldEntry::new(&el.name, &value, element_type));
                }
                ElementType::TextLike => {
                    entries.push(FieldEntry::new(&el.name, &el.value, element_type));
                }
            }
        }

        entries
    }

    /// Replace the element set after the DOM node was swapped out.
    /// Returns whether the form's shape actually changed.
    pub fn refresh(&mut self, elements: Vec<FormElement>) -> bool {
        let before = self.fingerprint();
        self.elements = elements;
        self.fingerprint() != before
    }

    /// SHA-1 digest over the element name/tag/type set, in order.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for el in &self.elements {
            hasher.update(el.tag.as_bytes());
            hasher.update(b"|");
            hasher.update(el.name.as_bytes());
            hasher.update(b"|");
            hasher.update(el.r#type.as_deref().unwrap_or("").as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }

    /// Clear element presentation state. Preserve-marked elements are always
    /// exempt; hidden inputs only when `preserve_hidden` is set. Idempotent.
    pub fn reset(&mut self, preserve_hidden: bool) {
        for el in &mut self.elements {
            if el.preserve || (preserve_hidden && el.is_hidden()) {
                continue;
            }
            match el.element_type() {
                ElementType::NonDataBearing => {}
                ElementType::Checkbox | ElementType::Radio => el.checked = false,
                ElementType::SelectSingle | ElementType::SelectMultiple => {
                    for option in &mut el.options {
                        option.selected = false;
                    }
                    el.value.clear();
                }
                ElementType::TextLike => el.value.clear(),
            }
            el.invalid = false;
        }
    }
}

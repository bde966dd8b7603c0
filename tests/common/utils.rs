use formwork::dom::document::FormDocument;
use formwork::dom::element::{ElementType, FieldEntry, FormElement};

/// A form document wrapping the given elements.
pub fn form(elements: Vec<FormElement>) -> FormDocument {
    FormDocument::new("form", None, elements).expect("form tag is valid")
}

/// A text-typed field entry, the common case in serialization tests.
pub fn entry(name: &str, value: &str) -> FieldEntry {
    FieldEntry::new(name, value, ElementType::TextLike)
}

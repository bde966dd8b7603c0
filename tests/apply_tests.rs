use serde_json::json;

use formwork::apply::assign::{apply, apply_structured};
use formwork::dom::document::FormDocument;
use formwork::dom::element::FormElement;
use formwork::error::FormError;
use formwork::serialize::flatten::flatten;
use formwork::value::value_model::Value;

mod common;
use common::utils::form;

// ============================================================================
// Flattening: nested mapping -> literal element names
// ============================================================================

#[test]
fn flatten_regenerates_bracketed_names() {
    let value = Value::from_json(&json!({
        "name": "jo",
        "user": {"city": "Oslo"},
        "tags": ["a", "b"]
    }));
    let flat = flatten(&value);

    assert_eq!(flat["name"].as_scalar(), Some("jo"));
    assert_eq!(flat["user[city]"].as_scalar(), Some("Oslo"));
    assert_eq!(flat["tags[]"].scalar_items(), vec!["a", "b"]);
}

#[test]
fn flatten_keeps_sparse_indices_explicit() {
    let mut value = Value::empty_mapping();
    let fragment = Value::mapping_of("a", Value::sequence_at(2, Value::scalar("y")));
    formwork::value::merge::merge(&mut value, fragment);

    let flat = flatten(&value);
    assert!(flat.contains_key("a[2]"), "sparse slot keeps its index");
    assert!(!flat.contains_key("a[]"), "sparse sequences do not collapse");
}

// ============================================================================
// Assignment rules per element type
// ============================================================================

#[test]
fn multi_select_selects_exactly_the_listed_values() {
    let mut doc = form(vec![FormElement::select(
        "status",
        &[("a", false), ("b", false), ("c", true)],
        true,
    )]);

    apply_structured(&mut doc, &Value::from_json(&json!({"status": ["a", "b"]})));

    let el = doc.element("status").unwrap();
    let selected: Vec<&str> = el
        .options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(selected, vec!["a", "b"], "c must be cleared");
}

#[test]
fn single_select_coerces_scalar_and_clears_previous() {
    let mut doc = form(vec![FormElement::select(
        "country",
        &[("no", true), ("se", false)],
        false,
    )]);

    apply_structured(&mut doc, &Value::from_json(&json!({"country": "se"})));

    let el = doc.element("country").unwrap();
    assert!(!el.options[0].selected);
    assert!(el.options[1].selected);
    assert_eq!(el.value, "se");
}

#[test]
fn checkbox_group_checks_matching_values() {
    let mut doc = form(vec![
        FormElement::checkbox("tags[]", "a", false),
        FormElement::checkbox("tags[]", "b", true),
        FormElement::checkbox("tags[]", "c", true),
    ]);

    apply_structured(&mut doc, &Value::from_json(&json!({"tags": ["a", "b"]})));

    let checked: Vec<&str> = doc
        .elements
        .iter()
        .filter(|el| el.checked)
        .map(|el| el.value.as_str())
        .collect();
    assert_eq!(checked, vec!["a", "b"]);
}

#[test]
fn radio_selects_the_matching_element() {
    let mut doc = form(vec![
        FormElement::radio("size", "s", true),
        FormElement::radio("size", "m", false),
    ]);

    apply_structured(&mut doc, &Value::from_json(&json!({"size": "m"})));

    assert!(!doc.elements[0].checked);
    assert!(doc.elements[1].checked);
}

#[test]
fn text_like_takes_first_element_of_sequences() {
    let mut doc = form(vec![FormElement::text("q", "old")]);
    apply_structured(&mut doc, &Value::from_json(&json!({"q": ["new", "later"]})));
    assert_eq!(doc.element("q").unwrap().value, "new");
}

#[test]
fn absent_names_leave_elements_unchanged() {
    let mut doc = form(vec![
        FormElement::text("kept", "original"),
        FormElement::text("set", "old"),
    ]);
    apply_structured(&mut doc, &Value::from_json(&json!({"set": "new"})));

    assert_eq!(doc.element("kept").unwrap().value, "original");
    assert_eq!(doc.element("set").unwrap().value, "new");
}

#[test]
fn buttons_are_never_assigned() {
    let mut doc = form(vec![FormElement::submit("go")]);
    apply_structured(&mut doc, &Value::from_json(&json!({"go": "clicked"})));
    assert_eq!(doc.element("go").unwrap().value, "");
}

#[test]
fn apply_accepts_flat_maps_keyed_by_literal_names() {
    let mut doc = form(vec![FormElement::text("user[city]", "old")]);

    let mut flat = std::collections::BTreeMap::new();
    flat.insert("user[city]".to_string(), Value::scalar("Oslo"));
    apply(&mut doc, &flat);

    assert_eq!(doc.element("user[city]").unwrap().value, "Oslo");
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_is_idempotent() {
    let mut doc = form(vec![
        FormElement::text("q", "hello"),
        FormElement::checkbox("agree", "yes", true),
        FormElement::select("country", &[("no", true)], false),
    ]);

    doc.reset(true);
    let once = doc.clone();
    doc.reset(true);

    assert_eq!(doc.element("q").unwrap().value, "");
    assert!(!doc.element("agree").unwrap().checked);
    assert!(!doc.element("country").unwrap().options[0].selected);
    for (a, b) in once.elements.iter().zip(doc.elements.iter()) {
        assert_eq!(a, b, "second reset must not change anything");
    }
}

#[test]
fn reset_exempts_preserved_and_hidden_elements() {
    let mut preserved = FormElement::text("keep", "me");
    preserved.preserve = true;

    let mut doc = form(vec![
        preserved,
        FormElement::hidden("token", "abc123"),
        FormElement::text("q", "hello"),
    ]);
    doc.reset(true);

    assert_eq!(doc.element("keep").unwrap().value, "me");
    assert_eq!(doc.element("token").unwrap().value, "abc123");
    assert_eq!(doc.element("q").unwrap().value, "");
}

#[test]
fn reset_can_clear_hidden_inputs_but_never_preserved_ones() {
    let mut preserved = FormElement::text("keep", "me");
    preserved.preserve = true;

    let mut doc = form(vec![preserved, FormElement::hidden("token", "abc123")]);
    doc.reset(false);

    assert_eq!(doc.element("keep").unwrap().value, "me");
    assert_eq!(doc.element("token").unwrap().value, "");
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn non_form_root_is_a_construction_error() {
    let result = FormDocument::new("div", None, vec![]);
    assert!(
        matches!(result, Err(FormError::NotAForm { ref tag }) if tag == "div"),
        "div is not a form container"
    );
}

#[test]
fn unknown_element_lookup_identifies_the_name() {
    let doc = form(vec![FormElement::text("q", "")]);
    let err = doc.element("missing").unwrap_err();
    assert!(matches!(err, FormError::UnknownElement { ref name } if name == "missing"));
}

#[test]
fn document_round_trips_through_json() {
    let payload = json!({
        "tag": "form",
        "id": "search",
        "elements": [
            {"name": "q", "value": "hi", "tag": "input", "type": "text"},
            {"name": "go", "tag": "input", "type": "submit"}
        ]
    });

    let doc = FormDocument::from_json(&payload).expect("valid form payload");
    assert_eq!(doc.id.as_deref(), Some("search"));
    assert_eq!(doc.elements.len(), 2);
    assert_eq!(doc.element("q").unwrap().value, "hi");
}

#[test]
fn json_payload_with_wrong_root_tag_is_rejected() {
    let payload = json!({"tag": "div", "elements": []});
    assert!(matches!(
        FormDocument::from_json(&payload),
        Err(FormError::NotAForm { .. })
    ));
}

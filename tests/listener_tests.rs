use std::cell::Cell;
use std::rc::Rc;

use formwork::dom::element::FormElement;
use formwork::error::FormError;
use formwork::listeners::registry::{FormEvent, ListenerOptions, ListenerRegistry};

mod common;
use common::utils::form;

// ============================================================================
// Registration and dispatch
// ============================================================================

#[test]
fn dispatch_invokes_matching_callbacks() {
    let doc = form(vec![FormElement::text("q", "")]);
    let mut registry = ListenerRegistry::new();

    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    registry
        .on_element(&doc, "q", "change", ListenerOptions::default(), move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

    let outcome = registry.dispatch(&FormEvent::element("change", "q"));
    assert_eq!(outcome.invoked, 1);
    assert_eq!(hits.get(), 1);

    // Different event name, different element: no hit either way
    registry.dispatch(&FormEvent::element("input", "q"));
    registry.dispatch(&FormEvent::element("change", "other"));
    assert_eq!(hits.get(), 1);
}

#[test]
fn registration_against_a_missing_element_errors() {
    let doc = form(vec![FormElement::text("q", "")]);
    let mut registry = ListenerRegistry::new();

    let result = registry.on_element(&doc, "ghost", "change", ListenerOptions::default(), |_| {});
    assert!(matches!(result, Err(FormError::UnknownElement { ref name }) if name == "ghost"));
    assert!(registry.is_empty(), "failed registration retains nothing");
}

#[test]
fn submit_listeners_report_default_suppression() {
    let mut registry = ListenerRegistry::new();

    registry.on_submit(
        ListenerOptions {
            prevent_default: true,
        },
        |_| {},
    );

    let outcome = registry.dispatch(&FormEvent::submit());
    assert_eq!(outcome.invoked, 1);
    assert!(outcome.default_prevented);
}

// ============================================================================
// Re-binding across DOM refreshes
// ============================================================================

#[test]
fn rebind_replays_all_retained_bindings() {
    let mut doc = form(vec![FormElement::text("q", "")]);
    let mut registry = ListenerRegistry::new();

    registry
        .on_element(&doc, "q", "change", ListenerOptions::default(), |_| {})
        .unwrap();
    registry.on_submit(ListenerOptions::default(), |_| {});

    // Swap the element set, as after a DOM replacement
    let changed = doc.refresh(vec![
        FormElement::text("q", "kept name, new node"),
        FormElement::text("extra", ""),
    ]);
    assert!(changed, "fingerprint must register the new shape");

    let rebound = registry.rebind(&doc).unwrap();
    assert_eq!(rebound, 2);
}

#[test]
fn rebind_fails_when_a_named_element_disappeared() {
    let mut doc = form(vec![FormElement::text("q", "")]);
    let mut registry = ListenerRegistry::new();
    registry
        .on_element(&doc, "q", "change", ListenerOptions::default(), |_| {})
        .unwrap();

    doc.refresh(vec![FormElement::text("renamed", "")]);

    let err = registry.rebind(&doc).unwrap_err();
    assert!(matches!(err, FormError::UnknownElement { ref name } if name == "q"));
}

#[test]
fn callbacks_survive_rebinding() {
    let mut doc = form(vec![FormElement::text("q", "")]);
    let mut registry = ListenerRegistry::new();

    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    registry
        .on_element(&doc, "q", "change", ListenerOptions::default(), move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

    doc.refresh(vec![FormElement::text("q", "")]);
    registry.rebind(&doc).unwrap();

    registry.dispatch(&FormEvent::element("change", "q"));
    assert_eq!(hits.get(), 1, "the retained callback still fires");
}

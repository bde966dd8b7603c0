use crate::dom::document::FormDocument;
use crate::error::FormError;

// ============================================================================
// Event listener bookkeeping: retained bindings replayed across DOM refreshes
// ============================================================================

/// What a binding attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerTarget {
    /// A named element inside the form
    Element(String),
    /// The form's submit surface
    Submit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Declarative flag: suppress the event's default browser action.
    pub prevent_default: bool,
}

/// A dispatched event, matched against bindings by name and target.
#[derive(Debug, Clone)]
pub struct FormEvent {
    pub event: String,
    pub target: ListenerTarget,
}

impl FormEvent {
    pub fn element(event: &str, name: &str) -> Self {
        FormEvent {
            event: event.to_string(),
            target: ListenerTarget::Element(name.to_string()),
        }
    }

    pub fn submit() -> Self {
        FormEvent {
            event: "submit".to_string(),
            target: ListenerTarget::Submit,
        }
    }
}

struct Binding {
    target: ListenerTarget,
    event: String,
    options: ListenerOptions,
    callback: Box<dyn FnMut(&FormEvent)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub invoked: usize,
    pub default_prevented: bool,
}

/// Retains listener parameters so they can be re-attached after the form's
/// DOM node is replaced. Pure list replay, synchronous.
#[derive(Default)]
pub struct ListenerRegistry {
    bindings: Vec<Binding>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on a named element. The element must exist in
    /// the document at registration time.
    pub fn on_element(
        &mut self,
        doc: &FormDocument,
        name: &str,
        event: &str,
        options: ListenerOptions,
        callback: impl FnMut(&FormEvent) + 'static,
    ) -> Result<(), FormError> {
        doc.element(name)?;
        self.bindings.push(Binding {
            target: ListenerTarget::Element(name.to_string()),
            event: event.to_string(),
            options,
            callback: Box::new(callback),
        });
        Ok(())
    }

    /// Register a submit listener on the form itself.
    pub fn on_submit(
        &mut self,
        options: ListenerOptions,
        callback: impl FnMut(&FormEvent) + 'static,
    ) {
        self.bindings.push(Binding {
            target: ListenerTarget::Submit,
            event: "submit".to_string(),
            options,
            callback: Box::new(callback),
        });
    }

    /// Replay every retained binding against a refreshed document. A binding
    /// naming an element the new document lacks is a structural error.
    /// Returns the number re-attached.
    pub fn rebind(&self, doc: &FormDocument) -> Result<usize, FormError> {
        for binding in &self.bindings {
            if let ListenerTarget::Element(name) = &binding.target {
                doc.element(name)?;
            }
        }
        Ok(self.bindings.len())
    }

    /// Run matching callbacks synchronously, reporting how many fired and
    /// whether any binding suppressed the default action.
    pub fn dispatch(&mut self, event: &FormEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        for binding in &mut self.bindings {
            if binding.event == event.event && binding.target == event.target {
                (binding.callback)(event);
                outcome.invoked += 1;
                if binding.options.prevent_default {
                    outcome.default_prevented = true;
                }
            }
        }
        outcome
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

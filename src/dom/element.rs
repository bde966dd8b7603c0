use serde::{Deserialize, Serialize};

/// One form control captured from the browser side as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    pub name: String,
    #[serde(default)]
    pub value: String,
    pub tag: String,
    pub r#type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Exempt from reset, alongside hidden inputs.
    #[serde(default)]
    pub preserve: bool,
    /// Visual invalid marker, set by the date-picker binding.
    #[serde(default)]
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

/// Assignment semantics for an element, closed over the type strings the
/// browser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    TextLike,
    SelectSingle,
    SelectMultiple,
    Checkbox,
    Radio,
    /// Buttons and button-like inputs: never carry data, never assigned
    NonDataBearing,
}

impl FormElement {
    pub fn element_type(&self) -> ElementType {
        if self.tag == "select" {
            return if self.multiple {
                ElementType::SelectMultiple
            } else {
                ElementType::SelectSingle
            };
        }
        if self.tag == "button" {
            return ElementType::NonDataBearing;
        }
        match self.r#type.as_deref() {
            Some("submit") | Some("reset") | Some("button") | Some("image") => {
                ElementType::NonDataBearing
            }
            Some("checkbox") => ElementType::Checkbox,
            Some("radio") => ElementType::Radio,
            _ => ElementType::TextLike,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.r#type.as_deref() == Some("hidden")
    }

    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }

    // ------------------------------------------------------------------
    // Constructors (fixtures and programmatic form building)
    // ------------------------------------------------------------------

    pub fn text(name: &str, value: &str) -> Self {
        Self::input(name, value, "text")
    }

    pub fn hidden(name: &str, value: &str) -> Self {
        Self::input(name, value, "hidden")
    }

    pub fn checkbox(name: &str, value: &str, checked: bool) -> Self {
        let mut el = Self::input(name, value, "checkbox");
        el.checked = checked;
        el
    }

    pub fn radio(name: &str, value: &str, checked: bool) -> Self {
        let mut el = Self::input(name, value, "radio");
        el.checked = checked;
        el
    }

    pub fn submit(name: &str) -> Self {
        Self::input(name, "", "submit")
    }

    /// A select built from `(value, selected)` pairs.
    pub fn select(name: &str, options: &[(&str, bool)], multiple: bool) -> Self {
        FormElement {
            name: name.to_string(),
            value: options
                .iter()
                .find(|(_, selected)| *selected)
                .map(|(v, _)| v.to_string())
                .unwrap_or_default(),
            tag: "select".to_string(),
            r#type: None,
            disabled: false,
            checked: false,
            multiple,
            options: options
                .iter()
                .map(|(value, selected)| SelectOption {
                    value: value.to_string(),
                    label: None,
                    selected: *selected,
                })
                .collect(),
            preserve: false,
            invalid: false,
        }
    }

    fn input(name: &str, value: &str, input_type: &str) -> Self {
        FormElement {
            name: name.to_string(),
            value: value.to_string(),
            tag: "input".to_string(),
            r#type: Some(input_type.to_string()),
            disabled: false,
            checked: false,
            multiple: false,
            options: vec![],
            preserve: false,
            invalid: false,
        }
    }
}

/// One element's (name, value, type) triple captured at serialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
    pub element_type: ElementType,
}

impl FieldEntry {
    pub fn new(name: &str, value: &str, element_type: ElementType) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            element_type,
        }
    }
}

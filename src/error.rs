use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// The root node handed to FormDocument is not a form container
    NotAForm { tag: String },

    /// A name-based lookup referenced an element the form does not have
    UnknownElement { name: String },

    /// The request descriptor was given an unparseable URL
    InvalidUrl { url: String, message: String },

    /// A date format failed the structural pattern check
    InvalidDateFormat { format: String },

    /// JSON parsing failed while loading a form document or data payload
    Json { context: String, source: serde_json::Error },

    /// File I/O failed while loading CLI inputs
    Io { path: String, source: std::io::Error },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::NotAForm { tag } => {
                write!(f, "Root element <{}> is not a form container", tag)
            }
            FormError::UnknownElement { name } => {
                write!(f, "Form has no element named '{}'", name)
            }
            FormError::InvalidUrl { url, message } => {
                write!(f, "Invalid request URL '{}': {}", url, message)
            }
            FormError::InvalidDateFormat { format } => {
                write!(f, "Date format '{}' fails the structural pattern check", format)
            }
            FormError::Json { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            FormError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Json { source, .. } => Some(source),
            FormError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

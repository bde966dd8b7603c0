use regex::Regex;

// ============================================================================
// Bracketed field-name grammar: identifier ( '[' (digits | identifier)? ']' )*
// ============================================================================

/// One bracketed path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Empty brackets `[]`: append at the next push-counter index
    Push,
    /// Numeric brackets `[3]`: fixed sequence index
    Index(usize),
    /// Named brackets `[sub]`: mapping key
    Key(String),
}

/// A segment plus the name prefix preceding its bracket. The prefix is the
/// "reverse key" that scopes push counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegment {
    pub segment: Segment,
    pub reverse_key: String,
}

/// A tokenized field name: base identifier, then bracket segments in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePath {
    pub base: String,
    pub segments: Vec<ParsedSegment>,
}

pub struct NameParser {
    validate: Regex,
    base: Regex,
    bracket: Regex,
}

impl NameParser {
    pub fn new() -> Self {
        Self {
            validate: Regex::new(
                r"^[a-zA-Z_][a-zA-Z0-9_\-]*(?:\[(?:\d+|[a-zA-Z_][a-zA-Z0-9_\-]*)?\])*$",
            )
            .expect("valid name grammar pattern"),
            base: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_\-]*").expect("valid base pattern"),
            bracket: Regex::new(r"\[([a-zA-Z0-9_\-]*)\]").expect("valid bracket pattern"),
        }
    }

    /// Tokenize `name`, or `None` when it fails the grammar. Callers skip
    /// non-matching names so unrelated DOM elements can share a form.
    pub fn parse(&self, name: &str) -> Option<NamePath> {
        if !self.validate.is_match(name) {
            return None;
        }

        let base = self.base.find(name)?;
        let mut segments = Vec::new();

        for caps in self.bracket.captures_iter(name) {
            let whole = caps.get(0)?;
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");

            let segment = if inner.is_empty() {
                Segment::Push
            } else if inner.chars().all(|c| c.is_ascii_digit()) {
                Segment::Index(inner.parse().ok()?)
            } else {
                Segment::Key(inner.to_string())
            };

            segments.push(ParsedSegment {
                segment,
                reverse_key: name[..whole.start()].to_string(),
            });
        }

        Some(NamePath {
            base: base.as_str().to_string(),
            segments,
        })
    }
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One JSONL record describing a form operation.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub op: String,

    pub fields: Option<usize>,
    pub skipped: Option<usize>,
    pub assigned: Option<usize>,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(op: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            op: op.to_string(),
            fields: None,
            skipped: None,
            assigned: None,
            detail: None,
        }
    }

    pub fn with_fields(mut self, fields: usize) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = Some(skipped);
        self
    }

    pub fn with_assigned(mut self, assigned: usize) -> Self {
        self.assigned = Some(assigned);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

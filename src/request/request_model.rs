use reqwest::{Method, Url};

use crate::error::FormError;
use crate::value::value_model::Value;

/// An HTTP request descriptor built from form contents.
///
/// This crate never sends it; delivery belongs to the caller. GET-like
/// methods carry the form data in the URL query string, everything else in
/// an urlencoded body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub data: Value,
}

impl HttpRequest {
    pub fn new(method: Method, url: &str, data: Value) -> Result<Self, FormError> {
        let url = Url::parse(url).map_err(|e| FormError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(HttpRequest { method, url, data })
    }

    pub fn is_query_method(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }

    /// `(name, value)` pairs in bracketed naming: mapping keys nest as
    /// `name[key]`, scalar sequence entries repeat under `name[]`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Value::Mapping(entries) = &self.data {
            for (key, value) in entries {
                collect_pairs(key, value, &mut pairs);
            }
        }
        pairs
    }

    /// The derived urlencoded query string, without a leading `?`.
    pub fn query_string(&self) -> String {
        let mut url = self.url.clone();
        url.set_query(None);
        {
            let mut qp = url.query_pairs_mut();
            for (key, value) in self.query_pairs() {
                qp.append_pair(&key, &value);
            }
        }
        url.query().unwrap_or("").to_string()
    }

    /// For GET-like methods, the URL with the query string appended after
    /// any query it already had. Other methods leave the URL untouched.
    pub fn resolved_url(&self) -> Url {
        if !self.is_query_method() {
            return self.url.clone();
        }
        let mut url = self.url.clone();
        {
            let mut qp = url.query_pairs_mut();
            for (key, value) in self.query_pairs() {
                qp.append_pair(&key, &value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    /// The urlencoded body for non-GET-like methods.
    pub fn body(&self) -> Option<String> {
        if self.is_query_method() {
            None
        } else {
            Some(self.query_string())
        }
    }

    /// Build a `reqwest` request the caller may send.
    pub fn to_reqwest(
        &self,
        client: &reqwest::blocking::Client,
    ) -> reqwest::Result<reqwest::blocking::Request> {
        if self.is_query_method() {
            client.request(self.method.clone(), self.resolved_url()).build()
        } else {
            client
                .request(self.method.clone(), self.url.clone())
                .form(&self.query_pairs())
                .build()
        }
    }
}

fn collect_pairs(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Scalar(s) => out.push((prefix.to_string(), s.clone())),
        Value::Sequence(slots) => {
            for (index, v) in slots {
                match v {
                    Value::Scalar(s) => out.push((format!("{}[]", prefix), s.clone())),
                    _ => collect_pairs(&format!("{}[{}]", prefix, index), v, out),
                }
            }
        }
        Value::Mapping(entries) => {
            for (key, v) in entries {
                collect_pairs(&format!("{}[{}]", prefix, key), v, out);
            }
        }
    }
}

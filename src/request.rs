//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request, already routed.
///
/// No route reads a request body, so none is kept.
pub struct Request {
    pub(crate) headers: http::HeaderMap,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(headers: http::HeaderMap, params: HashMap<String, String>) -> Self {
        Self { headers, params }
    }

    /// Case-insensitive header lookup. Non-UTF-8 values are skipped.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/incidents/{unit_type}`, `req.param("unit_type")` on
    /// `/incidents/elevators` returns `Some("elevators")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

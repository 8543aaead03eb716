// pipework/src/core/request.rs

//! The framework-shaped view of the inbound request handed to every step.

use serde_json::Value;
use std::collections::HashMap;

/// The original, pristine request: a header map plus a JSON body.
///
/// The executor passes the same `Request` to every step, never the evolving
/// container, so steps can always see the request exactly as it arrived
/// regardless of what earlier steps merged. The surrounding HTTP framework
/// is responsible for building one of these from its own request type.
///
/// Header names are case-insensitive; they are normalized to ASCII lowercase
/// on insert and lookup.
#[derive(Debug, Clone, Default)]
pub struct Request {
  headers: HashMap<String, String>,
  body: Value,
}

impl Request {
  pub fn new(body: Value) -> Self {
    Self {
      headers: HashMap::new(),
      body,
    }
  }

  /// Adds one header, consuming and returning the request for chaining.
  pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
    self.set_header(name, value);
    self
  }

  pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
    self
      .headers
      .insert(name.as_ref().to_ascii_lowercase(), value.into());
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  /// All headers, keyed by lowercased name.
  pub fn headers(&self) -> &HashMap<String, String> {
    &self.headers
  }

  pub fn body(&self) -> &Value {
    &self.body
  }
}

// pipework/src/core/container.rs

//! Defines the `Container` threaded through a route's pipeline, and the
//! `ContainerPatch` a step returns to replace parts of it.
//!
//! The container is immutable per step boundary: steps only ever see a shared
//! reference and hand back an owned patch; the executor is the sole writer,
//! merging each patch before the next step starts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status used at send time when no step has set one.
const DEFAULT_STATUS_CODE: u16 = 200;

/// Per-request state: the payload under construction, the status code the
/// response will carry, and whatever other top-level fields steps decide to
/// attach along the way.
///
/// Created once per incoming request (seeded with the request body), consumed
/// exactly once at response time. Nothing outlives the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
  body: Value,
  status_code: Option<u16>,
  fields: Map<String, Value>,
}

impl Container {
  /// Creates the initial container for one invocation, `body` being the
  /// incoming request body.
  pub fn from_body(body: Value) -> Self {
    Self {
      body,
      status_code: None,
      fields: Map::new(),
    }
  }

  pub fn body(&self) -> &Value {
    &self.body
  }

  /// The status code as last merged, if any step set one.
  pub fn status_code(&self) -> Option<u16> {
    self.status_code
  }

  /// A top-level field previously attached by a step.
  pub fn field(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }

  pub fn fields(&self) -> &Map<String, Value> {
    &self.fields
  }

  /// The status code the response will be sent with: the last merged value
  /// when present and non-zero, `200` otherwise.
  ///
  /// Zero counts as unset; the original wire format treats a falsy
  /// `statusCode` as absent.
  pub fn effective_status_code(&self) -> u16 {
    match self.status_code {
      Some(code) if code != 0 => code,
      _ => DEFAULT_STATUS_CODE,
    }
  }

  /// Shallow-merges `patch` over this container.
  ///
  /// Each slot the patch populates replaces the container's value for that
  /// slot; every slot the patch leaves empty is preserved. Field-map entries
  /// overwrite same-named fields one by one. A patch can never delete a key:
  /// a field set to JSON `null` is stored as `null`.
  pub fn apply(&mut self, patch: ContainerPatch) {
    let ContainerPatch {
      body,
      status_code,
      fields,
    } = patch;
    if let Some(body) = body {
      self.body = body;
    }
    if let Some(code) = status_code {
      self.status_code = Some(code);
    }
    for (name, value) in fields {
      self.fields.insert(name, value);
    }
  }

  /// Consumes the container at response time, yielding the body to send.
  pub fn into_body(self) -> Value {
    self.body
  }
}

/// A partial container: the typed replacement a step hands back.
///
/// Every slot is optional. The executor merges a patch with
/// [`Container::apply`]; a step that has nothing to change returns no patch
/// at all rather than an empty one, though an empty patch is a legal no-op.
///
/// The serde shape matches the wire form a route step would produce as plain
/// JSON: `body` and `statusCode` are recognized slots, any other top-level
/// key lands in the open field map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) body: Option<Value>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) status_code: Option<u16>,

  #[serde(flatten)]
  pub(crate) fields: Map<String, Value>,
}

impl ContainerPatch {
  /// An empty patch; merging it changes nothing.
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the container body on merge.
  pub fn with_body(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }

  /// Replaces the container status code on merge.
  pub fn with_status_code(mut self, code: u16) -> Self {
    self.status_code = Some(code);
    self
  }

  /// Sets one top-level field on merge, overwriting a same-named field.
  pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
    self.fields.insert(name.into(), value);
    self
  }

  /// Builds a patch from a plain JSON object, the shape a step written
  /// against the wire format would return.
  ///
  /// `null` in the `body` or `statusCode` slot deserializes to "untouched";
  /// `null` in any other field is stored as `null` on merge.
  pub fn from_value(value: Value) -> serde_json::Result<Self> {
    serde_json::from_value(value)
  }

  /// True when merging this patch would change nothing.
  pub fn is_empty(&self) -> bool {
    self.body.is_none() && self.status_code.is_none() && self.fields.is_empty()
  }
}

// pipework/src/steps/require.rs

//! Required-fields validation, the kind of step a route runs ahead of its
//! transformation steps.

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

use crate::core::container::Container;
use crate::core::request::Request;
use crate::core::step::{Step, StepResult};

/// A step that fails the invocation when the body lacks a required top-level
/// field. Built with [`require_fields`].
pub struct RequireFields {
  required: Vec<String>,
}

/// Configures a required-fields validation step.
///
/// The step never modifies the container; it either passes the invocation
/// through untouched or fails it, letting the failure propagate to the
/// surrounding HTTP framework.
pub fn require_fields<I, S>(fields: I) -> RequireFields
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  RequireFields {
    required: fields.into_iter().map(Into::into).collect(),
  }
}

#[async_trait]
impl Step for RequireFields {
  fn name(&self) -> &str {
    "require_fields"
  }

  async fn apply(&self, container: &Container, _request: &Request) -> StepResult {
    let source = match container.body() {
      Value::Object(source) => source,
      other => {
        return Err(anyhow!(
          "body must be a JSON object to validate, got {}",
          json_type_name(other)
        ))
      }
    };
    for field in &self.required {
      if !source.contains_key(field.as_str()) {
        return Err(anyhow!("missing required field '{}'", field));
      }
    }
    Ok(None)
  }
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

// pipework/src/steps/project.rs

//! Field projection: prune the container body down to an allow-list of
//! top-level fields.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::container::{Container, ContainerPatch};
use crate::core::request::Request;
use crate::core::step::{Step, StepResult};

/// A step that replaces the container body with a copy holding only the
/// allowed top-level fields. Built with [`project`].
pub struct ProjectBody {
  allowed: Vec<String>,
}

/// Configures a field-projection step.
///
/// Keys absent from the source are simply omitted from the result; there is
/// no error on a missing key. A body that is not a JSON object projects to
/// an empty object. Pure, synchronous, and side-effect free: the minimal
/// step contract.
pub fn project<I, S>(fields: I) -> ProjectBody
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  ProjectBody {
    allowed: fields.into_iter().map(Into::into).collect(),
  }
}

#[async_trait]
impl Step for ProjectBody {
  fn name(&self) -> &str {
    "project_body"
  }

  async fn apply(&self, container: &Container, _request: &Request) -> StepResult {
    let projected = match container.body() {
      Value::Object(source) => {
        let mut kept = Map::new();
        for field in &self.allowed {
          if let Some(value) = source.get(field) {
            kept.insert(field.clone(), value.clone());
          }
        }
        Value::Object(kept)
      }
      // Nothing to pick from; an empty object, not an error.
      _ => Value::Object(Map::new()),
    };
    Ok(Some(ContainerPatch::new().with_body(projected)))
  }
}

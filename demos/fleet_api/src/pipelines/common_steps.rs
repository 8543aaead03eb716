// demos/fleet_api/src/pipelines/common_steps.rs

use pipework::{step_fn, Container, ContainerPatch, Request, Step};
use serde_json::json;
use tracing::debug;

/// beforeEach step shared by every route: stamps the request's Origin header
/// into the container so later steps can read it off the container instead of
/// re-parsing headers.
///
/// Runs against the pristine request, so the stamp is accurate no matter what
/// the route's own steps do to the body afterwards.
pub fn note_origin() -> impl Step {
  step_fn("note_origin", |_container: &Container, request: &Request| {
    let origin = request.header("origin").unwrap_or("unknown").to_string();
    debug!(%origin, "Noting request origin on the container");
    Ok(Some(ContainerPatch::new().with_field("origin", json!(origin))))
  })
}

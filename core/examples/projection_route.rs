// pipework/examples/projection_route.rs

use pipework::steps::{project, require_fields};
use pipework::{async_step_fn, execute, Container, ContainerPatch, PartsResponder, Pipeline, Request, RouteConfig};
use serde_json::json;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Projection Route Example ---");

  // Validation ahead of transformation: the sequential guarantee means the
  // enrichment step only runs for bodies that passed the check.
  let pipeline = Pipeline::new()
    .step(require_fields(["name"]))
    .step(async_step_fn(
      "lookup_registry",
      |container: Container, _request: Request| async move {
        // Stand-in for an I/O-bound enrichment call.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let mut body = container.body().clone();
        body["registry"] = json!("NCC-1701-E");
        body["internal_notes"] = json!("do not expose");
        Ok(Some(ContainerPatch::new().with_body(body)))
      },
    ))
    // Prune to the public shape before it goes out the door.
    .step(project(["name", "registry"]));

  let executor = execute(RouteConfig::new(pipeline), None);

  // A valid request flows through all three steps.
  let request = Request::new(json!({ "name": "Enterprise", "crew": 830 }));
  let (status_code, body) = executor.handle(request, PartsResponder).await.unwrap();
  info!(status_code, %body, "Projected response");

  // A body missing the required field fails in the validation step; the
  // executor sends nothing and surfaces the failure to the caller.
  let request = Request::new(json!({ "crew": 830 }));
  match executor.handle(request, PartsResponder).await {
    Ok(_) => unreachable!("validation should have failed"),
    Err(e) => warn!(error = %e, "Invocation failed before any response"),
  }
}

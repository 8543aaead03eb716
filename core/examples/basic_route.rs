// pipework/examples/basic_route.rs

use pipework::{execute, step_fn, Container, ContainerPatch, PartsResponder, Pipeline, Request, RouteConfig};
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), pipework::PipelineError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Route Example ---");

  // 1. Declare the route as an ordered list of steps.
  //    Each step sees the evolving container plus the original request and
  //    hands back a partial replacement for the executor to merge.
  let pipeline = Pipeline::new()
    .step(step_fn("tag_origin", |_container: &Container, request: &Request| {
      let origin = request.header("origin").unwrap_or("unknown").to_string();
      Ok(Some(ContainerPatch::new().with_field("origin", json!(origin))))
    }))
    .step(step_fn("greet", |container: &Container, _request: &Request| {
      let name = container.body()["name"].as_str().unwrap_or("stranger");
      Ok(Some(
        ContainerPatch::new()
          .with_body(json!({ "greeting": format!("Hello, {}!", name) }))
          .with_status_code(200),
      ))
    }));

  // 2. Build the handler once; share it across invocations.
  let executor = execute(RouteConfig::new(pipeline), None);

  // 3. Run one invocation against a framework-shaped request.
  let request = Request::new(json!({ "name": "Jean-Luc" })).with_header("Origin", "https://wiki.federation.com");
  let (status_code, body) = executor.handle(request, PartsResponder).await?;

  info!(status_code, %body, "Response sent");
  Ok(())
}

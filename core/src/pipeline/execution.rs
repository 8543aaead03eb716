// pipework/src/pipeline/execution.rs

//! Contains `execute()` and `RouteExecutor::handle()`, responsible for
//! building the container, sequencing the steps, and emitting the response.

use tracing::{event, instrument, span, Level};

use crate::core::container::Container;
use crate::core::request::Request;
use crate::core::respond::Respond;
use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::definition::{Pipeline, RouteConfig};

/// Builds the request handler for one route: its own pipeline, optionally
/// preceded by a shared beforeEach list.
///
/// The returned executor is `Send + Sync` and is meant to be built once per
/// route and shared across invocations; each call to
/// [`RouteExecutor::handle`] is one independent traversal.
pub fn execute(route: RouteConfig, before_each: Option<Pipeline>) -> RouteExecutor {
  RouteExecutor {
    before_each: before_each.unwrap_or_default(),
    route: route.pipeline,
  }
}

/// The compiled handler for one route.
pub struct RouteExecutor {
  before_each: Pipeline,
  route: Pipeline,
}

impl RouteExecutor {
  /// Runs one invocation: seeds a container from the request body, runs the
  /// beforeEach steps then the route steps strictly in order, and sends the
  /// final container as the response.
  ///
  /// Step *n+1* never starts before step *n*'s result (including its
  /// asynchronous resolution) is merged, so later steps may rely on fields
  /// earlier steps wrote. Every step sees the original `request`, never the
  /// evolving container, as its second argument.
  ///
  /// On the first step failure the error propagates immediately and no
  /// response is sent; mapping failures to user-visible responses is the
  /// caller's job.
  #[instrument(
        name = "RouteExecutor::handle",
        skip_all,
        fields(
            before_each_steps = self.before_each.len(),
            route_steps = self.route.len(),
        ),
        err(Display)
    )]
  pub async fn handle<R: Respond>(&self, request: Request, response: R) -> PipelineResult<R::Reply> {
    event!(Level::DEBUG, "Route execution starting.");

    let mut container = Container::from_body(request.body().clone());

    let sequence = self
      .before_each
      .steps()
      .iter()
      .map(|step| ("before_each", step))
      .chain(self.route.steps().iter().map(|step| ("route", step)));

    for (step_index, (phase, step)) in sequence.enumerate() {
      let step_span = span!(
        Level::INFO,
        "route_step_execution",
        phase,
        step_index,
        step_name = step.name()
      );
      let _step_span_guard = step_span.enter();
      event!(Level::DEBUG, "Invoking step.");

      match step.apply(&container, &request).await {
        Ok(Some(patch)) => {
          event!(Level::TRACE, "Step returned a patch, merging into container.");
          container.apply(patch);
        }
        Ok(None) => {
          event!(Level::TRACE, "Step returned no patch, container unchanged.");
        }
        Err(source) => {
          event!(Level::ERROR, error = %source, "Step failed.");
          return Err(PipelineError::StepFailure {
            step_name: step.name().to_string(),
            step_index,
            source,
          });
        }
      }
    }

    let status_code = container.effective_status_code();
    event!(Level::DEBUG, status_code, "Route execution completed, sending response.");
    Ok(response.send(status_code, container.into_body()))
  }
}

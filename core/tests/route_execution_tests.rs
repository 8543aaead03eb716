// tests/route_execution_tests.rs
mod common; // Reference the common module

use common::*;
use pipework::{
  async_step_fn, execute, step_fn, Container, ContainerPatch, PartsResponder, Pipeline, PipelineError, Request,
  RouteConfig, Step,
};
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
#[serial]
async fn test_single_step_is_invoked_and_response_sent_once() {
  setup_tracing();
  let log = new_step_log();
  let route = RouteConfig::new(Pipeline::new().step(recording_step("step1", &log)));
  let executor = execute(route, None);

  let responder = RecordingResponder::new();
  executor
    .handle(federation_request(), responder.clone())
    .await
    .unwrap();

  assert_eq!(logged(&log), vec!["step1"]);
  assert_eq!(responder.sent().len(), 1);
}

#[tokio::test]
#[serial]
async fn test_all_steps_run_once_in_order_before_send() {
  setup_tracing();
  let log = new_step_log();
  let route = RouteConfig::new(
    Pipeline::new()
      .step(identity_step("step1", &log))
      .step(identity_step("step2", &log))
      .step(identity_step("step3", &log)),
  );
  let executor = execute(route, None);

  let responder = RecordingResponder::new();
  executor
    .handle(federation_request(), responder.clone())
    .await
    .unwrap();

  assert_eq!(logged(&log), vec!["step1", "step2", "step3"]);
  let sent = responder.sent();
  assert_eq!(sent.len(), 1);
  // Identity steps leave the body exactly as the request delivered it.
  assert_eq!(sent[0].1, *federation_request().body());
}

#[tokio::test]
#[serial]
async fn test_async_step_is_fully_awaited_before_next_step() {
  setup_tracing();
  let delayed = async_step_fn("delayed_rename", |container: Container, _request: Request| async move {
    tokio::time::sleep(Duration::from_millis(10)).await;
    let mut body = container.body().clone();
    body["name"] = json!("NCC-1701-F");
    Ok(Some(ContainerPatch::new().with_body(body)))
  });

  let observed = new_step_log();
  let observed_by_step = Arc::clone(&observed);
  let observer = step_fn("observe_name", move |container: &Container, _request: &Request| {
    let seen = container.body()["name"].as_str().unwrap_or("<unset>").to_string();
    observed_by_step.lock().unwrap().push(seen);
    Ok(None)
  });

  let executor = execute(RouteConfig::new(Pipeline::new().step(delayed).step(observer)), None);
  let (status_code, body) = executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();

  // The observer only sees the rename if the delayed step settled first.
  assert_eq!(logged(&observed), vec!["NCC-1701-F"]);
  assert_eq!(status_code, 200);
  assert_eq!(body["name"], json!("NCC-1701-F"));
}

#[tokio::test]
#[serial]
async fn test_every_step_sees_the_original_request() {
  setup_tracing();
  let origins = new_step_log();

  let record_origin = |label: &'static str, log: &StepLog| {
    let log = Arc::clone(log);
    step_fn(label, move |_container: &Container, request: &Request| {
      let origin = request.header("origin").unwrap_or("<missing>").to_string();
      log.lock().unwrap().push(origin);
      Ok(None)
    })
  };

  // The middle step replaces the whole body; the request must stay pristine.
  let route = RouteConfig::new(
    Pipeline::new()
      .step(record_origin("origin_first", &origins))
      .step(step_fn("replace_body", |_container: &Container, _request: &Request| {
        Ok(Some(ContainerPatch::new().with_body(json!({ "rewritten": true }))))
      }))
      .step(record_origin("origin_last", &origins)),
  );
  let before_each = Pipeline::new().step(record_origin("origin_before", &origins));

  let executor = execute(route, Some(before_each));
  executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();

  assert_eq!(
    logged(&origins),
    vec![
      "https://wiki.federation.com",
      "https://wiki.federation.com",
      "https://wiki.federation.com",
    ]
  );
}

#[tokio::test]
#[serial]
async fn test_before_each_runs_in_order_ahead_of_route_steps() {
  setup_tracing();
  let log = new_step_log();
  let route = RouteConfig::new(Pipeline::new().step(recording_step("route1", &log)));
  let before_each = Pipeline::new()
    .step(recording_step("before1", &log))
    .step(recording_step("before2", &log));

  let executor = execute(route, Some(before_each));
  executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();

  assert_eq!(logged(&log), vec!["before1", "before2", "route1"]);
}

#[tokio::test]
#[serial]
async fn test_before_each_merge_is_visible_to_route_steps() {
  setup_tracing();
  let seen = new_step_log();
  let seen_by_step = Arc::clone(&seen);

  let before_each = Pipeline::new().step(step_fn(
    "seed_value",
    |_container: &Container, _request: &Request| {
      Ok(Some(ContainerPatch::new().with_body(json!({ "value": "before" }))))
    },
  ));
  let route = RouteConfig::new(Pipeline::new().step(step_fn(
    "observe_value",
    move |container: &Container, _request: &Request| {
      let value = container.body()["value"].as_str().unwrap_or("<unset>").to_string();
      seen_by_step.lock().unwrap().push(value);
      Ok(None)
    },
  )));

  let executor = execute(route, Some(before_each));
  executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();

  assert_eq!(logged(&seen), vec!["before"]);
}

#[tokio::test]
#[serial]
async fn test_status_defaults_to_200_and_last_merge_wins() {
  setup_tracing();
  let log = new_step_log();

  // No step sets a status code: 200.
  let executor = execute(
    RouteConfig::new(Pipeline::new().step(recording_step("noop", &log))),
    None,
  );
  let (status_code, _body) = executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();
  assert_eq!(status_code, 200);

  // Two steps set one: the last merged value is sent.
  let executor = execute(
    RouteConfig::new(
      Pipeline::new()
        .step(patching_step("set_500", &log, ContainerPatch::new().with_status_code(500)))
        .step(patching_step("set_201", &log, ContainerPatch::new().with_status_code(201))),
    ),
    None,
  );
  let (status_code, _body) = executor
    .handle(federation_request(), PartsResponder)
    .await
    .unwrap();
  assert_eq!(status_code, 201);
}

#[tokio::test]
#[serial]
async fn test_one_step_instance_shared_across_pipelines() {
  setup_tracing();
  let log = new_step_log();
  let shared: Arc<dyn Step> = Arc::new(recording_step("shared_step", &log));

  // Two routes hold the same step instance, not copies of it.
  let first = execute(RouteConfig::new(Pipeline::new().step_arc(Arc::clone(&shared))), None);
  let second = execute(
    RouteConfig::new(
      Pipeline::new()
        .step_arc(shared)
        .step(recording_step("own_step", &log)),
    ),
    None,
  );

  first.handle(federation_request(), PartsResponder).await.unwrap();
  second.handle(federation_request(), PartsResponder).await.unwrap();

  assert_eq!(logged(&log), vec!["shared_step", "shared_step", "own_step"]);
}

#[tokio::test]
#[serial]
async fn test_empty_pipeline_passes_the_request_body_through() {
  setup_tracing();
  let pipeline = Pipeline::new();
  assert!(pipeline.is_empty());

  let executor = execute(RouteConfig::new(pipeline), None);

  let request = federation_request();
  let expected = request.body().clone();
  let (status_code, body) = executor.handle(request, PartsResponder).await.unwrap();

  assert_eq!(status_code, 200);
  assert_eq!(body, expected);
  assert_eq!(body["ships"][0]["name"], json!("NCC-1701-E"));
}

#[tokio::test]
#[serial]
async fn test_status_only_patch_leaves_body_unchanged() {
  setup_tracing();
  // A wire-shaped step: a plain JSON object with a statusCode and no body.
  let step_404 = step_fn("not_found", |_container: &Container, _request: &Request| {
    Ok(Some(ContainerPatch::from_value(json!({ "statusCode": 404 }))?))
  });

  let executor = execute(RouteConfig::new(Pipeline::new().step(step_404)), None);
  let request = federation_request();
  let expected = request.body().clone();
  let (status_code, body) = executor.handle(request, PartsResponder).await.unwrap();

  assert_eq!(status_code, 404);
  assert_eq!(body, expected);
}

#[tokio::test]
#[serial]
async fn test_step_failure_propagates_and_nothing_is_sent() {
  setup_tracing();
  let log = new_step_log();
  let route = RouteConfig::new(
    Pipeline::new()
      .step(recording_step("good_step", &log))
      .step(failing_step("bad_step", "I am a bad step!"))
      .step(recording_step("never_runs", &log)),
  );
  let executor = execute(route, None);

  let responder = RecordingResponder::new();
  let result = executor.handle(federation_request(), responder.clone()).await;

  match result.unwrap_err() {
    PipelineError::StepFailure {
      step_name,
      step_index,
      source,
    } => {
      assert_eq!(step_name, "bad_step");
      assert_eq!(step_index, 1);
      assert!(source.to_string().contains("I am a bad step!"));
    }
  }
  assert_eq!(logged(&log), vec!["good_step"]);
  assert!(responder.sent().is_empty()); // No partial response on failure
}

#[tokio::test]
#[serial]
async fn test_async_rejection_propagates_like_a_throw() {
  setup_tracing();
  let rejecting = async_step_fn("reject_later", |_container: Container, _request: Request| async move {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Err(anyhow::anyhow!("rejected after a delay"))
  });

  let responder = RecordingResponder::new();
  let executor = execute(RouteConfig::new(Pipeline::new().step(rejecting)), None);
  let result = executor.handle(federation_request(), responder.clone()).await;

  match result.unwrap_err() {
    PipelineError::StepFailure { step_name, source, .. } => {
      assert_eq!(step_name, "reject_later");
      assert!(source.to_string().contains("rejected after a delay"));
    }
  }
  assert!(responder.sent().is_empty());
}

#[tokio::test]
#[serial]
async fn test_before_each_failure_skips_route_steps() {
  setup_tracing();
  let log = new_step_log();
  let before_each = Pipeline::new().step(failing_step("guard", "request refused"));
  let route = RouteConfig::new(Pipeline::new().step(recording_step("route1", &log)));

  let executor = execute(route, Some(before_each));
  let result = executor.handle(federation_request(), PartsResponder).await;

  match result.unwrap_err() {
    PipelineError::StepFailure { step_name, step_index, .. } => {
      assert_eq!(step_name, "guard");
      assert_eq!(step_index, 0);
    }
  }
  assert!(logged(&log).is_empty());
}

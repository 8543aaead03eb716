// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use pipework::{step_fn, Container, ContainerPatch, Request, Respond, Step};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::Level;

// --- Shared invocation log ---

pub type StepLog = Arc<Mutex<Vec<String>>>;

pub fn new_step_log() -> StepLog {
  Arc::new(Mutex::new(Vec::new()))
}

pub fn logged(log: &StepLog) -> Vec<String> {
  log.lock().unwrap().clone()
}

// --- Recording responder ---

/// Responder that records every `send` into shared storage, so tests can
/// assert both the response parts and the exactly-once emission rule.
#[derive(Clone, Default)]
pub struct RecordingResponder {
  sent: Arc<Mutex<Vec<(u16, Value)>>>,
}

impl RecordingResponder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn sent(&self) -> Vec<(u16, Value)> {
    self.sent.lock().unwrap().clone()
  }
}

impl Respond for RecordingResponder {
  type Reply = ();

  fn send(self, status_code: u16, body: Value) {
    self.sent.lock().unwrap().push((status_code, body));
  }
}

// --- Common step creators ---

/// Pass-through step that only records its invocation.
pub fn recording_step(label: &'static str, log: &StepLog) -> impl Step {
  let log = Arc::clone(log);
  step_fn(label, move |_container: &Container, _request: &Request| {
    log.lock().unwrap().push(label.to_string());
    Ok(None)
  })
}

/// Step that records its invocation and hands back the same patch each time.
pub fn patching_step(label: &'static str, log: &StepLog, patch: ContainerPatch) -> impl Step {
  let log = Arc::clone(log);
  step_fn(label, move |_container: &Container, _request: &Request| {
    log.lock().unwrap().push(label.to_string());
    Ok(Some(patch.clone()))
  })
}

/// Step that returns its input container unchanged, as a full-body patch.
pub fn identity_step(label: &'static str, log: &StepLog) -> impl Step {
  let log = Arc::clone(log);
  step_fn(label, move |container: &Container, _request: &Request| {
    log.lock().unwrap().push(label.to_string());
    Ok(Some(ContainerPatch::new().with_body(container.body().clone())))
  })
}

pub fn failing_step(label: &'static str, message: &'static str) -> impl Step {
  step_fn(label, move |_container: &Container, _request: &Request| {
    Err(anyhow::anyhow!(message))
  })
}

// --- Fixture from the wire format's reference scenario ---

pub fn federation_request() -> Request {
  Request::new(json!({
    "ships": [{
      "name": "NCC-1701-E",
      "armaments": {
        "phasers": 16,
        "torpedo": 2,
      },
    }],
  }))
  .with_header("Origin", "https://wiki.federation.com")
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

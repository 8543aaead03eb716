// pipework/src/pipeline/definition.rs

//! Contains the `Pipeline` ordered step list and the `RouteConfig` a route
//! hands to the executor.

use std::fmt;
use std::sync::Arc;

use crate::core::step::Step;

/// An ordered list of steps.
///
/// The same type serves both roles a route definition needs: the
/// route-specific pipeline and the shared beforeEach list. Order is
/// execution order. An empty pipeline is legal and is a pass-through.
#[derive(Clone, Default)]
pub struct Pipeline {
  steps: Vec<Arc<dyn Step>>,
}

impl Pipeline {
  pub fn new() -> Self {
    Self { steps: Vec::new() }
  }

  /// Appends a step, consuming and returning the pipeline for chaining.
  pub fn step(mut self, step: impl Step + 'static) -> Self {
    self.steps.push(Arc::new(step));
    self
  }

  /// Appends an already-shared step. Lets routes reuse one step instance
  /// across pipelines.
  pub fn step_arc(mut self, step: Arc<dyn Step>) -> Self {
    self.steps.push(step);
    self
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub(crate) fn steps(&self) -> &[Arc<dyn Step>] {
    &self.steps
  }
}

// Arc<dyn Step> has no Debug; print the step names instead.
impl fmt::Debug for Pipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline")
      .field("steps", &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>())
      .finish()
  }
}

/// A route definition: the ordered steps this route runs.
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
  pub pipeline: Pipeline,
}

impl RouteConfig {
  pub fn new(pipeline: Pipeline) -> Self {
    Self { pipeline }
  }
}

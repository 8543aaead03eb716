// pipework/src/core/step.rs

//! The step contract: one capability, "transform the container, optionally
//! asynchronously", plus adapters that lift plain closures into it.

use async_trait::async_trait;
use std::future::Future;

use crate::core::container::{Container, ContainerPatch};
use crate::core::request::Request;

/// What a step invocation produces: `Ok(None)` to leave the container
/// untouched, `Ok(Some(patch))` to have the executor merge the patch, or an
/// error to fail the whole invocation.
pub type StepResult = Result<Option<ContainerPatch>, anyhow::Error>;

/// A single unit of pipeline logic.
///
/// A step receives the container produced by the preceding merges and the
/// original, unmodified request. Steps own no per-request state; anything a
/// step wants to carry forward goes into the patch it returns.
///
/// Steps must not retain cross-request state: concurrent invocations each get
/// their own container, and that isolation only holds if step authors keep to
/// it. The executor does not enforce it.
#[async_trait]
pub trait Step: Send + Sync {
  /// Diagnostic name, used in tracing spans and failure reports.
  fn name(&self) -> &str {
    "step"
  }

  async fn apply(&self, container: &Container, request: &Request) -> StepResult;
}

/// A synchronous closure lifted into a [`Step`]. Built with [`step_fn`].
pub struct FnStep<F> {
  name: String,
  func: F,
}

/// Wraps a synchronous closure as a step.
///
/// The result is normalized into the same asynchronous shape every step has,
/// so the executor's sequencing never branches on whether a step suspends.
pub fn step_fn<F>(name: impl Into<String>, func: F) -> FnStep<F>
where
  F: Fn(&Container, &Request) -> StepResult + Send + Sync,
{
  FnStep {
    name: name.into(),
    func,
  }
}

#[async_trait]
impl<F> Step for FnStep<F>
where
  F: Fn(&Container, &Request) -> StepResult + Send + Sync,
{
  fn name(&self) -> &str {
    &self.name
  }

  async fn apply(&self, container: &Container, request: &Request) -> StepResult {
    (self.func)(container, request)
  }
}

/// An asynchronous closure lifted into a [`Step`]. Built with
/// [`async_step_fn`].
pub struct AsyncFnStep<F> {
  name: String,
  func: F,
}

/// Wraps an asynchronous closure as a step.
///
/// The closure takes the container and request by value (clones of the
/// executor's copies) so its future does not borrow from the caller; a step
/// that wants to avoid the clone can implement [`Step`] directly.
pub fn async_step_fn<F, Fut>(name: impl Into<String>, func: F) -> AsyncFnStep<F>
where
  F: Fn(Container, Request) -> Fut + Send + Sync,
  Fut: Future<Output = StepResult> + Send,
{
  AsyncFnStep {
    name: name.into(),
    func,
  }
}

#[async_trait]
impl<F, Fut> Step for AsyncFnStep<F>
where
  F: Fn(Container, Request) -> Fut + Send + Sync,
  Fut: Future<Output = StepResult> + Send,
{
  fn name(&self) -> &str {
    &self.name
  }

  async fn apply(&self, container: &Container, request: &Request) -> StepResult {
    (self.func)(container.clone(), request.clone()).await
  }
}

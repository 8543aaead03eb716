// pipework/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// The executor's single failure category: a step threw or its future
/// rejected. The executor attributes the failure to the step and propagates
/// it; it never catches, classifies, or retries.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Step '{step_name}' (index {step_index}) failed. Source: {source}")]
  StepFailure {
    step_name: String,
    /// Position within the full sequence, beforeEach steps included.
    step_index: usize,
    #[source]
    source: AnyhowError,
  },
}

impl PipelineError {
  /// The underlying step error, for callers that map failures to responses.
  pub fn source_error(&self) -> &AnyhowError {
    match self {
      PipelineError::StepFailure { source, .. } => source,
    }
  }
}

pub type PipelineResult<T, E = PipelineError> = std::result::Result<T, E>;

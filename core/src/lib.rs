// src/lib.rs

//! Pipework: a minimal request-processing pipeline for Rust.
//!
//! A route is declared as an ordered list of composable steps instead of a
//! monolithic handler. Per request, the executor:
//!  - seeds a [`Container`] with the request body,
//!  - runs the shared beforeEach steps, then the route's steps, in order,
//!    awaiting each one before the next starts,
//!  - shallow-merges each step's returned [`ContainerPatch`] over the
//!    container,
//!  - sends exactly one response built from the final container's status
//!    code (default 200) and body.
//!
//! Steps see the original, pristine request alongside the evolving
//! container; a step failure propagates out of the handler untouched and no
//! response is sent. The HTTP server, request parsing, and error responses
//! belong to the surrounding framework.

// Declare modules according to the planned structure
pub mod core;
pub mod error;
pub mod pipeline;
pub mod steps;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::container::{Container, ContainerPatch};
pub use crate::core::request::Request;
pub use crate::core::respond::{PartsResponder, Respond};
pub use crate::core::step::{async_step_fn, step_fn, AsyncFnStep, FnStep, Step, StepResult};

// The route definition and its executor
pub use crate::pipeline::definition::{Pipeline, RouteConfig};
pub use crate::pipeline::execution::{execute, RouteExecutor};

pub use crate::error::{PipelineError, PipelineResult};

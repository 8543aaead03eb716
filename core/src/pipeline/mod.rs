// pipework/src/pipeline/mod.rs

//! Defines the `Pipeline` step list, the `RouteConfig`, and the executor
//! that runs them against one request.

pub mod definition;
pub mod execution;

// Re-export the main types
pub use definition::{Pipeline, RouteConfig};
pub use execution::{execute, RouteExecutor};

pub mod container;
pub mod request;
pub mod respond;
pub mod step;

// Re-export key types for easier access from other crate modules (and lib.rs)
pub use container::{Container, ContainerPatch};
pub use request::Request;
pub use respond::{PartsResponder, Respond};
pub use step::{async_step_fn, step_fn, AsyncFnStep, FnStep, Step, StepResult};

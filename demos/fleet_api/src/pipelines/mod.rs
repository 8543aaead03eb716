// demos/fleet_api/src/pipelines/mod.rs

//! Route pipelines: each HTTP route is an ordered list of pipework steps,
//! sharing one beforeEach list across routes.

pub mod common_steps;
pub mod factories;
pub mod ship_steps;

// demos/fleet_api/src/pipelines/factories.rs

//! Builds the per-route executors once at startup; handlers share them
//! across invocations.

use std::sync::Arc;

use crate::pipelines::common_steps::note_origin;
use crate::pipelines::ship_steps::{FindShip, ListShips, RegisterShip};
use crate::state::FleetStore;
use pipework::steps::{project, require_fields};
use pipework::{execute, Pipeline, RouteConfig, RouteExecutor};

pub struct RouteExecutors {
  pub register_ship: RouteExecutor,
  pub get_ship: RouteExecutor,
  pub list_ships: RouteExecutor,
}

pub fn build_route_executors(store: &Arc<FleetStore>) -> RouteExecutors {
  // Shared beforeEach list, run ahead of every route's own pipeline.
  let before_each = Pipeline::new().step(note_origin());

  // Validation ahead of transformation, projection last: the stored record
  // carries armaments, the response never does.
  let register_ship = RouteConfig::new(
    Pipeline::new()
      .step(require_fields(["name"]))
      .step(RegisterShip::new(Arc::clone(store)))
      .step(project(["id", "name", "class", "registered_at"])),
  );

  // No projection here: when the ship is missing, the step's 404 container
  // (status and error body) must flow through to the response untouched.
  let get_ship = RouteConfig::new(Pipeline::new().step(FindShip::new(Arc::clone(store))));

  let list_ships = RouteConfig::new(
    Pipeline::new()
      .step(ListShips::new(Arc::clone(store)))
      .step(project(["ships", "count"])),
  );

  RouteExecutors {
    register_ship: execute(register_ship, Some(before_each.clone())),
    get_ship: execute(get_ship, Some(before_each.clone())),
    list_ships: execute(list_ships, Some(before_each)),
  }
}

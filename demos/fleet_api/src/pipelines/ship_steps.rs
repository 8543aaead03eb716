// demos/fleet_api/src/pipelines/ship_steps.rs

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::models::Ship;
use crate::state::FleetStore;
use pipework::{Container, ContainerPatch, Request, Step, StepResult};

/// Builds a `Ship` from the (already validated) request body, stores it, and
/// replaces the container body with the stored record. Sets 201 on the way
/// out; the projection step after it decides what of the record is public.
pub struct RegisterShip {
  store: Arc<FleetStore>,
}

impl RegisterShip {
  pub fn new(store: Arc<FleetStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Step for RegisterShip {
  fn name(&self) -> &str {
    "register_ship"
  }

  async fn apply(&self, container: &Container, _request: &Request) -> StepResult {
    let body = container.body();
    // The require_fields step ahead of this one guarantees presence, not type.
    let name = body["name"]
      .as_str()
      .ok_or_else(|| anyhow!("ship name must be a string"))?;

    let ship = Ship {
      id: Uuid::new_v4(),
      name: name.to_string(),
      class: body["class"].as_str().map(ToString::to_string),
      armaments: body.get("armaments").filter(|v| !v.is_null()).cloned(),
      registered_at: Utc::now(),
    };
    info!(ship_id = %ship.id, ship_name = %ship.name, "Ship registered");
    self.store.insert(ship.clone());

    Ok(Some(
      ContainerPatch::new()
        .with_body(serde_json::to_value(&ship)?)
        .with_status_code(201),
    ))
  }
}

/// Looks up one ship by the id the handler seeded into the body.
///
/// A missing ship is not a step failure: the step answers with a 404
/// container instead, and the executor sends that as the response.
pub struct FindShip {
  store: Arc<FleetStore>,
}

impl FindShip {
  pub fn new(store: Arc<FleetStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Step for FindShip {
  fn name(&self) -> &str {
    "find_ship"
  }

  async fn apply(&self, container: &Container, _request: &Request) -> StepResult {
    let raw_id = container.body()["id"]
      .as_str()
      .ok_or_else(|| anyhow!("ship id missing from lookup body"))?;
    let id = Uuid::parse_str(raw_id).map_err(|e| anyhow!("invalid ship id '{}': {}", raw_id, e))?;

    match self.store.get(&id) {
      Some(ship) => Ok(Some(ContainerPatch::new().with_body(serde_json::to_value(&ship)?))),
      None => Ok(Some(
        ContainerPatch::new()
          .with_status_code(404)
          .with_body(json!({ "error": format!("no ship registered under id {}", id) })),
      )),
    }
  }
}

/// Replaces the container body with the full fleet listing.
pub struct ListShips {
  store: Arc<FleetStore>,
}

impl ListShips {
  pub fn new(store: Arc<FleetStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Step for ListShips {
  fn name(&self) -> &str {
    "list_ships"
  }

  async fn apply(&self, _container: &Container, _request: &Request) -> StepResult {
    let ships = self.store.list();
    let count = ships.len();
    Ok(Some(
      ContainerPatch::new().with_body(json!({ "ships": ships, "count": count })),
    ))
  }
}

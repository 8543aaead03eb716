// demos/fleet_api/src/state.rs

use crate::models::Ship;
use crate::pipelines::factories::RouteExecutors;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory ship registry shared across requests.
///
/// Each pipeline invocation gets its own container; this store is the only
/// state that crosses request boundaries, and the lock guards it.
#[derive(Default)]
pub struct FleetStore {
  ships: RwLock<HashMap<Uuid, Ship>>,
}

impl FleetStore {
  pub fn insert(&self, ship: Ship) {
    self.ships.write().insert(ship.id, ship);
  }

  pub fn get(&self, id: &Uuid) -> Option<Ship> {
    self.ships.read().get(id).cloned()
  }

  pub fn list(&self) -> Vec<Ship> {
    let mut ships: Vec<Ship> = self.ships.read().values().cloned().collect();
    ships.sort_by_key(|ship| ship.registered_at);
    ships
  }

  pub fn count(&self) -> usize {
    self.ships.read().len()
  }
}

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<FleetStore>,
  pub executors: Arc<RouteExecutors>,
}

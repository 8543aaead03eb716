// demos/fleet_api/src/models/ship.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A registered starship. The registration pipeline builds one of these from
/// the request body; the `armaments` payload is stored verbatim but projected
/// out of registration and listing responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
  pub id: Uuid,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub class: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub armaments: Option<Value>,
  pub registered_at: DateTime<Utc>,
}

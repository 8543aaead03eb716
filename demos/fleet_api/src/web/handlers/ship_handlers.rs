// demos/fleet_api/src/web/handlers/ship_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::{request_from_http, HttpResponder};

/// POST /api/v1/ships
///
/// The handler only adapts between the framework and the executor; the route
/// logic lives in the pipeline. A step failure (e.g. the validation step)
/// propagates out as `AppError::Pipeline` and actix renders the error body.
#[instrument(name = "handler::register_ship", skip(app_state, http_request, payload))]
pub async fn register_ship_handler(
  app_state: web::Data<AppState>,
  http_request: HttpRequest,
  payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  info!("Ship registration attempt");
  let request = request_from_http(&http_request, payload.into_inner());
  let response = app_state
    .executors
    .register_ship
    .handle(request, HttpResponder)
    .await?;
  Ok(response)
}

/// GET /api/v1/ships/{ship_id}
///
/// The path parameter is seeded into the pipeline's initial body; the lookup
/// step turns a miss into a 404 container rather than a failure.
#[instrument(name = "handler::get_ship", skip(app_state, http_request))]
pub async fn get_ship_handler(
  app_state: web::Data<AppState>,
  http_request: HttpRequest,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let ship_id = path.into_inner();
  let request = request_from_http(&http_request, json!({ "id": ship_id }));
  let response = app_state
    .executors
    .get_ship
    .handle(request, HttpResponder)
    .await?;
  Ok(response)
}

/// GET /api/v1/ships
#[instrument(name = "handler::list_ships", skip(app_state, http_request))]
pub async fn list_ships_handler(
  app_state: web::Data<AppState>,
  http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let request = request_from_http(&http_request, Value::Null);
  let response = app_state
    .executors
    .list_ships
    .handle(request, HttpResponder)
    .await?;
  Ok(response)
}

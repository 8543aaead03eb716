// demos/fleet_api/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod pipelines;
mod state;
mod web;

use crate::config::AppConfig;
use crate::pipelines::factories::build_route_executors;
use crate::state::{AppState, FleetStore};

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting fleet registry server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Shared store and per-route executors, built once and reused for every
  // invocation.
  let store = Arc::new(FleetStore::default());
  let executors = Arc::new(build_route_executors(&store));
  let app_state = AppState { store, executors };

  let bind_addr = (app_config.server_host.clone(), app_config.server_port);
  tracing::info!(host = %bind_addr.0, port = bind_addr.1, "Binding HTTP server");

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(crate::web::routes::configure_app_routes)
  })
  .bind(bind_addr)?
  .run()
  .await
}

// demos/fleet_api/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::state::AppState;

async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "ships_registered": app_state.store.count(),
  }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Ship Registry Routes
      .service(
        web::scope("/ships")
          .route(
            "",
            web::post().to(crate::web::handlers::ship_handlers::register_ship_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::ship_handlers::list_ships_handler),
          )
          .route(
            "/{ship_id}",
            web::get().to(crate::web::handlers::ship_handlers::get_ship_handler),
          ),
      ),
  );
}

// demos/fleet_api/src/web/mod.rs

pub mod handlers;
pub mod routes;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use pipework::{Request, Respond};
use serde_json::Value;

/// Builds the pipeline's framework-shaped request from the actix one.
/// Headers that are not valid UTF-8 are skipped.
pub fn request_from_http(http_request: &HttpRequest, body: Value) -> Request {
  let mut request = Request::new(body);
  for (name, value) in http_request.headers() {
    if let Ok(value) = value.to_str() {
      request.set_header(name.as_str(), value);
    }
  }
  request
}

/// Adapter emitting the pipeline's response as an actix `HttpResponse`.
pub struct HttpResponder;

impl Respond for HttpResponder {
  type Reply = HttpResponse;

  fn send(self, status_code: u16, body: Value) -> HttpResponse {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(body)
  }
}

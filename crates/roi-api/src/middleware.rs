//! Request middleware: CORS and per-request trace ids.
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

pub const TRACE_HEADER: &str = "x-trace-id";

/// Trace id attached to every request and echoed in the response headers
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

pub async fn trace_id(mut req: Request<Body>, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(TraceId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(TRACE_HEADER, value);
    }
    response
}

use axum::response::IntoResponse;

pub const GREETING: &str = "Hello Spring";

/// Answers any request with [`GREETING`]. Method, path, headers and body are
/// never looked at.
pub async fn hello_handler() -> impl IntoResponse {
    GREETING
}

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod config;
mod request_id;
mod routes;

pub use config::{ConfigError, ServerConfig};

/// Builds the application router.
///
/// The greeting handler is installed as the fallback, so it answers every
/// method on every path, `/` included.
pub fn create_root_app() -> Router {
    Router::new().fallback(routes::hello::hello_handler).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(request_id::MakeRequestUuidV7))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

//! HTTP server assembly: router construction and startup.

use crate::http::routes;
use crate::todo::ports::TodoRepository;
use crate::todo::services::TodoService;
use axum::Router;
use axum::routing::get;
use mockable::Clock;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

/// Builds the API router over an injected service instance.
///
/// The service (and with it the storage handle) is constructed by the caller
/// and carried as router state, so tests can mount a fresh in-memory store
/// per server.
#[must_use]
pub fn build_router<R, C>(service: TodoService<R, C>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/todos",
            get(routes::list_todos::<R, C>).post(routes::create_todo::<R, C>),
        )
        // Static segment must be registered alongside the {id} capture.
        .route("/api/todos/dates", get(routes::date_summary::<R, C>))
        .route(
            "/api/todos/{id}",
            get(routes::get_todo::<R, C>)
                .put(routes::update_todo::<R, C>)
                .delete(routes::delete_todo::<R, C>),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Starts the server on the given address and returns the bound address and
/// a join handle.
///
/// This is the entry point used by both the server binary and test code;
/// tests bind `127.0.0.1:0` for an OS-assigned port.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server<R, C>(
    addr: &str,
    service: TodoService<R, C>,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), Box<dyn std::error::Error + Send + Sync>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let app = build_router(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "server error");
        }
    });

    Ok((bound_addr, handle))
}

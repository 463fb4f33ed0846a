pub mod page;

use crate::core::engine::DashboardEngine;
use crate::core::Pipeline;
use crate::utils::error::DashboardError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn create_router<P: Pipeline + 'static>(engine: Arc<DashboardEngine<P>>) -> Router {
    Router::new()
        .route("/", get(dashboard::<P>))
        .route("/health", get(health))
        .with_state(engine)
}

/// One dashboard load: runs the whole pipeline and renders the page. Failure
/// of either recognized kind stops the load with a single error message.
async fn dashboard<P: Pipeline + 'static>(
    State(engine): State<Arc<DashboardEngine<P>>>,
) -> Response {
    match engine.run().await {
        Ok(view) => Html(page::render_dashboard(&view)).into_response(),
        Err(err) => {
            tracing::error!("Dashboard load failed: {}", err);
            let status = match err {
                DashboardError::FetchFailed { .. } | DashboardError::SchemaError { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Html(page::render_error(&err))).into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

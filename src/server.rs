//! Static bundle server.
//!
//! Serves the compiled bundle from the configured directory and answers
//! every other path with the index document, so client-side routes such as
//! `/Shopping%20List` load the application.

use crate::{
    config::ServerConfig,
    domain::{SortField, SortOrder, TodoList},
    error::Result,
    presentation,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

struct ApiState {
    lists: Vec<TodoList>,
}

/// Query parameters accepted by `GET /api/lists`
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// One overview row as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowResponse {
    pub ordinal: u32,
    pub label: String,
    pub path: String,
}

/// Builds the application router for the given seed lists
pub fn router(config: &ServerConfig, lists: Vec<TodoList>) -> Router {
    let state = Arc::new(ApiState { lists });
    let static_files =
        ServeDir::new(&config.static_dir).fallback(ServeFile::new(&config.index_file));

    Router::new()
        .route("/api/lists", get(list_overview))
        .with_state(state)
        .fallback_service(static_files)
}

async fn list_overview(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<OverviewQuery>,
) -> std::result::Result<Json<Vec<RowResponse>>, (StatusCode, String)> {
    let field = match query.sort.as_deref() {
        Some(raw) => raw
            .parse::<SortField>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?,
        None => SortField::Priority,
    };
    let order = match query.order.as_deref() {
        Some(raw) => raw
            .parse::<SortOrder>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?,
        None => SortOrder::Ascending,
    };

    let rows = presentation::render_by(&state.lists, field, order)
        .into_iter()
        .map(|row| RowResponse {
            ordinal: row.ordinal,
            path: row.target.to_path(),
            label: row.label,
        })
        .collect();

    Ok(Json(rows))
}

/// Binds the configured address and serves until the process exits
pub async fn serve(config: &ServerConfig, lists: Vec<TodoList>) -> Result<()> {
    let addr = config.socket_addr();
    let app = router(config, lists);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

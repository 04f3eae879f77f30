//! Directory search endpoint.
//!
//! GET /api/services?search=<text>&category=<text>
//!
//! Both parameters are optional. Returns active providers as a JSON array ordered by
//! business name. Query extraction cannot fail; the only error is a failed query.

use axum::{
    extract::{Extension, Query},
    Json,
};

use crate::domains::providers::{ServiceFilter, ServiceProvider};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn list_services_handler(
    Extension(state): Extension<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ServiceProvider>>, ApiError> {
    let filter = ServiceFilter::from_query_pairs(pairs);
    tracing::debug!(
        search = ?filter.search_term(),
        category = ?filter.category_term(),
        "Searching service providers"
    );

    let providers = ServiceProvider::search(&filter, &state.db_pool)
        .await
        .map_err(ApiError::database)?;

    Ok(Json(providers))
}

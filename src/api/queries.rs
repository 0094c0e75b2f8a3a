//! Canned query endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    services::queries::{QueryKind, QueryRequest, QueryResult},
};

/// One entry of the query menu
#[derive(Serialize, ToSchema)]
pub struct QueryCatalogueEntry {
    pub query: QueryKind,
    pub description: String,
}

/// List the available canned queries
#[utoipa::path(
    get,
    path = "/queries",
    tag = "queries",
    responses(
        (status = 200, description = "Query menu", body = Vec<QueryCatalogueEntry>)
    )
)]
pub async fn list_queries() -> Json<Vec<QueryCatalogueEntry>> {
    let menu = QueryKind::ALL
        .into_iter()
        .map(|query| QueryCatalogueEntry {
            query,
            description: query.description().to_string(),
        })
        .collect();

    Json(menu)
}

/// Execute one of the canned queries
#[utoipa::path(
    post,
    path = "/queries",
    tag = "queries",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Query results", body = QueryResult),
        (status = 400, description = "Missing or blank query input")
    )
)]
pub async fn execute_query(
    State(state): State<crate::AppState>,
    Json(request): Json<QueryRequest>,
) -> AppResult<Json<QueryResult>> {
    let result = state.services.queries.run(request).await?;
    Ok(Json(result))
}

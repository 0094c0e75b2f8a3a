//! Loan listing endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::loan::Loan};

/// List all loan records
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.queries.loans().await?;
    Ok(Json(loans))
}

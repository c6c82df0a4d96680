use axum::{extract::State, response::Json};

use super::SharedRepository;
use crate::error::ApiError;
use crate::models::RaceResult;

// GET /api/results - List all race results, newest first
pub async fn get_results(
    State(repo): State<SharedRepository>,
) -> Result<Json<Vec<RaceResult>>, ApiError> {
    let results = repo.list_results().await?;

    Ok(Json(results))
}

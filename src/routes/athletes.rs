use axum::{extract::State, response::Json};

use super::SharedRepository;
use crate::error::ApiError;
use crate::models::Athlete;

// GET /api/athletes - List all athletes, newest first
pub async fn get_athletes(
    State(repo): State<SharedRepository>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let athletes = repo.list_athletes().await?;

    Ok(Json(athletes))
}

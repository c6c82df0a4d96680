use axum::{extract::State, response::Json};

use super::SharedRepository;
use crate::error::ApiError;
use crate::models::Meet;

/// GET /api/meets - List all meets, soonest first
///
/// `meet_date` is reduced to `YYYY-MM-DD` whatever time the store holds.
pub async fn get_meets(
    State(repo): State<SharedRepository>,
) -> Result<Json<Vec<Meet>>, ApiError> {
    let rows = repo.list_meets().await?;
    let meets: Vec<Meet> = rows.into_iter().map(|r| r.into_meet()).collect();

    Ok(Json(meets))
}

use axum::{http::StatusCode, response::Json};

use crate::models::MessageResponse;

// ANY /api/health
pub async fn health_check() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse::now("Server is running")))
}

// ANY /api/hello
pub async fn hello() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::now("Hello from Jones County XC backend!")),
    )
}

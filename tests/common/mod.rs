use axum::{
    body::Body,
    http::{Request, Response},
};
use chrono::{NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use jones_county_xc_api::db::InMemoryRepository;
use jones_county_xc_api::models::{Athlete, MeetRow, RaceResult};
use jones_county_xc_api::routes::create_router;
use std::sync::Arc;

/// Router over an in-memory store; the store handle is returned for seeding.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<InMemoryRepository>) {
    let repo = Arc::new(InMemoryRepository::new());
    (create_router(repo.clone()), repo)
}

#[allow(dead_code)]
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[allow(dead_code)]
pub fn athlete(id: i64, name: &str, created_day: u32) -> Athlete {
    Athlete {
        id,
        name: name.to_string(),
        grade: 10,
        personal_record_seconds: 1100 + id,
        created_at: Utc.with_ymd_and_hms(2024, 7, created_day, 9, 0, 0).unwrap(),
    }
}

#[allow(dead_code)]
pub fn meet(id: i64, name: &str, date: (i32, u32, u32), hms: (u32, u32, u32)) -> MeetRow {
    MeetRow {
        id,
        name: name.to_string(),
        meet_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hms.0, hms.1, hms.2)
            .unwrap(),
        location: "Jones County High School".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[allow(dead_code)]
pub fn race_result(id: i64, athlete_id: i64, meet_id: i64, created_day: u32) -> RaceResult {
    RaceResult {
        id,
        athlete_id,
        meet_id,
        time_seconds: 1150 + id,
        place_overall: id,
        created_at: Utc.with_ymd_and_hms(2024, 9, created_day, 18, 30, 0).unwrap(),
    }
}

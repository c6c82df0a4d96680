use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::Serialize;

/// Athlete row from the athletes table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub grade: i64,
    pub personal_record_seconds: i64,
    pub created_at: DateTime<Utc>,
}

/// Meet row as stored; `meet_date` keeps whatever time-of-day the store has
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeetRow {
    pub id: i64,
    pub name: String,
    pub meet_date: NaiveDateTime,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl MeetRow {
    /// Convert database row to API response format
    pub fn into_meet(self) -> Meet {
        Meet {
            id: self.id,
            name: self.name,
            meet_date: self.meet_date.date().format("%Y-%m-%d").to_string(),
            location: self.location,
            created_at: self.created_at,
        }
    }
}

/// Meet info for API responses
#[derive(Debug, Clone, Serialize)]
pub struct Meet {
    pub id: i64,
    pub name: String,
    pub meet_date: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// One athlete's finish at one meet
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RaceResult {
    pub id: i64,
    pub athlete_id: i64,
    pub meet_id: i64,
    pub time_seconds: i64,
    pub place_overall: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of the health and hello endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl MessageResponse {
    pub fn now(message: &str) -> Self {
        Self {
            message: message.to_string(),
            timestamp: Local::now(),
        }
    }
}

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Connection;

use crate::config::{DatabaseConfig, POOL_MAX_CONNECTIONS, POOL_MAX_LIFETIME};
use crate::models::{Athlete, MeetRow, RaceResult};

mod memory;

pub use memory::InMemoryRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the team's tables, one method per collection.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All athletes, newest created first
    async fn list_athletes(&self) -> Result<Vec<Athlete>, RepositoryError>;

    /// All meets, soonest date first
    async fn list_meets(&self) -> Result<Vec<MeetRow>, RepositoryError>;

    /// All results, newest created first
    async fn list_results(&self) -> Result<Vec<RaceResult>, RepositoryError>;
}

/// Open the connection pool and make sure the server answers.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    // Acquire timeout stays at the sqlx default (30s): a saturated pool fails
    // the request with a 500 rather than stalling it indefinitely.
    let pool = MySqlPoolOptions::new()
        .max_connections(POOL_MAX_CONNECTIONS)
        .max_lifetime(POOL_MAX_LIFETIME)
        .connect_lazy_with(config.connect_options());

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    Ok(pool)
}

#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for MySqlRepository {
    async fn list_athletes(&self) -> Result<Vec<Athlete>, RepositoryError> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"SELECT id, name, grade, personal_record_seconds, created_at
               FROM athletes
               ORDER BY created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(athletes)
    }

    async fn list_meets(&self) -> Result<Vec<MeetRow>, RepositoryError> {
        // DATE and DATETIME columns both come back as DATETIME
        let meets = sqlx::query_as::<_, MeetRow>(
            r#"SELECT id, name, CAST(meet_date AS DATETIME) AS meet_date, location, created_at
               FROM meets
               ORDER BY meet_date ASC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(meets)
    }

    async fn list_results(&self) -> Result<Vec<RaceResult>, RepositoryError> {
        let results = sqlx::query_as::<_, RaceResult>(
            r#"SELECT id, athlete_id, meet_id, time_seconds, place_overall, created_at
               FROM results
               ORDER BY created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}

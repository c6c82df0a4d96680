//! In-memory stand-in for the MySQL store.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::{RepositoryError, TeamRepository};
use crate::models::{Athlete, MeetRow, RaceResult};

/// Fixture repository holding rows in memory.
///
/// Lists come back in the same order the SQL queries produce. Calling
/// [`InMemoryRepository::set_unavailable`] makes every read fail until it is
/// switched back.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    athletes: RwLock<Vec<Athlete>>,
    meets: RwLock<Vec<MeetRow>>,
    results: RwLock<Vec<RaceResult>>,
    unavailable: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_athlete(&self, athlete: Athlete) {
        write(&self.athletes).push(athlete);
    }

    pub fn insert_meet(&self, meet: MeetRow) {
        write(&self.meets).push(meet);
    }

    pub fn insert_result(&self, result: RaceResult) {
        write(&self.results).push(result);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn list_athletes(&self) -> Result<Vec<Athlete>, RepositoryError> {
        self.check_available()?;
        let mut athletes = read(&self.athletes);
        athletes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(athletes)
    }

    async fn list_meets(&self) -> Result<Vec<MeetRow>, RepositoryError> {
        self.check_available()?;
        let mut meets = read(&self.meets);
        meets.sort_by(|a, b| a.meet_date.cmp(&b.meet_date));
        Ok(meets)
    }

    async fn list_results(&self) -> Result<Vec<RaceResult>, RepositoryError> {
        self.check_available()?;
        let mut results = read(&self.results);
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }
}

// A poisoned lock only means a writer panicked mid-push; the Vec is still valid.
fn read<T: Clone>(lock: &RwLock<Vec<T>>) -> Vec<T> {
    lock.read().unwrap_or_else(|e| e.into_inner()).clone()
}

fn write<T>(lock: &RwLock<Vec<T>>) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn meet(id: i64, y: i32, m: u32, d: u32) -> MeetRow {
        MeetRow {
            id,
            name: format!("Meet {id}"),
            meet_date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            location: "Gray, GA".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn meets_sorted_by_date() {
        let repo = InMemoryRepository::new();
        repo.insert_meet(meet(1, 2024, 9, 1));
        repo.insert_meet(meet(2, 2024, 8, 1));

        let meets = repo.list_meets().await.unwrap();
        let ids: Vec<i64> = meets.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn unavailable_store_errors() {
        let repo = InMemoryRepository::new();
        repo.set_unavailable(true);

        assert!(matches!(
            repo.list_athletes().await,
            Err(RepositoryError::Unavailable(_))
        ));

        repo.set_unavailable(false);
        assert!(repo.list_athletes().await.unwrap().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::ledger::{LedgerService, LedgerServiceTrait};
    use crate::profiles::{NewProfile, Profile, ProfileRepositoryTrait, ProfileUpdate};
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    // --- Mock ProfileRepository ---
    #[derive(Default)]
    struct MockProfileRepository {
        points: Arc<Mutex<HashMap<String, i32>>>,
        // When non-empty, reads are served from this script instead of
        // the stored totals, simulating stale reads from another session.
        scripted_reads: Arc<Mutex<VecDeque<i32>>>,
    }

    impl MockProfileRepository {
        fn with_points(user_id: &str, points: i32) -> Self {
            let repo = Self::default();
            repo.points
                .lock()
                .unwrap()
                .insert(user_id.to_string(), points);
            repo
        }

        fn script_reads(&self, reads: &[i32]) {
            self.scripted_reads.lock().unwrap().extend(reads);
        }
    }

    #[async_trait]
    impl ProfileRepositoryTrait for MockProfileRepository {
        fn get_by_id(&self, _profile_id: &str) -> Result<Profile> {
            unimplemented!()
        }

        fn list(&self) -> Result<Vec<Profile>> {
            unimplemented!()
        }

        fn list_by_points_desc(&self) -> Result<Vec<Profile>> {
            unimplemented!()
        }

        async fn create(&self, _new_profile: NewProfile) -> Result<Profile> {
            unimplemented!()
        }

        async fn update(&self, _profile_update: ProfileUpdate) -> Result<Profile> {
            unimplemented!()
        }

        fn get_points_total(&self, profile_id: &str) -> Result<i32> {
            if let Some(stale) = self.scripted_reads.lock().unwrap().pop_front() {
                return Ok(stale);
            }
            self.points
                .lock()
                .unwrap()
                .get(profile_id)
                .copied()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "profile {} not found",
                        profile_id
                    )))
                })
        }

        async fn set_points_total(&self, profile_id: &str, points: i32) -> Result<()> {
            self.points
                .lock()
                .unwrap()
                .insert(profile_id.to_string(), points);
            Ok(())
        }
    }

    fn ledger_with(repo: MockProfileRepository) -> (LedgerService, Arc<MockProfileRepository>) {
        let repo = Arc::new(repo);
        (LedgerService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn award_accumulates() {
        let (ledger, _) = ledger_with(MockProfileRepository::with_points("u1", 30));
        assert_eq!(ledger.award("u1", 50).await.unwrap(), 80);
        assert_eq!(ledger.award("u1", 20).await.unwrap(), 100);
        assert_eq!(ledger.points_total("u1").unwrap(), 100);
    }

    #[tokio::test]
    async fn revoke_floors_at_zero() {
        let (ledger, _) = ledger_with(MockProfileRepository::with_points("u1", 10));
        // Revoking more than the balance lands on zero, never negative.
        assert_eq!(ledger.revoke("u1", 50).await.unwrap(), 0);
        assert_eq!(ledger.points_total("u1").unwrap(), 0);
    }

    #[tokio::test]
    async fn award_then_revoke_restores_total() {
        let (ledger, _) = ledger_with(MockProfileRepository::with_points("u1", 30));
        ledger.award("u1", 50).await.unwrap();
        assert_eq!(ledger.revoke("u1", 50).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn rejects_non_positive_amounts() {
        let (ledger, _) = ledger_with(MockProfileRepository::with_points("u1", 30));
        assert!(ledger.award("u1", 0).await.is_err());
        assert!(ledger.revoke("u1", -5).await.is_err());
        assert_eq!(ledger.points_total("u1").unwrap(), 30);
    }

    // Documents the read-then-write race: when two sessions both read
    // the same snapshot, the second write silently overwrites the
    // first's effect. This is a known gap of the design, not a
    // guarantee.
    #[tokio::test]
    async fn stale_read_loses_update() {
        let (ledger, repo) = ledger_with(MockProfileRepository::with_points("u1", 0));
        // Both "sessions" observe the initial total of 0.
        repo.script_reads(&[0, 0]);

        ledger.award("u1", 10).await.unwrap();
        ledger.award("u1", 20).await.unwrap();

        // A serialized history would end at 30; the stale read drops
        // the first award.
        assert_eq!(ledger.points_total("u1").unwrap(), 20);
    }
}

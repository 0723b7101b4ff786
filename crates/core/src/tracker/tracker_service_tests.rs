#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::goals::{Goal, GoalKind, GoalPeriod, GoalRepositoryTrait, GoalUpdate, NewGoal};
    use crate::ledger::LedgerServiceTrait;
    use crate::tracker::{
        CompletionState, GoalEvent, GoalEventRepositoryTrait, NewGoalEvent, TrackerService,
        TrackerServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock GoalRepository ---
    #[derive(Default)]
    struct MockGoalRepository {
        goals: Arc<Mutex<Vec<Goal>>>,
    }

    impl MockGoalRepository {
        fn add_goal(&self, goal: Goal) {
            self.goals.lock().unwrap().push(goal);
        }

        fn set_reward(&self, goal_id: &str, reward_points: i32) {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals.iter_mut().find(|g| g.id == goal_id).unwrap();
            goal.reward_points = reward_points;
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "goal {} not found",
                        goal_id
                    )))
                })
        }

        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        fn load_active_goals(&self) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .iter()
                .filter(|g| g.is_active)
                .cloned()
                .collect())
        }

        async fn insert_new_goal(&self, _new_goal: NewGoal) -> Result<Goal> {
            unimplemented!()
        }

        async fn update_goal(&self, _goal_update: GoalUpdate) -> Result<Goal> {
            unimplemented!()
        }

        async fn delete_goal(&self, _goal_id: String) -> Result<usize> {
            unimplemented!()
        }
    }

    // --- Mock GoalEventRepository ---
    #[derive(Default)]
    struct MockGoalEventRepository {
        events: Arc<Mutex<Vec<GoalEvent>>>,
        next_id: AtomicUsize,
    }

    #[async_trait]
    impl GoalEventRepositoryTrait for MockGoalEventRepository {
        fn list_for_user(&self, user_id: &str) -> Result<Vec<GoalEvent>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect())
        }

        fn list_for_goal(&self, goal_id: &str) -> Result<Vec<GoalEvent>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.goal_id == goal_id)
                .cloned()
                .collect())
        }

        fn count_for(&self, user_id: &str, goal_id: &str) -> Result<i64> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id == user_id && e.goal_id == goal_id)
                .count() as i64)
        }

        fn latest_for(&self, user_id: &str, goal_id: &str) -> Result<Option<GoalEvent>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.user_id == user_id && e.goal_id == goal_id)
                .max_by_key(|(idx, e)| (e.occurred_at, *idx))
                .map(|(_, e)| e.clone()))
        }

        async fn insert(&self, new_event: NewGoalEvent) -> Result<GoalEvent> {
            let event = GoalEvent {
                id: format!("ev-{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
                user_id: new_event.user_id,
                goal_id: new_event.goal_id,
                occurred_at: new_event.occurred_at,
                points_awarded: new_event.points_awarded,
            };
            self.events.lock().unwrap().push(event.clone());
            Ok(event)
        }

        async fn delete(&self, event_id: String) -> Result<usize> {
            let mut events = self.events.lock().unwrap();
            let before = events.len();
            events.retain(|e| e.id != event_id);
            Ok(before - events.len())
        }
    }

    // --- Mock Ledger ---
    #[derive(Default)]
    struct MockLedger {
        totals: Arc<Mutex<HashMap<String, i32>>>,
    }

    impl MockLedger {
        fn with_points(user_id: &str, points: i32) -> Self {
            let ledger = Self::default();
            ledger
                .totals
                .lock()
                .unwrap()
                .insert(user_id.to_string(), points);
            ledger
        }
    }

    #[async_trait]
    impl LedgerServiceTrait for MockLedger {
        async fn award(&self, user_id: &str, amount: i32) -> Result<i32> {
            let mut totals = self.totals.lock().unwrap();
            let total = totals.entry(user_id.to_string()).or_insert(0);
            *total += amount;
            Ok(*total)
        }

        async fn revoke(&self, user_id: &str, amount: i32) -> Result<i32> {
            let mut totals = self.totals.lock().unwrap();
            let total = totals.entry(user_id.to_string()).or_insert(0);
            *total = (*total - amount).max(0);
            Ok(*total)
        }

        fn points_total(&self, user_id: &str) -> Result<i32> {
            Ok(self
                .totals
                .lock()
                .unwrap()
                .get(user_id)
                .copied()
                .unwrap_or(0))
        }
    }

    fn goal(id: &str, kind: GoalKind, reward_points: i32, is_active: bool) -> Goal {
        Goal {
            id: id.to_string(),
            title: format!("Goal {}", id),
            description: None,
            category: "sales".to_string(),
            target_value: 1,
            reward_points,
            period: GoalPeriod::Monthly,
            kind,
            is_active,
            created_at: NaiveDateTime::default(),
        }
    }

    struct Fixture {
        tracker: TrackerService,
        goals: Arc<MockGoalRepository>,
        events: Arc<MockGoalEventRepository>,
        ledger: Arc<MockLedger>,
    }

    fn fixture(initial_points: i32) -> Fixture {
        let goals = Arc::new(MockGoalRepository::default());
        let events = Arc::new(MockGoalEventRepository::default());
        let ledger = Arc::new(MockLedger::with_points("u1", initial_points));
        let tracker = TrackerService::new(goals.clone(), events.clone(), ledger.clone());
        Fixture {
            tracker,
            goals,
            events,
            ledger,
        }
    }

    #[tokio::test]
    async fn one_time_completion_awards_snapshot() {
        let f = fixture(30);
        f.goals.add_goal(goal("g1", GoalKind::OneTime, 50, true));

        let event = f.tracker.complete_goal("u1", "g1").await.unwrap();
        assert_eq!(event.points_awarded, 50);
        assert_eq!(f.ledger.points_total("u1").unwrap(), 80);
        assert_eq!(f.events.count_for("u1", "g1").unwrap(), 1);
    }

    #[tokio::test]
    async fn one_time_second_completion_rejected() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::OneTime, 50, true));

        f.tracker.complete_goal("u1", "g1").await.unwrap();
        let err = f.tracker.complete_goal("u1", "g1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Tracker(crate::tracker::TrackerError::AlreadyCompleted(_))
        ));
        assert_eq!(f.events.count_for("u1", "g1").unwrap(), 1);
        assert_eq!(f.ledger.points_total("u1").unwrap(), 50);
    }

    #[tokio::test]
    async fn one_time_undo_restores_pre_completion_state() {
        let f = fixture(30);
        f.goals.add_goal(goal("g1", GoalKind::OneTime, 50, true));

        f.tracker.complete_goal("u1", "g1").await.unwrap();
        assert_eq!(f.ledger.points_total("u1").unwrap(), 80);

        f.tracker.undo_goal("u1", "g1").await.unwrap();
        assert_eq!(f.ledger.points_total("u1").unwrap(), 30);
        assert_eq!(f.events.count_for("u1", "g1").unwrap(), 0);
    }

    #[tokio::test]
    async fn recurring_completions_accumulate() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::Recurring, 40, true));

        for _ in 0..3 {
            f.tracker.complete_goal("u1", "g1").await.unwrap();
        }

        assert_eq!(f.events.count_for("u1", "g1").unwrap(), 3);
        assert_eq!(f.ledger.points_total("u1").unwrap(), 120);
    }

    #[tokio::test]
    async fn recurring_undo_removes_latest_event() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::Recurring, 10, true));

        // Reward edits between completions give each event a distinct
        // snapshot; undo must revoke the latest snapshot, not any other.
        f.tracker.complete_goal("u1", "g1").await.unwrap();
        f.goals.set_reward("g1", 20);
        f.tracker.complete_goal("u1", "g1").await.unwrap();
        f.goals.set_reward("g1", 50);
        f.tracker.complete_goal("u1", "g1").await.unwrap();
        assert_eq!(f.ledger.points_total("u1").unwrap(), 80);

        let removed = f.tracker.undo_goal("u1", "g1").await.unwrap();
        assert_eq!(removed.points_awarded, 50);
        assert_eq!(f.ledger.points_total("u1").unwrap(), 30);

        let remaining: Vec<i32> = f
            .events
            .list_for_goal("g1")
            .unwrap()
            .iter()
            .map(|e| e.points_awarded)
            .collect();
        assert_eq!(remaining, vec![10, 20]);
    }

    #[tokio::test]
    async fn undo_without_completion_rejected() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::Recurring, 10, true));

        let err = f.tracker.undo_goal("u1", "g1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Tracker(crate::tracker::TrackerError::NothingToUndo(_))
        ));
    }

    #[tokio::test]
    async fn inactive_goal_cannot_be_completed() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::OneTime, 50, false));

        let err = f.tracker.complete_goal("u1", "g1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Tracker(crate::tracker::TrackerError::GoalInactive(_))
        ));
        assert_eq!(f.events.count_for("u1", "g1").unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_goal_surfaces_not_found() {
        let f = fixture(0);
        let err = f.tracker.complete_goal("u1", "missing").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn progress_reflects_event_counts() {
        let f = fixture(0);
        f.goals.add_goal(goal("g1", GoalKind::OneTime, 50, true));
        f.goals.add_goal(goal("g2", GoalKind::Recurring, 20, true));
        f.goals.add_goal(goal("g3", GoalKind::OneTime, 10, false));

        f.tracker.complete_goal("u1", "g1").await.unwrap();
        f.tracker.complete_goal("u1", "g2").await.unwrap();
        f.tracker.complete_goal("u1", "g2").await.unwrap();

        let progress = f.tracker.progress_for_user("u1").unwrap();
        // Inactive g3 is not part of the view.
        assert_eq!(progress.len(), 2);

        let g1 = progress.iter().find(|p| p.goal.id == "g1").unwrap();
        assert_eq!(g1.state, CompletionState::Completed);
        assert_eq!(g1.completions, 1);
        assert_eq!(g1.points_earned, 50);

        let g2 = progress.iter().find(|p| p.goal.id == "g2").unwrap();
        assert_eq!(g2.state, CompletionState::Recurring { completions: 2 });
        assert_eq!(g2.points_earned, 40);
    }
}

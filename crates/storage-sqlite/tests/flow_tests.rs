//! End-to-end flows over a real SQLite database: goal completion and
//! undo, cascade deletes, ranking, and the admin reset/delete paths.

use std::sync::Arc;

use tempfile::TempDir;

use trueinvest_core::achievements::AchievementRepositoryTrait;
use trueinvest_core::activities::{ActivityRepositoryTrait, NewActivity};
use trueinvest_core::attendance::{AttendanceRepositoryTrait, NewAttendanceRecord};
use trueinvest_core::errors::Error;
use trueinvest_core::goals::{
    GoalKind, GoalPeriod, GoalRepositoryTrait, GoalService, GoalServiceTrait, GoalUpdate, NewGoal,
};
use trueinvest_core::ledger::{LedgerService, LedgerServiceTrait};
use trueinvest_core::maintenance::MaintenanceRepositoryTrait;
use trueinvest_core::profiles::{NewProfile, ProfileRepositoryTrait};
use trueinvest_core::ranking::{RankingService, RankingServiceTrait};
use trueinvest_core::roles::{AppRole, RoleRepositoryTrait};
use trueinvest_core::sales::{NewSale, SaleRepositoryTrait};
use trueinvest_core::tracker::{
    GoalEventRepositoryTrait, TrackerError, TrackerService, TrackerServiceTrait,
};

use trueinvest_storage_sqlite::achievements::AchievementRepository;
use trueinvest_storage_sqlite::activities::ActivityRepository;
use trueinvest_storage_sqlite::attendance::AttendanceRepository;
use trueinvest_storage_sqlite::goals::GoalRepository;
use trueinvest_storage_sqlite::maintenance::MaintenanceRepository;
use trueinvest_storage_sqlite::profiles::ProfileRepository;
use trueinvest_storage_sqlite::roles::RoleRepository;
use trueinvest_storage_sqlite::sales::SaleRepository;
use trueinvest_storage_sqlite::tracker::GoalEventRepository;
use trueinvest_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

struct TestContext {
    // Held so the database directory outlives the test.
    _dir: TempDir,
    pool: Arc<trueinvest_storage_sqlite::DbPool>,
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_repo: Arc<dyn GoalEventRepositoryTrait>,
    role_repo: Arc<dyn RoleRepositoryTrait>,
    attendance_repo: Arc<dyn AttendanceRepositoryTrait>,
    activity_repo: Arc<dyn ActivityRepositoryTrait>,
    sale_repo: Arc<dyn SaleRepositoryTrait>,
    achievement_repo: Arc<AchievementRepository>,
    maintenance_repo: Arc<dyn MaintenanceRepositoryTrait>,
    ledger: Arc<dyn LedgerServiceTrait>,
    tracker: TrackerService,
    goals: GoalService,
    ranking: RankingService,
}

fn setup() -> TestContext {
    let dir = TempDir::new().unwrap();
    let db_path = init(dir.path().to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());

    let profile_repo: Arc<dyn ProfileRepositoryTrait> =
        Arc::new(ProfileRepository::new(pool.clone(), writer.clone()));
    let goal_repo: Arc<dyn GoalRepositoryTrait> =
        Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let event_repo: Arc<dyn GoalEventRepositoryTrait> =
        Arc::new(GoalEventRepository::new(pool.clone(), writer.clone()));
    let role_repo: Arc<dyn RoleRepositoryTrait> =
        Arc::new(RoleRepository::new(pool.clone(), writer.clone()));
    let attendance_repo: Arc<dyn AttendanceRepositoryTrait> =
        Arc::new(AttendanceRepository::new(pool.clone(), writer.clone()));
    let activity_repo: Arc<dyn ActivityRepositoryTrait> =
        Arc::new(ActivityRepository::new(pool.clone(), writer.clone()));
    let sale_repo: Arc<dyn SaleRepositoryTrait> =
        Arc::new(SaleRepository::new(pool.clone(), writer.clone()));
    let achievement_repo = Arc::new(AchievementRepository::new(pool.clone(), writer.clone()));
    let maintenance_repo: Arc<dyn MaintenanceRepositoryTrait> =
        Arc::new(MaintenanceRepository::new(writer.clone()));

    let ledger: Arc<dyn LedgerServiceTrait> =
        Arc::new(LedgerService::new(profile_repo.clone()));
    let tracker = TrackerService::new(goal_repo.clone(), event_repo.clone(), ledger.clone());
    let goals = GoalService::new(goal_repo.clone());
    let ranking = RankingService::new(profile_repo.clone());

    TestContext {
        _dir: dir,
        pool,
        profile_repo,
        goal_repo,
        event_repo,
        role_repo,
        attendance_repo,
        activity_repo,
        sale_repo,
        achievement_repo,
        maintenance_repo,
        ledger,
        tracker,
        goals,
        ranking,
    }
}

async fn seed_profile(ctx: &TestContext, user_id: &str, points: i32) {
    ctx.profile_repo
        .create(NewProfile {
            id: Some(user_id.to_string()),
            name: format!("Broker {}", user_id),
            email: format!("{}@trueinvest.example", user_id),
            phone: None,
            photo_url: None,
        })
        .await
        .unwrap();
    if points > 0 {
        ctx.ledger.award(user_id, points).await.unwrap();
    }
}

fn new_goal(title: &str, kind: GoalKind, reward_points: i32) -> NewGoal {
    NewGoal {
        id: None,
        title: title.to_string(),
        description: None,
        category: "sales".to_string(),
        target_value: 5,
        reward_points,
        period: GoalPeriod::Monthly,
        kind,
        is_active: true,
    }
}

#[tokio::test]
async fn one_time_goal_complete_then_undo() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 30).await;
    let goal = ctx
        .goals
        .create_goal(new_goal("First sale", GoalKind::OneTime, 50))
        .await
        .unwrap();

    let event = ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();
    assert_eq!(event.points_awarded, 50);
    assert_eq!(ctx.ledger.points_total("u1").unwrap(), 80);
    assert_eq!(ctx.event_repo.count_for("u1", &goal.id).unwrap(), 1);

    // A second completion of a one-time goal is rejected.
    let err = ctx.tracker.complete_goal("u1", &goal.id).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Tracker(TrackerError::AlreadyCompleted(_))
    ));

    ctx.tracker.undo_goal("u1", &goal.id).await.unwrap();
    assert_eq!(ctx.ledger.points_total("u1").unwrap(), 30);
    assert_eq!(ctx.event_repo.count_for("u1", &goal.id).unwrap(), 0);
}

#[tokio::test]
async fn recurring_goal_accumulates_and_undoes_lifo() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 0).await;
    let goal = ctx
        .goals
        .create_goal(new_goal("Weekly visits", GoalKind::Recurring, 10))
        .await
        .unwrap();

    ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();
    ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();

    // Bump the reward; the third event snapshots the new value.
    let mut update = GoalUpdate {
        id: goal.id.clone(),
        title: goal.title.clone(),
        description: goal.description.clone(),
        category: goal.category.clone(),
        target_value: goal.target_value,
        reward_points: 25,
        period: goal.period,
        kind: goal.kind,
        is_active: goal.is_active,
    };
    ctx.goals.update_goal(update.clone()).await.unwrap();
    ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();

    assert_eq!(ctx.event_repo.count_for("u1", &goal.id).unwrap(), 3);
    assert_eq!(ctx.ledger.points_total("u1").unwrap(), 45);

    // Undo removes the latest event and revokes exactly its snapshot,
    // not the goal's current reward.
    update.reward_points = 99;
    ctx.goals.update_goal(update).await.unwrap();
    let removed = ctx.tracker.undo_goal("u1", &goal.id).await.unwrap();
    assert_eq!(removed.points_awarded, 25);
    assert_eq!(ctx.ledger.points_total("u1").unwrap(), 20);

    let remaining: Vec<i32> = ctx
        .event_repo
        .list_for_goal(&goal.id)
        .unwrap()
        .iter()
        .map(|e| e.points_awarded)
        .collect();
    assert_eq!(remaining, vec![10, 10]);
}

#[tokio::test]
async fn revoke_floors_at_zero() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 10).await;
    assert_eq!(ctx.ledger.revoke("u1", 50).await.unwrap(), 0);
    assert_eq!(ctx.profile_repo.get_points_total("u1").unwrap(), 0);
}

#[tokio::test]
async fn goal_delete_removes_its_events() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 0).await;
    seed_profile(&ctx, "u2", 0).await;
    let doomed = ctx
        .goals
        .create_goal(new_goal("Doomed goal", GoalKind::Recurring, 10))
        .await
        .unwrap();
    let survivor = ctx
        .goals
        .create_goal(new_goal("Surviving goal", GoalKind::Recurring, 10))
        .await
        .unwrap();

    ctx.tracker.complete_goal("u1", &doomed.id).await.unwrap();
    ctx.tracker.complete_goal("u1", &doomed.id).await.unwrap();
    ctx.tracker.complete_goal("u2", &doomed.id).await.unwrap();
    ctx.tracker.complete_goal("u1", &survivor.id).await.unwrap();

    ctx.goals.delete_goal(doomed.id.clone()).await.unwrap();

    // Orphan check: no event references the deleted goal.
    assert!(ctx.event_repo.list_for_goal(&doomed.id).unwrap().is_empty());
    assert_eq!(ctx.event_repo.list_for_goal(&survivor.id).unwrap().len(), 1);
    assert!(ctx.goal_repo.get_by_id(&doomed.id).is_err());
}

#[tokio::test]
async fn ranking_orders_by_points() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 100).await;
    seed_profile(&ctx, "u2", 300).await;
    seed_profile(&ctx, "u3", 200).await;

    assert_eq!(ctx.ranking.rank("u2").unwrap(), Some(1));
    assert_eq!(ctx.ranking.rank("u3").unwrap(), Some(2));
    assert_eq!(ctx.ranking.rank("u1").unwrap(), Some(3));
    assert_eq!(ctx.ranking.rank("ghost").unwrap(), None);

    let top = ctx.ranking.leaderboard(2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, "u2");
    assert_eq!(top[0].points_total, 300);
}

async fn seed_user_records(ctx: &TestContext, user_id: &str) {
    let now = chrono::Utc::now().naive_utc();
    ctx.attendance_repo
        .insert(NewAttendanceRecord {
            user_id: user_id.to_string(),
            work_date: now.date(),
            clock_in: now,
            clock_in_location: None,
        })
        .await
        .unwrap();
    ctx.activity_repo
        .insert(NewActivity {
            user_id: user_id.to_string(),
            kind: "visit".to_string(),
            title: "Property visit".to_string(),
            description: None,
            client_name: None,
            client_contact: None,
            occurred_at: now,
            status: None,
            points_earned: None,
        })
        .await
        .unwrap();
    ctx.sale_repo
        .insert(NewSale {
            user_id: user_id.to_string(),
            property_name: "Sunset Villa".to_string(),
            client_name: None,
            value: 450_000.0,
            commission: None,
            points_earned: Some(100),
            status: None,
            sold_at: now,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn reset_user_data_clears_everything_but_the_profile() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 500).await;
    seed_profile(&ctx, "u2", 200).await;
    let goal = ctx
        .goals
        .create_goal(new_goal("Visits", GoalKind::Recurring, 10))
        .await
        .unwrap();
    ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();
    ctx.tracker.complete_goal("u2", &goal.id).await.unwrap();
    seed_user_records(&ctx, "u1").await;

    ctx.maintenance_repo.reset_user_data("u1").await.unwrap();

    assert_eq!(ctx.profile_repo.get_points_total("u1").unwrap(), 0);
    assert!(ctx.event_repo.list_for_user("u1").unwrap().is_empty());
    assert!(ctx.attendance_repo.list_for_user("u1").unwrap().is_empty());
    assert!(ctx.activity_repo.list_for_user("u1").unwrap().is_empty());
    assert!(ctx.sale_repo.list_for_user("u1").unwrap().is_empty());

    // The profile itself survives a reset, and other users are untouched.
    assert!(ctx.profile_repo.get_by_id("u1").is_ok());
    assert_eq!(ctx.event_repo.list_for_user("u2").unwrap().len(), 1);
    assert_eq!(ctx.profile_repo.get_points_total("u2").unwrap(), 210);
}

#[tokio::test]
async fn delete_user_removes_profile_and_roles() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 100).await;
    ctx.role_repo.grant("u1", AppRole::Broker).await.unwrap();
    let goal = ctx
        .goals
        .create_goal(new_goal("Visits", GoalKind::Recurring, 10))
        .await
        .unwrap();
    ctx.tracker.complete_goal("u1", &goal.id).await.unwrap();
    seed_user_records(&ctx, "u1").await;

    ctx.maintenance_repo.delete_user("u1").await.unwrap();

    assert!(ctx.profile_repo.get_by_id("u1").is_err());
    assert!(ctx.role_repo.list_for_user("u1").unwrap().is_empty());
    assert!(ctx.event_repo.list_for_user("u1").unwrap().is_empty());
    assert!(ctx.sale_repo.list_for_user("u1").unwrap().is_empty());
    assert_eq!(ctx.ranking.rank("u1").unwrap(), None);
}

#[tokio::test]
async fn achievement_unlock_is_unique_per_user() {
    let ctx = setup();
    seed_profile(&ctx, "u1", 0).await;

    // Seed one catalog row directly; the catalog has no admin write
    // path in the storage crate's public API yet.
    {
        use diesel::RunQueryDsl;
        let mut conn = ctx.pool.get().unwrap();
        diesel::sql_query(
            "INSERT INTO achievements (id, title, reward_points, created_at)
             VALUES ('a1', 'Star seller', 100, CURRENT_TIMESTAMP)",
        )
        .execute(&mut conn)
        .unwrap();
    }

    ctx.achievement_repo.insert_unlock("u1", "a1").await.unwrap();
    assert!(ctx.achievement_repo.is_unlocked("u1", "a1").unwrap());

    // The (user, achievement) unique constraint rejects a second row.
    assert!(ctx.achievement_repo.insert_unlock("u1", "a1").await.is_err());
}

#[tokio::test]
async fn malformed_goal_rows_are_rejected() {
    let ctx = setup();

    {
        use diesel::RunQueryDsl;
        let mut conn = ctx.pool.get().unwrap();
        diesel::sql_query(
            "INSERT INTO goals (id, title, category, target_value, reward_points,
                                period, kind, is_active, created_at)
             VALUES ('bad', 'Corrupt row', 'sales', 1, 1,
                     'monthly', 'sometimes', TRUE, CURRENT_TIMESTAMP)",
        )
        .execute(&mut conn)
        .unwrap();
    }

    // A row with an unknown kind is a validation error, not a goal.
    assert!(matches!(
        ctx.goal_repo.get_by_id("bad").unwrap_err(),
        Error::Validation(_)
    ));
    assert!(ctx.goal_repo.load_goals().is_err());
}

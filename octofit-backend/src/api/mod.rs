// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::service::{
    activity_service::ActivityService, leaderboard_service::LeaderboardService,
    team_service::TeamService, user_service::UserService, workout_service::WorkoutService,
};
use std::sync::Arc;

pub mod dto;
pub mod handlers;
pub mod router;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub team_service: Arc<TeamService>,
    pub activity_service: Arc<ActivityService>,
    pub workout_service: Arc<WorkoutService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DbPool, config: AppConfig) -> Self {
        Self {
            user_service: Arc::new(UserService::new(db_pool.clone())),
            team_service: Arc::new(TeamService::new(db_pool.clone())),
            activity_service: Arc::new(ActivityService::new(db_pool.clone())),
            workout_service: Arc::new(WorkoutService::new(db_pool.clone())),
            leaderboard_service: Arc::new(LeaderboardService::new(db_pool)),
            config: Arc::new(config),
        }
    }
}

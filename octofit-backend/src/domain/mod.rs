// src/domain/mod.rs
pub mod activity_model;
pub mod leaderboard_model;
pub mod team_model;
pub mod user_model;
pub mod workout_model;

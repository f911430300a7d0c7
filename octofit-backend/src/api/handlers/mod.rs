// src/api/handlers/mod.rs
pub mod activity_handler;
pub mod leaderboard_handler;
pub mod system_handler;
pub mod team_handler;
pub mod user_handler;
pub mod workout_handler;

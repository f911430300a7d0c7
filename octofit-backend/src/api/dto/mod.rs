// src/api/dto/mod.rs
pub mod activity_dto;
pub mod leaderboard_dto;
pub mod patch;
pub mod system_dto;
pub mod team_dto;
pub mod user_dto;
pub mod workout_dto;

// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// チーム・ユーザー
mod m20250801_000001_create_teams_table;
mod m20250801_000002_create_users_table;

// ワークアウト・アクティビティ・リーダーボード
mod m20250801_000003_create_workouts_table;
mod m20250801_000004_create_activities_table;
mod m20250801_000005_create_leaderboard_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 依存関係のないテーブル
            Box::new(m20250801_000001_create_teams_table::Migration),
            Box::new(m20250801_000003_create_workouts_table::Migration),
            // 2. teams に依存するテーブル
            Box::new(m20250801_000002_create_users_table::Migration),
            Box::new(m20250801_000005_create_leaderboard_table::Migration),
            // 3. users に依存するテーブル
            Box::new(m20250801_000004_create_activities_table::Migration),
        ]
    }
}

// migration/src/main.rs

use migration::Migrator;
use sea_orm_migration::prelude::*;

// DATABASE_URL を読み取り、up / down / fresh / status などのサブコマンドを実行する
#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}

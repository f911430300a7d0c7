use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workouts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workouts::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Workouts::Description).text().not_null())
                    .col(
                        ColumnDef::new(Workouts::SuggestedFor)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Workouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Workouts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workouts {
    Table,
    Id,
    Name,
    Description,
    SuggestedFor,
    CreatedAt,
    UpdatedAt,
}

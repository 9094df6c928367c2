use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchDay::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchDay::Id))
                    .col(integer_uniq(MatchDay::Number))
                    .col(boolean(MatchDay::Closed).default(false))
                    .col(string_null(MatchDay::MessageId))
                    .col(
                        timestamp_with_time_zone(MatchDay::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(MatchDay::ClosedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchDay {
    Table,
    Id,
    Number,
    Closed,
    MessageId,
    CreatedAt,
    ClosedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prediction::Table)
                    .if_not_exists()
                    .col(string(Prediction::UserId))
                    .col(string(Prediction::MatchId))
                    .col(string(Prediction::Prediction))
                    .col(
                        timestamp_with_time_zone(Prediction::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Prediction::UserId)
                            .col(Prediction::MatchId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prediction_user_id")
                            .from(Prediction::Table, Prediction::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prediction_match_id")
                    .table(Prediction::Table)
                    .col(Prediction::MatchId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prediction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prediction {
    Table,
    UserId,
    MatchId,
    Prediction,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_match_day_table::MatchDay;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchDayMatch::Table)
                    .if_not_exists()
                    .col(integer(MatchDayMatch::MatchDayId))
                    .col(string(MatchDayMatch::MatchId))
                    .col(integer(MatchDayMatch::Position))
                    .col(string(MatchDayMatch::HomeTeam))
                    .col(string(MatchDayMatch::AwayTeam))
                    .col(timestamp_with_time_zone(MatchDayMatch::KickoffAt))
                    .primary_key(
                        Index::create()
                            .col(MatchDayMatch::MatchDayId)
                            .col(MatchDayMatch::MatchId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_day_match_match_day_id")
                            .from(MatchDayMatch::Table, MatchDayMatch::MatchDayId)
                            .to(MatchDay::Table, MatchDay::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchDayMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchDayMatch {
    Table,
    MatchDayId,
    MatchId,
    Position,
    HomeTeam,
    AwayTeam,
    KickoffAt,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_day")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: i32,
    pub closed: bool,
    /// Discord message carrying the live leaderboard for this round.
    pub message_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_day_match::Entity")]
    MatchDayMatch,
}

impl Related<super::match_day_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchDayMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_day_match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_day_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_id: String,
    pub position: i32,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_day::Entity",
        from = "Column::MatchDayId",
        to = "super::match_day::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MatchDay,
}

impl Related<super::match_day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchDay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

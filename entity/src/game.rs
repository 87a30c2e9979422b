use sea_orm::entity::prelude::*;

/// A catalog entry. The schema defaults `rating` and every counter to zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: Option<Date>,
    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub times_listed: i32,
    pub reviews_number: i32,
    pub plays: i32,
    pub playing: i32,
    pub backlogs: i32,
    pub whitelist: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenre,
    #[sea_orm(has_many = "super::game_team::Entity")]
    GameTeam,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::game_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenre.def()
    }
}

impl Related<super::game_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTeam.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_genre::Entity")]
    GameGenre,
    #[sea_orm(has_many = "super::user_liked_genre::Entity")]
    UserLikedGenre,
}

impl Related<super::game_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenre.def()
    }
}

impl Related<super::user_liked_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLikedGenre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

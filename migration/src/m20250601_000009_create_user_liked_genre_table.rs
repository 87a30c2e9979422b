use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_user_table::User;
use super::m20250601_000003_create_genre_table::Genre;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLikedGenre::Table)
                    .if_not_exists()
                    .col(integer(UserLikedGenre::UserId))
                    .col(integer(UserLikedGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(UserLikedGenre::UserId)
                            .col(UserLikedGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_liked_genres_user_id")
                            .from(UserLikedGenre::Table, UserLikedGenre::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_liked_genres_genre_id")
                            .from(UserLikedGenre::Table, UserLikedGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLikedGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLikedGenre {
    #[sea_orm(iden = "user_liked_genres")]
    Table,
    UserId,
    GenreId,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Title))
                    .col(date_null(Game::ReleaseDate))
                    .col(double(Game::Rating).default(0.0))
                    .col(text_null(Game::Summary))
                    .col(integer(Game::TimesListed).default(0))
                    .col(integer(Game::ReviewsNumber).default(0))
                    .col(integer(Game::Plays).default(0))
                    .col(integer(Game::Playing).default(0))
                    .col(integer(Game::Backlogs).default(0))
                    .col(integer(Game::Whitelist).default(0))
                    .to_owned(),
            )
            .await?;

        // Recommendations page through games by rating.
        manager
            .create_index(
                Index::create()
                    .name("idx_games_rating")
                    .table(Game::Table)
                    .col(Game::Rating)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "games")]
    Table,
    Id,
    Title,
    ReleaseDate,
    Rating,
    Summary,
    TimesListed,
    ReviewsNumber,
    Plays,
    Playing,
    Backlogs,
    Whitelist,
}

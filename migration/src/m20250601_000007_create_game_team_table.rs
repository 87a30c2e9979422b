use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000004_create_team_table::Team;
use super::m20250601_000005_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTeam::Table)
                    .if_not_exists()
                    .col(integer(GameTeam::GameId))
                    .col(integer(GameTeam::TeamId))
                    .primary_key(Index::create().col(GameTeam::GameId).col(GameTeam::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_teams_game_id")
                            .from(GameTeam::Table, GameTeam::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_teams_team_id")
                            .from(GameTeam::Table, GameTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTeam {
    #[sea_orm(iden = "game_teams")]
    Table,
    GameId,
    TeamId,
}

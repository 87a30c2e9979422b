use crate::server::{data::game::GameRepository, model::game::PageParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_genre_ids;
mod get_paginated;

fn page(limit: u64, offset: u64) -> PageParam {
    PageParam { limit, offset }
}

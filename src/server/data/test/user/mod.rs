use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod find_by_id;
mod find_by_username;
mod liked_genre_ids;
mod replace_liked_genres;
mod update;

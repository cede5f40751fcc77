use crate::server::{
    data::character::CharacterRepository,
    model::character::{CreateCharacterParam, UpdateCharacterParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
